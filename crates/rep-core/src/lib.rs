//! # rep-core
//!
//! Core types and error types for RepSeed.
//!
//! This crate provides the data shared by the resolver and the CLI:
//! - Raw scan records as delivered by an external package scanner
//! - The seed catalogue of statically-compiled classes
//! - `PropertyDescriptor`, the recursive replicated-type description
//! - RepLayout and ClassNetCache output documents
//! - JSON Schema export for every document
//! - Cross-cutting error types

pub mod descriptor;
pub mod documents;
pub mod errors;
pub mod scan;
pub mod schema;
pub mod seed;

pub use descriptor::{PropertyDescriptor, PropertyKind, ReservedAttributes};
pub use errors::CoreError;
pub use scan::{ScanDocument, ScanStats, ScannedClass};
pub use seed::{SeedCatalogue, SeedClass};
