//! # rep-resolver
//!
//! Reconstructs network-replication metadata for Blueprint classes from a seed
//! catalogue of native classes and a scan of Blueprint class definitions.
//!
//! - [`mapper`]: raw property kinds to [`rep_core::PropertyDescriptor`] trees
//! - [`cardinality`]: replicated enum bit-width
//! - [`ancestry`]: nearest seed ancestor and the scanned chain below it
//! - [`net_field_max`]: memoized cumulative net field counts
//! - [`rep_layout`] / [`net_cache`]: the two document assemblers
//! - [`entries`]: descriptor to document-entry conversion
//! - [`run`]: both assemblers over one snapshot

pub mod ancestry;
pub mod cardinality;
pub mod entries;
pub mod mapper;
pub mod net_cache;
pub mod net_field_max;
pub mod rep_layout;
pub mod run;

pub use mapper::PropertyMapper;
pub use net_cache::build_class_net_cache;
pub use rep_layout::build_rep_layout;
pub use run::{ResolveOptions, ResolveOutput, resolve};
