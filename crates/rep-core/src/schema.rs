//! JSON Schema export for the input and output documents.
//!
//! External scanner authors validate their output against the `scan` schema;
//! consumers of the result documents use the other two.

use std::fmt;

use schemars::schema_for;

use crate::documents::{ClassNetCacheDocument, RepLayoutDocument};
use crate::errors::CoreError;
use crate::scan::ScanDocument;
use crate::seed::SeedCatalogue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Scan,
    Seed,
    RepLayout,
    ClassNetCache,
}

impl DocumentKind {
    pub const ALL: [Self; 4] = [Self::Scan, Self::Seed, Self::RepLayout, Self::ClassNetCache];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::Seed => "seed",
            Self::RepLayout => "rep-layout",
            Self::ClassNetCache => "class-net-cache",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate the JSON Schema for one document kind.
///
/// # Errors
///
/// Returns [`CoreError::Json`] if the generated schema cannot be converted
/// to a JSON value.
pub fn document_schema(kind: DocumentKind) -> Result<serde_json::Value, CoreError> {
    let schema = match kind {
        DocumentKind::Scan => schema_for!(ScanDocument),
        DocumentKind::Seed => schema_for!(SeedCatalogue),
        DocumentKind::RepLayout => schema_for!(RepLayoutDocument),
        DocumentKind::ClassNetCache => schema_for!(ClassNetCacheDocument),
    };
    Ok(serde_json::to_value(schema)?)
}
