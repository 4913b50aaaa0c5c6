//! RepLayout and ClassNetCache output documents.
//!
//! Both documents map class name to a resolved class record. Seed classes
//! carry their records verbatim (opaque JSON); derived classes carry typed
//! entries. Class tables are `BTreeMap`s so two runs over the same inputs
//! serialize byte-identically.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// RepLayout
// ---------------------------------------------------------------------------

/// One top-level replication handle of a derived class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HandleEntry {
    /// Handle index, continuing the anchor seed class's numbering.
    pub h: usize,
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Class that declared the property.
    pub class: String,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
    /// Replicated enum cardinality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_dim: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struct_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner: Vec<InnerHandle>,
}

/// A sub-element of a container handle, numbered `1..N` within its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InnerHandle {
    pub h: usize,
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struct_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner: Vec<InnerHandle>,
}

/// A handle record: derived entries are typed, seed entries pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum HandleRecord {
    Derived(HandleEntry),
    Seed(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RepLayoutClass {
    /// Nearest seed ancestor; absent for seed classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub handles: Vec<HandleRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RepLayoutStats {
    pub cpp_classes: usize,
    pub bp_classes: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub with_rep_properties: usize,
    pub packages: u64,
    pub skipped: u64,
    pub errors: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RepLayoutDocument {
    pub stats: RepLayoutStats,
    pub classes: BTreeMap<String, RepLayoutClass>,
}

// ---------------------------------------------------------------------------
// ClassNetCache
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NetFieldKind {
    Property,
    Function,
}

impl NetFieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Function => "function",
        }
    }
}

impl std::fmt::Display for NetFieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mapped input parameter of a remote-callable function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParamEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_dim: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struct_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner: Vec<InnerHandle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NetFieldEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NetFieldKind,
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_dim: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldRecord {
    Derived(NetFieldEntry),
    Seed(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassNetCacheClass {
    /// Cumulative net field count from the anchor seed class down to this class.
    pub max: usize,
    /// This class's own fields only; ancestors are covered by `max`.
    pub fields: Vec<FieldRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClassNetCacheStats {
    pub cpp_classes: usize,
    pub bp_classes: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub total_fields: usize,
    pub packages: u64,
    pub skipped: u64,
    pub errors: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassNetCacheDocument {
    pub stats: ClassNetCacheStats,
    pub classes: BTreeMap<String, ClassNetCacheClass>,
}
