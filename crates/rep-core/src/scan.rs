//! Raw class records as reported by the external package scanner.
//!
//! The scanner walks cooked packages, finds every Blueprint-generated class
//! and reports its parent name, the properties flagged for replication and
//! its net fields (replicated properties plus remote-callable functions).
//! Property types arrive as raw engine property kinds; classifying them into
//! replicated descriptors is the resolver's job.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use serde_json::Value;

use crate::errors::CoreError;

/// Parent name the scanner reports when a class has no resolvable super struct.
pub const UNKNOWN_PARENT: &str = "Unknown";

fn unknown_parent() -> String {
    String::from(UNKNOWN_PARENT)
}

fn malformed(reason: &str) -> CoreError {
    CoreError::MalformedScan {
        reason: reason.to_string(),
    }
}

const fn one() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// Raw properties
// ---------------------------------------------------------------------------

/// One field descriptor exactly as the scanner saw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawProperty {
    pub name: String,

    /// Static array length; `1` for scalars.
    #[serde(default = "one")]
    pub array_dim: u32,

    #[serde(flatten)]
    pub ty: RawPropertyType,
}

impl RawProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: RawPropertyType) -> Self {
        Self {
            name: name.into(),
            array_dim: 1,
            ty,
        }
    }

    #[must_use]
    pub const fn with_array_dim(mut self, array_dim: u32) -> Self {
        self.array_dim = array_dim;
        self
    }
}

/// Engine property kind, tagged by `type`.
///
/// Unknown tags deserialize as [`RawPropertyType::Unsupported`] so a scanner
/// built against a newer engine does not break the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawPropertyType {
    Bool,
    Int8,
    Int16,
    Int,
    Int64,
    #[serde(rename = "uint16")]
    UInt16,
    #[serde(rename = "uint32")]
    UInt32,
    #[serde(rename = "uint64")]
    UInt64,
    Float,
    Double,
    Str,
    Name,
    Text,
    Byte {
        #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
        enum_ref: Option<RawEnum>,
    },
    Enum {
        #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
        enum_ref: Option<RawEnum>,
    },
    Class,
    SoftObject,
    SoftClass,
    WeakObject,
    LazyObject,
    Object,
    Interface,
    Struct {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        struct_name: Option<String>,
    },
    Array {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        inner: Option<Box<RawProperty>>,
    },
    Set {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        element: Option<Box<RawProperty>>,
    },
    Map {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<Box<RawProperty>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Box<RawProperty>>,
    },
    Delegate,
    MulticastDelegate,
    MulticastInlineDelegate,
    MulticastSparseDelegate,
    FieldPath,
    #[serde(other)]
    Unsupported,
}

/// An enum object referenced by a byte or enum property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawEnum {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<RawEnumEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawEnumEntry {
    pub name: String,
    pub value: i64,
}

impl RawEnum {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            entries: entries
                .into_iter()
                .map(|(name, value)| RawEnumEntry {
                    name: name.into(),
                    value,
                })
                .collect(),
        }
    }
}

/// A declared parameter of a remote-callable function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawParameter {
    #[serde(flatten)]
    pub property: RawProperty,

    /// Return-value parameters never travel with the call.
    #[serde(default)]
    pub is_return: bool,
}

// ---------------------------------------------------------------------------
// Net fields and classes
// ---------------------------------------------------------------------------

/// A replicated property as listed among a class's net fields.
///
/// Scanners are not required to report a type here; the field still
/// occupies a net field slot either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawNetProperty {
    pub name: String,

    #[serde(default = "one")]
    pub array_dim: u32,

    /// `None` when the record has no readable `type`.
    #[serde(flatten)]
    pub ty: Option<RawPropertyType>,
}

impl RawNetProperty {
    /// A property net field without type information.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            array_dim: 1,
            ty: None,
        }
    }

    #[must_use]
    pub fn typed(name: impl Into<String>, ty: RawPropertyType) -> Self {
        Self {
            ty: Some(ty),
            ..Self::new(name)
        }
    }

    #[must_use]
    pub const fn with_array_dim(mut self, array_dim: u32) -> Self {
        self.array_dim = array_dim;
        self
    }

    /// The full raw property, when a type was reported.
    #[must_use]
    pub fn as_raw_property(&self) -> Option<RawProperty> {
        self.ty.as_ref().map(|ty| RawProperty {
            name: self.name.clone(),
            array_dim: self.array_dim,
            ty: ty.clone(),
        })
    }
}

/// A net field in declaration order, tagged by `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ScannedNetField {
    Property(RawNetProperty),
    Function {
        name: String,
        #[serde(default)]
        parameters: Vec<RawParameter>,
    },
}

impl ScannedNetField {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Property(property) => &property.name,
            Self::Function { name, .. } => name,
        }
    }
}

/// One dynamically-defined class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScannedClass {
    /// Super class name; may name a scanned class, a seed class, or nothing known.
    #[serde(default = "unknown_parent")]
    pub parent: String,

    /// Properties participating in replication, in declaration order.
    #[serde(default)]
    pub replicated_properties: Vec<RawProperty>,

    #[serde(default)]
    pub net_fields: Vec<ScannedNetField>,
}

impl ScannedClass {
    #[must_use]
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            replicated_properties: Vec::new(),
            net_fields: Vec::new(),
        }
    }
}

/// Aggregate counters from the scan pass, carried into both documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanStats {
    #[serde(default)]
    pub packages: u64,
    #[serde(default)]
    pub classes: u64,
    #[serde(default)]
    pub errors: u64,
    #[serde(default)]
    pub skipped: u64,
}

/// A complete, consistent scan snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanDocument {
    #[serde(default)]
    pub stats: ScanStats,

    /// Keyed by class name; ordered so every pass over it is deterministic.
    pub classes: BTreeMap<String, ScannedClass>,

    /// Class records that could not be read, by name. They never resolve.
    #[serde(skip)]
    pub unreadable: Vec<String>,
}

impl ScanDocument {
    /// Parse a scan document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] for invalid JSON and
    /// [`CoreError::MalformedScan`] when the `classes` table is missing or not
    /// an object. Individual class records that cannot be read are skipped.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Build a scan document from an already parsed JSON value.
    ///
    /// Each class record is read on its own; an unreadable one is logged,
    /// listed in [`ScanDocument::unreadable`] and left out. Unreadable
    /// `stats` fall back to zeros.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedScan`] when the document or its `classes`
    /// table is not an object.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        let Value::Object(mut root) = value else {
            return Err(malformed("scan document is not an object"));
        };

        let records = match root.remove("classes") {
            Some(Value::Object(records)) => records,
            Some(_) => return Err(malformed("'classes' is not an object")),
            None => return Err(malformed("missing 'classes'")),
        };

        let stats = match root.remove("stats") {
            None | Some(Value::Null) => ScanStats::default(),
            Some(stats) => serde_json::from_value(stats).unwrap_or_else(|error| {
                tracing::warn!(%error, "unreadable scan stats; using zeros");
                ScanStats::default()
            }),
        };

        let mut document = Self {
            stats,
            ..Self::default()
        };
        for (name, record) in records {
            match serde_json::from_value::<ScannedClass>(record) {
                Ok(class) => {
                    document.classes.insert(name, class);
                }
                Err(error) => {
                    tracing::warn!(class = %name, %error, "unreadable class record; skipped");
                    document.unreadable.push(name);
                }
            }
        }

        Ok(document)
    }

    /// Classes the scanner reported, readable or not.
    #[must_use]
    pub fn reported_classes(&self) -> usize {
        self.classes.len() + self.unreadable.len()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ScannedClass> {
        self.classes.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
