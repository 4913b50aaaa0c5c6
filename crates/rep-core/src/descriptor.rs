//! Replicated type descriptions.
//!
//! A [`PropertyDescriptor`] is a closed recursive tree: container kinds own
//! their element descriptors directly, so "array/set/map carry inner
//! descriptors, nothing else does" holds by construction.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Placeholder struct name used when a struct reference cannot be resolved.
pub const UNKNOWN_STRUCT: &str = "Unknown";

/// Semantic kind of a replicated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    String,
    Name,
    Text,
    /// Plain bytes and enum-backed fields. `enum_name` is set when the enum
    /// reference resolved; `bit_width` when its cardinality could be computed.
    Byte {
        enum_name: Option<String>,
        bit_width: Option<u32>,
    },
    ClassRef,
    SoftObject,
    WeakObject,
    Object,
    Interface,
    Struct {
        type_name: String,
    },
    /// `None` when the element type is unmappable.
    Array(Option<Box<PropertyDescriptor>>),
    Set(Option<Box<PropertyDescriptor>>),
    Map {
        key: Option<Box<PropertyDescriptor>>,
        value: Option<Box<PropertyDescriptor>>,
    },
}

impl PropertyKind {
    /// Wire tag used in output documents.
    #[must_use]
    pub fn type_tag(&self) -> Cow<'static, str> {
        let tag = match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Name => "name",
            Self::Text => "text",
            Self::Byte { .. } => "byte",
            Self::ClassRef => "class_ref",
            Self::SoftObject => "soft_obj",
            Self::WeakObject => "weak_obj",
            Self::Object => "object",
            Self::Interface => "interface",
            Self::Struct { type_name } => return Cow::Owned(format!("struct:{type_name}")),
            Self::Array(_) => "array",
            Self::Set(_) => "set",
            Self::Map { .. } => "map",
        };
        Cow::Borrowed(tag)
    }

    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Set(_) | Self::Map { .. })
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_tag())
    }
}

/// Schema slots kept for a richer type description. Nothing fills them yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedAttributes {
    pub enum_values: Option<BTreeMap<String, i64>>,
    pub struct_fields: Option<Vec<PropertyDescriptor>>,
    pub meta_class: Option<String>,
    pub object_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub kind: PropertyKind,
    /// Static array length; `1` for scalars.
    pub array_dim: u32,
    pub reserved: ReservedAttributes,
}

impl PropertyDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PropertyKind, array_dim: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            array_dim,
            reserved: ReservedAttributes::default(),
        }
    }

    #[must_use]
    pub fn type_tag(&self) -> Cow<'static, str> {
        self.kind.type_tag()
    }

    #[must_use]
    pub fn enum_name(&self) -> Option<&str> {
        match &self.kind {
            PropertyKind::Byte { enum_name, .. } => enum_name.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn bit_width(&self) -> Option<u32> {
        match &self.kind {
            PropertyKind::Byte { bit_width, .. } => *bit_width,
            _ => None,
        }
    }

    #[must_use]
    pub fn struct_type(&self) -> Option<&str> {
        match &self.kind {
            PropertyKind::Struct { type_name } => Some(type_name),
            _ => None,
        }
    }

    /// Static array dimension, only when it is a real array.
    #[must_use]
    pub const fn static_array_dim(&self) -> Option<u32> {
        if self.array_dim > 1 {
            Some(self.array_dim)
        } else {
            None
        }
    }

    /// Element descriptors: one for array/set, key then value for map.
    /// Unmappable elements are absent.
    #[must_use]
    pub fn inner(&self) -> Vec<&Self> {
        match &self.kind {
            PropertyKind::Array(element) | PropertyKind::Set(element) => {
                element.as_deref().into_iter().collect()
            }
            PropertyKind::Map { key, value } => key
                .as_deref()
                .into_iter()
                .chain(value.as_deref())
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn scalar(name: &str, kind: PropertyKind) -> Box<PropertyDescriptor> {
        Box::new(PropertyDescriptor::new(name, kind, 1))
    }

    #[rstest]
    #[case(PropertyKind::Int32, "int32")]
    #[case(PropertyKind::UInt64, "uint64")]
    #[case(PropertyKind::SoftObject, "soft_obj")]
    #[case(PropertyKind::WeakObject, "weak_obj")]
    #[case(PropertyKind::ClassRef, "class_ref")]
    #[case(PropertyKind::Byte { enum_name: None, bit_width: None }, "byte")]
    #[case(PropertyKind::Struct { type_name: "Vector".to_string() }, "struct:Vector")]
    #[case(PropertyKind::Map { key: None, value: None }, "map")]
    fn type_tags_match_wire_names(#[case] kind: PropertyKind, #[case] expected: &str) {
        assert_eq!(kind.type_tag(), expected);
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn map_inner_is_key_then_value() {
        let map = PropertyDescriptor::new(
            "Scores",
            PropertyKind::Map {
                key: Some(scalar("Scores", PropertyKind::Name)),
                value: Some(scalar("Scores", PropertyKind::Int32)),
            },
            1,
        );
        let tags: Vec<_> = map.inner().iter().map(|d| d.type_tag()).collect();
        assert_eq!(tags, vec!["name", "int32"]);
    }

    #[test]
    fn map_with_unmappable_key_keeps_value_only() {
        let map = PropertyDescriptor::new(
            "Handlers",
            PropertyKind::Map {
                key: None,
                value: Some(scalar("Handlers", PropertyKind::Object)),
            },
            1,
        );
        assert_eq!(map.inner().len(), 1);
        assert_eq!(map.inner()[0].type_tag(), "object");
    }

    #[test]
    fn scalars_and_structs_have_no_inner() {
        let pos = PropertyDescriptor::new(
            "Pos",
            PropertyKind::Struct {
                type_name: "Vector".to_string(),
            },
            3,
        );
        assert!(pos.inner().is_empty());
        assert_eq!(pos.struct_type(), Some("Vector"));
        assert_eq!(pos.static_array_dim(), Some(3));
        assert_eq!(pos.enum_name(), None);
    }

    #[test]
    fn scalar_array_dim_is_omitted() {
        let flag = PropertyDescriptor::new("bReady", PropertyKind::Bool, 1);
        assert_eq!(flag.static_array_dim(), None);
        assert!(!flag.kind.is_container());
    }
}
