//! Raw property kinds to replicated descriptors.
//!
//! Returns `None` for kinds the replication system does not carry (delegates,
//! field paths, lazy pointers, unknown tags). Containers survive an
//! unmappable element; they just lose that inner descriptor.

use rep_core::descriptor::{PropertyDescriptor, PropertyKind, UNKNOWN_STRUCT};
use rep_core::scan::{RawEnum, RawProperty, RawPropertyType};

use crate::cardinality::enum_bit_width;

/// Depth past which nested containers are treated as malformed.
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyMapper {
    max_depth: usize,
}

impl Default for PropertyMapper {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl PropertyMapper {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Classify one raw property.
    #[must_use]
    pub fn map(&self, raw: &RawProperty) -> Option<PropertyDescriptor> {
        self.map_at(raw, 0)
    }

    fn map_at(&self, raw: &RawProperty, depth: usize) -> Option<PropertyDescriptor> {
        if depth >= self.max_depth {
            tracing::warn!(
                property = %raw.name,
                max_depth = self.max_depth,
                "property nesting exceeds depth limit; treating as unmappable"
            );
            return None;
        }

        let kind = match &raw.ty {
            RawPropertyType::Bool => PropertyKind::Bool,
            RawPropertyType::Int8 => PropertyKind::Int8,
            RawPropertyType::Int16 => PropertyKind::Int16,
            RawPropertyType::Int => PropertyKind::Int32,
            RawPropertyType::Int64 => PropertyKind::Int64,
            RawPropertyType::UInt16 => PropertyKind::UInt16,
            RawPropertyType::UInt32 => PropertyKind::UInt32,
            RawPropertyType::UInt64 => PropertyKind::UInt64,
            RawPropertyType::Float => PropertyKind::Float,
            RawPropertyType::Double => PropertyKind::Double,
            RawPropertyType::Str => PropertyKind::String,
            RawPropertyType::Name => PropertyKind::Name,
            RawPropertyType::Text => PropertyKind::Text,
            RawPropertyType::Byte { enum_ref } | RawPropertyType::Enum { enum_ref } => {
                byte_kind(enum_ref.as_ref())
            }
            RawPropertyType::Class => PropertyKind::ClassRef,
            RawPropertyType::SoftObject | RawPropertyType::SoftClass => PropertyKind::SoftObject,
            RawPropertyType::WeakObject => PropertyKind::WeakObject,
            RawPropertyType::Object => PropertyKind::Object,
            RawPropertyType::Interface => PropertyKind::Interface,
            RawPropertyType::Struct { struct_name } => PropertyKind::Struct {
                type_name: struct_name
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_STRUCT.to_string()),
            },
            RawPropertyType::Array { inner } => {
                PropertyKind::Array(self.map_element(inner.as_deref(), depth))
            }
            RawPropertyType::Set { element } => {
                PropertyKind::Set(self.map_element(element.as_deref(), depth))
            }
            RawPropertyType::Map { key, value } => PropertyKind::Map {
                key: self.map_element(key.as_deref(), depth),
                value: self.map_element(value.as_deref(), depth),
            },
            RawPropertyType::LazyObject
            | RawPropertyType::Delegate
            | RawPropertyType::MulticastDelegate
            | RawPropertyType::MulticastInlineDelegate
            | RawPropertyType::MulticastSparseDelegate
            | RawPropertyType::FieldPath
            | RawPropertyType::Unsupported => {
                tracing::trace!(property = %raw.name, "unmappable property kind");
                return None;
            }
        };

        Some(PropertyDescriptor::new(raw.name.clone(), kind, raw.array_dim))
    }

    fn map_element(
        &self,
        element: Option<&RawProperty>,
        depth: usize,
    ) -> Option<Box<PropertyDescriptor>> {
        element
            .and_then(|element| self.map_at(element, depth + 1))
            .map(Box::new)
    }
}

fn byte_kind(enum_ref: Option<&RawEnum>) -> PropertyKind {
    match enum_ref {
        Some(raw_enum) => PropertyKind::Byte {
            enum_name: Some(raw_enum.name.clone()),
            bit_width: enum_bit_width(&raw_enum.name, &raw_enum.entries),
        },
        None => PropertyKind::Byte {
            enum_name: None,
            bit_width: None,
        },
    }
}
