//! Descriptor to document-entry conversion shared by both assemblers.

use rep_core::PropertyDescriptor;
use rep_core::documents::{HandleEntry, InnerHandle, ParamEntry};

/// Top-level handle entry for a property declared on `owner`.
#[must_use]
pub fn handle_entry(descriptor: &PropertyDescriptor, owner: &str, handle: usize) -> HandleEntry {
    HandleEntry {
        h: handle,
        name: descriptor.name.clone(),
        type_tag: descriptor.type_tag().into_owned(),
        class: owner.to_string(),
        enum_name: descriptor.enum_name().map(str::to_string),
        max: descriptor.bit_width(),
        array_dim: descriptor.static_array_dim(),
        struct_type: descriptor.struct_type().map(str::to_string),
        inner: inner_handles(descriptor),
    }
}

/// Sub-handles of a container, numbered `1..N` independently of the outer
/// handle sequence. Each takes the name of the descriptor that contains it.
#[must_use]
pub fn inner_handles(descriptor: &PropertyDescriptor) -> Vec<InnerHandle> {
    descriptor
        .inner()
        .into_iter()
        .zip(1..)
        .map(|(inner, index)| InnerHandle {
            h: index,
            name: descriptor.name.clone(),
            type_tag: inner.type_tag().into_owned(),
            struct_type: inner.struct_type().map(str::to_string),
            inner: inner_handles(inner),
        })
        .collect()
}

#[must_use]
pub fn param_entry(descriptor: &PropertyDescriptor) -> ParamEntry {
    ParamEntry {
        name: descriptor.name.clone(),
        type_tag: descriptor.type_tag().into_owned(),
        enum_name: descriptor.enum_name().map(str::to_string),
        max: descriptor.bit_width(),
        array_dim: descriptor.static_array_dim(),
        struct_type: descriptor.struct_type().map(str::to_string),
        inner: inner_handles(descriptor),
    }
}
