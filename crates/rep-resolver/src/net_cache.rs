//! ClassNetCache assembly.
//!
//! Each Blueprint class lists only its own net fields: replicated properties
//! in declaration order, then remote-callable functions sorted by name with
//! ordinal (byte-wise) comparison, matching the engine's sorted function
//! table. `max` is the cumulative count from the nearest seed ancestor.

use std::collections::BTreeMap;

use rep_core::documents::{
    ClassNetCacheClass, ClassNetCacheDocument, ClassNetCacheStats, FieldRecord, NetFieldEntry,
    NetFieldKind,
};
use rep_core::scan::ScannedNetField;
use rep_core::{ScanDocument, ScannedClass, SeedCatalogue};
use serde_json::{Map, Value};

use crate::ancestry::nearest_seed_ancestor;
use crate::entries::param_entry;
use crate::mapper::PropertyMapper;
use crate::net_field_max::{NetFieldMaxCache, NetFieldMaxResolver};

/// Build the ClassNetCache document.
#[must_use]
pub fn build_class_net_cache(
    seed: &SeedCatalogue,
    scan: &ScanDocument,
    mapper: &PropertyMapper,
) -> ClassNetCacheDocument {
    let mut classes: BTreeMap<String, ClassNetCacheClass> = seed
        .classes
        .iter()
        .map(|(name, seed_class)| {
            let fields = seed_class
                .net_fields
                .iter()
                .map(|field| FieldRecord::Seed(seed_field(field, name)))
                .collect();
            (
                name.clone(),
                ClassNetCacheClass {
                    max: seed_class.net_field_count(),
                    fields,
                    parent: None,
                },
            )
        })
        .collect();

    let own_fields: BTreeMap<&str, Vec<NetFieldEntry>> = scan
        .classes
        .iter()
        .map(|(name, class)| (name.as_str(), own_net_fields(name, class, mapper)))
        .collect();

    let resolver = NetFieldMaxResolver::new(seed, scan, |name: &str, _: &ScannedClass| {
        own_fields.get(name).map_or(0, Vec::len)
    });
    let mut cache = NetFieldMaxCache::new();

    let mut stats = ClassNetCacheStats {
        cpp_classes: seed.len(),
        bp_classes: scan.reported_classes(),
        unresolved: scan.unreadable.len(),
        packages: scan.stats.packages,
        skipped: scan.stats.skipped,
        errors: scan.stats.errors,
        ..ClassNetCacheStats::default()
    };
    let mut derived_fields = 0;

    for name in scan.classes.keys() {
        if seed.contains(name) {
            tracing::warn!(class = %name, "scanned class shadows a seed class; keeping seed net fields");
            continue;
        }

        let Some(max) = resolver.resolve(name, &mut cache) else {
            tracing::debug!(class = %name, "no seed ancestor; excluded from class net cache");
            stats.unresolved += 1;
            continue;
        };

        let fields = own_fields.get(name.as_str()).cloned().unwrap_or_default();
        derived_fields += fields.len();
        stats.resolved += 1;

        classes.insert(
            name.clone(),
            ClassNetCacheClass {
                max,
                fields: fields.into_iter().map(FieldRecord::Derived).collect(),
                parent: nearest_seed_ancestor(name, scan, seed).map(str::to_string),
            },
        );
    }

    stats.total_fields = seed.total_net_fields() + derived_fields;

    tracing::info!(
        cpp = stats.cpp_classes,
        resolved = stats.resolved,
        unresolved = stats.unresolved,
        total_fields = stats.total_fields,
        "class net cache assembled"
    );

    ClassNetCacheDocument { stats, classes }
}

/// The net fields a scanned class declares itself, in ClassNetCache order.
///
/// Properties reported without a type are listed as-is; typed ones that
/// cannot be mapped are dropped. Function parameters keep declaration
/// order, skip the return value, and silently lose unmappable entries.
#[must_use]
pub fn own_net_fields(
    class_name: &str,
    class: &ScannedClass,
    mapper: &PropertyMapper,
) -> Vec<NetFieldEntry> {
    let mut properties = Vec::new();
    let mut functions = Vec::new();

    for field in &class.net_fields {
        match field {
            ScannedNetField::Property(net_property) => {
                let Some(raw) = net_property.as_raw_property() else {
                    properties.push(NetFieldEntry {
                        name: net_property.name.clone(),
                        kind: NetFieldKind::Property,
                        class: class_name.to_string(),
                        array_dim: (net_property.array_dim > 1).then_some(net_property.array_dim),
                        params: Vec::new(),
                    });
                    continue;
                };
                let Some(descriptor) = mapper.map(&raw) else {
                    tracing::trace!(class = class_name, property = %raw.name, "unmappable net property");
                    continue;
                };
                properties.push(NetFieldEntry {
                    array_dim: descriptor.static_array_dim(),
                    name: descriptor.name,
                    kind: NetFieldKind::Property,
                    class: class_name.to_string(),
                    params: Vec::new(),
                });
            }
            ScannedNetField::Function { name, parameters } => {
                let params = parameters
                    .iter()
                    .filter(|parameter| !parameter.is_return)
                    .filter_map(|parameter| mapper.map(&parameter.property))
                    .map(|descriptor| param_entry(&descriptor))
                    .collect();
                functions.push(NetFieldEntry {
                    name: name.clone(),
                    kind: NetFieldKind::Function,
                    class: class_name.to_string(),
                    array_dim: None,
                    params,
                });
            }
        }
    }

    // `str` ordering is byte-wise, i.e. ordinal.
    functions.sort_by(|a, b| a.name.cmp(&b.name));
    properties.extend(functions);
    properties
}

/// A seed net-field record with `name`, `type` and `class` filled in when
/// the seed omits them. Every other key is kept as-is.
fn seed_field(field: &Value, class_name: &str) -> Value {
    let mut record = field.as_object().cloned().unwrap_or_else(Map::new);

    if record.get("name").is_none_or(Value::is_null) {
        record.insert("name".to_string(), Value::from(""));
    }
    if record.get("type").is_none_or(Value::is_null) {
        record.insert("type".to_string(), Value::from(NetFieldKind::Property.as_str()));
    }
    if record.get("class").is_none_or(Value::is_null) {
        record.insert("class".to_string(), Value::from(class_name));
    }

    Value::Object(record)
}
