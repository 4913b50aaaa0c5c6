//! RepLayout assembly.
//!
//! A Blueprint class's handles continue the numbering of its nearest seed
//! ancestor: the replicated properties of every scanned class between that
//! ancestor and the target (root-most first, declaration order within each
//! class) take handles `N+1..N+k`, where `N` is the seed's handle count.

use std::collections::BTreeMap;

use rep_core::documents::{HandleRecord, RepLayoutClass, RepLayoutDocument, RepLayoutStats};
use rep_core::{ScanDocument, SeedCatalogue, SeedClass};

use crate::ancestry::{nearest_seed_ancestor, scanned_chain};
use crate::entries::handle_entry;
use crate::mapper::PropertyMapper;

/// Build the RepLayout document.
#[must_use]
pub fn build_rep_layout(
    seed: &SeedCatalogue,
    scan: &ScanDocument,
    mapper: &PropertyMapper,
) -> RepLayoutDocument {
    let mut classes: BTreeMap<String, RepLayoutClass> = seed
        .classes
        .iter()
        .map(|(name, seed_class)| {
            let handles = seed_class
                .handles
                .iter()
                .cloned()
                .map(HandleRecord::Seed)
                .collect();
            (
                name.clone(),
                RepLayoutClass {
                    parent: None,
                    handles,
                },
            )
        })
        .collect();

    let mut stats = RepLayoutStats {
        cpp_classes: seed.len(),
        bp_classes: scan.reported_classes(),
        unresolved: scan.unreadable.len(),
        packages: scan.stats.packages,
        skipped: scan.stats.skipped,
        errors: scan.stats.errors,
        ..RepLayoutStats::default()
    };

    for name in scan.classes.keys() {
        if seed.contains(name) {
            tracing::warn!(class = %name, "scanned class shadows a seed class; keeping seed layout");
            continue;
        }

        let Some(anchor) = nearest_seed_ancestor(name, scan, seed) else {
            tracing::debug!(class = %name, "no seed ancestor; excluded from rep layout");
            stats.unresolved += 1;
            continue;
        };

        let base = seed.get(anchor).map_or(0, SeedClass::handle_count);
        let handles = chain_handles(name, anchor, scan, mapper, base);

        stats.resolved += 1;
        if !handles.is_empty() {
            stats.with_rep_properties += 1;
        }

        classes.insert(
            name.clone(),
            RepLayoutClass {
                parent: Some(anchor.to_string()),
                handles,
            },
        );
    }

    tracing::info!(
        cpp = stats.cpp_classes,
        resolved = stats.resolved,
        unresolved = stats.unresolved,
        with_rep_properties = stats.with_rep_properties,
        "rep layout assembled"
    );

    RepLayoutDocument { stats, classes }
}

/// Handles contributed by the scanned chain below `anchor`, numbered from
/// `base + 1`.
fn chain_handles(
    target: &str,
    anchor: &str,
    scan: &ScanDocument,
    mapper: &PropertyMapper,
    base: usize,
) -> Vec<HandleRecord> {
    let owned = scanned_chain(target, anchor, scan)
        .into_iter()
        .filter_map(|owner| scan.get(owner).map(|class| (owner, class)))
        .flat_map(move |(owner, class)| {
            class
                .replicated_properties
                .iter()
                .filter_map(move |raw| mapper.map(raw))
                .map(move |descriptor| (owner, descriptor))
        });

    owned
        .enumerate()
        .map(|(offset, (owner, descriptor))| {
            HandleRecord::Derived(handle_entry(&descriptor, owner, base + offset + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rep_core::ScannedClass;
    use rep_core::documents::HandleEntry;
    use rep_core::scan::{RawProperty, RawPropertyType};
    use serde_json::json;

    use super::*;

    fn seed() -> SeedCatalogue {
        SeedCatalogue::from_value(&json!({
            "classes": {
                "Actor": {
                    "handles": [
                        { "h": 1, "name": "bReplicateMovement", "type": "bool", "class": "Actor" },
                        { "h": 2, "name": "Owner", "type": "object", "class": "Actor" },
                        { "h": 3, "name": "Role", "type": "byte", "class": "Actor" }
                    ]
                }
            }
        }))
        .expect("seed")
    }

    fn class(parent: &str, props: &[(&str, RawPropertyType)]) -> ScannedClass {
        ScannedClass {
            replicated_properties: props
                .iter()
                .map(|(name, ty)| RawProperty::new(*name, ty.clone()))
                .collect(),
            ..ScannedClass::new(parent)
        }
    }

    fn derived(record: &HandleRecord) -> &HandleEntry {
        match record {
            HandleRecord::Derived(entry) => entry,
            HandleRecord::Seed(value) => panic!("expected derived handle, got {value}"),
        }
    }

    #[test]
    fn chain_properties_continue_seed_numbering() {
        let seed = seed();
        let mut scan = ScanDocument::default();
        scan.classes.insert(
            "BP_Base_C".to_string(),
            class("Actor", &[("Health", RawPropertyType::Float)]),
        );
        scan.classes.insert(
            "BP_Leaf_C".to_string(),
            class(
                "BP_Base_C",
                &[
                    ("OnHit", RawPropertyType::MulticastDelegate),
                    ("Ammo", RawPropertyType::Int),
                    ("Tag", RawPropertyType::Name),
                ],
            ),
        );

        let doc = build_rep_layout(&seed, &scan, &PropertyMapper::default());
        let leaf = &doc.classes["BP_Leaf_C"];
        assert_eq!(leaf.parent.as_deref(), Some("Actor"));

        let summary: Vec<_> = leaf
            .handles
            .iter()
            .map(derived)
            .map(|entry| (entry.h, entry.name.as_str(), entry.class.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (4, "Health", "BP_Base_C"),
                (5, "Ammo", "BP_Leaf_C"),
                (6, "Tag", "BP_Leaf_C"),
            ]
        );
        assert_eq!(doc.stats.resolved, 2);
        assert_eq!(doc.stats.with_rep_properties, 2);
    }

    #[test]
    fn handles_past_the_u32_range_stay_distinct() {
        let mut scan = ScanDocument::default();
        scan.classes.insert(
            "BP_Base_C".to_string(),
            class("Actor", &[("Health", RawPropertyType::Float)]),
        );
        scan.classes.insert(
            "BP_Leaf_C".to_string(),
            class(
                "BP_Base_C",
                &[("Ammo", RawPropertyType::Int), ("Tag", RawPropertyType::Name)],
            ),
        );

        let base = usize::try_from(u32::MAX).expect("usize holds u32") - 1;
        let handles: Vec<_> =
            chain_handles("BP_Leaf_C", "Actor", &scan, &PropertyMapper::default(), base)
                .iter()
                .map(|record| derived(record).h)
                .collect();
        assert_eq!(handles, vec![base + 1, base + 2, base + 3]);
    }

    #[test]
    fn unreadable_scan_classes_count_as_unresolved() {
        let scan = ScanDocument::from_value(json!({
            "classes": {
                "BP_Good_C": {
                    "parent": "Actor",
                    "replicated_properties": [{ "name": "Armor", "type": "int" }]
                },
                "BP_Bad_C": {
                    "parent": "Actor",
                    "replicated_properties": [{ "name": "Cargo", "type": "struct", "struct_name": 5 }]
                }
            }
        }))
        .expect("scan");

        let doc = build_rep_layout(&seed(), &scan, &PropertyMapper::default());
        assert_eq!(derived(&doc.classes["BP_Good_C"].handles[0]).h, 4);
        assert!(!doc.classes.contains_key("BP_Bad_C"));
        assert_eq!(doc.stats.bp_classes, 2);
        assert_eq!(doc.stats.resolved, 1);
        assert_eq!(doc.stats.unresolved, 1);
    }

    #[test]
    fn seed_handles_pass_through_verbatim() {
        let seed = seed();
        let doc = build_rep_layout(&seed, &ScanDocument::default(), &PropertyMapper::default());
        let actor = &doc.classes["Actor"];
        assert_eq!(actor.parent, None);
        let handles: Vec<_> = actor
            .handles
            .iter()
            .map(|record| serde_json::to_value(record).expect("serialize"))
            .collect();
        assert_eq!(&handles, &seed.get("Actor").expect("actor").handles);
    }

    #[test]
    fn unresolved_classes_are_excluded_and_counted() {
        let seed = seed();
        let mut scan = ScanDocument::default();
        scan.classes
            .insert("BP_Orphan_C".to_string(), class("Unknown", &[("X", RawPropertyType::Bool)]));
        scan.classes.insert("BP_A_C".to_string(), class("BP_B_C", &[]));
        scan.classes.insert("BP_B_C".to_string(), class("BP_A_C", &[]));
        scan.classes.insert("BP_Empty_C".to_string(), class("Actor", &[]));

        let doc = build_rep_layout(&seed, &scan, &PropertyMapper::default());
        assert!(!doc.classes.contains_key("BP_Orphan_C"));
        assert!(!doc.classes.contains_key("BP_A_C"));
        assert!(!doc.classes.contains_key("BP_B_C"));
        assert!(doc.classes["BP_Empty_C"].handles.is_empty());
        assert_eq!(doc.stats.unresolved, 3);
        assert_eq!(doc.stats.resolved, 1);
        assert_eq!(doc.stats.with_rep_properties, 0);
        assert_eq!(doc.stats.bp_classes, 4);
        assert_eq!(doc.stats.cpp_classes, 1);
    }

    #[test]
    fn scanned_class_named_like_a_seed_is_ignored() {
        let seed = seed();
        let mut scan = ScanDocument::default();
        scan.classes
            .insert("Actor".to_string(), class("Object", &[("Extra", RawPropertyType::Bool)]));

        let doc = build_rep_layout(&seed, &scan, &PropertyMapper::default());
        assert_eq!(doc.classes["Actor"].handles.len(), 3);
        assert_eq!(doc.classes["Actor"].parent, None);
        assert_eq!(doc.stats.resolved + doc.stats.unresolved, 0);
    }
}
