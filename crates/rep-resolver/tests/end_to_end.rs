//! Full resolution over the fixture seed and scan.

use pretty_assertions::assert_eq;
use rep_core::documents::{FieldRecord, HandleRecord};
use rep_core::{ScanDocument, SeedCatalogue};
use rep_resolver::{ResolveOptions, ResolveOutput, resolve};
use serde_json::{Value, json};

const SEED: &str = include_str!("fixtures/seed.json");
const SCAN: &str = include_str!("fixtures/scan.json");

fn run() -> ResolveOutput {
    let seed = SeedCatalogue::from_json(SEED).expect("seed fixture");
    let scan = ScanDocument::from_json(SCAN).expect("scan fixture");
    resolve(&seed, &scan, &ResolveOptions::default())
}

fn handles(output: &ResolveOutput, class: &str) -> Value {
    serde_json::to_value(&output.rep_layout.classes[class].handles).expect("serialize handles")
}

fn fields(output: &ResolveOutput, class: &str) -> Value {
    serde_json::to_value(&output.class_net_cache.classes[class].fields).expect("serialize fields")
}

#[test]
fn weapon_handles_continue_actor_numbering() {
    let output = run();
    assert_eq!(
        handles(&output, "BP_Weapon_C"),
        json!([
            { "h": 5, "name": "Ammo", "type": "int32", "class": "BP_Weapon_C" },
            {
                "h": 6,
                "name": "FireMode",
                "type": "byte",
                "class": "BP_Weapon_C",
                "enum": "EFireMode",
                "max": 4
            }
        ])
    );
}

#[test]
fn rifle_inherits_weapon_handles_then_adds_its_own() {
    let output = run();
    assert_eq!(
        handles(&output, "BP_Rifle_C"),
        json!([
            { "h": 5, "name": "Ammo", "type": "int32", "class": "BP_Weapon_C" },
            {
                "h": 6,
                "name": "FireMode",
                "type": "byte",
                "class": "BP_Weapon_C",
                "enum": "EFireMode",
                "max": 4
            },
            {
                "h": 7,
                "name": "Attachments",
                "type": "array",
                "class": "BP_Rifle_C",
                "inner": [{
                    "h": 1,
                    "name": "Attachments",
                    "type": "struct:AttachmentSlot",
                    "struct_type": "AttachmentSlot"
                }]
            },
            {
                "h": 8,
                "name": "Tags",
                "type": "map",
                "class": "BP_Rifle_C",
                "inner": [
                    { "h": 1, "name": "Tags", "type": "name" },
                    { "h": 2, "name": "Tags", "type": "weak_obj" }
                ]
            },
            { "h": 9, "name": "Heat", "type": "float", "class": "BP_Rifle_C", "array_dim": 3 }
        ])
    );
}

#[test]
fn hero_anchors_on_pawn_and_drops_unknown_kinds() {
    let output = run();
    assert_eq!(
        output.rep_layout.classes["BP_Hero_C"].parent.as_deref(),
        Some("Pawn")
    );
    assert_eq!(
        handles(&output, "BP_Hero_C"),
        json!([{ "h": 7, "name": "Health", "type": "float", "class": "BP_Hero_C" }])
    );
}

#[test]
fn net_fields_list_properties_then_sorted_functions() {
    let output = run();
    assert_eq!(
        fields(&output, "BP_Weapon_C"),
        json!([
            { "name": "Ammo", "type": "property", "class": "BP_Weapon_C" },
            { "name": "FireMode", "type": "property", "class": "BP_Weapon_C" },
            { "name": "MulticastImpact", "type": "function", "class": "BP_Weapon_C" },
            {
                "name": "ServerFire",
                "type": "function",
                "class": "BP_Weapon_C",
                "params": [
                    { "name": "Origin", "type": "struct:Vector", "struct_type": "Vector" }
                ]
            }
        ])
    );
    assert_eq!(
        fields(&output, "BP_Rifle_C"),
        json!([
            { "name": "ClientAck", "type": "function", "class": "BP_Rifle_C" },
            { "name": "ServerReload", "type": "function", "class": "BP_Rifle_C" }
        ])
    );
}

#[test]
fn untyped_net_property_keeps_its_slot() {
    let output = run();
    assert_eq!(
        fields(&output, "BP_Hero_C"),
        json!([
            { "name": "Health", "type": "property", "class": "BP_Hero_C" },
            { "name": "Shield", "type": "property", "class": "BP_Hero_C", "array_dim": 2 }
        ])
    );
}

#[test]
fn net_field_max_is_cumulative() {
    let output = run();
    let cache = &output.class_net_cache.classes;
    assert_eq!(cache["Actor"].max, 3);
    assert_eq!(cache["Pawn"].max, 5);
    assert_eq!(cache["BP_Weapon_C"].max, 7);
    assert_eq!(cache["BP_Rifle_C"].max, 9);
    assert_eq!(cache["BP_Hero_C"].max, 7);
}

#[test]
fn seed_records_pass_through_with_defaults() {
    let output = run();
    assert_eq!(
        fields(&output, "Pawn"),
        json!([
            { "name": "Owner", "type": "property", "class": "Actor" },
            { "name": "Role", "type": "property", "class": "Actor" },
            { "name": "ClientResetPhysics", "type": "function", "class": "Actor" },
            { "name": "Controller", "type": "property", "class": "Pawn" },
            { "name": "PlayerState", "type": "property", "class": "Pawn" }
        ])
    );
    assert!(
        output.rep_layout.classes["Pawn"]
            .handles
            .iter()
            .all(|record| matches!(record, HandleRecord::Seed(_)))
    );
    assert!(
        output.class_net_cache.classes["Pawn"]
            .fields
            .iter()
            .all(|record| matches!(record, FieldRecord::Seed(_)))
    );
    assert!(!output.rep_layout.classes.contains_key("Broken"));
}

#[test]
fn unresolved_classes_are_absent_from_both_documents() {
    let output = run();
    for name in ["BP_Orphan_C", "BP_LoopA_C", "BP_LoopB_C", "BP_Corrupt_C"] {
        assert!(!output.rep_layout.classes.contains_key(name), "{name} in rep layout");
        assert!(
            !output.class_net_cache.classes.contains_key(name),
            "{name} in class net cache"
        );
    }
    assert_eq!(output.rep_layout.stats.unresolved, 4);
    assert_eq!(output.class_net_cache.stats.unresolved, 4);
}

#[test]
fn both_documents_agree_on_anchors() {
    let output = run();
    for (name, class) in &output.class_net_cache.classes {
        assert_eq!(
            class.parent, output.rep_layout.classes[name].parent,
            "anchor mismatch for {name}"
        );
    }
    assert_eq!(
        output.rep_layout.classes.keys().collect::<Vec<_>>(),
        output.class_net_cache.classes.keys().collect::<Vec<_>>()
    );
}

#[test]
fn stats_carry_scan_counters() {
    let output = run();
    assert_eq!(
        serde_json::to_value(output.rep_layout.stats).expect("serialize"),
        json!({
            "cpp_classes": 2,
            "bp_classes": 7,
            "resolved": 3,
            "unresolved": 4,
            "with_rep_properties": 3,
            "packages": 12,
            "skipped": 2,
            "errors": 1
        })
    );
    assert_eq!(output.class_net_cache.stats.total_fields, 8 + 4 + 2 + 2);
    assert_eq!(output.class_net_cache.stats.resolved, 3);
}

#[test]
fn repeated_runs_serialize_identically() {
    let first = run();
    let second = run();
    assert_eq!(
        serde_json::to_string_pretty(&first.rep_layout).expect("serialize"),
        serde_json::to_string_pretty(&second.rep_layout).expect("serialize")
    );
    assert_eq!(
        serde_json::to_string_pretty(&first.class_net_cache).expect("serialize"),
        serde_json::to_string_pretty(&second.class_net_cache).expect("serialize")
    );
}
