//! Reading inputs and writing result documents.

use std::fs;
use std::path::Path;

use anyhow::Context;
use rep_core::{ScanDocument, SeedCatalogue};
use serde::Serialize;
use serde_json::Value;

pub fn read_seed(path: &Path) -> anyhow::Result<SeedCatalogue> {
    let text = read_text(path)?;
    SeedCatalogue::from_json(&text)
        .with_context(|| format!("invalid seed catalogue {}", path.display()))
}

pub fn read_scan(path: &Path) -> anyhow::Result<ScanDocument> {
    let text = read_text(path)?;
    ScanDocument::from_json(&text)
        .with_context(|| format!("invalid scan document {}", path.display()))
}

/// Any resolved document, untyped so both kinds load the same way.
pub fn read_document(path: &Path) -> anyhow::Result<Value> {
    let text = read_text(path)?;
    serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
}

pub fn write_document<T: Serialize>(path: &Path, document: &T, pretty: bool) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut text = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    text.push('\n');

    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
