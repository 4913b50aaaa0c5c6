//! Nearest seed ancestor lookup.
//!
//! Both assemblers anchor a Blueprint class on the same seed class through
//! [`nearest_seed_ancestor`], so their `parent` attributes always agree.

use std::collections::HashSet;

use rep_core::{ScanDocument, SeedCatalogue};

/// Walk `parent` links from `name` to the first class present in the seed.
///
/// A seed class is its own anchor. Returns `None` when the chain leaves both
/// the scan and the seed, or loops back on itself.
#[must_use]
pub fn nearest_seed_ancestor<'a>(
    name: &'a str,
    scan: &'a ScanDocument,
    seed: &SeedCatalogue,
) -> Option<&'a str> {
    let mut visited = HashSet::new();
    let mut current = name;

    loop {
        if seed.contains(current) {
            return Some(current);
        }
        let class = scan.get(current)?;
        if !visited.insert(current) {
            tracing::debug!(class = name, at = current, "ancestry cycle");
            return None;
        }
        current = &class.parent;
    }
}

/// Scanned classes strictly below `anchor` down to and including `target`,
/// root-most first.
///
/// Only meaningful once [`nearest_seed_ancestor`] returned `anchor` for
/// `target`; the walk stops early if it falls out of the scan.
#[must_use]
pub fn scanned_chain<'a>(target: &'a str, anchor: &str, scan: &'a ScanDocument) -> Vec<&'a str> {
    let mut chain = Vec::new();
    let mut current = target;

    while current != anchor {
        let Some(class) = scan.get(current) else {
            break;
        };
        chain.push(current);
        current = &class.parent;
    }

    chain.reverse();
    chain
}
