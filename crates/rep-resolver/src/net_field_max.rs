//! Cumulative net field counts (`ClassNetCache` max) per class.
//!
//! A class's max is its parent's max plus its own field count, bottoming
//! out at a seed class's field count. Results are memoized in a
//! [`NetFieldMaxCache`] that lives for exactly one assembly pass.
//!
//! Two kinds of failure are treated differently:
//! - a class unknown to both inputs, or one already on the current recursion
//!   path, fails *without* being cached, since the same class may resolve
//!   through another path later in the pass;
//! - a class whose parent failed is cached as unresolvable.

use std::collections::{HashMap, HashSet};

use rep_core::{ScanDocument, ScannedClass, SeedCatalogue};

/// Memoized results for one pass: class name to resolved max, `None` when
/// the class is known to be unresolvable.
#[derive(Debug, Default)]
pub struct NetFieldMaxCache {
    entries: HashMap<String, Option<usize>>,
}

impl NetFieldMaxCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when nothing is cached for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<usize>> {
        self.entries.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: &str, value: Option<usize>) {
        self.entries.insert(name.to_string(), value);
    }
}

/// Resolves cumulative net field counts over one seed + scan snapshot.
///
/// `own_count` gives the number of net fields a scanned class contributes
/// itself.
pub struct NetFieldMaxResolver<'a, F> {
    seed: &'a SeedCatalogue,
    scan: &'a ScanDocument,
    own_count: F,
}

impl<'a, F> NetFieldMaxResolver<'a, F>
where
    F: Fn(&str, &ScannedClass) -> usize,
{
    pub fn new(seed: &'a SeedCatalogue, scan: &'a ScanDocument, own_count: F) -> Self {
        Self {
            seed,
            scan,
            own_count,
        }
    }

    /// Resolve the cumulative max for `name`, or `None` if its ancestry never
    /// reaches a seed class.
    pub fn resolve(&self, name: &'a str, cache: &mut NetFieldMaxCache) -> Option<usize> {
        let mut path = HashSet::new();
        self.resolve_on_path(name, &mut path, cache)
    }

    fn resolve_on_path(
        &self,
        name: &'a str,
        path: &mut HashSet<&'a str>,
        cache: &mut NetFieldMaxCache,
    ) -> Option<usize> {
        if let Some(cached) = cache.get(name) {
            return cached;
        }

        if let Some(seed) = self.seed.get(name) {
            let max = seed.net_field_count();
            cache.insert(name, Some(max));
            return Some(max);
        }

        let class = self.scan.get(name)?;
        if !path.insert(name) {
            tracing::debug!(class = name, "net field ancestry cycle");
            return None;
        }

        let parent_max = self.resolve_on_path(&class.parent, path, cache);
        path.remove(name);

        let max = parent_max.map(|parent| parent + (self.own_count)(name, class));
        cache.insert(name, max);
        max
    }
}
