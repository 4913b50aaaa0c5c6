//! Both assemblers over one seed + scan snapshot.

use rep_core::documents::{ClassNetCacheDocument, RepLayoutDocument};
use rep_core::{ScanDocument, SeedCatalogue};

use crate::mapper::{DEFAULT_MAX_DEPTH, PropertyMapper};
use crate::net_cache::build_class_net_cache;
use crate::rep_layout::build_rep_layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Nesting depth past which a property is treated as unmappable.
    pub max_property_depth: usize,
    /// Build the two documents on separate rayon workers.
    pub parallel: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_property_depth: DEFAULT_MAX_DEPTH,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOutput {
    pub rep_layout: RepLayoutDocument,
    pub class_net_cache: ClassNetCacheDocument,
}

/// Build the RepLayout and ClassNetCache documents.
///
/// The inputs are only read, so the two passes share no mutable state and
/// produce the same result whether or not they run in parallel.
#[must_use]
pub fn resolve(
    seed: &SeedCatalogue,
    scan: &ScanDocument,
    options: &ResolveOptions,
) -> ResolveOutput {
    let mapper = PropertyMapper::new(options.max_property_depth);

    tracing::debug!(
        seed_classes = seed.len(),
        scanned_classes = scan.len(),
        unreadable_classes = scan.unreadable.len(),
        parallel = options.parallel,
        "resolving replication metadata"
    );

    let (rep_layout, class_net_cache) = if options.parallel {
        rayon::join(
            || build_rep_layout(seed, scan, &mapper),
            || build_class_net_cache(seed, scan, &mapper),
        )
    } else {
        (
            build_rep_layout(seed, scan, &mapper),
            build_class_net_cache(seed, scan, &mapper),
        )
    };

    ResolveOutput {
        rep_layout,
        class_net_cache,
    }
}
