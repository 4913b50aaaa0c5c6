use std::path::PathBuf;

use anyhow::Context;
use rep_config::RepSeedConfig;
use rep_core::documents::{ClassNetCacheStats, RepLayoutStats};
use rep_resolver::{ResolveOptions, resolve};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResolveArgs;
use crate::files::{read_scan, read_seed, write_document};
use crate::output::output;
use crate::progress::Progress;

/// What `repseed resolve` reports once both documents are on disk.
#[derive(Debug, Serialize)]
pub struct ResolveSummary {
    pub rep_layout: PathBuf,
    pub class_net_cache: PathBuf,
    pub rep_layout_stats: RepLayoutStats,
    pub class_net_cache_stats: ClassNetCacheStats,
}

/// Handle `repseed resolve`.
pub fn handle(args: &ResolveArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = RepSeedConfig::load_with_dotenv().context("failed to load repseed configuration")?;
    let summary = execute(args, config)?;
    output(&summary, flags.format)
}

/// Load inputs, run both assemblers and write the documents.
pub fn execute(args: &ResolveArgs, mut config: RepSeedConfig) -> anyhow::Result<ResolveSummary> {
    if let Some(dir) = &args.out_dir {
        config.output.dir.clone_from(dir);
    }
    if args.no_parallel {
        config.resolver.parallel = false;
    }

    let progress = Progress::spinner("loading seed catalogue");
    let loaded = read_seed(&args.seed).and_then(|seed| {
        progress.set_message("loading scan");
        read_scan(&args.scan).map(|scan| (seed, scan))
    });
    let (seed, scan) = match loaded {
        Ok(inputs) => inputs,
        Err(error) => {
            progress.finish_err("failed to load inputs");
            return Err(error);
        }
    };

    tracing::info!(
        seed = %args.seed.display(),
        scan = %args.scan.display(),
        seed_classes = seed.len(),
        scanned_classes = scan.len(),
        "inputs loaded"
    );

    progress.set_message("resolving");
    let options = ResolveOptions {
        max_property_depth: config.resolver.max_property_depth,
        parallel: config.resolver.parallel,
    };
    let resolved = resolve(&seed, &scan, &options);

    progress.set_message("writing documents");
    let rep_layout = config.output.rep_layout_path();
    let class_net_cache = config.output.class_net_cache_path();
    let written = write_document(&rep_layout, &resolved.rep_layout, config.output.pretty).and_then(
        |()| write_document(&class_net_cache, &resolved.class_net_cache, config.output.pretty),
    );
    if let Err(error) = written {
        progress.finish_err("failed to write documents");
        return Err(error);
    }

    progress.finish_ok(&format!(
        "resolved {} of {} scanned classes",
        resolved.rep_layout.stats.resolved, resolved.rep_layout.stats.bp_classes
    ));

    Ok(ResolveSummary {
        rep_layout,
        class_net_cache,
        rep_layout_stats: resolved.rep_layout.stats,
        class_net_cache_stats: resolved.class_net_cache.stats,
    })
}
