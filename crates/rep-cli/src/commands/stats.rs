use anyhow::Context;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::files::read_document;
use crate::output::output;

/// Handle `repseed stats`.
pub fn handle(args: &StatsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = read_document(&args.document)?;
    let stats = stats_of(&document)
        .with_context(|| format!("{} has no stats block", args.document.display()))?;
    output(stats, flags.format)
}

fn stats_of(document: &Value) -> Option<&Value> {
    document.get("stats").filter(|stats| stats.is_object())
}
