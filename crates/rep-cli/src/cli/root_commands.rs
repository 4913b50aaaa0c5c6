use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use rep_core::schema::DocumentKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Build RepLayout and ClassNetCache from a seed and a scan.
    Resolve(ResolveArgs),
    /// Print one class record from a resolved document.
    Show(ShowArgs),
    /// Print the stats block of a resolved document.
    Stats(StatsArgs),
    /// Dump the JSON schema of an input or output document.
    Schema(SchemaArgs),
}

/// Arguments for `repseed resolve`.
#[derive(Clone, Debug, Args)]
pub struct ResolveArgs {
    /// Seed catalogue JSON (native classes).
    #[arg(long)]
    pub seed: PathBuf,
    /// Scanner output JSON (Blueprint classes).
    #[arg(long)]
    pub scan: PathBuf,
    /// Output directory; overrides `output.dir` from config.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
    /// Build the two documents one after the other.
    #[arg(long)]
    pub no_parallel: bool,
}

/// Arguments for `repseed show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// A RepLayout or ClassNetCache JSON file.
    pub document: PathBuf,
    /// Class name to print.
    pub class: String,
}

/// Arguments for `repseed stats`.
#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// A RepLayout or ClassNetCache JSON file.
    pub document: PathBuf,
}

/// Arguments for `repseed schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document to describe.
    #[arg(value_enum)]
    pub document: SchemaTarget,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    Scan,
    Seed,
    RepLayout,
    ClassNetCache,
}

impl From<SchemaTarget> for DocumentKind {
    fn from(target: SchemaTarget) -> Self {
        match target {
            SchemaTarget::Scan => Self::Scan,
            SchemaTarget::Seed => Self::Seed,
            SchemaTarget::RepLayout => Self::RepLayout,
            SchemaTarget::ClassNetCache => Self::ClassNetCache,
        }
    }
}
