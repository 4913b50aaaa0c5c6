use rep_core::schema::{DocumentKind, document_schema};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `repseed schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = DocumentKind::from(args.document);
    let schema = document_schema(kind)?;
    output(&schema, flags.format)
}
