use anyhow::{Context, bail};
use serde_json::Value;

use crate::cli::root_commands::ShowArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::files::read_document;
use crate::output::output;

/// Handle `repseed show`.
pub fn handle(args: &ShowArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = read_document(&args.document)?;
    let record = class_record(&document, &args.class)
        .with_context(|| format!("in {}", args.document.display()))?;

    // A table reads best as one row per handle or field.
    if flags.format == OutputFormat::Table {
        if let Some(entries) = record.get("handles").or_else(|| record.get("fields")) {
            return output(entries, flags.format);
        }
    }
    output(record, flags.format)
}

fn class_record<'a>(document: &'a Value, class: &str) -> anyhow::Result<&'a Value> {
    let Some(classes) = document.get("classes").and_then(Value::as_object) else {
        bail!("document has no 'classes' table");
    };
    match classes.get(class) {
        Some(record) => Ok(record),
        None => bail!("class '{class}' not found ({} classes in document)", classes.len()),
    }
}
