//! Replicated enum bit-width.
//!
//! The engine sizes an enum's net serialization by its `MAX` value. Enums
//! declared with an explicit `_MAX` entry already reserve that slot; every
//! other enum gets an implicit sentinel appended, so its cardinality is one
//! higher. Getting this off by one shifts every later handle of the class.

use rep_core::scan::RawEnumEntry;

/// Compute the replicated cardinality of an enum.
///
/// Returns `None` for an enum without entries, or one whose values do not fit
/// the engine's 32-bit range.
#[must_use]
pub fn enum_bit_width(enum_name: &str, entries: &[RawEnumEntry]) -> Option<u32> {
    let highest = entries.iter().map(|entry| entry.value).max()?;
    let highest = i128::from(highest) + 1;
    let count = i128::try_from(entries.len()).ok()?;
    let baseline = highest.max(count);

    let has_sentinel = entries
        .iter()
        .any(|entry| is_explicit_sentinel(&entry.name, enum_name));

    let width = if has_sentinel { baseline } else { baseline + 1 };
    u32::try_from(width).ok()
}

/// Whether an entry name is the enum's explicit `MAX` sentinel.
#[must_use]
pub fn is_explicit_sentinel(entry_name: &str, enum_name: &str) -> bool {
    if entry_name.trim().is_empty() {
        return false;
    }

    let upper = entry_name.to_ascii_uppercase();
    if upper.ends_with("_MAX") || upper.ends_with("::MAX") {
        return true;
    }

    if enum_name.trim().is_empty() {
        return false;
    }

    entry_name.eq_ignore_ascii_case(&format!("{enum_name}_MAX"))
        || entry_name.eq_ignore_ascii_case(&format!("{enum_name}::MAX"))
}
