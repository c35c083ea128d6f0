//! Human-readable override report.
//!
//! Formatting only; the caller decides where the lines go.

use crate::{OverridePair, WinningOverride};
use modforward_model::MajorRecord;
use std::io::{self, Write};

/// Line written between the detection report and the forwarding report.
pub const FORWARDING_DONE: &str = "Finished forwarding overrides based on priority";

/// Formats a single override line.
pub fn format_override<K: MajorRecord>(pair: &OverridePair<'_, K>) -> String {
    format!(
        "{} '{}' from [{}] has been overridden by '{}' from [{}]",
        K::KIND,
        pair.original.label(),
        pair.original_mod,
        pair.overriding.label(),
        pair.overriding_mod,
    )
}

/// Writes the lines for `pairs`, preceded by a count when there are any.
pub fn write_overrides<K: MajorRecord, W: Write>(
    out: &mut W,
    pairs: &[OverridePair<'_, K>],
) -> io::Result<()> {
    if !pairs.is_empty() {
        writeln!(out, "Found {} {} overrides", pairs.len(), K::KIND)?;
    }
    for pair in pairs {
        writeln!(out, "{}", format_override(pair))?;
    }
    Ok(())
}

/// Writes a banner for kind `K` followed by its override lines.
pub fn write_section<K: MajorRecord, W: Write>(
    out: &mut W,
    pairs: &[OverridePair<'_, K>],
) -> io::Result<()> {
    writeln!(out, "{} ====================", K::KIND.banner())?;
    write_overrides(out, pairs)
}

/// Writes a section for forwarding decisions.
///
/// Winners that never went through the idempotence filter have no effective
/// record to compare against and are skipped.
pub fn write_forwarded<K: MajorRecord, W: Write>(
    out: &mut W,
    winners: &[WinningOverride<'_, K>],
) -> io::Result<()> {
    let pairs: Vec<OverridePair<'_, K>> =
        winners.iter().filter_map(WinningOverride::as_pair).collect();
    write_section(out, &pairs)
}
