//! Idempotence filter: drop winners the load order already resolves to.

use crate::{ResolvedView, Winners, WinningOverride};
use modforward_model::MajorRecord;
use tracing::debug;

/// Keeps only winners that would change what is in effect.
///
/// A candidate is dropped when it has no editor id, when `view` cannot
/// resolve its editor id, or when the effective record has the candidate's
/// form key. Survivors carry the effective record in
/// [`WinningOverride::effective`]. Output order follows `candidates`.
pub fn filter<'a, K: MajorRecord, V: ResolvedView>(
    view: &'a V,
    candidates: Winners<'a, K>,
) -> Vec<WinningOverride<'a, K>> {
    let mut retained = Vec::new();

    for (_, mut candidate) in candidates {
        let record = candidate.record;
        let Some(editor_id) = record.editor_id() else {
            continue;
        };
        let Some(effective) = view.resolve::<K>(editor_id) else {
            debug!(kind = %K::KIND, editor_id, "no effective record, not forwarding");
            continue;
        };
        if effective.record.form_key() == record.form_key() {
            debug!(
                kind = %K::KIND,
                editor_id,
                module = %effective.mod_key,
                "winner already in effect"
            );
            continue;
        }
        candidate.effective = Some(effective);
        retained.push(candidate);
    }

    retained
}
