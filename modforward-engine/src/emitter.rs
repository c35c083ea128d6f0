//! Copies winners into the patch module.

use crate::WinningOverride;
use modforward_model::{MajorRecord, ModelResult, Module};

/// Deep-copies every winner into `patch` using [`MajorRecord::deep_copy`].
///
/// Returns the number of records written.
pub fn emit<K: MajorRecord>(
    patch: &mut Module,
    winners: &[WinningOverride<'_, K>],
) -> ModelResult<usize> {
    emit_with(patch, winners, K::deep_copy)
}

/// Like [`emit`], with an explicit copy primitive.
///
/// All copies are made before `patch` is touched; if one fails the error is
/// returned and the patch is left as it was.
pub fn emit_with<K, F>(
    patch: &mut Module,
    winners: &[WinningOverride<'_, K>],
    copy: F,
) -> ModelResult<usize>
where
    K: MajorRecord,
    F: Fn(&K) -> ModelResult<K>,
{
    let copies = winners
        .iter()
        .map(|winner| copy(winner.record))
        .collect::<ModelResult<Vec<K>>>()?;

    let written = copies.len();
    for record in copies {
        patch.set_record(record);
    }
    Ok(written)
}
