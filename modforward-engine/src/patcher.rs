//! The patch pipeline: detect, report, resolve, filter, emit.

use crate::{
    BaseSet, EngineError, EngineResult, OverridePair, PatchSettings, ResolvedView, WinningOverride,
    emitter, filter, report, resolver, scanner,
};
use modforward_model::{Book, LoadOrder, MajorRecord, Module, Spell};
use std::io::Write;
use tracing::info;

/// Counts from one patch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchSummary {
    /// Spell tomes overriding a base record.
    pub book_overrides: usize,
    /// Spells overriding a base record.
    pub spell_overrides: usize,
    /// Books written to the patch.
    pub forwarded_books: usize,
    /// Spells written to the patch.
    pub forwarded_spells: usize,
}

impl PatchSummary {
    /// Total records written to the patch.
    pub fn forwarded(&self) -> usize {
        self.forwarded_books + self.forwarded_spells
    }
}

/// Runs the forwarding pipeline for spell tomes and spells.
pub struct Patcher<'s> {
    settings: &'s PatchSettings,
}

impl<'s> Patcher<'s> {
    pub fn new(settings: &'s PatchSettings) -> Self {
        Self { settings }
    }

    /// Runs the whole pipeline.
    ///
    /// The report goes to `out`; forwarded records are added to `patch`.
    /// Books are handled before spells at every stage.
    pub fn run<V: ResolvedView, W: Write>(
        &self,
        load_order: &LoadOrder,
        view: &V,
        patch: &mut Module,
        out: &mut W,
    ) -> EngineResult<PatchSummary> {
        let base = BaseSet::build(load_order, self.settings)?;

        let book_overrides = detect::<Book>(load_order, &base, Some(&Book::is_spell_tome));
        let spell_overrides = detect::<Spell>(load_order, &base, None);
        info!(
            books = book_overrides.len(),
            spells = spell_overrides.len(),
            "override detection complete"
        );

        report::write_section(out, &book_overrides)?;
        report::write_section(out, &spell_overrides)?;

        let books = self.forward::<Book, V>(load_order, view);
        let spells = self.forward::<Spell, V>(load_order, view);

        writeln!(out, "{}", report::FORWARDING_DONE)?;
        report::write_forwarded(out, &books)?;
        report::write_forwarded(out, &spells)?;

        let forwarded_books = emit_kind(patch, &books)?;
        let forwarded_spells = emit_kind(patch, &spells)?;
        info!(
            patch = %patch.mod_key,
            books = forwarded_books,
            spells = forwarded_spells,
            "patch populated"
        );

        Ok(PatchSummary {
            book_overrides: book_overrides.len(),
            spell_overrides: spell_overrides.len(),
            forwarded_books,
            forwarded_spells,
        })
    }

    /// Resolves and filters winners of kind `K`.
    pub fn forward<'a, K: MajorRecord, V: ResolvedView>(
        &self,
        load_order: &'a LoadOrder,
        view: &'a V,
    ) -> Vec<WinningOverride<'a, K>> {
        let candidates =
            resolver::resolve::<K>(load_order, &self.settings.preferred_override_order);
        let candidate_count = candidates.len();
        let winners = filter::filter(view, candidates);
        info!(
            kind = %K::KIND,
            candidates = candidate_count,
            forwarded = winners.len(),
            "priority resolution complete"
        );
        winners
    }
}

fn detect<'a, K: MajorRecord>(
    load_order: &'a LoadOrder,
    base: &BaseSet<'a>,
    filter: Option<&dyn Fn(&K) -> bool>,
) -> Vec<OverridePair<'a, K>> {
    let indices = base.indices::<K>();
    let contributing = load_order.winning_contexts::<K>();
    scanner::scan(&indices, base.keys(), &contributing, filter)
}

fn emit_kind<K: MajorRecord>(
    patch: &mut Module,
    winners: &[WinningOverride<'_, K>],
) -> EngineResult<usize> {
    emitter::emit(patch, winners).map_err(|source| EngineError::Emit {
        kind: K::KIND,
        source,
    })
}
