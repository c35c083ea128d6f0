mod common;

use common::{load_order, mod_key, spell, spells_only};
use modforward_engine::{BaseSet, EngineError, PatchSettings};
use modforward_model::LoadOrder;
use pretty_assertions::assert_eq;

fn sample() -> LoadOrder {
    load_order(vec![
        spells_only("Skyrim.esm", vec![spell(0x1, "Skyrim.esm", "Flames")]),
        spells_only("Update.esm", vec![spell(0x2, "Update.esm", "Flames")]),
        spells_only("ModX.esp", vec![spell(0x3, "ModX.esp", "Flames")]),
    ])
}

fn names(base: &BaseSet<'_>) -> Vec<String> {
    base.modules().iter().map(|m| m.mod_key.to_string()).collect()
}

#[test]
fn master_comes_first_and_is_indexed_once() {
    let lo = sample();
    let settings =
        PatchSettings::default().with_base_mods(["Update.esm", "Skyrim.esm", "update.esm"]);
    let base = BaseSet::build(&lo, &settings).unwrap();

    assert_eq!(names(&base), ["Skyrim.esm", "Update.esm"]);
    assert_eq!(base.keys().len(), 2);
    assert_eq!(base.indices::<modforward_model::Spell>().len(), 2);
}

#[test]
fn unloaded_entry_still_counts_as_base() {
    let lo = sample();
    let base = BaseSet::build(&lo, &PatchSettings::default()).unwrap();

    assert_eq!(names(&base), ["Skyrim.esm", "Update.esm"]);
    assert!(base.keys().contains(&mod_key("Dragonborn.esm")));
    assert!(!base.keys().contains(&mod_key("ModX.esp")));
}

#[test]
fn unparsable_entry_is_skipped() {
    let lo = sample();
    let settings = PatchSettings::default().with_base_mods(["Update", "Update.esm"]);
    let base = BaseSet::build(&lo, &settings).unwrap();
    assert_eq!(names(&base), ["Skyrim.esm", "Update.esm"]);
}

#[test]
fn missing_master_is_an_error() {
    let lo = load_order(vec![spells_only("ModX.esp", vec![])]);
    let err = BaseSet::build(&lo, &PatchSettings::default()).unwrap_err();
    assert!(matches!(err, EngineError::MissingMasterBase(_)));
}
