mod common;

use common::{form_key, load_order, mod_key, module, spell, spells_only, tome};
use modforward_engine::{LinkCache, ResolvedView};
use modforward_model::{Book, Spell};

#[test]
fn last_module_in_load_order_wins() {
    let lo = load_order(vec![
        spells_only("Skyrim.esm", vec![spell(0x1, "Skyrim.esm", "Flames")]),
        spells_only("ModX.esp", vec![spell(0x2, "ModX.esp", "Flames")]),
        spells_only("ModY.esp", vec![spell(0x3, "ModY.esp", "Flames")]),
    ]);
    let cache = LinkCache::new(&lo);
    let hit = cache.resolve::<Spell>("Flames").unwrap();
    assert_eq!(hit.mod_key, &mod_key("ModY.esp"));
    assert_eq!(hit.record.form_key, form_key(0x3, "ModY.esp"));
}

#[test]
fn falls_back_to_lower_modules_for_other_ids() {
    let lo = load_order(vec![
        spells_only(
            "Skyrim.esm",
            vec![spell(0x1, "Skyrim.esm", "Flames"), spell(0x2, "Skyrim.esm", "Sparks")],
        ),
        spells_only("ModX.esp", vec![spell(0x3, "ModX.esp", "Flames")]),
    ]);
    let cache = LinkCache::new(&lo);
    assert_eq!(cache.resolve::<Spell>("Sparks").unwrap().mod_key, &mod_key("Skyrim.esm"));
}

#[test]
fn unknown_editor_id_is_not_found() {
    let lo = load_order(vec![spells_only("Skyrim.esm", vec![spell(0x1, "Skyrim.esm", "Flames")])]);
    let cache = LinkCache::new(&lo);
    assert!(cache.resolve::<Spell>("Meteor").is_none());
}

#[test]
fn kinds_do_not_collide() {
    let lo = load_order(vec![module(
        "Skyrim.esm",
        vec![spell(0x1, "Skyrim.esm", "Flames")],
        vec![tome(0x2, "Skyrim.esm", "Flames")],
    )]);
    let cache = LinkCache::new(&lo);
    let spell_key = &cache.resolve::<Spell>("Flames").unwrap().record.form_key;
    let book_key = &cache.resolve::<Book>("Flames").unwrap().record.form_key;
    assert_eq!(*spell_key, form_key(0x1, "Skyrim.esm"));
    assert_eq!(*book_key, form_key(0x2, "Skyrim.esm"));
}

#[test]
fn duplicate_in_winning_module_keeps_first() {
    let lo = load_order(vec![spells_only(
        "ModX.esp",
        vec![spell(0x1, "ModX.esp", "Flames"), spell(0x2, "ModX.esp", "Flames")],
    )]);
    let cache = LinkCache::new(&lo);
    let winner = cache.resolve::<Spell>("Flames").unwrap();
    assert_eq!(winner.record.form_key, form_key(0x1, "ModX.esp"));
}

#[test]
fn empty_load_order_resolves_nothing() {
    let lo = load_order(vec![]);
    let cache = LinkCache::new(&lo);
    assert!(cache.resolve::<Book>("Anything").is_none());
    assert!(cache.load_order().is_empty());
}
