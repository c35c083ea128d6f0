//! Shared load-order fixtures for engine tests.

#![allow(dead_code)]

use modforward_model::{Book, BookTeaches, LoadOrder, Module, Spell};
use modforward_types::{FormKey, ModKey};

pub fn mod_key(name: &str) -> ModKey {
    ModKey::parse(name).unwrap()
}

pub fn form_key(id: u32, module: &str) -> FormKey {
    FormKey::new(mod_key(module), id).unwrap()
}

pub fn spell(id: u32, module: &str, editor_id: &str) -> Spell {
    Spell::new(form_key(id, module)).with_editor_id(editor_id)
}

pub fn tome(id: u32, module: &str, editor_id: &str) -> Book {
    Book::new(form_key(id, module))
        .with_editor_id(editor_id)
        .with_teaches(BookTeaches::Spell(form_key(id + 0x1000, module)))
}

pub fn plain_book(id: u32, module: &str, editor_id: &str) -> Book {
    Book::new(form_key(id, module)).with_editor_id(editor_id)
}

pub fn module(name: &str, spells: Vec<Spell>, books: Vec<Book>) -> Module {
    Module {
        mod_key: mod_key(name),
        spells,
        books,
    }
}

pub fn spells_only(name: &str, spells: Vec<Spell>) -> Module {
    module(name, spells, Vec::new())
}

/// Skyrim.esm defines FireballSpell (A); ModX.esp defines its own (B).
pub fn fireball_load_order() -> LoadOrder {
    LoadOrder::from_modules([
        spells_only("Skyrim.esm", vec![spell(0x0A, "Skyrim.esm", "FireballSpell")]),
        spells_only("ModX.esp", vec![spell(0x0B, "ModX.esp", "FireballSpell")]),
    ])
    .unwrap()
}

/// Builds a load order from modules listed lowest priority first.
pub fn load_order(modules: Vec<Module>) -> LoadOrder {
    LoadOrder::from_modules(modules).unwrap()
}
