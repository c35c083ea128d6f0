//! Shared record builders for model tests.

#![allow(dead_code)]

use modforward_model::{Book, BookTeaches, Module, Spell};
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

pub fn tome(id: u32, module: &str, editor_id: &str, teaches: FormKey) -> Book {
    Book::new(form_key(id, module))
        .with_editor_id(editor_id)
        .with_teaches(BookTeaches::Spell(teaches))
}

pub fn module(name: &str, spells: Vec<Spell>, books: Vec<Book>) -> Module {
    Module {
        mod_key: mod_key(name),
        spells,
        books,
    }
}
