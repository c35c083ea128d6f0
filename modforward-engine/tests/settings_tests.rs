mod common;

use common::mod_key;
use modforward_engine::{DEFAULT_BASE_MODS, EngineError, PatchSettings};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn defaults_name_the_five_masters() {
    let settings = PatchSettings::default();
    assert_eq!(settings.base_mods, DEFAULT_BASE_MODS.to_vec());
    assert!(settings.preferred_override_order.is_empty());
}

#[test]
fn parses_field_names_as_written_by_users() {
    let settings = PatchSettings::from_json_str(
        r#"{
            "BaseMods": ["Skyrim.esm", "Update.esm"],
            "PreferredOverrideOrder": ["ModX.esp", "Light.esl"]
        }"#,
    )
    .unwrap();

    assert_eq!(settings.base_mods, vec!["Skyrim.esm", "Update.esm"]);
    assert_eq!(
        settings.preferred_override_order,
        vec![mod_key("ModX.esp"), mod_key("Light.esl")]
    );
}

#[test]
fn missing_fields_take_defaults() {
    let settings =
        PatchSettings::from_json_str(r#"{ "PreferredOverrideOrder": ["ModX.esp"] }"#).unwrap();
    assert_eq!(settings.base_mods, DEFAULT_BASE_MODS.to_vec());

    let empty = PatchSettings::from_json_str("{}").unwrap();
    assert_eq!(empty, PatchSettings::default());
}

#[test]
fn bad_priority_entry_rejects_the_file() {
    let err = PatchSettings::from_json_str(r#"{ "PreferredOverrideOrder": ["NoExtension"] }"#)
        .unwrap_err();
    assert!(matches!(err, EngineError::SettingsParse(_)));
}

#[test]
fn bad_base_entry_is_kept_verbatim() {
    let settings =
        PatchSettings::from_json_str(r#"{ "BaseMods": ["Skyrim.esm", "garbage"] }"#).unwrap();
    assert_eq!(settings.base_mods, vec!["Skyrim.esm", "garbage"]);
}

#[test]
fn serializes_back_to_the_same_shape() {
    let settings = PatchSettings::default().with_preferred_order([mod_key("ModX.esp")]);
    let json: serde_json::Value = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["PreferredOverrideOrder"], serde_json::json!(["ModX.esp"]));
    assert_eq!(json["BaseMods"][0], "Skyrim.esm");
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "PreferredOverrideOrder": ["ModY.esp", "ModX.esp"] }}"#).unwrap();

    let settings = PatchSettings::load(file.path()).unwrap();
    assert_eq!(
        settings.preferred_override_order,
        vec![mod_key("ModY.esp"), mod_key("ModX.esp")]
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let err = PatchSettings::load(&path).unwrap_err();
    match err {
        EngineError::SettingsIo { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn builders_replace_lists() {
    let settings = PatchSettings::default()
        .with_base_mods(["Skyrim.esm"])
        .with_preferred_order([mod_key("ModX.esp")]);
    assert_eq!(settings.base_mods, vec!["Skyrim.esm"]);
    assert_eq!(settings.preferred_override_order, vec![mod_key("ModX.esp")]);
}
