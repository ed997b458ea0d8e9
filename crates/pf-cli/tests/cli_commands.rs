//! Integration tests for the pf-cli command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pf() -> Command {
    Command::cargo_bin("pf").unwrap()
}

/// Create a temp directory holding the starter data.
fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    pf().arg("init")
        .current_dir(dir.path())
        .assert()
        .success();
    dir
}

/// Create a temp directory with starter data and one generated character.
fn with_character(name: &str) -> TempDir {
    let dir = initialized();
    pf().args(["generate", name, "--preset", "brick", "--seed", "42"])
        .current_dir(dir.path())
        .assert()
        .success();
    dir
}

fn characters_json(dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(dir.join("characters.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_starter_data() {
    let dir = TempDir::new().unwrap();
    pf().arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created starter data"));

    for file in ["armor.json", "weapons.json", "keywords.json", "presets.json"] {
        assert!(dir.path().join(file).exists(), "{file} missing");
    }
}

#[test]
fn init_fails_if_data_exists() {
    let dir = initialized();
    pf().arg("init")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_keeps_existing_presets() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("presets.json"), "{}").unwrap();
    pf().arg("init")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("presets.json already exists"));

    assert_eq!(fs::read_to_string(dir.path().join("presets.json")).unwrap(), "{}");
    assert!(!dir.path().join("armor.json").exists());
}

#[test]
fn init_with_dir_flag() {
    let parent = TempDir::new().unwrap();
    pf().args(["init", "--dir", "data"])
        .current_dir(parent.path())
        .assert()
        .success();
    assert!(parent.path().join("data/armor.json").exists());
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_with_preset_stores_character() {
    let dir = initialized();
    pf().args(["generate", "Nova", "--preset", "brick", "--seed", "7"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nova"))
        .stdout(predicate::str::contains("Dodge"));

    let stored = characters_json(dir.path());
    let nova = &stored["Nova"];
    assert_eq!(nova["root"]["attributes"]["STR"], 4);
    assert_eq!(nova["armor"].as_array().unwrap().len(), 1);
    assert_eq!(nova["weapons"][0]["name"], "Sledgehammer");
}

#[test]
fn generate_is_reproducible_with_seed() {
    let a = initialized();
    let b = initialized();
    for dir in [&a, &b] {
        pf().args(["generate", "Nova", "--preset", "acrobat", "--seed", "1234"])
            .current_dir(dir.path())
            .assert()
            .success();
    }
    assert_eq!(characters_json(a.path()), characters_json(b.path()));
}

#[test]
fn generate_without_preset_has_no_equipment() {
    let dir = initialized();
    pf().args(["generate", "Blank", "--base", "0", "--extra", "0", "--seed", "1"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No powers."));

    let stored = characters_json(dir.path());
    assert!(stored["Blank"]["armor"].as_array().unwrap().is_empty());
    assert!(stored["Blank"]["powers"].as_array().unwrap().is_empty());
}

#[test]
fn generate_refuses_to_overwrite() {
    let dir = with_character("Nova");
    pf().args(["generate", "Nova", "--seed", "1"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    pf().args(["generate", "Nova", "--seed", "1", "--force"])
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn generate_unknown_preset_fails() {
    let dir = initialized();
    pf().args(["generate", "Nova", "--preset", "wizard"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("preset not found"));
}

#[test]
fn generate_rejects_out_of_range_chance() {
    let dir = initialized();
    pf().args(["generate", "Nova", "--rank", "100"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("extra rank chance"));
    assert!(!dir.path().join("characters.json").exists());
}

// ---------------------------------------------------------------------------
// show / list
// ---------------------------------------------------------------------------

#[test]
fn show_renders_sheet() {
    let dir = with_character("Nova");
    pf().args(["show", "Nova"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Effective"))
        .stdout(predicate::str::contains("Sledgehammer"));
}

#[test]
fn show_json_is_resolved_sheet() {
    let dir = with_character("Nova");
    let output = pf()
        .args(["show", "Nova", "--json"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let sheet: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(sheet["base"]["STR"], 4);
    assert!(sheet["effective"]["STR"].as_i64().unwrap() >= 4);
    assert!(sheet["speed"].is_number());
    assert!(sheet["weapons"][0]["dc"].is_number());
}

#[test]
fn show_fails_unknown_character() {
    let dir = initialized();
    pf().args(["show", "Nobody"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("character not found"));
}

#[test]
fn list_shows_characters() {
    let dir = with_character("Nova");
    pf().args(["generate", "Zed", "--seed", "3"])
        .current_dir(dir.path())
        .assert()
        .success();

    pf().arg("list")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nova"))
        .stdout(predicate::str::contains("Zed"))
        .stdout(predicate::str::contains("2 characters"));
}

#[test]
fn list_empty_directory() {
    let dir = TempDir::new().unwrap();
    pf().arg("list")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No characters found."));
}

// ---------------------------------------------------------------------------
// edit
// ---------------------------------------------------------------------------

#[test]
fn edit_sets_attribute() {
    let dir = with_character("Nova");
    pf().args(["edit", "Nova", "str", "9"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("STR = 9"));

    assert_eq!(characters_json(dir.path())["Nova"]["root"]["attributes"]["STR"], 9);
}

#[test]
fn edit_sets_negative_defense() {
    let dir = with_character("Nova");
    pf().args(["edit", "Nova", "dodge", "-2"])
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(characters_json(dir.path())["Nova"]["root"]["dodge"], -2);
}

#[test]
fn edit_to_extreme_value_still_shows() {
    let dir = with_character("Nova");
    pf().args(["edit", "Nova", "STR", "2147483647"])
        .current_dir(dir.path())
        .assert()
        .success();

    let output = pf()
        .args(["show", "Nova", "--json"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let sheet: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(sheet["effective"]["STR"], i64::from(i32::MAX));
    assert_eq!(sheet["weapons"][0]["dc"], i64::from(i32::MAX));
}

#[test]
fn edit_with_bad_value_leaves_character_unchanged() {
    let dir = with_character("Nova");
    let before = fs::read_to_string(dir.path().join("characters.json")).unwrap();

    pf().args(["edit", "Nova", "STR", "lots"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));

    pf().args(["edit", "Nova", "luck", "3"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));

    let after = fs::read_to_string(dir.path().join("characters.json")).unwrap();
    assert_eq!(before, after);
}

// ---------------------------------------------------------------------------
// powers
// ---------------------------------------------------------------------------

#[test]
fn powers_rejected_parameters_keep_list() {
    let dir = with_character("Nova");
    let before = characters_json(dir.path())["Nova"]["powers"].clone();

    pf().args(["powers", "Nova", "--base", "abc", "--extra", "10", "--rank", "5"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("powers unchanged"));

    pf().args(["powers", "Nova", "--base", "3", "--extra", "10", "--rank", "-1"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("powers unchanged"));

    assert_eq!(characters_json(dir.path())["Nova"]["powers"], before);
}

#[test]
fn powers_with_zero_rolls_clears_list() {
    let dir = with_character("Nova");
    pf().args(["powers", "Nova", "--base", "0", "--extra", "0", "--rank", "0"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 powers"));

    assert!(characters_json(dir.path())["Nova"]["powers"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[test]
fn powers_regenerates_consolidated_list() {
    let dir = with_character("Nova");
    pf().args(["powers", "Nova", "--base", "5", "--extra", "0", "--rank", "0", "--seed", "9"])
        .current_dir(dir.path())
        .assert()
        .success();

    let powers = characters_json(dir.path())["Nova"]["powers"].clone();
    let names: Vec<&str> = powers
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    let mut unique = names.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(names.len(), unique.len());
}

#[test]
fn powers_unknown_character_fails() {
    let dir = initialized();
    pf().args(["powers", "Nobody", "--base", "1", "--extra", "0", "--rank", "0"])
        .current_dir(dir.path())
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// keywords
// ---------------------------------------------------------------------------

#[test]
fn keywords_lists_catalog() {
    let dir = initialized();
    pf().arg("keywords")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Padded(X)"))
        .stdout(predicate::str::contains("finesse"));
}

#[test]
fn keywords_registers_unknown_catalog_tags() {
    let dir = initialized();
    fs::write(
        dir.path().join("armor.json"),
        r#"[{ "name": "Force Field", "bonus": 4, "tags": ["Shielded(3)", "glowing"] }]"#,
    )
    .unwrap();

    pf().arg("keywords")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Shielded(X)"))
        .stdout(predicate::str::contains("Description TBD"));

    let keywords = fs::read_to_string(dir.path().join("keywords.json")).unwrap();
    assert!(keywords.contains("Shielded"));
    assert!(keywords.contains("glowing"));
}
