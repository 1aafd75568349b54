//! End-to-end tests for the `dicetray` CLI commands.
#![allow(deprecated)] // Command::cargo_bin, pending a stable macro replacement

use assert_cmd::Command;
use predicates::prelude::*;

fn dicetray() -> Command {
    Command::cargo_bin("dicetray").unwrap()
}

fn stdout_of(args: &[&str]) -> Vec<u8> {
    dicetray()
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_save_with_advantage() {
    dicetray()
        .args([
            "roll",
            "save",
            "--roll-type",
            "adv",
            "--modifier",
            "DEX",
            "--bonus",
            "3",
            "--seed",
            "7",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rolling with +ADV")
                .and(predicate::str::contains("DEX: SAVE"))
                .and(predicate::str::contains("dice: 2"))
                .and(predicate::str::contains("2d20kh1+3")),
        );
}

#[test]
fn roll_to_hit_defaults_to_normal() {
    dicetray()
        .args(["roll", "to-hit", "--ability", "Hex", "--seed", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rolling with NORMAL")
                .and(predicate::str::contains("HEX: TO HIT"))
                .and(predicate::str::contains("dice: 1")),
        );
}

#[test]
fn roll_crit_doubles_the_dice() {
    dicetray()
        .args([
            "roll", "damage", "-t", "crit", "-n", "2", "-d", "8", "--ability", "Fireball",
            "--seed", "1",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rolling with CRIT")
                .and(predicate::str::contains("dice: 4"))
                .and(predicate::str::contains("4d8")),
        );
}

#[test]
fn roll_initiative_uses_one_die() {
    dicetray()
        .args(["roll", "initiative", "-n", "6", "--seed", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("INITIATIVE: ROLL")
                .and(predicate::str::contains("dice: 1"))
                .and(predicate::str::contains("1d20")),
        );
}

#[test]
fn roll_missing_label_is_a_grammar_violation() {
    dicetray()
        .args(["roll", "save"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("grammar violation")
                .and(predicate::str::contains("modifier required")),
        );
}

#[test]
fn roll_save_with_a_skill_is_rejected() {
    dicetray()
        .args(["roll", "save", "--skill", "Stealth"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("invalid SAVE roll")
                .and(predicate::str::contains("modifier required")),
        );
}

#[test]
fn roll_unknown_category_fails() {
    dicetray()
        .args(["roll", "smite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category: smite"));
}

#[test]
fn roll_json_output_is_valid() {
    let output = stdout_of(&["roll", "initiative", "--json", "--seed", "11"]);
    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(json["request"]["category"], "INITIATIVE");
    assert_eq!(json["outcome"]["dice"], 1);
    assert_eq!(json["outcome"]["total"], json["outcome"]["rolls"][0]);
}

#[test]
fn roll_flat_roll_drops_the_bonus() {
    let output = stdout_of(&[
        "roll",
        "damage",
        "-t",
        "flat",
        "-n",
        "2",
        "-d",
        "8",
        "--ability",
        "Magic Missile",
        "--bonus",
        "5",
        "--json",
        "--seed",
        "2",
    ]);
    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert!(json["outcome"]["bonus"].is_null());
    assert_eq!(json["outcome"]["notation"], "2d8");
}

#[test]
fn roll_is_deterministic_with_a_seed() {
    let args = [
        "roll", "check", "--skill", "Stealth", "-t", "dis", "--seed", "123",
    ];
    assert_eq!(stdout_of(&args), stdout_of(&args));
}

// ---------------------------------------------------------------------------
// eval
// ---------------------------------------------------------------------------

#[test]
fn eval_resolves_a_json_request() {
    dicetray()
        .args([
            "eval",
            r#"{"dice":2,"die":8,"category":"DAMAGE","type":"FLAT ROLL","ability":"Fireball"}"#,
            "--seed",
            "5",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("FIREBALL: DAMAGE").and(predicate::str::contains("2d8")),
        );
}

#[test]
fn eval_reports_a_string_die_as_a_type_error() {
    // The grammar is also wrong here; the malformed die must win.
    dicetray()
        .args([
            "eval",
            r#"{"die":"20","category":"SAVE","type":"ADV","skill":"Stealth"}"#,
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("type error")
                .and(predicate::str::contains("die must be an integer")),
        );
}

#[test]
fn eval_reports_grammar_violations() {
    dicetray()
        .args([
            "eval",
            r#"{"die":20,"category":"SAVE","type":"ADV","skill":"Stealth"}"#,
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("grammar violation")
                .and(predicate::str::contains("modifier required")),
        );
}

#[test]
fn eval_rejects_malformed_json() {
    dicetray()
        .args(["eval", "not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

// ---------------------------------------------------------------------------
// batch
// ---------------------------------------------------------------------------

#[test]
fn batch_prints_a_summary_table() {
    dicetray()
        .args(["batch", "-c", "200", "--seed", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("200 candidates")
                .and(predicate::str::contains("Category"))
                .and(predicate::str::contains("rolls resolved")),
        );
}

#[test]
fn batch_verbose_renders_each_roll() {
    dicetray()
        .args(["batch", "-c", "200", "--seed", "4", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll 1").and(predicate::str::contains("Rolling with")));
}

#[test]
fn batch_is_deterministic_with_a_seed() {
    let args = ["batch", "-c", "100", "--seed", "9"];
    assert_eq!(stdout_of(&args), stdout_of(&args));
}

// ---------------------------------------------------------------------------
// rules
// ---------------------------------------------------------------------------

#[test]
fn rules_shows_the_grammar_table() {
    dicetray()
        .args(["rules"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("SAVE")
                .and(predicate::str::contains("modifier"))
                .and(predicate::str::contains("CRIT, FLAT ROLL")),
        );
}

#[test]
fn rules_lists_known_labels() {
    dicetray()
        .args(["rules"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("STR, DEX, CON")
                .and(predicate::str::contains("Stealth")),
        );
}
