//! End-to-end tests for the `impostor` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn impostor() -> Command {
    let mut cmd = Command::cargo_bin("impostor").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Write a two-pair catalog into a temp directory.
fn custom_catalog() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("words.json"),
        r#"[
    { "word": "rey", "clue": "corona" },
    { "word": "mago", "clue": "varita" }
]"#,
    )
    .unwrap();
    dir
}

// ---------------------------------------------------------------------------
// words
// ---------------------------------------------------------------------------

#[test]
fn words_lists_builtin_catalog() {
    impostor()
        .arg("words")
        .assert()
        .success()
        .stdout(predicate::str::contains("13 parejas de palabras"))
        .stdout(predicate::str::contains("astronauta"))
        .stdout(predicate::str::contains("shuriken"));
}

#[test]
fn words_custom_catalog() {
    let dir = custom_catalog();
    impostor()
        .args(["words", "--catalog"])
        .arg(dir.path().join("words.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 parejas de palabras"))
        .stdout(predicate::str::contains("varita"))
        .stdout(predicate::str::contains("astronauta").not());
}

#[test]
fn words_missing_catalog_fails() {
    impostor()
        .args(["words", "--catalog", "/nonexistent/words.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: no se pudo leer el catálogo"));
}

#[test]
fn words_empty_catalog_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.json"), "[]").unwrap();
    impostor()
        .args(["words", "--catalog"])
        .arg(dir.path().join("empty.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("el catálogo está vacío"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_full_round() {
    impostor()
        .args(["play", "--seed", "42"])
        .write_stdin("Ana\nBea\nCaz\n\n\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tu pista es").count(1))
        .stdout(predicate::str::contains("Tu palabra secreta es").count(2))
        .stdout(predicate::str::contains("empieza a hablar"))
        .stdout(predicate::str::contains("¡El impostor era..."));
}

#[test]
fn play_same_seed_same_impostor() {
    let run = || {
        let out = impostor()
            .args(["play", "--seed", "9"])
            .write_stdin("Ana\nBea\nCaz\nDan\n")
            .output()
            .unwrap();
        String::from_utf8(out.stdout).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn play_custom_catalog() {
    let dir = custom_catalog();
    impostor()
        .args(["play", "--seed", "1", "--catalog"])
        .arg(dir.path().join("words.json"))
        .write_stdin("Ana\nBea\nCaz\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("rey")
                .or(predicate::str::contains("mago")),
        );
}

#[test]
fn play_too_few_players() {
    impostor()
        .arg("play")
        .write_stdin("Ana\nBea\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("se necesitan al menos 3 jugadores"));
}

#[test]
fn play_min_players_raised() {
    impostor()
        .args(["play", "--min-players", "4"])
        .write_stdin("Ana\nBea\nCaz\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("al menos 4 jugadores"));
}

#[test]
fn play_seed_warns_on_stderr() {
    impostor()
        .args(["play", "--seed", "3"])
        .write_stdin("Ana\nBea\nCaz\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("predictable"));
}

// ---------------------------------------------------------------------------
// misc
// ---------------------------------------------------------------------------

#[test]
fn help_lists_commands() {
    impostor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("words"));
}

#[test]
fn serve_rejects_bad_port() {
    impostor()
        .args(["serve", "--port", "not-a-port"])
        .assert()
        .failure();
}
