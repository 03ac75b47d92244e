#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn crm() -> Command {
    cargo_bin_cmd!("minicrm")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_minicrm.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a seeded DB without touching the user's config file
pub fn init_db(db_path: &str) {
    crm()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize a DB and add one contact and one deal on top of the seed data
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    crm()
        .args([
            "--db",
            db_path,
            "contact",
            "add",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
            "--email",
            "ada@engine.org",
            "--company",
            "Analytical Engines",
            "--status",
            "prospect",
        ])
        .assert()
        .success();

    crm()
        .args([
            "--db",
            db_path,
            "deal",
            "add",
            "--name",
            "Difference Engine Retrofit",
            "--value",
            "42000",
            "--company",
            "Analytical Engines",
            "--close",
            "2026-06-30",
            "--stage",
            "negotiation",
        ])
        .assert()
        .success();
}
