#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wv() -> Command {
    cargo_bin_cmd!("wordvault")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wordvault.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a temporary CSV word list and return its path
pub fn temp_wordlist(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wordlist.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write word list");
    p
}

/// Initialize DB and load a small dataset useful for many tests
pub fn init_db_with_words(db_path: &str) {
    // init DB (creates tables)
    wv().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // register a user and load a couple of common words via CLI
    wv().args(["--db", db_path, "--test", "user", "1", "alice"])
        .assert()
        .success();

    let list = temp_wordlist("init_db_with_words", "cat,кот\ndog,собака\n");
    wv().args(["--db", db_path, "--test", "load", &list])
        .assert()
        .success();
}

/// Helper to populate many common words directly via the library DB API
pub fn populate_many_words(db_path: &str, n: usize) {
    let mut conn = rusqlite::Connection::open(db_path).expect("open db");
    // ensure initialized
    wordvault::db::initialize::init_db(&conn).expect("init db");
    let pairs: Vec<wordvault::models::word::WordPair> = (0..n)
        .map(|i| wordvault::models::word::WordPair::new(format!("word{i}"), format!("слово{i}")))
        .collect();
    wordvault::db::queries::fill_common_words(&mut conn, &pairs).expect("fill words");
}
