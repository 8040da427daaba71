use predicates::str::contains;

mod common;
use common::{setup_test_db, wv};

fn init_with_user(db_path: &str) {
    wv().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
    wv().args(["--db", db_path, "--test", "user", "1", "alice"])
        .assert()
        .success();
}

#[test]
fn test_add_capitalizes_and_trims() {
    let db_path = setup_test_db("add_capitalize");
    init_with_user(&db_path);

    wv().args(["--db", &db_path, "--test", "add", "1", " dog ", " собака "])
        .assert()
        .success()
        .stdout(contains("'Dog' saved"));

    wv().args(["--db", &db_path, "--test", "list", "1"])
        .assert()
        .success()
        .stdout(contains("Dog = Собака"));
}

#[test]
fn test_add_twice_keeps_one_row() {
    let db_path = setup_test_db("add_twice");
    init_with_user(&db_path);

    wv().args(["--db", &db_path, "--test", "add", "1", "dog", "собака"])
        .assert()
        .success();
    wv().args(["--db", &db_path, "--test", "add", "1", "Dog", "пёс"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (count, translation): (i64, String) = conn
        .query_row(
            "SELECT COUNT(*), MAX(translate_word) FROM user_words
             WHERE user_id = 1 AND target_word = 'Dog'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("query user_words");
    assert_eq!(count, 1);
    assert_eq!(translation, "Собака");
}

#[test]
fn test_add_rejects_blank_word() {
    let db_path = setup_test_db("add_blank");
    init_with_user(&db_path);

    wv().args(["--db", &db_path, "--test", "add", "1", "   ", "собака"])
        .assert()
        .failure()
        .stderr(contains("Empty word rejected"));
}

#[test]
fn test_del_reports_word_then_not_found() {
    let db_path = setup_test_db("del_twice");
    init_with_user(&db_path);

    wv().args(["--db", &db_path, "--test", "add", "1", "dog", "собака"])
        .assert()
        .success();

    wv().args(["--db", &db_path, "--test", "del", "1", "Dog"])
        .assert()
        .success()
        .stdout(contains("'Dog' removed"));

    wv().args(["--db", &db_path, "--test", "del", "1", "Dog"])
        .assert()
        .success()
        .stdout(contains("'Dog' is not in the personal dictionary"));
}

#[test]
fn test_update_never_overwrites() {
    let db_path = setup_test_db("update_no_overwrite");
    init_with_user(&db_path);

    wv().args(["--db", &db_path, "--test", "update", "1", "Dog", "собака"])
        .assert()
        .success();
    wv().args(["--db", &db_path, "--test", "update", "1", "Dog", "пёс"])
        .assert()
        .success();

    wv().args(["--db", &db_path, "--test", "list", "1"])
        .assert()
        .success()
        .stdout(contains("Dog = собака"));
}

#[test]
fn test_list_shows_only_own_words() {
    let db_path = setup_test_db("list_per_user");
    init_with_user(&db_path);
    wv().args(["--db", &db_path, "--test", "user", "2", "bob"])
        .assert()
        .success();

    wv().args(["--db", &db_path, "--test", "add", "1", "dog", "собака"])
        .assert()
        .success();
    wv().args(["--db", &db_path, "--test", "add", "2", "owl", "сова"])
        .assert()
        .success();

    wv().args(["--db", &db_path, "--test", "list", "1"])
        .assert()
        .success()
        .stdout(contains("Personal dictionary of alice"))
        .stdout(contains("Dog = Собака"))
        .stdout(contains("1 words"));
}
