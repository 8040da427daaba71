use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Creates all tables idempotently; calling this twice is a no-op.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    INTEGER UNIQUE NOT NULL,
            username   TEXT UNIQUE NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS words (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            target_word    TEXT UNIQUE NOT NULL,
            translate_word TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS user_words (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id        INTEGER NOT NULL REFERENCES users (user_id),
            target_word    TEXT NOT NULL,
            translate_word TEXT NOT NULL,
            UNIQUE (user_id, target_word)
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;

    Ok(())
}
