use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use crate::models::word::WordPair;
use crate::utils::text::normalize_word;
use rusqlite::{Connection, OptionalExtension, params};

/// Register a user, or rename it if the external id is already known.
/// Safe to call on every interaction with the same id.
pub fn ensure_user_exists(conn: &Connection, user_id: i64, username: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO users (user_id, username)
         VALUES (?1, ?2)
         ON CONFLICT (user_id) DO UPDATE
         SET username = excluded.username",
        params![user_id, username],
    )?;
    Ok(())
}

/// Bulk-load the common dictionary.
///
/// Pairs whose target word is already present are skipped. The whole batch
/// runs in one transaction: either every new pair lands or none does.
/// Returns the number of rows actually inserted.
pub fn fill_common_words(conn: &mut Connection, pairs: &[WordPair]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    let mut inserted = 0;

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO words (target_word, translate_word)
             VALUES (?1, ?2)
             ON CONFLICT (target_word) DO NOTHING",
        )?;

        for pair in pairs {
            inserted += stmt.execute(params![pair.target, pair.translation])?;
        }
    }

    tx.commit()?;
    Ok(inserted)
}

/// Draw up to `limit` random pairs from the union of the common dictionary
/// and the user's personal one.
///
/// Full random sort over the combined set, so cost grows with dictionary
/// size. Fine for the few thousand words a learner accumulates.
pub fn get_random_words(conn: &Connection, user_id: i64, limit: usize) -> AppResult<Vec<WordPair>> {
    let mut stmt = conn.prepare(
        "SELECT target_word, translate_word
           FROM (
             SELECT w.target_word, w.translate_word
               FROM words w
              UNION
             SELECT uw.target_word, uw.translate_word
               FROM user_words uw
              WHERE uw.user_id = ?1
               ) AS combined_words
          ORDER BY RANDOM()
          LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![user_id, limit as i64], |row| {
        Ok(WordPair {
            target: row.get(0)?,
            translation: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// True iff the word is present in the common dictionary.
/// Personal dictionaries are deliberately not consulted.
pub fn word_exists(conn: &Connection, word: &str) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1
               FROM words
              WHERE target_word = ?1",
            params![word],
            |row| row.get(0),
        )
        .optional()?;

    Ok(found.is_some())
}

/// Save a word into the user's personal dictionary.
///
/// Both fields are trimmed and capitalized before the insert. If the user
/// already stores this target word, nothing happens.
pub fn add_word(conn: &Connection, user_id: i64, target: &str, translation: &str) -> AppResult<()> {
    let target = normalize_word(target).ok_or(AppError::EmptyWord)?;
    let translation = normalize_word(translation).ok_or(AppError::EmptyWord)?;

    conn.execute(
        "INSERT INTO user_words (user_id, target_word, translate_word)
         VALUES (?1, ?2, ?3)
         ON CONFLICT (user_id, target_word) DO NOTHING",
        params![user_id, target, translation],
    )?;
    Ok(())
}

/// Remove a word from the user's personal dictionary.
/// Returns the deleted target word, or None when no row matched.
pub fn delete_word(conn: &Connection, user_id: i64, target: &str) -> AppResult<Option<String>> {
    let deleted = conn
        .query_row(
            "DELETE FROM user_words
              WHERE user_id = ?1
                AND target_word = ?2
          RETURNING target_word",
            params![user_id, target],
            |row| row.get(0),
        )
        .optional()?;

    Ok(deleted)
}

/// Insert a pair into the personal dictionary if absent.
/// An existing entry for the same target word is left untouched.
pub fn update_word(
    conn: &Connection,
    user_id: i64,
    target: &str,
    translation: &str,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO user_words (user_id, target_word, translate_word)
         VALUES (?1, ?2, ?3)
         ON CONFLICT (user_id, target_word) DO NOTHING",
        params![user_id, target, translation],
    )?;
    Ok(())
}

/// Look up a registered user by external identifier.
pub fn find_user(conn: &Connection, user_id: i64) -> AppResult<Option<User>> {
    let user = conn
        .query_row(
            "SELECT id, user_id, username, created_at
               FROM users
              WHERE user_id = ?1",
            params![user_id],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    username: row.get(2)?,
                    created_at: row.get(3)?,
                })
            },
        )
        .optional()?;

    Ok(user)
}

/// The user's personal dictionary, ordered by target word.
pub fn list_words(conn: &Connection, user_id: i64) -> AppResult<Vec<WordPair>> {
    let mut stmt = conn.prepare(
        "SELECT target_word, translate_word
           FROM user_words
          WHERE user_id = ?1
          ORDER BY target_word ASC",
    )?;

    let rows = stmt.query_map(params![user_id], |row| {
        Ok(WordPair {
            target: row.get(0)?,
            translation: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Size of the common dictionary.
pub fn count_common_words(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
    Ok(count)
}
