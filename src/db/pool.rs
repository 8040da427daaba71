//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! Each command opens its own `DbPool` and drops it on exit, so the
//! connection lifetime is scoped to one operation. Failure to open the
//! database is a real error for the caller, never a silent null handle.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
