use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::word_exists;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Exists { word } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if word_exists(&pool.conn, word)? {
            success(format!("'{}' is in the common dictionary.", word));
        } else {
            info(format!("'{}' is not in the common dictionary.", word));
        }
    }

    Ok(())
}
