use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::vlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_word;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { user_id, target } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match delete_word(&pool.conn, *user_id, target)? {
            Some(deleted) => {
                if let Err(e) = vlog(
                    &pool.conn,
                    "del",
                    &deleted,
                    &format!("Deleted '{}' for user {}", deleted, user_id),
                ) {
                    eprintln!("⚠️ Failed to write internal log: {}", e);
                }

                success(format!(
                    "'{}' removed from the personal dictionary of user {}.",
                    deleted, user_id
                ));
            }
            None => {
                warning(format!(
                    "'{}' is not in the personal dictionary of user {}.",
                    target, user_id
                ));
            }
        }
    }

    Ok(())
}
