use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::vlog;
use crate::db::pool::DbPool;
use crate::db::queries::ensure_user_exists;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { user_id, username } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        ensure_user_exists(&pool.conn, *user_id, username)?;

        if let Err(e) = vlog(
            &pool.conn,
            "user",
            &user_id.to_string(),
            &format!("Registered user '{}'", username),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("User {} registered as '{}'.", user_id, username));
    }

    Ok(())
}
