use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::vlog;
use crate::db::pool::DbPool;
use crate::db::queries::update_word;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        user_id,
        target,
        translation,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        update_word(&pool.conn, *user_id, target, translation)?;

        if let Err(e) = vlog(
            &pool.conn,
            "update",
            target,
            &format!("Ensured '{}' for user {}", target, user_id),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "'{}' is present in the personal dictionary of user {} (existing entries untouched).",
            target, user_id
        ));
    }

    Ok(())
}
