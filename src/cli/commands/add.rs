use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::vlog;
use crate::db::pool::DbPool;
use crate::db::queries::add_word;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::text::normalize_word;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        user_id,
        target,
        translation,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        add_word(&pool.conn, *user_id, target, translation)?;

        // add_word already validated both fields as non-blank.
        let stored = normalize_word(target).unwrap_or_default();

        if let Err(e) = vlog(
            &pool.conn,
            "add",
            &stored,
            &format!("Added '{}' for user {}", stored, user_id),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "'{}' saved to the personal dictionary of user {}.",
            stored, user_id
        ));
    }

    Ok(())
}
