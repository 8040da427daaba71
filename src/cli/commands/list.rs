use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{find_user, list_words};
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { user_id } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let words = list_words(&pool.conn, *user_id)?;

        if words.is_empty() {
            info(format!("User {} has no personal words yet.", user_id));
            return Ok(());
        }

        let owner = match find_user(&pool.conn, *user_id)? {
            Some(user) => format!("{} (user {})", user.username, user.user_id),
            None => format!("user {}", user_id),
        };

        println!("Personal dictionary of {}, {} words:", owner, words.len());
        for pair in &words {
            println!("  {} = {}", pair.target, pair.translation);
        }
    }

    Ok(())
}
