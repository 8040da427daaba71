use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::get_random_words;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Quiz { user_id, limit } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let n = limit.unwrap_or(cfg.quiz_size);
        let words = get_random_words(&pool.conn, *user_id, n)?;

        if words.is_empty() {
            info("No words available yet. Load a word list or add personal words first.");
            return Ok(());
        }

        for pair in &words {
            println!("{} = {}", pair.target, pair.translation);
        }
    }

    Ok(())
}
