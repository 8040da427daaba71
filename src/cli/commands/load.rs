use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::vlog;
use crate::db::pool::DbPool;
use crate::db::queries::{count_common_words, fill_common_words};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use crate::wordlist::load_words_from_csv;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Load { file } = cmd {
        let path = expand_tilde(file);
        let pairs = load_words_from_csv(&path)?;

        if pairs.is_empty() {
            info(format!("No word pairs found in {}.", path.display()));
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let inserted = fill_common_words(&mut pool.conn, &pairs)?;
        let total = count_common_words(&pool.conn)?;

        if let Err(e) = vlog(
            &pool.conn,
            "load",
            &path.display().to_string(),
            &format!("Loaded {} new word pairs", inserted),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "Loaded {} new pairs ({} duplicates skipped). Common dictionary now holds {} words.",
            inserted,
            pairs.len() - inserted,
            total
        ));
    }

    Ok(())
}
