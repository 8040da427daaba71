use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config: true } = cmd {
        info(format!("Config file: {}", Config::config_file().display()));
        println!("database:  {}", cfg.database);
        println!("quiz_size: {}", cfg.quiz_size);
    }

    Ok(())
}
