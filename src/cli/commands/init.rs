use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    // Resolve the database path once; relative --db names land in the
    // config dir, and the schema must go to that same file.
    let custom = cli
        .db
        .as_ref()
        .map(|d| expand_tilde(d).to_string_lossy().to_string());
    let db_path = Config::init_all(custom, cli.test)?;

    let path = Config::config_file();

    println!("⚙️  Initializing wordvault…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", db_path.display());

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", db_path.display());

    // Internal log write is non-blocking for the command.
    if let Err(e) = log::vlog(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", db_path.display()),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 wordvault initialization completed!");
    Ok(())
}
