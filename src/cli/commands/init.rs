use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::audit;
use crate::db::backend::SqliteBackend;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite store with its `kv` and `audit` tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing weekcal…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Store      : {}", db_path.display());

    // Opening creates the schema when missing
    let backend = SqliteBackend::open(&db_path.to_string_lossy())?;

    // Non-blocking: a failed audit row must not fail init
    if let Err(e) = audit::audit(&backend.conn, "init", "store initialized") {
        eprintln!("⚠️ Failed to write audit row: {}", e);
    }

    println!("✅ Store initialized at {}", db_path.display());
    println!("🎉 weekcal initialization completed!");
    Ok(())
}
