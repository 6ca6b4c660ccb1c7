use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::audit::load_audit;
use crate::db::backend::SqliteBackend;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print the internal audit log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Nothing to do. Use --print to show the audit log.");
            return Ok(());
        }

        let backend = SqliteBackend::open(&cfg.database)?;
        let rows = load_audit(&backend.conn)?;

        if rows.is_empty() {
            println!("Audit log is empty.");
            return Ok(());
        }

        for (timestamp, action, message) in rows {
            println!("{} | {:<6} | {}", timestamp, action, message);
        }
    }

    Ok(())
}
