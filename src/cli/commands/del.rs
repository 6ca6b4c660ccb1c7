use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EventStore;
use crate::db::backend::SqliteBackend;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let backend = SqliteBackend::open(&cfg.database)?;
        let mut store = EventStore::load(backend)?;

        // Show what is about to go when we have it
        let prompt = match store.find(id) {
            Some(ev) => format!(
                "Delete '{}' on {} {}-{}? This action is irreversible.",
                ev.title,
                ev.date_key(),
                ev.start_str(),
                ev.end_str()
            ),
            None => format!("Delete event {}? This action is irreversible.", id),
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        if store.delete(id)? {
            success(format!("Event {} has been deleted.", id));
        } else {
            info(format!("No event with id {} (nothing deleted)", id));
        }
    }

    Ok(())
}
