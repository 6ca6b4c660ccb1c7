use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::backend::SqliteBackend;
use crate::errors::{AppError, AppResult};
use crate::models::Theme;
use crate::ui::messages::success;

/// Show, set or toggle the persisted theme preference.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { theme, toggle } = cmd {
        let mut backend = SqliteBackend::open(&cfg.database)?;

        if let Some(code) = theme {
            let t = Theme::from_code(code).ok_or_else(|| {
                AppError::InvalidTheme(format!("Invalid theme '{}'. Use light or dark.", code))
            })?;
            t.save(&mut backend)?;
            success(format!("Theme set to {}", t.code()));
        } else if *toggle {
            let t = Theme::load(&backend)?.toggled();
            t.save(&mut backend)?;
            success(format!("Theme set to {}", t.code()));
        } else {
            println!("Current theme: {}", Theme::load(&backend)?.code());
        }
    }

    Ok(())
}
