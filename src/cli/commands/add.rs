use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EventStore;
use crate::db::backend::SqliteBackend;
use crate::errors::{AppError, AppResult};
use crate::models::{EventColor, NewEvent};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time;

/// Create a new event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        start,
        end,
        title,
        color,
        comment,
    } = cmd
    {
        let d = date::parse_key(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;
        let start_time =
            time::parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
        let end_time =
            time::parse_time(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;

        // --color wins; otherwise the configured default, falling back to
        // blue when the config holds an unknown code
        let color_final = match color {
            Some(code) => EventColor::from_code(code).ok_or_else(|| {
                AppError::InvalidColor(format!(
                    "Invalid color '{}'. Use blue, violet, green, amber or rose.",
                    code
                ))
            })?,
            None => EventColor::from_code(&cfg.default_color).unwrap_or(EventColor::Blue),
        };

        let backend = SqliteBackend::open(&cfg.database)?;
        let mut store = EventStore::load(backend)?;

        let event = store.create(NewEvent {
            title: title.clone(),
            date: d,
            start_time,
            end_time,
            color: color_final,
            comment: comment.clone(),
        })?;

        success(format!(
            "Added '{}' on {} {}-{} ({})",
            event.title,
            event.date_key(),
            event.start_str(),
            event.end_str(),
            event.color.code(),
        ));
        println!("id: {}", event.id);
    }

    Ok(())
}
