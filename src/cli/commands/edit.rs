use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EventStore;
use crate::db::backend::SqliteBackend;
use crate::errors::{AppError, AppResult};
use crate::models::{EventColor, EventPatch};
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Edit an existing event. Only the fields given on the command line are
/// changed; an unknown id is reported but is not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        date: date_str,
        start,
        end,
        color,
        comment,
    } = cmd
    {
        //
        // 1. Parse the optional fields up front, so a typo fails before
        //    anything touches the store
        //
        let date_final = match date_str {
            Some(s) => {
                Some(date::parse_key(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?)
            }
            None => None,
        };

        let start_final = parse_optional_time(start.as_ref())?;
        let end_final = parse_optional_time(end.as_ref())?;

        let color_final = match color {
            Some(code) => Some(EventColor::from_code(code).ok_or_else(|| {
                AppError::InvalidColor(format!(
                    "Invalid color '{}'. Use blue, violet, green, amber or rose.",
                    code
                ))
            })?),
            None => None,
        };

        //
        // 2. Apply the patch
        //
        let backend = SqliteBackend::open(&cfg.database)?;
        let mut store = EventStore::load(backend)?;

        let found = store.update(
            id,
            EventPatch {
                title: title.clone(),
                date: date_final,
                start_time: start_final,
                end_time: end_final,
                color: color_final,
                comment: comment.clone(),
            },
        )?;

        if found {
            success(format!("Updated event {}", id));
        } else {
            info(format!("No event with id {} (nothing changed)", id));
        }
    }

    Ok(())
}
