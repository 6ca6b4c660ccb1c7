use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EventStore;
use crate::core::week::WeekView;
use crate::db::backend::SqliteBackend;
use crate::errors::{AppError, AppResult};
use crate::models::Theme;
use crate::ui::grid::render_week;
use crate::utils::date;

/// Render the week grid for the resolved anchor date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week {
        date: date_str,
        prev,
        next,
    } = cmd
    {
        //
        // 1. Resolve the anchor: explicit date, or today
        //
        let mut view = match date_str {
            Some(s) => WeekView::new(
                date::parse_key(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            ),
            None => WeekView::current(),
        };

        //
        // 2. Apply navigation
        //
        for _ in 0..*prev {
            view = view.previous();
        }
        for _ in 0..*next {
            view = view.next();
        }

        //
        // 3. Render
        //
        let backend = SqliteBackend::open(&cfg.database)?;
        let theme = Theme::load(&backend)?;
        let store = EventStore::load(backend)?;

        print!("{}", render_week(&view, store.all(), theme));
    }

    Ok(())
}
