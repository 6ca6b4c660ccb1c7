use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EventStore;
use crate::db::backend::SqliteBackend;
use crate::errors::{AppError, AppResult};
use crate::models::CalendarEvent;
use crate::utils::date;
use crate::utils::formatting::bold;

/// List the events of one day (insertion order, the order the grid stacks
/// them in), or the whole calendar when no date is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date: date_str } = cmd {
        let backend = SqliteBackend::open(&cfg.database)?;
        let store = EventStore::load(backend)?;

        match date_str {
            Some(s) => {
                let d = date::parse_key(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
                let events = store.events_on(d);

                if events.is_empty() {
                    println!("No events for {}", date::format_key(d));
                    return Ok(());
                }

                println!("{}", bold(&format!("📅 Events for {}:", date::format_key(d))));
                for ev in events {
                    print_event(ev);
                }
            }
            None => {
                if store.all().is_empty() {
                    println!("No events stored.");
                    return Ok(());
                }

                println!("{}", bold("📅 All events:"));
                for ev in store.all() {
                    print_event(ev);
                }
            }
        }
    }

    Ok(())
}

fn print_event(ev: &CalendarEvent) {
    let comment = match &ev.comment {
        Some(c) => format!("  # {}", c),
        None => String::new(),
    };
    println!(
        "- {} | {} {}-{} | {:<7} | {}{}",
        ev.id,
        ev.date_key(),
        ev.start_str(),
        ev.end_str(),
        ev.color.code(),
        ev.title,
        comment,
    );
}
