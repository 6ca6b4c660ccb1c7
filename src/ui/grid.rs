//! Terminal rendering of the week grid.
//!
//! Seven day columns, one block of rows per display hour. Each hour block is
//! `ROWS_PER_HOUR` text rows tall, so an event's placement fractions map to
//! quarter-hour rows: a 09:15 start lands one row into the 9 AM block, and a
//! half-hour duration spans two rows. Events longer than an hour paint into
//! the blocks below, like the cards of the original UI overflowing their
//! cell. Overlapping events overwrite each other in insertion order instead
//! of splitting the column.

use crate::core::placement::{events_starting_at, placement};
use crate::core::week::WeekView;
use crate::models::{CalendarEvent, EventColor, Theme};
use crate::utils::colors::{BLUE, BOLD, CYAN, GREY, RESET, WHITE};
use crate::utils::date::{format_display_date, format_month_year, is_today};
use crate::utils::formatting::{pad_right, truncate_width};
use crate::utils::time::{FIRST_HOUR, format_hour, hour_range};

/// Text rows per hour cell (quarter-hour resolution).
const ROWS_PER_HOUR: usize = 4;
/// Display columns per day.
const DAY_WIDTH: usize = 14;
/// Width of the hour-label gutter.
const GUTTER: usize = 6;

const DAYS: usize = 7;
const TOTAL_ROWS: usize = 17 * ROWS_PER_HOUR;

/// One painted row fragment of an event within a day column.
#[derive(Clone)]
struct CellRow {
    text: String,
    color: EventColor,
}

/// Render the week containing `view.anchor` for the given events and theme.
pub fn render_week(view: &WeekView, events: &[CalendarEvent], theme: Theme) -> String {
    let days = view.days();
    let header_paint = match theme {
        Theme::Light => BLUE,
        Theme::Dark => WHITE,
    };

    let mut out = String::new();

    // Title: month and year of the week's Monday
    out.push_str(&format!(
        "{}{}{}{}\n\n",
        BOLD,
        header_paint,
        format_month_year(days[0]),
        RESET
    ));

    // Day header row
    out.push_str(&" ".repeat(GUTTER));
    for day in days {
        let label = pad_right(&format_display_date(day), DAY_WIDTH);
        out.push_str(&format!("{}|{} ", GREY, RESET));
        if is_today(day) {
            out.push_str(&format!("{}{}{}{}", BOLD, CYAN, label, RESET));
        } else {
            out.push_str(&format!("{}{}{}", header_paint, label, RESET));
        }
    }
    out.push('\n');

    // Rule under the header
    out.push_str(&format!(
        "{}{}{}\n",
        GREY,
        "-".repeat(GUTTER + DAYS * (DAY_WIDTH + 2)),
        RESET
    ));

    let columns = paint_columns(&days, events);

    for row in 0..TOTAL_ROWS {
        // Hour label on the first row of each block
        if row % ROWS_PER_HOUR == 0 {
            let hour = FIRST_HOUR + (row / ROWS_PER_HOUR) as u32;
            let label = format_hour(hour);
            out.push_str(&format!("{}{:>width$}{}", GREY, label, RESET, width = GUTTER));
        } else {
            out.push_str(&" ".repeat(GUTTER));
        }

        for column in columns.iter() {
            out.push_str(&format!("{}|{} ", GREY, RESET));
            match &column[row] {
                Some(cell) => {
                    let painted = pad_right(&cell.text, DAY_WIDTH);
                    out.push_str(&format!("{}{}{}", cell.color.paint(theme), painted, RESET));
                }
                None => out.push_str(&" ".repeat(DAY_WIDTH)),
            }
        }
        out.push('\n');
    }

    out
}

/// Lay every event of the week into its day column. Later events overwrite
/// earlier rows they share (insertion-order stacking).
fn paint_columns(
    days: &[chrono::NaiveDate; DAYS],
    events: &[CalendarEvent],
) -> Vec<Vec<Option<CellRow>>> {
    let mut columns: Vec<Vec<Option<CellRow>>> = vec![vec![None; TOTAL_ROWS]; DAYS];

    for (col, day) in days.iter().enumerate() {
        let day_events: Vec<&CalendarEvent> =
            events.iter().filter(|e| e.date == *day).collect();

        for hour in hour_range() {
            for event in events_starting_at(&day_events, hour) {
                paint_event(&mut columns[col], hour, event);
            }
        }
    }

    columns
}

fn paint_event(column: &mut [Option<CellRow>], hour: u32, event: &CalendarEvent) {
    let geometry = placement(event);
    let block_top = (hour - FIRST_HOUR) as usize * ROWS_PER_HOUR;

    let offset = (geometry.top * ROWS_PER_HOUR as f64).floor() as usize;
    let span = ((geometry.height * ROWS_PER_HOUR as f64).round() as usize).max(1);

    let start = (block_top + offset.min(ROWS_PER_HOUR - 1)).min(TOTAL_ROWS - 1);
    let end = (start + span).min(TOTAL_ROWS);

    for (i, row) in (start..end).enumerate() {
        let text = match i {
            0 => truncate_width(&event.title, DAY_WIDTH),
            1 => format!("{}-{}", event.start_str(), event.end_str()),
            _ => "·".to_string(),
        };
        column[row] = Some(CellRow {
            text,
            color: event.color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewEvent;
    use chrono::{NaiveDate, NaiveTime};

    fn event(date: &str, start: &str, end: &str, title: &str) -> CalendarEvent {
        CalendarEvent::new(NewEvent {
            title: title.into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            color: EventColor::Emerald,
            comment: None,
        })
    }

    fn render(events: &[CalendarEvent]) -> String {
        let view = WeekView::new(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
        render_week(&view, events, Theme::Light)
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for e in chars.by_ref() {
                    if e == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn grid_has_title_header_and_all_hour_labels() {
        let plain = strip_ansi(&render(&[]));
        assert!(plain.contains("June 2024"));
        assert!(plain.contains("Mon, Jun 10"));
        assert!(plain.contains("Sun, Jun 16"));
        for label in ["6 AM", "12 PM", "10 PM"] {
            assert!(plain.contains(label), "missing hour label {}", label);
        }
    }

    #[test]
    fn event_title_and_times_appear_in_grid() {
        let events = vec![event("2024-06-12", "09:15", "09:45", "Standup")];
        let plain = strip_ansi(&render(&events));
        assert!(plain.contains("Standup"));
        assert!(plain.contains("09:15-09:45"));
    }

    #[test]
    fn half_hour_event_at_quarter_past_spans_two_quarter_rows() {
        let events = vec![event("2024-06-12", "09:15", "09:45", "Standup")];
        let plain = strip_ansi(&render(&events));
        let lines: Vec<&str> = plain.lines().collect();

        // body starts after title, blank line, day header, rule
        let body_start = 4;
        let nine_am_block = body_start + ((9 - 6) * ROWS_PER_HOUR);
        assert!(lines[nine_am_block].contains("9 AM"));
        // top 0.25 -> second row of the block; height 0.5 -> two rows
        assert!(!lines[nine_am_block].contains("Standup"));
        assert!(lines[nine_am_block + 1].contains("Standup"));
        assert!(lines[nine_am_block + 2].contains("09:15-09:45"));
        assert!(!lines[nine_am_block + 3].contains("·"));
    }

    #[test]
    fn events_outside_this_week_are_not_rendered() {
        let events = vec![event("2024-06-19", "09:00", "10:00", "NextWeek")];
        let plain = strip_ansi(&render(&events));
        assert!(!plain.contains("NextWeek"));
    }
}
