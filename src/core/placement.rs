//! Slot placement: which grid cell shows an event, and where inside it.
//!
//! An event belongs to the cell of its start *hour*; start minutes only move
//! it vertically within that cell. Heights are duration as a fraction of one
//! cell, floored so that very short (or degenerate) events stay visible.
//! Events sharing a slot simply stack in insertion order; there is no
//! horizontal overlap layout, which is a deliberate simplification.

use crate::models::CalendarEvent;
use crate::utils::time::minutes_between;
use chrono::Timelike;

/// Minimum visible height, as a fraction of one hour cell.
pub const MIN_HEIGHT: f64 = 0.25;

/// Vertical geometry of one event within its hour cell, both fields as
/// fractions of the cell height. `height` may exceed 1.0 for events longer
/// than an hour, which then reach into the cells below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub height: f64,
}

/// The events rendered in the (day, hour) cell: those starting within that
/// hour, in collection order.
pub fn events_starting_at<'a>(
    day_events: &[&'a CalendarEvent],
    hour: u32,
) -> Vec<&'a CalendarEvent> {
    day_events
        .iter()
        .filter(|e| e.start_time.hour() == hour)
        .copied()
        .collect()
}

/// Compute an event's vertical geometry. Zero and negative durations are not
/// rejected; they render at the minimum height like any short event.
pub fn placement(event: &CalendarEvent) -> Placement {
    let top = f64::from(event.start_time.minute()) / 60.0;
    let duration_hours = minutes_between(event.start_time, event.end_time) as f64 / 60.0;

    Placement {
        top,
        height: duration_hours.max(MIN_HEIGHT),
    }
}
