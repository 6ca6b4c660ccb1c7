pub mod color;
pub mod event;
pub mod theme;

pub use color::EventColor;
pub use event::{CalendarEvent, EventPatch, NewEvent};
pub use theme::Theme;
