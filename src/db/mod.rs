pub mod audit;
pub mod backend;
pub mod initialize;

/// Durable key holding the serialized event collection.
pub const EVENTS_KEY: &str = "calendar-events";

/// Durable key holding the theme preference (`light` | `dark`).
pub const THEME_KEY: &str = "calendar-theme";
