use crate::models::theme::Theme;
use serde::{Deserialize, Serialize};

/// The fixed palette an event can be tagged with.
///
/// Display attributes (label, ANSI paint) hang off the enum rather than a
/// string-keyed lookup table, so an unknown color is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Blue,
    Violet,
    Emerald,
    Amber,
    Rose,
}

impl EventColor {
    pub const ALL: [EventColor; 5] = [
        EventColor::Blue,
        EventColor::Violet,
        EventColor::Emerald,
        EventColor::Amber,
        EventColor::Rose,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            EventColor::Blue => "blue",
            EventColor::Violet => "violet",
            EventColor::Emerald => "emerald",
            EventColor::Amber => "amber",
            EventColor::Rose => "rose",
        }
    }

    /// Human label shown in pickers and listings.
    pub fn label(&self) -> &'static str {
        match self {
            EventColor::Blue => "Blue",
            EventColor::Violet => "Violet",
            EventColor::Emerald => "Green",
            EventColor::Amber => "Amber",
            EventColor::Rose => "Rose",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "blue" => Some(EventColor::Blue),
            "violet" => Some(EventColor::Violet),
            "emerald" | "green" => Some(EventColor::Emerald),
            "amber" => Some(EventColor::Amber),
            "rose" => Some(EventColor::Rose),
            _ => None,
        }
    }

    /// ANSI paint for event text in the week grid. Dark theme uses the
    /// bright variants so events stay readable on dark terminals.
    pub fn paint(&self, theme: Theme) -> &'static str {
        match (self, theme) {
            (EventColor::Blue, Theme::Light) => "\x1b[34m",
            (EventColor::Blue, Theme::Dark) => "\x1b[94m",
            (EventColor::Violet, Theme::Light) => "\x1b[35m",
            (EventColor::Violet, Theme::Dark) => "\x1b[95m",
            (EventColor::Emerald, Theme::Light) => "\x1b[32m",
            (EventColor::Emerald, Theme::Dark) => "\x1b[92m",
            (EventColor::Amber, Theme::Light) => "\x1b[33m",
            (EventColor::Amber, Theme::Dark) => "\x1b[93m",
            (EventColor::Rose, Theme::Light) => "\x1b[31m",
            (EventColor::Rose, Theme::Dark) => "\x1b[91m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for color in EventColor::ALL {
            assert_eq!(EventColor::from_code(color.code()), Some(color));
        }
    }

    #[test]
    fn accepts_green_alias_and_uppercase() {
        assert_eq!(EventColor::from_code("GREEN"), Some(EventColor::Emerald));
        assert_eq!(EventColor::from_code("Rose"), Some(EventColor::Rose));
        assert_eq!(EventColor::from_code("teal"), None);
    }

    #[test]
    fn labels_match_the_picker() {
        assert_eq!(EventColor::Blue.label(), "Blue");
        // emerald reads as plain "Green" to users
        assert_eq!(EventColor::Emerald.label(), "Green");
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&EventColor::Violet).unwrap();
        assert_eq!(json, "\"violet\"");
        let back: EventColor = serde_json::from_str("\"amber\"").unwrap();
        assert_eq!(back, EventColor::Amber);
    }
}
