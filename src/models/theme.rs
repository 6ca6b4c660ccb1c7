use crate::db::THEME_KEY;
use crate::db::backend::Backend;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// Terminal color scheme preference, persisted under its own store key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Read the stored preference. Missing or unrecognized values fall back
    /// to `Light`.
    pub fn load<B: Backend>(backend: &B) -> AppResult<Self> {
        let stored = backend.read(THEME_KEY)?;
        Ok(stored
            .as_deref()
            .and_then(Theme::from_code)
            .unwrap_or_default())
    }

    pub fn save<B: Backend>(&self, backend: &mut B) -> AppResult<()> {
        backend.write(THEME_KEY, self.code())
    }
}
