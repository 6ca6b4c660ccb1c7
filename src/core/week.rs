//! Week navigation: an anchor date plus previous/next/today transitions.
//! The position is intentionally never persisted; every run starts from the
//! current week unless a date is given.

use crate::utils::date::{today, week_days_of};
use chrono::{Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekView {
    pub anchor: NaiveDate,
}

impl WeekView {
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    /// The week containing the current local date.
    pub fn current() -> Self {
        Self::new(today())
    }

    /// Shift the anchor one week back.
    pub fn previous(self) -> Self {
        Self::new(self.anchor - Days::new(7))
    }

    /// Shift the anchor one week forward.
    pub fn next(self) -> Self {
        Self::new(self.anchor + Days::new(7))
    }

    /// Reset to the week of the current local date.
    pub fn today(self) -> Self {
        Self::current()
    }

    /// The 7 displayed days, Monday first.
    pub fn days(&self) -> [NaiveDate; 7] {
        week_days_of(self.anchor)
    }
}
