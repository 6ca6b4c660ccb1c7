use chrono::{Datelike, Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The 7 days of the week containing `date`, Monday first.
///
/// Sunday belongs to the week of the *previous* Monday, so the returned
/// range always contains `date`.
pub fn week_days_of(date: NaiveDate) -> [NaiveDate; 7] {
    // 0 = Mon .. 6 = Sun
    let offset = date.weekday().num_days_from_monday() as u64;
    let monday = date - Days::new(offset);

    std::array::from_fn(|i| monday + Days::new(i as u64))
}

/// Canonical zero-padded `YYYY-MM-DD` key joining events to days.
pub fn format_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_key(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn is_today(date: NaiveDate) -> bool {
    date == today()
}

/// Header label for a day column, e.g. `Mon, Jun 10`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Grid title, e.g. `June 2024`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
