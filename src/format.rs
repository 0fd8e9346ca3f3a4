use std::fmt::Display;

use tracing::debug;

use crate::consts::{MONTH_NAMES, PERSIAN_DIGITS};
use crate::{DateError, DateParts, JalaliDate};

/// Replaces ASCII digits with their Persian forms, leaving everything else as is.
pub fn to_persian_digits(value: impl Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| PERSIAN_DIGITS[d as usize]))
        .collect()
}

/// Persian name of `month`, or `None` outside 1..=12.
pub fn month_name(month: u8) -> Option<&'static str> {
    let index = usize::from(month).checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

fn long_form(day: impl Display, month: &str, year: impl Display) -> String {
    format!(
        "{} {month} {}",
        to_persian_digits(day),
        to_persian_digits(year)
    )
}

impl JalaliDate {
    /// Long display form, e.g. `۱۵ فروردین ۱۴۰۴`.
    pub fn to_long_string(&self) -> String {
        long_form(self.day(), self.month_name(), self.year())
    }
}

/// Renders a stored date as `{day} {month name} {year}` in Persian digits.
///
/// Only the month is range-checked, so a day or year outside the validation
/// bands is still rendered.
///
/// # Errors
/// Any parse error, or `DateError::MonthOutOfRange`.
pub fn try_format_absolute(raw: &str) -> Result<String, DateError> {
    let DateParts { year, month, day } = DateParts::parse(raw)?;
    let name = u8::try_from(month)
        .ok()
        .and_then(month_name)
        .ok_or(DateError::MonthOutOfRange(month))?;
    Ok(long_form(day, name, year))
}

/// Like [`try_format_absolute`], but returns `raw` unchanged when it cannot be rendered.
pub fn format_absolute(raw: &str) -> String {
    try_format_absolute(raw).unwrap_or_else(|error| {
        debug!(input = raw, %error, "Leaving unformattable date as is");
        raw.to_owned()
    })
}
