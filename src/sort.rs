use std::cmp::Ordering;

use tracing::info;

use crate::{CalendarBridge, CalendarError, Clock, DateParts, JalaliDate, is_valid};

/// A record that carries a stored Jalali date.
pub trait Dated {
    fn date(&self) -> &str;

    fn set_date(&mut self, date: String);
}

/// The numeric ordering key of a stored date, without range validation.
///
/// `None` for strings that do not parse; `None` orders before every key.
pub fn sort_key(raw: &str) -> Option<i64> {
    DateParts::parse(raw).ok().map(|parts| parts.sort_key())
}

/// Orders two stored dates. Unparseable dates sort before all others when
/// ascending and after them when descending; two unparseable dates are equal.
pub fn compare_by_date(a: &str, b: &str, ascending: bool) -> Ordering {
    let ordering = sort_key(a).cmp(&sort_key(b));
    if ascending { ordering } else { ordering.reverse() }
}

/// Stable sort of records by their date.
pub fn sort_by_date<T: Dated>(records: &mut [T], ascending: bool) {
    records.sort_by(|a, b| compare_by_date(a.date(), b.date(), ascending));
}

/// Replaces every invalid date with a generated one and returns how many were replaced.
///
/// The record at index `i` receives `base + floor(i * 2.5)` days, so repaired
/// records keep their relative order. Replacements are only written once all
/// of them are known, so on error `records` is left untouched.
///
/// # Errors
/// Returns `CalendarError::Date` if a generated date runs past the accepted year band.
pub fn repair_dates<T: Dated>(records: &mut [T], base: JalaliDate) -> Result<usize, CalendarError> {
    let replacements = records
        .iter()
        .enumerate()
        .filter(|(_, record)| !is_valid(record.date()))
        .map(|(index, _)| {
            let offset = i64::try_from(index.saturating_mul(5) / 2).unwrap_or(i64::MAX);
            base.add_days(offset).map(|date| (index, date))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (index, date) in &replacements {
        let record = &mut records[*index];
        info!(from = record.date(), to = %date, "Repairing invalid date");
        record.set_date(date.to_string());
    }
    Ok(replacements.len())
}

impl<C: Clock> CalendarBridge<C> {
    /// [`repair_dates`] anchored at the configured `repair_base`.
    ///
    /// # Errors
    /// See [`repair_dates`].
    pub fn repair_dates<T: Dated>(&self, records: &mut [T]) -> Result<usize, CalendarError> {
        repair_dates(records, self.config().repair_base)
    }
}
