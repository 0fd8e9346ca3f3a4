mod calendar;
mod config;
mod consts;
mod format;
mod prelude;
mod relative;
mod sort;
mod types;

pub use calendar::{
    CalendarBridge, CalendarError, Clock, FixedClock, SystemClock, days_in_month, days_in_year,
    from_gregorian, gregorian_to_raw, is_leap_year, to_gregorian,
};
pub use config::CalendarConfig;
pub use consts::*;
pub use format::{format_absolute, month_name, to_persian_digits, try_format_absolute};
pub use relative::RelativeDate;
pub use sort::{Dated, compare_by_date, repair_dates, sort_by_date, sort_key};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A `YYYY/MM/DD` string split into its numeric components.
///
/// No range guarantee: `9999/99/99` parses structurally. Call
/// [`DateParts::validate`] before trusting the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", year, month, day)]
pub struct DateParts {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

/// A Jalali calendar date whose components passed range validation.
///
/// Year is within 1300..=1500, month within 1..=12 and day within 1..=31.
/// The day is not checked against the month's real length; see
/// [`JalaliDate::fits_month_length`] for the stricter test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", "year.get()", "month.get()", "day.get()")]
pub struct JalaliDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date input: expected a non-empty string")]
    InvalidInput,
    #[display(fmt = "Date must be in YYYY/MM/DD format (found {} components)", "_0")]
    MalformedFormat(usize),
    #[display(fmt = "Date component is not a number: {:?}", "_0")]
    NonNumericComponent(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange(i64),
    #[display(fmt = "Invalid month: {} (must be {}-{})", "_0", MIN_MONTH, MAX_MONTH)]
    MonthOutOfRange(i64),
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    DayOutOfRange(i64),
}

impl std::error::Error for DateError {}

impl DateError {
    /// True for errors raised by range validation rather than by parsing
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::YearOutOfRange(_) | Self::MonthOutOfRange(_) | Self::DayOutOfRange(_)
        )
    }
}

impl DateParts {
    /// Splits a stored `YYYY/MM/DD` string into numbers without range checks.
    ///
    /// # Errors
    /// - `DateError::InvalidInput` for an empty string
    /// - `DateError::MalformedFormat` unless there are exactly three `/`-separated parts
    /// - `DateError::NonNumericComponent` if any part is not an integer
    pub fn parse(raw: &str) -> Result<Self, DateError> {
        if raw.is_empty() {
            return Err(DateError::InvalidInput);
        }

        let parts: Vec<&str> = raw.split(DATE_SEPARATOR).collect();
        let [year, month, day]: [&str; DATE_COMPONENTS] = parts
            .as_slice()
            .try_into()
            .map_err(|_| DateError::MalformedFormat(parts.len()))?;

        Ok(Self {
            year: Self::parse_component(year)?,
            month: Self::parse_component(month)?,
            day: Self::parse_component(day)?,
        })
    }

    fn parse_component(s: &str) -> Result<i64, DateError> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| DateError::NonNumericComponent(s.to_owned()))
    }

    /// Checks the components against the accepted bands.
    ///
    /// # Errors
    /// Returns the `*OutOfRange` variant of the first component that fails.
    pub fn validate(self) -> Result<JalaliDate, DateError> {
        Ok(JalaliDate {
            year: Year::new(self.year)?,
            month: Month::new(self.month)?,
            day: Day::new(self.day)?,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// `year * 10000 + month * 100 + day`, monotonic while month and day stay below 100.
    pub const fn sort_key(&self) -> i64 {
        self.year
            .saturating_mul(10_000)
            .saturating_add(self.month.saturating_mul(100))
            .saturating_add(self.day)
    }
}

impl JalaliDate {
    /// Default "today" when the clock cannot be read (1404/01/15)
    pub const FALLBACK_TODAY: Self = Self::from_const(1404, 1, 15);

    /// Default anchor for regenerated dates (1403/01/15)
    pub const REPAIR_BASE: Self = Self::from_const(1403, 1, 15);

    /// Creates a validated date.
    ///
    /// # Errors
    /// Returns the `*OutOfRange` variant of the first component that fails.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        DateParts { year, month, day }.validate()
    }

    const fn from_const(year: u16, month: u8, day: u8) -> Self {
        Self {
            year: Year::from_const(year),
            month: Month::from_const(month),
            day: Day::from_const(day),
        }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the unvalidated view of this date
    pub fn parts(&self) -> DateParts {
        DateParts {
            year: i64::from(self.year()),
            month: i64::from(self.month()),
            day: i64::from(self.day()),
        }
    }

    pub fn sort_key(&self) -> i64 {
        self.parts().sort_key()
    }

    /// Persian name of this date's month
    pub const fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month.get() as usize - 1]
    }

    /// Whether the day exists in this month of this year (leap-aware).
    pub fn fits_month_length(&self) -> bool {
        self.day() <= days_in_month(i32::from(self.year()), self.month())
    }
}

impl FromStr for JalaliDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateParts::parse(s)?.validate()
    }
}

impl TryFrom<DateParts> for JalaliDate {
    type Error = DateError;

    fn try_from(value: DateParts) -> Result<Self, Self::Error> {
        value.validate()
    }
}

impl From<JalaliDate> for DateParts {
    fn from(date: JalaliDate) -> Self {
        date.parts()
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Splits a stored date into numbers without range checks.
///
/// # Errors
/// See [`DateParts::parse`].
pub fn parse(raw: &str) -> Result<DateParts, DateError> {
    DateParts::parse(raw)
}

/// Parses and range-checks a stored date.
///
/// # Errors
/// Any parse error, or the `*OutOfRange` variant of the first failing component.
pub fn validate(raw: &str) -> Result<JalaliDate, DateError> {
    raw.parse()
}

/// Whether `raw` parses and passes range validation. Never fails.
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_ok()
}

/// Today's date in stored form, read from the system clock.
pub fn today() -> String {
    CalendarBridge::system().today_string()
}

/// Persian relative description of `raw` against the system clock.
pub fn relative(raw: &str) -> String {
    CalendarBridge::system().relative(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let parts = parse("1404/01/15").unwrap();
        assert_eq!(
            parts,
            DateParts {
                year: 1404,
                month: 1,
                day: 15
            }
        );
    }

    #[test]
    fn test_parse_has_no_range_checks() {
        let parts = parse("9999/99/99").unwrap();
        assert_eq!(
            parts,
            DateParts {
                year: 9999,
                month: 99,
                day: 99
            }
        );
        assert!(!parts.is_valid());
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), Err(DateError::InvalidInput));
    }

    #[test]
    fn test_parse_wrong_component_count() {
        assert_eq!(parse("1404/01"), Err(DateError::MalformedFormat(2)));
        assert_eq!(parse("1404-01-15"), Err(DateError::MalformedFormat(1)));
        assert_eq!(parse("1404/01/15/01"), Err(DateError::MalformedFormat(4)));
        assert_eq!(parse("not-a-date"), Err(DateError::MalformedFormat(1)));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(
            parse("1404/xx/15"),
            Err(DateError::NonNumericComponent("xx".to_owned()))
        );
        assert_eq!(
            parse("1404//15"),
            Err(DateError::NonNumericComponent(String::new()))
        );
        assert!(matches!(
            parse("۱۴۰۴/۰۱/۱۵"),
            Err(DateError::NonNumericComponent(_))
        ));
    }

    #[test]
    fn test_parse_tolerates_padding_whitespace() {
        let parts = parse("1404/ 1 /15").unwrap();
        assert_eq!(parts.month, 1);
    }

    #[test]
    fn test_validate_bands() {
        assert!(is_valid("1300/01/01"));
        assert!(is_valid("1500/12/31"));
        assert_eq!(validate("1299/01/01"), Err(DateError::YearOutOfRange(1299)));
        assert_eq!(validate("1501/01/01"), Err(DateError::YearOutOfRange(1501)));
        assert_eq!(validate("1404/00/01"), Err(DateError::MonthOutOfRange(0)));
        assert_eq!(validate("1404/13/01"), Err(DateError::MonthOutOfRange(13)));
        assert_eq!(validate("1404/01/00"), Err(DateError::DayOutOfRange(0)));
        assert_eq!(validate("1404/01/32"), Err(DateError::DayOutOfRange(32)));
    }

    #[test]
    fn test_validate_ignores_month_length() {
        // Esfand 1404 has 29 days; the band check still accepts day 31.
        let date = validate("1404/12/31").unwrap();
        assert!(!date.fits_month_length());
        assert!(validate("1404/07/31").is_ok());
    }

    #[test]
    fn test_is_valid_never_fails() {
        for raw in ["", "null", "undefined", "abc/def/ghi", "/", "//", "1404/01/15/", "🙂"] {
            assert!(!is_valid(raw), "{raw:?} should be invalid");
        }
    }

    #[test]
    fn test_out_of_range_classification() {
        assert!(DateError::YearOutOfRange(1).is_out_of_range());
        assert!(!DateError::InvalidInput.is_out_of_range());
        assert!(!DateError::MalformedFormat(2).is_out_of_range());
    }

    #[test]
    fn test_round_trip_over_valid_band() {
        for year in [1300, 1350, 1403, 1404, 1500] {
            for month in 1..=12 {
                for day in [1, 15, 29, 30, 31] {
                    let date = JalaliDate::new(year, month, day).unwrap();
                    let raw = date.to_string();
                    assert_eq!(raw.len(), 10, "{raw} should be zero-padded");
                    assert_eq!(raw.parse::<JalaliDate>().unwrap(), date);
                }
            }
        }
    }

    #[test]
    fn test_display_zero_pads() {
        let date = JalaliDate::new(1404, 1, 5).unwrap();
        assert_eq!(date.to_string(), "1404/01/05");
        assert_eq!(
            DateParts {
                year: 1404,
                month: 3,
                day: 7
            }
            .to_string(),
            "1404/03/07"
        );
    }

    #[test]
    fn test_accessors() {
        let date = JalaliDate::new(1404, 7, 9).unwrap();
        assert_eq!(date.year(), 1404);
        assert_eq!(date.month(), 7);
        assert_eq!(date.day(), 9);
        assert_eq!(date.month_name(), "مهر");
        assert_eq!(date.year_typed().get(), 1404);
        assert_eq!(date.month_typed().get(), 7);
        assert_eq!(date.day_typed().get(), 9);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = JalaliDate::new(1403, 12, 30).unwrap();
        let b = JalaliDate::new(1404, 1, 1).unwrap();
        let c = JalaliDate::new(1404, 1, 2).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(a.sort_key() < b.sort_key());
    }

    #[test]
    fn test_sort_key() {
        assert_eq!(parse("1404/01/15").unwrap().sort_key(), 14_040_115);
        let huge = DateParts {
            year: i64::MAX,
            month: 1,
            day: 1,
        };
        assert_eq!(huge.sort_key(), i64::MAX);
    }

    #[test]
    fn test_constants_agree_with_literals() {
        assert_eq!(JalaliDate::FALLBACK_TODAY.to_string(), FALLBACK_TODAY);
        assert_eq!(JalaliDate::REPAIR_BASE.to_string(), REPAIR_BASE);
    }

    #[test]
    fn test_conversions() {
        let parts = parse("1404/02/03").unwrap();
        let date = JalaliDate::try_from(parts).unwrap();
        assert_eq!(DateParts::from(date), parts);
        assert!(JalaliDate::try_from(parse("1404/22/03").unwrap()).is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let date = JalaliDate::new(1404, 1, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1404/01/15""#);
        let parsed: JalaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        for json in [r#""1404/13/01""#, r#""1200/01/01""#, r#""1404-01-01""#, r#""""#] {
            let result: Result<JalaliDate, _> = serde_json::from_str(json);
            assert!(result.is_err(), "{json} should be rejected");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateError::MalformedFormat(2).to_string(),
            "Date must be in YYYY/MM/DD format (found 2 components)"
        );
        assert_eq!(
            DateError::YearOutOfRange(1200).to_string(),
            "Invalid year: 1200 (must be 1300-1500)"
        );
        assert_eq!(
            DateError::NonNumericComponent("xx".to_owned()).to_string(),
            r#"Date component is not a number: "xx""#
        );
    }

    #[test]
    fn test_today_is_well_formed() {
        let raw = today();
        assert!(parse(&raw).is_ok(), "{raw} should parse");
    }
}
