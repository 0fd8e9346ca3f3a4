//! Gregorian to Jalali conversion and the day/month/year arithmetic built on it.
//!
//! Leap years, month lengths and day counting come from [`jelal`]. Days are
//! numbered from 1 Farvardin `MIN_YEAR`, so every date in the accepted band
//! has a non-negative day number and only forward arithmetic is needed.

use chrono::{DateTime, Local, NaiveDate, TimeDelta, Utc};
use jelal::{MonthDay, Ordinal};
use tracing::warn;

use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_MONTH, MIN_YEAR, MONTHS_PER_YEAR};
use crate::{CalendarConfig, DateError, JalaliDate};

/// Error type for calendar conversion and clock access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The converted date does not form a valid `JalaliDate`.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Day arithmetic left the range chrono can represent.
    #[error("Date outside supported range: {0}")]
    OutOfSupportedRange(String),

    /// The clock could not produce a current date.
    #[error("Clock unavailable: {0}")]
    Clock(String),
}

/// Source of the current Gregorian day.
pub trait Clock {
    /// # Errors
    /// Returns `CalendarError::Clock` if the current date cannot be determined.
    fn today(&self) -> Result<NaiveDate, CalendarError>;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<NaiveDate, CalendarError> {
        Ok(Local::now().date_naive())
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Pins the clock to the Gregorian equivalent of a Jalali date
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfSupportedRange` if the conversion overflows.
    pub fn from_jalali(date: JalaliDate) -> Result<Self, CalendarError> {
        to_gregorian(date).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Result<NaiveDate, CalendarError> {
        Ok(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Result<NaiveDate, CalendarError> {
        (**self).today()
    }
}

/// Whether `year` has 366 days (Esfand has 30 days).
pub const fn is_leap_year(year: i32) -> bool {
    jelal::Year::new(year).is_leap()
}

/// Number of days in `month` of `year`, or 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if !(MIN_MONTH..=MAX_MONTH).contains(&month) {
        return 0;
    }
    // jelal saturates an overlong day to the last day of the month
    let month_end = jelal::Date::from((year, month, MonthDay::MAX_DAY));
    MonthDay::from(month_end).day()
}

pub const fn days_in_year(year: i32) -> u16 {
    jelal::Year::new(year).max_ordinal().get()
}

/// 1 Farvardin of the earliest accepted year; day number 0.
fn first_supported_day() -> jelal::Date {
    jelal::Date::from(jelal::Year::new(i32::from(MIN_YEAR)))
}

/// Day number of the last day of the latest accepted year.
fn last_supported_number() -> i64 {
    let last = jelal::Date::from((i32::from(MAX_YEAR), Ordinal::MAX));
    i64::from(last.diff_as_days(first_supported_day()))
}

/// Day number of a date. Day values past the end of a month simply run into
/// the next one.
fn day_number(date: &JalaliDate) -> i64 {
    let first_of_month =
        jelal::Date::from((i32::from(date.year()), date.month(), MonthDay::MIN_DAY));
    i64::from(first_of_month.diff_as_days(first_supported_day())) + i64::from(date.day()) - 1
}

/// Day number of 1970-01-01.
fn unix_epoch_number() -> i64 {
    i64::from(jelal::Date::EPOCH.diff_as_days(first_supported_day()))
}

fn unix_epoch() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

/// Date for a day number, rejecting numbers outside the accepted year band
/// before any calendar walking happens.
fn from_number(number: i64) -> Result<JalaliDate, CalendarError> {
    if number < 0 {
        return Err(DateError::YearOutOfRange(i64::from(MIN_YEAR) - 1).into());
    }
    let offset = i32::try_from(number)
        .ok()
        .filter(|_| number <= last_supported_number())
        .ok_or(DateError::YearOutOfRange(i64::from(MAX_YEAR) + 1))?;

    let date = first_supported_day().add_days(offset);
    let year = date.year().get();
    let month_day = MonthDay::from(date);
    JalaliDate::new(
        i64::from(year),
        i64::from(month_day.month().get()),
        i64::from(month_day.day()),
    )
    .map_err(CalendarError::from)
}

/// Converts a Jalali date to the Gregorian calendar.
///
/// # Errors
/// Returns `CalendarError::OutOfSupportedRange` if chrono cannot represent the result.
pub fn to_gregorian(date: JalaliDate) -> Result<NaiveDate, CalendarError> {
    let offset = day_number(&date) - unix_epoch_number();
    TimeDelta::try_days(offset)
        .and_then(|delta| unix_epoch().checked_add_signed(delta))
        .ok_or_else(|| CalendarError::OutOfSupportedRange(date.to_string()))
}

/// Converts a Gregorian date to the Jalali calendar.
///
/// # Errors
/// Returns `CalendarError::Date` if the Jalali year falls outside 1300..=1500.
pub fn from_gregorian(date: NaiveDate) -> Result<JalaliDate, CalendarError> {
    let offset = date.signed_duration_since(unix_epoch()).num_days();
    from_number(offset + unix_epoch_number())
}

/// Converts an API timestamp (RFC 3339 or `YYYY-MM-DD`) to a stored Jalali date string.
///
/// Text that does not parse, or that lands outside the accepted year band,
/// yields today's date instead.
pub fn gregorian_to_raw(text: &str) -> String {
    gregorian_to_raw_with(text, &CalendarBridge::system())
}

fn gregorian_to_raw_with<C: Clock>(text: &str, bridge: &CalendarBridge<C>) -> String {
    let trimmed = text.trim();
    let gregorian = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"));

    let converted = gregorian
        .map_err(|e| e.to_string())
        .and_then(|d| from_gregorian(d).map_err(|e| e.to_string()));

    match converted {
        Ok(date) => date.to_string(),
        Err(error) => {
            warn!(input = text, %error, "Could not convert API date, using today");
            bridge.today_string()
        }
    }
}

/// Wraps a clock and configuration to answer "today" and date-difference questions.
#[derive(Debug, Clone, Default)]
pub struct CalendarBridge<C = SystemClock> {
    clock: C,
    config: CalendarConfig,
}

impl CalendarBridge {
    /// Bridge over the system clock with default configuration
    pub const fn system() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> CalendarBridge<C> {
    pub const fn new(clock: C, config: CalendarConfig) -> Self {
        Self { clock, config }
    }

    pub const fn with_clock(clock: C) -> Self {
        Self {
            clock,
            config: CalendarConfig::DEFAULT,
        }
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Today's Jalali date.
    ///
    /// # Errors
    /// Returns the clock's error, or `CalendarError::Date` if today is outside 1300..=1500.
    pub fn today(&self) -> Result<JalaliDate, CalendarError> {
        from_gregorian(self.clock.today()?)
    }

    /// Today's Jalali date, or the configured fallback if it cannot be determined.
    pub fn today_or_fallback(&self) -> JalaliDate {
        self.today().unwrap_or_else(|error| {
            warn!(
                %error,
                fallback = %self.config.fallback_today,
                "Could not determine today's Jalali date"
            );
            self.config.fallback_today
        })
    }

    /// Today's date in stored `YYYY/MM/DD` form. Never fails.
    pub fn today_string(&self) -> String {
        self.today_or_fallback().to_string()
    }

    /// Day difference `to - from`; positive when `from` is earlier.
    pub fn days_between(from: &JalaliDate, to: &JalaliDate) -> i64 {
        day_number(to) - day_number(from)
    }

    /// Whole months from `from` to `to`, truncated toward zero.
    ///
    /// A month counts once the same day-of-month is reached, clamped to the
    /// length of the target month (1403/06/31 to 1403/07/30 is one month).
    pub fn months_between(from: &JalaliDate, to: &JalaliDate) -> i64 {
        let mut months = (i64::from(to.year()) - i64::from(from.year())) * MONTHS_PER_YEAR
            + (i64::from(to.month()) - i64::from(from.month()));

        let anchor_day = from
            .day()
            .min(days_in_month(i32::from(to.year()), to.month()));
        if months > 0 && to.day() < anchor_day {
            months -= 1;
        } else if months < 0 && to.day() > anchor_day {
            months += 1;
        }
        months
    }

    /// Whole years from `from` to `to`, truncated toward zero.
    pub fn years_between(from: &JalaliDate, to: &JalaliDate) -> i64 {
        Self::months_between(from, to) / MONTHS_PER_YEAR
    }
}

impl JalaliDate {
    /// Shifts the date by `days`, following real month lengths.
    ///
    /// # Errors
    /// Returns `CalendarError::Date` if the result falls outside 1300..=1500,
    /// or `CalendarError::OutOfSupportedRange` if the offset overflows.
    pub fn add_days(&self, days: i64) -> Result<Self, CalendarError> {
        let number = day_number(self)
            .checked_add(days)
            .ok_or_else(|| CalendarError::OutOfSupportedRange(format!("{self} + {days} days")))?;
        from_number(number)
    }

    /// Gregorian equivalent of this date.
    ///
    /// # Errors
    /// See [`to_gregorian`].
    pub fn to_gregorian(&self) -> Result<NaiveDate, CalendarError> {
        to_gregorian(*self)
    }
}
