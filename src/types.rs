use crate::DateError;
use crate::consts::{MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Jalali year guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1300..=1500)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the value is outside the accepted band.
    pub fn new(value: i64) -> Result<Self, DateError> {
        u16::try_from(value)
            .ok()
            .filter(|v| (MIN_YEAR..=MAX_YEAR).contains(v))
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(DateError::YearOutOfRange(value))
    }

    /// Builds a year from a compile-time constant. Panics during const evaluation on zero.
    pub(crate) const fn from_const(value: u16) -> Self {
        match NonZeroU16::new(value) {
            Some(v) => Self(v),
            None => panic!("year must be non-zero"),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `MIN_MONTH..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it lies within `MIN_MONTH..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::MonthOutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: i64) -> Result<Self, DateError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (MIN_MONTH..=MAX_MONTH).contains(v))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::MonthOutOfRange(value))
    }

    pub(crate) const fn from_const(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(v) => Self(v),
            None => panic!("month must be non-zero"),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value in the range `MIN_DAY..=MAX_DAY` (1..=31).
/// Not checked against the length of any particular month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it lies within `MIN_DAY..=MAX_DAY`
    ///
    /// # Errors
    /// Returns `DateError::DayOutOfRange` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: i64) -> Result<Self, DateError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (MIN_DAY..=MAX_DAY).contains(v))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::DayOutOfRange(value))
    }

    pub(crate) const fn from_const(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(v) => Self(v),
            None => panic!("day must be non-zero"),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
