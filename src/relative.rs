use tracing::debug;

use crate::consts::{DAYS_PER_WEEK, INVALID_DATE_LABEL, MONTH_BUCKET_DAYS, MONTHS_PER_YEAR};
use crate::prelude::*;
use crate::{CalendarBridge, Clock, DateError, JalaliDate, to_persian_digits};

/// How far a date lies from today, bucketed for display.
///
/// `Display` renders the Persian phrase with Persian digits. Only past
/// dates get week, month and year buckets; anything beyond tomorrow is
/// reported in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RelativeDate {
    #[display(fmt = "امروز")]
    Today,
    #[display(fmt = "دیروز")]
    Yesterday,
    #[display(fmt = "فردا")]
    Tomorrow,
    #[display(fmt = "{} روز دیگر", "to_persian_digits(_0)")]
    DaysFromNow(u64),
    #[display(fmt = "{} روز پیش", "to_persian_digits(_0)")]
    DaysAgo(u64),
    #[display(fmt = "{} هفته پیش", "to_persian_digits(_0)")]
    WeeksAgo(u64),
    #[display(fmt = "{} ماه پیش", "to_persian_digits(_0)")]
    MonthsAgo(u64),
    #[display(fmt = "{} سال پیش", "to_persian_digits(_0)")]
    YearsAgo(u64),
}

impl RelativeDate {
    /// Buckets `date` relative to `today`. First matching rule wins.
    pub fn between(date: &JalaliDate, today: &JalaliDate) -> Self {
        type Bridge = CalendarBridge;

        let diff_days = Bridge::days_between(date, today);
        match diff_days {
            0 => Self::Today,
            1 => Self::Yesterday,
            d if -2 < d && d < 0 => Self::Tomorrow,
            d if d < 0 => Self::DaysFromNow(d.unsigned_abs()),
            d if d < DAYS_PER_WEEK => Self::DaysAgo(d.unsigned_abs()),
            d if d < MONTH_BUCKET_DAYS => Self::WeeksAgo((d / DAYS_PER_WEEK).unsigned_abs()),
            _ => {
                let diff_months = Bridge::months_between(date, today);
                if diff_months < MONTHS_PER_YEAR {
                    Self::MonthsAgo(diff_months.unsigned_abs())
                } else {
                    Self::YearsAgo(Bridge::years_between(date, today).unsigned_abs())
                }
            }
        }
    }
}

impl<C: Clock> CalendarBridge<C> {
    /// Parses, validates and buckets `raw` against today.
    ///
    /// # Errors
    /// Any parse or range error from `raw`.
    pub fn describe(&self, raw: &str) -> Result<RelativeDate, DateError> {
        let date: JalaliDate = raw.parse()?;
        Ok(RelativeDate::between(&date, &self.today_or_fallback()))
    }

    /// Persian relative phrase for `raw`, or `تاریخ نامعتبر` if it is unusable.
    pub fn relative(&self, raw: &str) -> String {
        match self.describe(raw) {
            Ok(relative) => relative.to_string(),
            Err(error) => {
                debug!(input = raw, %error, "Cannot describe invalid date");
                INVALID_DATE_LABEL.to_owned()
            }
        }
    }
}
