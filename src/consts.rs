/// Earliest accepted Jalali year (inclusive)
pub const MIN_YEAR: u16 = 1300;

/// Latest accepted Jalali year (inclusive)
pub const MAX_YEAR: u16 = 1500;

/// Month number for Farvardin
pub const MIN_MONTH: u8 = 1;

/// Month number for Esfand
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Largest day number accepted structurally, regardless of month length
pub const MAX_DAY: u8 = 31;

/// Component separator of the stored `YYYY/MM/DD` form
pub const DATE_SEPARATOR: char = '/';

/// Number of separator-delimited components in a stored date
pub const DATE_COMPONENTS: usize = 3;

/// Stored form of the default "today" used when the clock cannot be read
pub const FALLBACK_TODAY: &str = "1404/01/15";

/// Anchor date for regenerating broken stored dates
pub const REPAIR_BASE: &str = "1403/01/15";

/// Label shown in place of a relative description for unusable input
pub const INVALID_DATE_LABEL: &str = "تاریخ نامعتبر";

/// Persian month names, Farvardin first (index = month - 1)
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Extended Arabic-Indic digits as used in Persian, indexed by value
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Days per week, for the "N weeks ago" bucket
pub const DAYS_PER_WEEK: i64 = 7;

/// Day count at which relative descriptions switch to months
pub const MONTH_BUCKET_DAYS: i64 = 30;

/// Months per year
pub const MONTHS_PER_YEAR: i64 = 12;
