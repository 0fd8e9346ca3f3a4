use serde::{Deserialize, Serialize};

use crate::JalaliDate;

/// Settings for a [`CalendarBridge`](crate::CalendarBridge).
///
/// Deserializes from a partial document; missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Reported as "today" when the clock fails or lands outside the year band
    pub fallback_today: JalaliDate,
    /// First date handed out when regenerating invalid stored dates
    pub repair_base: JalaliDate,
}

impl CalendarConfig {
    pub const DEFAULT: Self = Self {
        fallback_today: JalaliDate::FALLBACK_TODAY,
        repair_base: JalaliDate::REPAIR_BASE,
    };

    #[must_use]
    pub const fn with_fallback_today(mut self, date: JalaliDate) -> Self {
        self.fallback_today = date;
        self
    }

    #[must_use]
    pub const fn with_repair_base(mut self, date: JalaliDate) -> Self {
        self.repair_base = date;
        self
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalendarConfig::default();
        assert_eq!(config.fallback_today.to_string(), "1404/01/15");
        assert_eq!(config.repair_base.to_string(), "1403/01/15");
    }

    #[test]
    fn test_builders() {
        let date: JalaliDate = "1400/01/01".parse().unwrap();
        let config = CalendarConfig::default()
            .with_fallback_today(date)
            .with_repair_base(date);
        assert_eq!(config.fallback_today, date);
        assert_eq!(config.repair_base, date);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CalendarConfig =
            serde_json::from_str(r#"{"fallback_today": "1402/05/20"}"#).unwrap();
        assert_eq!(config.fallback_today.to_string(), "1402/05/20");
        assert_eq!(config.repair_base, JalaliDate::REPAIR_BASE);

        let config: CalendarConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CalendarConfig::DEFAULT);
    }

    #[test]
    fn test_deserialize_rejects_invalid_dates() {
        let result: Result<CalendarConfig, _> =
            serde_json::from_str(r#"{"fallback_today": "1404/13/01"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&CalendarConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"fallback_today":"1404/01/15","repair_base":"1403/01/15"}"#
        );
    }
}
