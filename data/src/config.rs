use chrono::{DateTime, Datelike, Local};

/// Calendar used when decomposing kline open times into date fields.
///
/// `Local` matches what a viewer expects on a daily chart; `Utc` gives
/// environment-independent results and is what tests use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarMode {
    #[default]
    Local,
    Utc,
}

impl CalendarMode {
    /// Returns `(day_of_month 1-31, month 0-11)` for an epoch-millisecond
    /// instant. Out-of-range timestamps fall back to the Unix epoch.
    pub fn date_parts(self, timestamp_ms: u64) -> (u32, u32) {
        let datetime = DateTime::from_timestamp_millis(timestamp_ms as i64).unwrap_or_default();

        match self {
            CalendarMode::Local => {
                let local = datetime.with_timezone(&Local);
                (local.day(), local.month0())
            }
            CalendarMode::Utc => (datetime.day(), datetime.month0()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_date_parts() {
        // 2023-11-15T00:00:00Z
        let (day, month0) = CalendarMode::Utc.date_parts(1_700_006_400_000);
        assert_eq!(day, 15);
        assert_eq!(month0, 10);
    }

    #[test]
    fn first_of_month() {
        // 2024-01-01T00:00:00Z
        let (day, month0) = CalendarMode::Utc.date_parts(1_704_067_200_000);
        assert_eq!(day, 1);
        assert_eq!(month0, 0);
    }
}
