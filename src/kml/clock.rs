use chrono::{Local, NaiveDateTime};

/// `YYYY-MM-DDTHH:MM:SS`, local time without offset or fraction
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Source of placemark timestamps
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Wall-clock local time
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_timestamp_drops_fraction() {
        let instant = NaiveDate::from_ymd_opt(2020, 3, 7)
            .unwrap()
            .and_hms_micro_opt(9, 5, 1, 987_654)
            .unwrap();
        assert_eq!(FixedClock(instant).timestamp(), "2020-03-07T09:05:01");
    }

    #[test]
    fn test_local_clock_shape() {
        let stamp = LocalClock.timestamp();
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[10..11], "T");
        assert!(NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }
}
