use chrono::{LocalResult, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;

/// Error types for timezone operations
#[derive(Debug)]
pub enum TimezoneError {
    InvalidTimezone(String),
    InvalidTime(String),
    TimeDoesNotExist,
}

impl std::fmt::Display for TimezoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimezoneError::InvalidTimezone(tz) => write!(f, "Invalid timezone: {}", tz),
            TimezoneError::InvalidTime(msg) => write!(f, "Invalid time format: {}", msg),
            TimezoneError::TimeDoesNotExist => {
                write!(f, "Time doesn't exist in this timezone (DST transition)")
            }
        }
    }
}

impl std::error::Error for TimezoneError {}

/// Parse a timezone string
pub fn parse_timezone(tz_str: &str) -> Result<Tz, TimezoneError> {
    tz_str
        .parse()
        .map_err(|_| TimezoneError::InvalidTimezone(tz_str.to_string()))
}

/// Parse a time string in HH:MM format
pub fn parse_time_string(time_str: &str) -> Result<NaiveTime, TimezoneError> {
    NaiveTime::parse_from_str(time_str, "%H:%M").map_err(|_| {
        TimezoneError::InvalidTime(format!("Expected HH:MM format, got '{}'", time_str))
    })
}

/// Convert a local wall-clock time in the given timezone to today's UTC time
///
/// During a DST transition an ambiguous time resolves to the earliest
/// instant; a nonexistent time is an error.
pub fn local_time_to_utc(time: NaiveTime, timezone: &Tz) -> Result<NaiveTime, TimezoneError> {
    let today = chrono::Utc::now().date_naive();
    let local_datetime = today.and_time(time);

    let local_datetime_tz = match timezone.from_local_datetime(&local_datetime) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(dt1, _dt2) => dt1,
        LocalResult::None => return Err(TimezoneError::TimeDoesNotExist),
    };

    Ok(local_datetime_tz.with_timezone(&chrono::Utc).time())
}

/// Build the UTC cron expression for a daily job at the given local time
pub fn daily_cron_expression(time: NaiveTime, timezone: &Tz) -> Result<String, TimezoneError> {
    let utc_time = local_time_to_utc(time, timezone)?;
    Ok(format!("0 {} {} * * *", utc_time.minute(), utc_time.hour()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_string() {
        assert!(parse_time_string("08:00").is_ok());
        assert!(parse_time_string("23:59").is_ok());
        assert!(parse_time_string("invalid").is_err());
        assert!(parse_time_string("25:00").is_err());
    }

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("UTC").is_ok());
        assert!(parse_timezone("Asia/Baku").is_ok());
        assert!(parse_timezone("Invalid/Timezone").is_err());
    }

    #[test]
    fn test_daily_cron_expression_utc() {
        let time = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
        let cron = daily_cron_expression(time, &chrono_tz::UTC).unwrap();
        assert_eq!(cron, "0 30 8 * * *");
    }

    #[test]
    fn test_daily_cron_expression_fixed_offset() {
        // Asia/Baku is UTC+4 year-round
        let time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let cron = daily_cron_expression(time, &chrono_tz::Asia::Baku).unwrap();
        assert_eq!(cron, "0 0 4 * * *");
    }
}
