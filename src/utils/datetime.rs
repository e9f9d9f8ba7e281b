use chrono::{Datelike, Utc, Weekday};
use chrono_tz::Tz;

/// Display name for a weekday, as used for schedule file keys
pub fn weekday_display_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Name of the current weekday in the given timezone
pub fn current_weekday_name(timezone: &Tz) -> &'static str {
    let now = Utc::now().with_timezone(timezone);
    weekday_display_name(now.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_display_name_all_days() {
        let expected = [
            (Weekday::Mon, "Monday"),
            (Weekday::Tue, "Tuesday"),
            (Weekday::Wed, "Wednesday"),
            (Weekday::Thu, "Thursday"),
            (Weekday::Fri, "Friday"),
            (Weekday::Sat, "Saturday"),
            (Weekday::Sun, "Sunday"),
        ];

        for (weekday, name) in expected {
            assert_eq!(weekday_display_name(weekday), name);
        }
    }

    #[test]
    fn test_current_weekday_name_is_valid_key() {
        let name = current_weekday_name(&chrono_tz::UTC);
        let all = [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ];
        assert!(all.contains(&name));
    }
}
