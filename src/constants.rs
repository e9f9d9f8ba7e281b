/// Default path for the weekly schedule file
pub const DEFAULT_SCHEDULE_FILE: &str = "schedule.json";

/// Default path for the subscriber list file
pub const DEFAULT_SUBSCRIBERS_FILE: &str = "subscribers.json";

/// Default local time for the daily broadcast (24-hour HH:MM)
pub const DEFAULT_NOTIFY_TIME: &str = "08:00";

/// Default timezone for the daily broadcast
pub const DEFAULT_TIMEZONE: &str = "Asia/Baku";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "timetable_rs=info";
