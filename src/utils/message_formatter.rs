/// Pure functions for timetable message formatting (Discord-agnostic)

/// Split a raw schedule blob into trimmed, non-empty entries
pub fn split_entries(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Render a single entry line
///
/// An entry of the form `NAME - TIME` (exactly one ` - ` separator) renders
/// as `TIME — NAME`; anything else renders verbatim.
pub fn format_entry(entry: &str) -> String {
    let parts: Vec<&str> = entry.split(" - ").collect();
    if parts.len() == 2 {
        format!("{} — {}", parts[1].trim(), parts[0].trim())
    } else {
        entry.to_string()
    }
}

/// Build the header line for a day's message
pub fn build_day_header(day: &str) -> String {
    format!("Today is {}:", day)
}

/// Build the full message for a day from its raw schedule blob
///
/// `None` or a blob with no entries renders the empty-day fallback.
pub fn build_day_message(day: &str, raw: Option<&str>) -> String {
    let entries = raw.map(split_entries).unwrap_or_default();

    if entries.is_empty() {
        return format!("{}\nNo classes today.", build_day_header(day));
    }

    let lines: Vec<String> = entries.iter().map(|entry| format_entry(entry)).collect();
    format!("{}\n{}", build_day_header(day), lines.join("\n"))
}

/// Build the greeting sent when a channel subscribes
pub fn build_greeting(mention: &str, notify_time: &str, timezone: &str) -> String {
    format!(
        "👋 Hi {}! This channel will now receive the timetable every day at {} ({}). \
         Use /today to see today's timetable.",
        mention, notify_time, timezone
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_entries() {
        assert_eq!(
            split_entries("Math - 09:00, Physics - 11:00"),
            vec!["Math - 09:00", "Physics - 11:00"]
        );
    }

    #[test]
    fn test_split_entries_trims_and_drops_empty() {
        assert_eq!(split_entries("  Math - 09:00 ,, Gym  "), vec!["Math - 09:00", "Gym"]);
        assert!(split_entries("").is_empty());
        assert!(split_entries("  ,  , ").is_empty());
    }

    #[test]
    fn test_format_entry_name_time() {
        assert_eq!(format_entry("Math - 09:00"), "09:00 — Math");
    }

    #[test]
    fn test_format_entry_without_separator() {
        assert_eq!(format_entry("Self-study"), "Self-study");
        assert_eq!(format_entry("Gym"), "Gym");
    }

    #[test]
    fn test_format_entry_multiple_separators_verbatim() {
        assert_eq!(
            format_entry("Math - advanced - 09:00"),
            "Math - advanced - 09:00"
        );
    }

    #[test]
    fn test_build_day_header() {
        assert_eq!(build_day_header("Monday"), "Today is Monday:");
    }

    #[test]
    fn test_build_day_message() {
        let message = build_day_message("Monday", Some("Math - 09:00, Gym"));
        assert_eq!(message, "Today is Monday:\n09:00 — Math\nGym");
    }

    #[test]
    fn test_build_day_message_missing_day() {
        assert_eq!(
            build_day_message("Sunday", None),
            "Today is Sunday:\nNo classes today."
        );
    }

    #[test]
    fn test_build_day_message_empty_blob() {
        assert_eq!(
            build_day_message("Saturday", Some("   ")),
            "Today is Saturday:\nNo classes today."
        );
    }

    #[test]
    fn test_build_greeting() {
        let greeting = build_greeting("<@123>", "08:00", "Asia/Baku");
        assert!(greeting.contains("<@123>"));
        assert!(greeting.contains("08:00"));
        assert!(greeting.contains("Asia/Baku"));
        assert!(greeting.contains("/today"));
    }
}
