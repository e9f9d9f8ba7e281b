/// Pure functions for formatting user-facing replies (Discord-agnostic)

/// Format a validation error message with emoji
pub fn format_error(message: &str) -> String {
    format!("❌ {}", message)
}

/// Format an info message with emoji
pub fn format_info(message: &str) -> String {
    format!("ℹ️ {}", message)
}

/// Build a storage error message (generic, doesn't expose internals)
pub fn build_store_error() -> String {
    format_error("Could not read the timetable right now. Please try again later.")
}
