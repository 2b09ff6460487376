use chrono::NaiveTime;

/// Wire format of every schedule time.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Parses a path segment as a record identifier.
///
/// Identifiers are positive 32-bit integers written in plain decimal digits; signs,
/// whitespace and leading `+` are rejected.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Some(id)` - Well-formed identifier
/// - `None` - Anything else, including `0` and values overflowing `i32`
pub fn parse_identifier(value: &str) -> Option<i32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    value.parse::<i32>().ok().filter(|id| *id > 0)
}

/// Parses an `HH:MM:SS` time of day.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

/// Formats a time of day as `HH:MM:SS`.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}
