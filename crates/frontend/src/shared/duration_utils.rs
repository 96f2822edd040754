/// Utilities for training duration labels

/// Format a duration in minutes for a card chip
/// Examples: 45 -> "45 min", 60 -> "1h", 125 -> "2h 5min"
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    let remainder = minutes % 60;
    if remainder == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}min", hours, remainder)
    }
}
