//! Human-readable duration formatting
//!
//! Catalog cards display track length as `M:SS` (e.g. "3:45"). The stored
//! `duration_formatted` field is authoritative for API responses; this
//! helper is only used when building seed rows.

/// Format a duration in whole seconds as `M:SS`.
///
/// Negative inputs are clamped to zero.
///
/// # Examples
///
/// ```
/// use sadaa_common::human_time::format_duration;
///
/// assert_eq!(format_duration(225), "3:45");
/// assert_eq!(format_duration(480), "8:00");
/// assert_eq!(format_duration(59), "0:59");
/// ```
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_duration(0), "0:00");
    }

    #[test]
    fn test_sub_minute() {
        assert_eq!(format_duration(45), "0:45");
    }

    #[test]
    fn test_minute_boundary() {
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(61), "1:01");
    }

    #[test]
    fn test_long_track() {
        assert_eq!(format_duration(420), "7:00");
        assert_eq!(format_duration(390), "6:30");
    }

    #[test]
    fn test_negative_clamped() {
        assert_eq!(format_duration(-5), "0:00");
    }
}
