/// Pure functions for formatting user-facing replies (Discord-agnostic)

/// Format a validation error message with emoji
pub fn format_error(message: &str) -> String {
    format!("❌ {}", message)
}

/// Format a success message with emoji
pub fn format_success(message: &str) -> String {
    format!("✅ {}", message)
}

/// Format an info message with emoji
pub fn format_info(message: &str) -> String {
    format!("ℹ️ {}", message)
}

/// One line of the pending one-shot listing, 1-based position first
pub fn build_schedule_line(position: usize, when: &str, q_idx: Option<usize>) -> String {
    match q_idx {
        Some(idx) => format!("**{}.** {} — question #{}", position, when, idx + 1),
        None => format!("**{}.** {} — next in order", position, when),
    }
}

/// The `/qotd status` reply body
pub fn build_status_message(
    channel: Option<&str>,
    time_hhmm: Option<&str>,
    enabled: bool,
    next_position: usize,
    pool_size: usize,
    pending: usize,
) -> String {
    format!(
        "**MDickie QOTD Status**\n\
         • Channel: {}\n\
         • Time (Asia/Kolkata): **{}**\n\
         • Enabled: **{}**\n\
         • Next index: **{}/{}**\n\
         • One-time schedules: **{}**",
        channel.unwrap_or("Not set"),
        time_hhmm.unwrap_or("Not set"),
        if enabled { "On" } else { "Off" },
        next_position,
        pool_size,
        pending,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        assert_eq!(format_error("Something failed"), "❌ Something failed");
    }

    #[test]
    fn test_format_success() {
        assert_eq!(format_success("It worked"), "✅ It worked");
    }

    #[test]
    fn test_format_info() {
        assert_eq!(format_info("Good to know"), "ℹ️ Good to know");
    }

    #[test]
    fn test_build_schedule_line_with_override() {
        assert_eq!(
            build_schedule_line(1, "2026-08-04 21:00 IST", Some(4)),
            "**1.** 2026-08-04 21:00 IST — question #5"
        );
    }

    #[test]
    fn test_build_schedule_line_next_in_order() {
        assert_eq!(
            build_schedule_line(2, "2026-08-05 10:00 IST", None),
            "**2.** 2026-08-05 10:00 IST — next in order"
        );
    }

    #[test]
    fn test_build_status_message_unconfigured() {
        let status = build_status_message(None, None, false, 1, 250, 0);
        assert!(status.contains("Channel: Not set"));
        assert!(status.contains("**Off**"));
        assert!(status.contains("**1/250**"));
    }

    #[test]
    fn test_build_status_message_configured() {
        let status = build_status_message(Some("<#7>"), Some("21:00"), true, 12, 250, 3);
        assert!(status.contains("Channel: <#7>"));
        assert!(status.contains("**21:00**"));
        assert!(status.contains("**On**"));
        assert!(status.contains("**12/250**"));
        assert!(status.contains("**3**"));
    }
}
