//! Human-readable duration rendering for timers and warnings.

/// Render a second count as `1d, 2h, 3m` style text.
///
/// Seconds are only shown for sub-day durations; zero or negative input
/// renders as `0s`.
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return "0s".to_string();
    }

    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{days}d"));
        if hours > 0 || minutes > 0 {
            out.push_str(", ");
        }
    }
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
        if minutes > 0 {
            out.push_str(", ");
        }
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
        if secs > 0 && days == 0 {
            out.push_str(", ");
        }
    }
    if secs > 0 && days == 0 {
        out.push_str(&format!("{secs}s"));
    }

    out
}
