use chrono::{DateTime, Utc};

/// Render a publish timestamp as a relative-time label.
///
/// Day counts come from rounding `seconds / 86400`; anything over seven
/// rounded days switches to whole weeks. Below one rounded day the label
/// falls back through hours and minutes to `"Just now"`.
pub fn how_long_ago(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - published).num_seconds();
    let days = (seconds as f64 / 86_400.0).round() as i64;

    if days > 7 {
        let weeks = days / 7;
        format!("{} {} ago", weeks, if weeks == 1 { "week" } else { "weeks" })
    } else if days > 0 {
        format!("{} {} ago", days, if days == 1 { "day" } else { "days" })
    } else if seconds >= 3600 {
        let hours = seconds / 3600;
        format!("{} {} ago", hours, if hours == 1 { "hour" } else { "hours" })
    } else if seconds >= 60 {
        let minutes = seconds / 60;
        format!("{} {} ago", minutes, if minutes == 1 { "minute" } else { "minutes" })
    } else {
        "Just now".to_string()
    }
}
