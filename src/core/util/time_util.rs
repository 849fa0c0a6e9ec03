use chrono::{DateTime, Utc};

pub struct TimeUtil;

impl TimeUtil {
    /// Age of an object as shown in the AGE column, e.g. `5m30s`, `3h`, `12d`.
    pub fn age(created: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
        match created {
            Some(ts) => Self::human_duration((now - ts).num_seconds()),
            None => "<unknown>".to_string(),
        }
    }

    /// Rounds a duration in seconds to at most two significant units.
    pub fn human_duration(seconds: i64) -> String {
        if seconds < -1 {
            return "<invalid>".to_string();
        }
        if seconds < 0 {
            return "0s".to_string();
        }
        if seconds < 60 * 2 {
            return format!("{}s", seconds);
        }

        let minutes = seconds / 60;
        if minutes < 10 {
            let s = seconds % 60;
            return if s == 0 {
                format!("{}m", minutes)
            } else {
                format!("{}m{}s", minutes, s)
            };
        }
        if minutes < 60 * 3 {
            return format!("{}m", minutes);
        }

        let hours = minutes / 60;
        if hours < 8 {
            let m = minutes % 60;
            return if m == 0 {
                format!("{}h", hours)
            } else {
                format!("{}h{}m", hours, m)
            };
        }
        if hours < 48 {
            return format!("{}h", hours);
        }
        if hours < 24 * 8 {
            let h = hours % 24;
            return if h == 0 {
                format!("{}d", hours / 24)
            } else {
                format!("{}d{}h", hours / 24, h)
            };
        }
        if hours < 24 * 365 * 2 {
            return format!("{}d", hours / 24);
        }
        if hours < 24 * 365 * 8 {
            let d = (hours / 24) % 365;
            return if d == 0 {
                format!("{}y", hours / 24 / 365)
            } else {
                format!("{}y{}d", hours / 24 / 365, d)
            };
        }
        format!("{}y", hours / 24 / 365)
    }
}
