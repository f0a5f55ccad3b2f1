use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Display format for news timestamps.
pub const DISPLAY_FORMAT: &str = "%m-%d %H:%M";

const BEIJING_OFFSET_SECS: i32 = 8 * 3600;

fn beijing() -> FixedOffset {
    FixedOffset::east_opt(BEIJING_OFFSET_SECS).expect("UTC+8 is a valid offset")
}

pub fn display_time<Tz: TimeZone>(moment: &DateTime<Tz>) -> String {
    moment
        .with_timezone(&beijing())
        .format(DISPLAY_FORMAT)
        .to_string()
}

/// Convert a feed timestamp to display time. RFC 3339 strings keep their
/// offset; a bare `YYYY-MM-DDTHH:MM:SS` prefix is taken as UTC. Anything
/// else falls back to `now`.
pub fn display_feed_time(raw: &str, now: DateTime<Utc>) -> String {
    let raw = raw.trim();
    if let Ok(moment) = DateTime::parse_from_rfc3339(raw) {
        return display_time(&moment);
    }

    match raw
        .get(..19)
        .and_then(|prefix| NaiveDateTime::parse_from_str(prefix, "%Y-%m-%dT%H:%M:%S").ok())
    {
        Some(naive) => display_time(&naive.and_utc()),
        None => {
            if !raw.is_empty() {
                debug!("Unparseable feed time `{}`, using now", raw);
            }
            display_time(&now)
        }
    }
}

pub fn display_unix_time(seconds: i64, now: DateTime<Utc>) -> String {
    match DateTime::from_timestamp(seconds, 0) {
        Some(moment) if seconds > 0 => display_time(&moment),
        _ => display_time(&now),
    }
}
