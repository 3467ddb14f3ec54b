use chrono::{DateTime, Local, TimeZone};

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const STORY_ID_FORMAT: &str = "story_%Y%m%d_%H%M%S";

pub fn now() -> DateTime<Local> {
    Local::now()
}

/// ISO-8601 local time without an offset, microsecond precision.
pub fn iso_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(ISO_FORMAT).to_string()
}

/// `story_YYYYMMDD_HHMMSS`. Two saves within the same second share an id.
pub fn story_id<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(STORY_ID_FORMAT).to_string()
}
