//! Time related utils.

use chrono::NaiveDateTime;
use chrono::Utc;

use crate::Error;

/// The datetime used by this crate, in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Returns the current UTC time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a datetime into date: "20220313"
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a datetime into ISO8601: "20220313T072004Z"
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Format a datetime into http date: "Sun, 06 Nov 1994 08:49:37 GMT"
///
/// ## Note
///
/// HTTP date is slightly different from RFC2822.
///
/// - Timezone is fixed to GMT.
/// - Day must be 2 digit.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse a datetime from ISO8601 basic format: "20220313T072004Z"
pub fn parse_iso8601(s: &str) -> crate::Result<DateTime> {
    Ok(NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%SZ")
        .map_err(|e| Error::date_invalid(format!("parse '{s}' as iso8601 failed")).with_source(e))?
        .and_utc())
}

/// Parse a datetime from RFC2822 format: "Tue, 27 Mar 2007 19:36:42 +0000"
pub fn parse_rfc2822(s: &str) -> crate::Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc2822(s)
        .map_err(|e| Error::date_invalid(format!("parse '{s}' as rfc2822 failed")).with_source(e))?
        .with_timezone(&Utc))
}

/// Parse a datetime from RFC3339 format: "2022-03-13T07:20:04Z"
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::date_invalid(format!("parse '{s}' as rfc3339 failed")).with_source(e))?
        .with_timezone(&Utc))
}
