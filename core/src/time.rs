//! Time related utils.

use crate::{Error, Result};
use chrono::{NaiveDateTime, Utc};

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Http date format: "Fri, 01 Jan 2021 00:00:00 GMT", the RFC 1123 form
/// used by the `Date` header.
const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Create a datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into http date: `Fri, 01 Jan 2021 00:00:00 GMT`
pub fn format_http_date(t: DateTime) -> String {
    t.format(HTTP_DATE).to_string()
}

/// Parse http date like `Fri, 01 Jan 2021 00:00:00 GMT`.
pub fn parse_http_date(s: &str) -> Result<DateTime> {
    let t = NaiveDateTime::parse_from_str(s, HTTP_DATE)
        .map_err(|e| Error::unexpected(format!("parse http date {s:?} failed")).with_source(e))?;
    Ok(t.and_utc())
}
