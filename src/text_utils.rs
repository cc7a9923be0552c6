use std::ops::Index;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses `YYYY-MM-DD HH:MM:SS[.fff]`. A missing time part means midnight.
pub fn parse_date_time(buf: &str) -> Result<NaiveDateTime, String> {
    lazy_static! {
        static ref DATE_TIME_REGEX: Regex = Regex::new(
            r#"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[ T](\d{1,2}):(\d{1,2}):(\d{1,2})(\.\d{0,3})?)?$"#
        ).unwrap();
    }

    let Some(caps) = DATE_TIME_REGEX.captures(buf.trim()) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);

    let y: i32 = to_i32(caps.index(1))?;
    let m: u32 = to_u32(caps.index(2))?;
    let d: u32 = to_u32(caps.index(3))?;

    let Some(date) = NaiveDate::from_ymd_opt(y, m, d) else {
        return Err(format!("Invalid calendar date {}", buf));
    };

    let time = match (caps.get(4), caps.get(5), caps.get(6)) {
        (Some(h), Some(mn), Some(s)) => {
            let (h, mn, s) = (to_u32(h.as_str())?, to_u32(mn.as_str())?, to_u32(s.as_str())?);
            NaiveTime::from_hms_opt(h, mn, s).ok_or_else(|| format!("Invalid time of day {}", buf))?
        }
        _ => NaiveTime::from_hms_opt(0, 0, 0).ok_or_else(|| format!("Invalid time of day {}", buf))?,
    };

    Ok(NaiveDateTime::new(date, time))
}

/// Accepts everything `parse_date_time` does plus RFC 3339 timestamps.
/// For RFC 3339 the wall-clock time written in the string is kept.
pub fn parse_published_at(buf: &str) -> Result<NaiveDateTime, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(buf.trim()) {
        return Ok(dt.naive_local());
    }
    parse_date_time(buf)
}
