use std::fmt::Write;

use chrono::{NaiveDate, NaiveDateTime};

use crate::card::sizes::SizesHint;

pub mod card_renderer;
pub mod image_renderer;
pub mod link_renderer;
pub mod sizes;

pub const DEFAULT_PUBLIC_PREFIX: &str = "../public";
pub const DEFAULT_DATE_FORMAT: &str = "%B %d, %Y";

/// chrono strftime pattern checked up front, so formatting a post date
/// never hits an invalid specifier.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePattern(String);

impl DatePattern {
    pub fn new(pattern: &str) -> Result<DatePattern, String> {
        let probe = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| "Unable to build probe date".to_string())?;

        let mut out = String::new();
        if write!(out, "{}", probe.format(pattern)).is_err() {
            return Err(format!("Invalid date format '{}'", pattern));
        }
        Ok(DatePattern(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn format(&self, date: &NaiveDateTime) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.0)) {
            Ok(()) => out,
            Err(_) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        DatePattern(DEFAULT_DATE_FORMAT.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardOptions {
    /// Removed from image file paths to get the url they are served under
    pub public_prefix: String,
    pub date_pattern: DatePattern,
    pub sizes: SizesHint,
}

impl Default for CardOptions {
    fn default() -> Self {
        CardOptions {
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_string(),
            date_pattern: DatePattern::default(),
            sizes: SizesHint::default(),
        }
    }
}

/// Only the first occurrence is removed. Paths without the prefix are kept.
pub fn strip_public_prefix(file_path: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return file_path.to_string();
    }
    file_path.replacen(prefix, "", 1)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    #[test]
    fn test_strip_public_prefix() {
        assert_eq!(strip_public_prefix("../public/img/post1.jpg", "../public"), "/img/post1.jpg");
        assert_eq!(strip_public_prefix("/img/post1.jpg", "../public"), "/img/post1.jpg");
        assert_eq!(strip_public_prefix("../public/a/../public/b.jpg", "../public"), "/a/../public/b.jpg");
        assert_eq!(strip_public_prefix("../public/img.jpg", ""), "../public/img.jpg");
    }

    #[test]
    fn test_date_pattern_default() {
        let date = NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        );
        assert_eq!(DatePattern::default().format(&date), "January 05, 2024");
        assert_eq!(DatePattern::new("%d/%m/%Y").unwrap().format(&date), "05/01/2024");
    }

    #[test]
    fn test_date_pattern_invalid() {
        assert!(DatePattern::new("%Q").is_err());
        // Needs a timezone, which a naive date does not have
        assert!(DatePattern::new("%z").is_err());
        assert_eq!(DatePattern::new("%Y").unwrap().as_str(), "%Y");
    }
}
