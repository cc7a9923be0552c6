use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::text_utils::parse_published_at;

/// Publish timestamp as found in post records. Deserializes from the
/// string forms accepted by `parse_published_at`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct PublishedAt(pub NaiveDateTime);

impl<'de> Deserialize<'de> for PublishedAt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let value = String::deserialize(deserializer)?;
        PublishedAt::from_str(&value).map_err(Error::custom)
    }
}

impl FromStr for PublishedAt {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let naive = parse_published_at(s)?;
        Ok(Self(naive))
    }
}

impl Display for PublishedAt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
