use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// Below `max_width` pixels of viewport the image takes `size`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Breakpoint {
    pub max_width: u32,
    pub size: String,
}

/// Value of the `sizes` attribute of a responsive image.
#[derive(Debug, Clone, PartialEq)]
pub struct SizesHint {
    breakpoints: Vec<Breakpoint>,
    fallback: String,
}

impl SizesHint {
    pub fn new(mut breakpoints: Vec<Breakpoint>, fallback: &str) -> Self {
        // Browsers pick the first matching media condition
        breakpoints.sort_by_key(|b| b.max_width);
        SizesHint {
            breakpoints,
            fallback: fallback.to_string(),
        }
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for SizesHint {
    fn default() -> Self {
        SizesHint::new(default_breakpoints(), DEFAULT_FALLBACK)
    }
}

pub const DEFAULT_FALLBACK: &str = "33vw";

pub fn default_breakpoints() -> Vec<Breakpoint> {
    vec![
        Breakpoint { max_width: 640, size: "100vw".to_string() },
        Breakpoint { max_width: 1024, size: "50vw".to_string() },
    ]
}

impl Display for SizesHint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bp in self.breakpoints.iter() {
            write!(f, "(max-width: {}px) {}, ", bp.max_width, bp.size)?;
        }
        write!(f, "{}", self.fallback)
    }
}
