//! Event classification used by callers feeding the aggregator.

use std::fmt;
use std::str::FromStr;

use crate::error::MarqueeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Movie,
    Tv,
    Multi,
}

impl SearchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::Movie => "movie",
            SearchKind::Tv => "tv",
            SearchKind::Multi => "multi",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = MarqueeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "movie" => Ok(SearchKind::Movie),
            "tv" => Ok(SearchKind::Tv),
            "multi" => Ok(SearchKind::Multi),
            _ => Err(MarqueeError::UnknownSearchKind(s.to_string())),
        }
    }
}

/// Request category derived from reserved path prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointCategory {
    /// `/auth` and everything below it.
    Auth,
    /// `/watch-together` and everything below it.
    Collaboration,
    General,
}

impl EndpointCategory {
    pub fn classify(endpoint: &str) -> Self {
        if under_prefix(endpoint, "/auth") {
            EndpointCategory::Auth
        } else if under_prefix(endpoint, "/watch-together") {
            EndpointCategory::Collaboration
        } else {
            EndpointCategory::General
        }
    }
}

fn under_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Responses in `[200, 400)` count as successful.
#[inline]
pub fn is_success_status(status: u16) -> bool {
    (200..400).contains(&status)
}
