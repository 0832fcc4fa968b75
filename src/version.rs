//! Dotted version numbers.
//!
//! Station packages report versions such as `0.5.2` or `1.2.3rc1`. A
//! [`Version`] keeps the numeric segments as a tuple and orders versions by
//! comparing those tuples lexicographically.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new("[A-Za-z]").unwrap());

/// A version as an ordered tuple of non-negative integers.
///
/// Segments that are not plain numbers are reduced to their first run of
/// digits (`3rc1` becomes `3`), or to `0` if they contain none.
///
/// # Example
///
/// ```
/// use mss_health::version::Version;
///
/// assert_eq!(Version::parse("1.2.3rc1").segments(), &[1, 2, 3]);
/// assert!(Version::parse("1.2.0") < Version::parse("1.2.3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Version(Vec<u64>);

impl Version {
    /// Parse a dotted version string. Never fails.
    pub fn parse(s: &str) -> Self {
        Self(s.trim().split('.').map(parse_segment).collect())
    }

    /// Build a version from its segments.
    pub fn from_segments(segments: Vec<u64>) -> Self {
        Self(segments)
    }

    /// The numeric segments.
    pub fn segments(&self) -> &[u64] {
        &self.0
    }
}

fn parse_segment(segment: &str) -> u64 {
    if !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()) {
        return segment.parse().unwrap_or(0);
    }

    LETTERS
        .split(segment)
        .find(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
        .and_then(|part| part.parse().ok())
        .unwrap_or(0)
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}
