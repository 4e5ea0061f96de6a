//! Version parsing for `command_version` conditions.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// First `major.minor[.patch]` occurrence in free text.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

/// A `major.minor.patch` version; missing components are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a version from its components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `1`, `1.2` or `1.2.3`, with an optional leading `v`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().trim_start_matches('v');
        let mut parts = s.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        let patch = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(major, minor, patch))
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid version: {}", s))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Extract the first version number from command output.
///
/// `git version 2.43.0` yields `2.43.0`; `OpenSSL 3.0` yields `3.0.0`.
pub fn extract_version(output: &str) -> Option<Version> {
    let caps = VERSION_REGEX.captures(output)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    let patch = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    Some(Version::new(major, minor, patch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_short_forms() {
        assert_eq!(Version::parse("7"), Some(Version::new(7, 0, 0)));
        assert_eq!(Version::parse("7.3"), Some(Version::new(7, 3, 0)));
        assert_eq!(Version::parse("v7.3.12"), Some(Version::new(7, 3, 12)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Version::parse(""), None);
        assert_eq!(Version::parse("seven"), None);
        assert_eq!(Version::parse("1.2.3.4"), None);
        assert_eq!(Version::parse("1.x"), None);
    }

    #[test]
    fn ordering_is_component_wise() {
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 9));
        assert!(Version::new(2, 0, 0) > Version::new(1, 99, 99));
        assert!(Version::new(7, 3, 0) >= Version::parse("7.3").unwrap());
    }

    #[test]
    fn extract_from_typical_outputs() {
        assert_eq!(
            extract_version("git version 2.43.0"),
            Some(Version::new(2, 43, 0))
        );
        assert_eq!(
            extract_version("PHP 8.1.2-1ubuntu2.14 (cli) (built: Aug 18 2023)"),
            Some(Version::new(8, 1, 2))
        );
        assert_eq!(extract_version("OpenSSL 3.0"), Some(Version::new(3, 0, 0)));
    }

    #[test]
    fn extract_without_version_is_none() {
        assert_eq!(extract_version("command not found"), None);
    }

    #[test]
    fn from_str_reports_input() {
        let err = "abc".parse::<Version>().unwrap_err();
        assert!(err.contains("abc"));
    }

    #[test]
    fn display_is_full_triple() {
        assert_eq!(Version::new(1, 2, 0).to_string(), "1.2.0");
    }
}
