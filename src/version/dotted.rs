//! Four-component dotted version numbers ("102.0.5005.61")

use std::fmt;
use std::str::FromStr;

use crate::version::error::VersionError;

/// Number of dot-separated components in a valid version string
const COMPONENT_COUNT: usize = 4;

/// A browser version made of four non-negative integers.
///
/// Ordering is plain lexicographic over (major, minor, build, patch). This is
/// not semver precedence: there are no pre-release or build-metadata rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DottedVersion {
    major: u64,
    minor: u64,
    build: u64,
    patch: u64,
}

impl DottedVersion {
    pub const fn new(major: u64, minor: u64, build: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            build,
            patch,
        }
    }

    /// Parse a strict "A.B.C.D" string.
    ///
    /// The input is not trimmed; callers strip newlines before parsing.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != COMPONENT_COUNT {
            return Err(VersionError::ComponentCount {
                input: text.to_string(),
                found: parts.len(),
            });
        }

        let component = |part: &str| -> Result<u64, VersionError> {
            // u64::from_str accepts a leading '+', which is not a valid component
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionError::InvalidComponent {
                    input: text.to_string(),
                    component: part.to_string(),
                });
            }
            part.parse().map_err(|_| VersionError::InvalidComponent {
                input: text.to_string(),
                component: part.to_string(),
            })
        };

        Ok(Self {
            major: component(parts[0])?,
            minor: component(parts[1])?,
            build: component(parts[2])?,
            patch: component(parts[3])?,
        })
    }

    /// Returns true if `self` is strictly newer than `other`
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn build(&self) -> u64 {
        self.build
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }
}

impl FromStr for DottedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DottedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.patch
        )
    }
}
