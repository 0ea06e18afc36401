use crate::error::{GitBumpError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

/// Accepted tag shape. Anything else, including pre-release or build
/// suffixes, is not a release tag.
const TAG_PATTERN: &str = r"^v(\d+)\.(\d+)\.(\d+)$";

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TAG_PATTERN).expect("tag pattern is a valid regex"))
}

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a release tag (e.g., "v1.2.3" -> Version(1,2,3)).
    ///
    /// Only the exact `vMAJOR.MINOR.PATCH` form is accepted. Returns `None`
    /// for anything else, including components that overflow `u64`.
    pub fn parse(tag: &str) -> Option<Self> {
        let captures = tag_regex().captures(tag)?;

        let major = captures[1].parse::<u64>().ok()?;
        let minor = captures[2].parse::<u64>().ok()?;
        let patch = captures[3].parse::<u64>().ok()?;

        Some(Version::new(major, minor, patch))
    }

    /// Bump version according to bump type, resetting lower components.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow =
            || GitBumpError::version(format!("cannot bump {} past {}", bump_type, self));

        let bumped = match bump_type {
            VersionBump::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        };

        Ok(bumped)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.major.cmp(&other.major) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.minor.cmp(&other.minor) {
            Ordering::Equal => {}
            ord => return ord,
        }
        self.patch.cmp(&other.patch)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component of the version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionBump {
    Major,
    Minor,
    #[default]
    Patch,
}

impl VersionBump {
    /// Resolve the bump part from command line flags. Major wins over minor;
    /// with neither set the bump is a patch.
    pub fn from_flags(major: bool, minor: bool) -> Self {
        if major {
            VersionBump::Major
        } else if minor {
            VersionBump::Minor
        } else {
            VersionBump::Patch
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(name)
    }
}
