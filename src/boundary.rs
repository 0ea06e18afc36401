use std::fmt;

use crate::domain::Version;

/// Non-fatal conditions met while working out the next version.
/// These are reported to the user but never stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The repository has no release tags; counting starts from a baseline
    NoVersionTags { baseline: Version },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoVersionTags { baseline } => {
                write!(
                    f,
                    "No release tags found, starting from {}",
                    baseline
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_version_tags_display() {
        let warning = BoundaryWarning::NoVersionTags {
            baseline: Version::default(),
        };
        assert_eq!(
            warning.to_string(),
            "No release tags found, starting from v0.0.0"
        );
    }
}
