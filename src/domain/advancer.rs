//! Picks the current release out of a tag listing and works out the next one.

use crate::domain::version::{Version, VersionBump};
use crate::error::Result;

/// Outcome of advancing a set of tags by one bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advancement {
    /// Highest release found, or `v0.0.0` when there was none
    pub current: Version,
    /// Version the new tag should carry
    pub next: Version,
    pub part: VersionBump,
    /// Whether `current` came from an actual tag
    pub has_release_tag: bool,
    /// Number of tags that were not release tags
    pub ignored: usize,
}

/// Highest release version among `tags`, ignoring anything that is not a
/// plain `vMAJOR.MINOR.PATCH` tag. Returns `v0.0.0` when nothing qualifies.
pub fn latest<I, S>(tags: I) -> Version
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    latest_release(tags).0.unwrap_or_default()
}

/// The version following `current` for the given bump part.
pub fn next(current: Version, part: VersionBump) -> Result<Version> {
    current.bump(part)
}

/// Run `latest` and `next` over a tag listing in one pass.
pub fn advance<I, S>(tags: I, part: VersionBump) -> Result<Advancement>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (found, ignored) = latest_release(tags);
    let current = found.unwrap_or_default();
    let next = next(current, part)?;

    Ok(Advancement {
        current,
        next,
        part,
        has_release_tag: found.is_some(),
        ignored,
    })
}

fn latest_release<I, S>(tags: I) -> (Option<Version>, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ignored = 0;
    let mut highest: Option<Version> = None;

    for tag in tags {
        let tag = tag.as_ref();
        match Version::parse(tag) {
            Some(version) => {
                if highest.map_or(true, |h| version > h) {
                    highest = Some(version);
                }
            }
            None => {
                tracing::debug!(tag, "ignoring tag that is not a release version");
                ignored += 1;
            }
        }
    }

    (highest, ignored)
}
