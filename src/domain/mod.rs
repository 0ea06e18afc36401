//! Domain logic - pure version arithmetic independent of git operations

pub mod advancer;
pub mod version;

pub use advancer::{advance, latest, next, Advancement};
pub use version::{Version, VersionBump};
