//! Tag store abstraction layer
//!
//! This module provides a trait-based abstraction over the two repository
//! operations git-bump needs, so that version arithmetic and the workflow can
//! be exercised without a real repository.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! ```rust
//! # use git_bump::git::{MockRepository, Repository};
//! let repo = MockRepository::with_tags(["v1.0.0", "v1.1.0"]);
//! repo.create_tag("v1.2.0").unwrap();
//! assert_eq!(repo.list_tags().unwrap().len(), 3);
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Repository operations used by the bump workflow
///
/// Implementations should map underlying errors (like `git2::Error`) to the
/// appropriate [crate::error::GitBumpError] variants.
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// No particular order is guaranteed and no filtering is applied; tags
    /// that are not release versions are returned too.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Create a tag named `name` on the current HEAD commit
    ///
    /// # Returns
    /// * `Ok(())` - Tag created
    /// * `Err(GitBumpError::TagExists)` - A tag with this name already exists
    /// * `Err` - The repository cannot be written or HEAD cannot be resolved
    fn create_tag(&self, name: &str) -> Result<()>;
}

impl<R: Repository + ?Sized> Repository for &R {
    fn list_tags(&self) -> Result<Vec<String>> {
        (**self).list_tags()
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        (**self).create_tag(name)
    }
}
