use crate::error::{GitBumpError, Result};
use crate::git::Repository;
use std::cell::{Cell, RefCell};

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: RefCell<Vec<String>>,
    read_only: Cell<bool>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository that already carries `tags`
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockRepository {
            tags: RefCell::new(tags.into_iter().map(Into::into).collect()),
            read_only: Cell::new(false),
        }
    }

    /// Add a tag directly, bypassing duplicate checks
    pub fn add_tag(&self, name: impl Into<String>) {
        self.tags.borrow_mut().push(name.into());
    }

    /// Make every subsequent `create_tag` fail as if the repository were
    /// not writable
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Snapshot of the current tags, in insertion order
    pub fn tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        if self.read_only.get() {
            return Err(GitBumpError::tag(format!(
                "Cannot create tag '{}': repository is read-only",
                name
            )));
        }

        let mut tags = self.tags.borrow_mut();
        if tags.iter().any(|t| t == name) {
            return Err(GitBumpError::tag_exists(name));
        }
        tags.push(name.to_string());
        Ok(())
    }
}
