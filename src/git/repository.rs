use crate::config::TagConfig;
use crate::error::{GitBumpError, Result};
use git2::{ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    tag_config: TagConfig,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            GitBumpError::repository(format!(
                "Not in a git repository ({}): {}",
                path.display(),
                e.message()
            ))
        })?;

        Ok(Self::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo,
            tag_config: TagConfig::default(),
        }
    }

    /// Use `tag_config` to decide how new tags are written
    pub fn with_tag_config(mut self, tag_config: TagConfig) -> Self {
        self.tag_config = tag_config;
        self
    }

    fn head_commit(&self) -> Result<git2::Commit<'_>> {
        let head = self.repo.head().map_err(|e| {
            GitBumpError::tag(format!("HEAD does not point to a commit: {}", e.message()))
        })?;
        Ok(head.peel_to_commit()?)
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;
        let tags: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();

        tracing::debug!(count = tags.len(), "listed repository tags");
        Ok(tags)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.head_commit()?;

        let created = if self.tag_config.annotated {
            let tagger = self.repo.signature().map_err(|e| {
                GitBumpError::tag(format!(
                    "Cannot determine tagger identity: {}",
                    e.message()
                ))
            })?;
            let message = self.tag_config.render_message(name);
            self.repo
                .tag(name, head.as_object(), &tagger, &message, false)
        } else {
            self.repo.tag_lightweight(name, head.as_object(), false)
        };

        match created {
            Ok(oid) => {
                tracing::debug!(
                    tag = name,
                    %oid,
                    annotated = self.tag_config.annotated,
                    "created tag"
                );
                Ok(())
            }
            Err(e) if e.code() == ErrorCode::Exists => Err(GitBumpError::tag_exists(name)),
            Err(e) => Err(GitBumpError::tag(format!(
                "Cannot create tag '{}': {}",
                name,
                e.message()
            ))),
        }
    }
}
