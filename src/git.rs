use anyhow::{Context, Result};
use git2::{Repository, Signature};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::arguments::GitMode;

pub struct GitTracker {
    pub repository: Repository,
}

impl GitTracker {
    /// Opens the repository containing the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let repository = Repository::discover(path)
            .with_context(|| format!("Failed to find git repository at {:?}", path))?;

        debug!("Opened repository at {:?}", repository.path());

        Ok(GitTracker { repository })
    }

    /// Gets the repository signature from local git config
    fn get_signature(&self) -> Result<Signature<'_>> {
        self.repository.signature()
            .context("Failed to get git signature. Please configure user.name and user.email in git config")
    }

    /// Stages the given files in the repository
    pub fn stage_paths(&self, paths: &[PathBuf]) -> Result<()> {
        let workdir = self
            .repository
            .workdir()
            .context("Repository has no working directory")?
            .canonicalize()?;
        let mut index = self.repository.index()?;

        for path in paths {
            let path = path.canonicalize()?;
            let relative = path
                .strip_prefix(&workdir)
                .with_context(|| format!("'{}' is outside the repository", path.display()))?;
            index.add_path(relative)?;
        }
        index.write()?;

        debug!("Staged {} file(s)", paths.len());
        Ok(())
    }

    /// Creates a commit with the given message
    pub fn create_commit(&self, message: &str) -> Result<git2::Oid> {
        info!("Creating commit: {}", message.lines().next().unwrap_or(message));

        let mut index = self.repository.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repository.find_tree(tree_id)?;

        let sig = self.get_signature()?;

        let parent_commit = match self.repository.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => {
                warn!("No parent commit found - this will be the initial commit");
                None
            }
        };

        let parents: Vec<&git2::Commit> = parent_commit.iter().collect();

        let commit_id = self.repository.commit(
            Some("HEAD"),
            &sig,
            &sig,
            message,
            &tree,
            &parents,
        )?;

        info!("Created commit: {}", commit_id);
        Ok(commit_id)
    }

    /// Stages the updated manifests and commits them according to the GitMode
    pub fn execute_git_mode(&self, mode: GitMode, message: &str, files: &[PathBuf]) -> Result<()> {
        if mode == GitMode::None {
            debug!("GitMode::None - skipping git operations");
            return Ok(());
        }

        if files.is_empty() {
            warn!("No projects were updated, skipping commit");
            return Ok(());
        }

        self.stage_paths(files)?;

        // Check if there are changes to commit
        let statuses = self.repository.statuses(None)?;
        if statuses.is_empty() {
            warn!("No changes to commit");
            return Ok(());
        }

        self.create_commit(message)?;

        Ok(())
    }
}
