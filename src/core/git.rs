//! Repository status collection.
//!
//! This module reads the state shown in a prompt through the [`GitRepo`]
//! struct, a thin wrapper over `git2`. Being outside a repository is not an
//! error: the collector reports it as "no status" so the prompt renders empty.
//!
//! # Public API
//! - [`GitRepo`]: Opened repository with status and branch queries
//! - [`read_status`]: Discover the repository for a path and collect its status
//!
//! # Counting rules
//! - **Conflicts**: conflicted entries count only as conflicts
//! - **Untracked**: new worktree files that are not in the index
//! - **Staged**: any index-side change
//! - **Modified**: any worktree-side change to a tracked file

use crate::core::{error::Result, status::StatusRecord};
use git2::{ErrorCode, Repository, Status, StatusOptions};
use std::path::Path;

const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Branch names are arbitrary bytes; show invalid UTF-8 lossily instead of failing
fn branch_display_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

pub struct GitRepo {
    repo: Repository,
}

/// Collect the status of the repository containing `path`.
///
/// Returns `Ok(None)` when `path` is not inside a repository with a work tree.
pub fn read_status<P: AsRef<Path>>(path: P) -> Result<Option<StatusRecord>> {
    match GitRepo::discover(path)? {
        Some(repo) => repo.read_status().map(Some),
        None => Ok(None),
    }
}

impl GitRepo {
    /// Open the repository containing `path`; "no repository here" yields `Ok(None)`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        match Repository::discover(path.as_ref()) {
            Ok(repo) if repo.is_bare() => {
                log::debug!("{} is a bare repository", repo.path().display());
                Ok(None)
            }
            Ok(repo) => Ok(Some(GitRepo { repo })),
            Err(e) if e.code() == ErrorCode::NotFound => {
                log::debug!("no repository at {}", path.as_ref().display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read everything a prompt can show
    pub fn read_status(&self) -> Result<StatusRecord> {
        let mut status = StatusRecord {
            branch: self.get_current_branch()?,
            sha: self.get_head_sha(),
            ..Default::default()
        };
        self.count_files(&mut status)?;
        if let Some((ahead, behind)) = self.get_ahead_behind()? {
            status.ahead = ahead;
            status.behind = behind;
        }

        log::debug!("collected status: {status:?}");
        Ok(status)
    }

    fn count_files(&self, status: &mut StatusRecord) -> Result<()> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.include_ignored(false);
        opts.renames_head_to_index(true);

        let index_changes = Status::INDEX_NEW
            | Status::INDEX_MODIFIED
            | Status::INDEX_DELETED
            | Status::INDEX_RENAMED
            | Status::INDEX_TYPECHANGE;
        let worktree_changes = Status::WT_MODIFIED
            | Status::WT_DELETED
            | Status::WT_RENAMED
            | Status::WT_TYPECHANGE;

        let statuses = self.repo.statuses(Some(&mut opts))?;
        for entry in statuses.iter() {
            let flags = entry.status();

            if flags.contains(Status::CONFLICTED) {
                status.conflicts += 1;
                continue;
            }
            if flags.contains(Status::WT_NEW) {
                status.untracked += 1;
                continue;
            }
            if flags.intersects(index_changes) {
                status.staged += 1;
            }
            if flags.intersects(worktree_changes) {
                status.modified += 1;
            }
        }

        Ok(())
    }

    /// Short name of the checked out branch, empty when HEAD is detached
    pub fn get_current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(branch_display_name(head.shorthand_bytes())),
            Ok(_) => Ok(String::new()),
            // No commits yet: HEAD still names the branch it will create.
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix(BRANCH_REF_PREFIX))
                    .unwrap_or_default()
                    .to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Full hash of the HEAD commit, empty before the first commit
    pub fn get_head_sha(&self) -> String {
        self.repo
            .head()
            .ok()
            .and_then(|head| head.target())
            .map(|oid| oid.to_string())
            .unwrap_or_default()
    }

    /// Get ahead/behind information for the current branch relative to its upstream
    /// Returns (ahead, behind) counts, or None if no upstream is set
    pub fn get_ahead_behind(&self) -> Result<Option<(usize, usize)>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(_) => return Ok(None),
        };
        if !head.is_branch() {
            return Ok(None);
        }

        let local_oid = match head.target() {
            Some(oid) => oid,
            None => return Ok(None),
        };

        let branch_name = match head.shorthand() {
            Some(name) => name,
            None => return Ok(None),
        };

        let local_branch = match self.repo.find_branch(branch_name, git2::BranchType::Local) {
            Ok(branch) => branch,
            Err(_) => return Ok(None),
        };

        let upstream_branch = match local_branch.upstream() {
            Ok(upstream) => upstream,
            Err(_) => return Ok(None), // No upstream configured
        };

        let upstream_oid = match upstream_branch.get().target() {
            Some(oid) => oid,
            None => return Ok(None),
        };

        match self.repo.graph_ahead_behind(local_oid, upstream_oid) {
            Ok((ahead, behind)) => Ok(Some((ahead, behind))),
            Err(e) => {
                log::warn!("Failed to compare {branch_name} with its upstream: {e}");
                Ok(None)
            }
        }
    }
}
