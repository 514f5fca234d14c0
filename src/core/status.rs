//! Repository status record consumed by the prompt renderer.
//!
//! [`StatusRecord`] is the fixed set of values a prompt can show. It is filled
//! in by the collector in [`crate::core::git`] and is never modified while a
//! prompt is being rendered.
//!
//! # Public API
//! - [`StatusRecord`]: Branch, hash and file/commit counters
//! - [`Placeholder`]: The `%` data selectors understood by the format language

use serde::{Deserialize, Serialize};

/// Number of hash characters shown when HEAD is not on a branch.
pub const SHORT_SHA_LEN: usize = 7;

/// Parsed status for the current state of a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Branch name, empty when HEAD is detached
    pub branch: String,
    /// Full commit hash, empty before the first commit
    pub sha: String,
    pub untracked: usize,
    pub modified: usize,
    pub staged: usize,
    pub conflicts: usize,
    pub ahead: usize,
    pub behind: usize,
}

impl StatusRecord {
    /// Branch name, or the abbreviated hash when there is no branch
    pub fn head(&self) -> &str {
        if !self.branch.is_empty() {
            return &self.branch;
        }
        match self.sha.char_indices().nth(SHORT_SHA_LEN) {
            Some((end, _)) => &self.sha[..end],
            None => &self.sha,
        }
    }

    /// Counter value behind a placeholder, `None` for [`Placeholder::Head`]
    pub fn count(&self, placeholder: Placeholder) -> Option<usize> {
        match placeholder {
            Placeholder::Head => None,
            Placeholder::Staged => Some(self.staged),
            Placeholder::Behind => Some(self.behind),
            Placeholder::Ahead => Some(self.ahead),
            Placeholder::Conflicts => Some(self.conflicts),
            Placeholder::Modified => Some(self.modified),
            Placeholder::Untracked => Some(self.untracked),
        }
    }
}

/// Data selectors that follow `%` in a format string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Head,
    Staged,
    Behind,
    Ahead,
    Conflicts,
    Modified,
    Untracked,
}

impl Placeholder {
    /// Every placeholder in help-text order
    pub const ALL: [Placeholder; 7] = [
        Placeholder::Head,
        Placeholder::Staged,
        Placeholder::Behind,
        Placeholder::Ahead,
        Placeholder::Conflicts,
        Placeholder::Modified,
        Placeholder::Untracked,
    ];

    pub fn from_selector(selector: char) -> Option<Self> {
        match selector {
            'h' => Some(Placeholder::Head),
            's' => Some(Placeholder::Staged),
            'b' => Some(Placeholder::Behind),
            'a' => Some(Placeholder::Ahead),
            'c' => Some(Placeholder::Conflicts),
            'm' => Some(Placeholder::Modified),
            'u' => Some(Placeholder::Untracked),
            _ => None,
        }
    }

    pub fn selector(&self) -> char {
        match self {
            Placeholder::Head => 'h',
            Placeholder::Staged => 's',
            Placeholder::Behind => 'b',
            Placeholder::Ahead => 'a',
            Placeholder::Conflicts => 'c',
            Placeholder::Modified => 'm',
            Placeholder::Untracked => 'u',
        }
    }

    /// Human-readable description for help output
    pub fn description(&self) -> &'static str {
        match self {
            Placeholder::Head => "Current branch or SHA1",
            Placeholder::Staged => "Number of files staged",
            Placeholder::Behind => "Number of commits behind remote",
            Placeholder::Ahead => "Number of commits ahead of remote",
            Placeholder::Conflicts => "Number of conflicts",
            Placeholder::Modified => "Number of files modified",
            Placeholder::Untracked => "Number of untracked files",
        }
    }
}
