//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories with specific file states
//! and configurations to test various git scenarios consistently.

#![allow(dead_code)]

use super::repository::*;
use gitprompt::core::error::Result;

/// Scenario: committed files plus 1 staged, 1 modified and 2 untracked files
pub fn create_dirty_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "tracked.txt", "one\n")?;
    create_file(&repo.path, "staged.txt", "one\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "tracked.txt", "two\n")?;
    create_file(&repo.path, "staged.txt", "two\n")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "new1.txt", "new\n")?;
    create_file(&repo.path, "new2.txt", "new\n")?;

    Ok(repo)
}

/// Scenario: `main` is 2 commits ahead of and 1 commit behind its upstream `base`
pub fn create_diverged_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    git(&repo.path, &["branch", "base"])?;
    commit_file(&repo.path, "main1.txt", "main 1\n")?;
    commit_file(&repo.path, "main2.txt", "main 2\n")?;

    git(&repo.path, &["checkout", "base"])?;
    commit_file(&repo.path, "base.txt", "base\n")?;
    git(&repo.path, &["checkout", "main"])?;

    git(&repo.path, &["branch", "--set-upstream-to=base", "main"])?;

    Ok(repo)
}

/// Scenario: a merge stopped on one conflicting file
pub fn create_conflicted_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    git(&repo.path, &["checkout", "-b", "other"])?;
    commit_file(&repo.path, "initial.txt", "theirs\n")?;
    git(&repo.path, &["checkout", "main"])?;
    commit_file(&repo.path, "initial.txt", "ours\n")?;
    git(&repo.path, &["merge", "other"])?;

    Ok(repo)
}
