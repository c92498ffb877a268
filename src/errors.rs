use std::path::PathBuf;

use thiserror::Error;

/// Domain error taxonomy for repository operations (spec §7).
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("the file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("repository is not initialized, run `init` first")]
    NotInitialized,

    #[error("nothing staged for commit")]
    EmptyStagingArea,

    #[error("branch not found: {0}")]
    BranchNotFound(String),

    #[error("commit not found: {0}")]
    CommitNotFound(String),

    #[error("branch {0} has no commits")]
    NoCommits(String),

    #[error("object not found: {0}")]
    ObjectNotFound(String),
}
