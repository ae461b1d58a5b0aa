//! Error types for upsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The working directory is not inside a git work tree — the checkout
    /// step that should precede this tool was skipped or misconfigured.
    #[error("not a git work tree: {path} (run this tool inside a checked-out repository)")]
    NotAWorkTree { path: PathBuf },

    /// `GITHUB_REPOSITORY` was not set by the hosting context.
    #[error("GITHUB_REPOSITORY is not set; it must name the repository this run pushes to")]
    MissingRepository,

    /// No branch was given and no branch is currently checked out.
    #[error("could not resolve a branch to sync; pass --branch or check one out")]
    NoBranch,

    /// A required invocation parameter was empty.
    #[error("missing required input: {name}")]
    MissingInput { name: &'static str },

    /// The resolved branch is on the protected list.
    #[error("refusing to overwrite protected branch '{branch}'")]
    ProtectedBranch { branch: String },

    /// A ref did not resolve to a commit (e.g. the branch does not exist
    /// upstream).
    #[error("could not resolve '{refname}' to a commit")]
    UnresolvedRef { refname: String },

    /// An external git command exited non-zero.
    #[error("git {step} failed: {detail}")]
    Git { step: &'static str, detail: String },

    /// Reporter / outcome file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse failure classification, used to phrase the final error report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The surrounding setup is broken; not fixable via parameters.
    Environment,
    /// The caller must correct the invocation parameters.
    Input,
    /// The one intentional hard stop: a protected branch.
    Safety,
    /// An external git operation failed.
    Operational,
}

impl ErrorKind {
    /// Short label used as a message prefix.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Environment => "setup error",
            ErrorKind::Input => "input error",
            ErrorKind::Safety => "protected",
            ErrorKind::Operational => "git error",
        }
    }
}

impl SyncError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::NotAWorkTree { .. } | SyncError::MissingRepository => {
                ErrorKind::Environment
            }
            SyncError::NoBranch | SyncError::MissingInput { .. } => ErrorKind::Input,
            SyncError::ProtectedBranch { .. } => ErrorKind::Safety,
            SyncError::UnresolvedRef { .. } | SyncError::Git { .. } | SyncError::Io(_) => {
                ErrorKind::Operational
            }
        }
    }
}
