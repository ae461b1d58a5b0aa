//! # upsync-core
//!
//! Force-update a branch to match its counterpart in an upstream repository,
//! guarded by a protected-branch check.
//!
//! Call [`pipeline::run`] with a [`config::SyncRequest`], the
//! [`config::RunnerEnv`] read at startup, a [`git::GitExecutor`] (live on
//! the automation platform, dry-run locally), and a [`report::Reporter`]
//! (workflow annotations or an indented console transcript).

pub mod config;
pub mod error;
pub mod git;
pub mod pipeline;
pub mod report;

pub use config::{FetchDepth, ProtectedBranches, RunnerEnv, SyncRequest};
pub use error::{ErrorKind, SyncError};
pub use git::{DryRunGit, Execution, GitExecutor, LiveGit};
pub use pipeline::{run, SyncOutcome};
pub use report::{ActionsReporter, ConsoleReporter, Reporter};
