//! Invocation parameters and runner environment.
//!
//! Everything the hosting context supplies is read exactly once at startup
//! into [`RunnerEnv`]; nothing else in the crate touches `std::env::var`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default protected-branch list applied when the caller passes nothing.
pub const DEFAULT_PROTECTED_BRANCHES: &str = "master,main,production";

// ---------------------------------------------------------------------------
// FetchDepth
// ---------------------------------------------------------------------------

/// How much history to fetch from the upstream remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDepth {
    /// Shallow fetch of the last `n` commits (`n >= 1`).
    Commits(u32),
    /// Unbounded full-history fetch.
    Full,
}

impl Default for FetchDepth {
    fn default() -> Self {
        FetchDepth::Commits(1)
    }
}

impl fmt::Display for FetchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchDepth::Commits(n) => write!(f, "{n}"),
            FetchDepth::Full => write!(f, "full"),
        }
    }
}

impl FromStr for FetchDepth {
    type Err = String;

    /// Accepts a positive integer, or `full` / `0` as the full-history
    /// sentinel. An empty string falls back to the default depth of 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(FetchDepth::default());
        }
        if s.eq_ignore_ascii_case("full") {
            return Ok(FetchDepth::Full);
        }
        match s.parse::<u32>() {
            Ok(0) => Ok(FetchDepth::Full),
            Ok(n) => Ok(FetchDepth::Commits(n)),
            Err(_) => Err(format!(
                "invalid fetch depth '{s}': expected a positive integer or 'full'"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// ProtectedBranches
// ---------------------------------------------------------------------------

/// The set of branch names this tool refuses to overwrite.
///
/// Membership is an exact, case-sensitive string match with no whitespace
/// trimming: `"Main"` does not protect `main`, and `" main"` is a different
/// name than `main`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedBranches(Vec<String>);

impl ProtectedBranches {
    /// Parse a comma-separated list. An empty input yields an empty set
    /// (nothing protected); empty segments from stray commas are dropped.
    pub fn parse(input: &str) -> Self {
        ProtectedBranches(
            input
                .split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    pub fn contains(&self, branch: &str) -> bool {
        self.0.iter().any(|b| b == branch)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ProtectedBranches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

// ---------------------------------------------------------------------------
// SyncRequest
// ---------------------------------------------------------------------------

/// The invocation parameters for one sync run, unvalidated.
///
/// Validation (ordering, error classes) belongs to the pipeline so that a
/// bad request fails the same way whether it came from the CLI or a caller
/// constructing this directly.
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// Target branch; `None` means "the currently checked-out branch".
    pub branch: Option<String>,
    /// Upstream repository reference, conventionally `owner/repo`.
    pub upstream: String,
    /// Branches that must never be force-updated.
    pub protected: ProtectedBranches,
    /// Credential token embedded into the origin push URL.
    pub token: String,
    /// Upstream fetch depth.
    pub depth: FetchDepth,
}

// ---------------------------------------------------------------------------
// RunnerEnv
// ---------------------------------------------------------------------------

/// Context supplied by the hosting environment, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct RunnerEnv {
    /// `GITHUB_REPOSITORY` — the `owner/repo` this run is authorized to
    /// push to.
    pub repository: Option<String>,
    /// `GITHUB_ACTIONS == "true"` — platform mode (annotations, live git).
    pub on_actions: bool,
    /// `RUNNER_DEBUG == "1"` — verbose output in local mode.
    pub debug: bool,
    /// `GITHUB_OUTPUT` — step-output file provided in platform mode.
    pub output_file: Option<PathBuf>,
}

impl RunnerEnv {
    pub fn from_env() -> Self {
        RunnerEnv {
            repository: std::env::var("GITHUB_REPOSITORY")
                .ok()
                .filter(|v| !v.is_empty()),
            on_actions: std::env::var("GITHUB_ACTIONS").as_deref() == Ok("true"),
            debug: std::env::var("RUNNER_DEBUG").as_deref() == Ok("1"),
            output_file: std::env::var("GITHUB_OUTPUT")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}
