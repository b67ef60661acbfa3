//! Error types
//!
//! Two families live here. `CommandError` is what a git handler refuses
//! with; its `Display` is the exact transcript text the learner sees.
//! `GitLearnError` covers the ambient layers (config, DOM, I/O) that sit
//! around the interpreter.

use thiserror::Error;

/// Result type for adapter and boot code
pub type GitLearnResult<T> = Result<T, GitLearnError>;

/// A refused command.
///
/// Every variant renders to one or more transcript lines and leaves the
/// session state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    // ---- repository guard ----
    #[error("fatal: not a git repository (or any of the parent directories): .git")]
    NotARepository,

    // ---- missing or invalid arguments ----
    #[error("Nothing specified, nothing added.\nMaybe you wanted to say 'git add .'?")]
    NothingSpecified,

    #[error("Please provide a commit message with -m \"message\"")]
    MissingMessage,

    #[error("{0}")]
    Usage(&'static str),

    #[error("fatal: You must specify a repository to clone.")]
    NoCloneSource,

    #[error("fatal: No commits to revert")]
    NoCommitsToRevert,

    #[error("Invalid mission number. Available missions: 1, 2, 3")]
    InvalidMission,

    // ---- referential ----
    #[error("error: pathspec '{0}' did not match any file(s) known to git")]
    PathspecMismatch(String),

    #[error("fatal: Couldn't find remote ref {0}")]
    UnknownRef(String),

    #[error("fatal: '{0}' is not a valid branch name")]
    InvalidBranchName(String),

    #[error("fatal: A branch named '{0}' already exists.")]
    BranchExists(String),

    #[error("fatal: No remote repository specified.")]
    NoRemote,

    #[error("fatal: your current branch '{0}' does not have any commits yet")]
    NoCommitsYet(String),

    #[error("fatal: bad revision 'HEAD'")]
    BadRevision,

    #[error("On branch {branch}\nnothing to commit, working tree clean")]
    NothingToCommit { branch: String },

    // ---- dispatcher ----
    #[error("Command '{0}' not found. Type 'help' for available commands.")]
    UnknownCommand(String),
}

impl CommandError {
    /// Transcript lines for this error
    pub fn lines(&self) -> Vec<String> {
        self.to_string().split('\n').map(str::to_string).collect()
    }
}

/// Errors from the layers around the interpreter
#[derive(Debug, Error)]
pub enum GitLearnError {
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for GitLearnError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        GitLearnError::Js(format!("{:?}", value))
    }
}
