//! Git command handlers
//!
//! One function per [`CommandKind`](super::registry::CommandKind), grouped
//! by the sections of the git manual. Every handler takes the session state
//! and its arguments and returns transcript lines, or the
//! [`CommandError`] that explains the refusal. None of them render
//! anything or check the repository guard; the executor does both.

use crate::error::CommandError;
use crate::shell::parser::strip_quotes;

pub mod advanced;
pub mod branching;
pub mod inspect;
pub mod remote;
pub mod setup;
pub mod snapshot;
pub mod undo;

pub use advanced::*;
pub use branching::*;
pub use inspect::*;
pub use remote::*;
pub use setup::*;
pub use snapshot::*;
pub use undo::*;

/// What a git handler produces
pub type CommandResult = Result<Vec<String>, CommandError>;

// ============ Shared transcript fragments ============

/// Stand-in for a commit the simulation never really made
pub const PLACEHOLDER_COMMIT: &str = "abc1234 Previous commit";

/// Diff body shown by `diff` and `show`
pub const SAMPLE_DIFF: &[&str] = &[
    "diff --git a/file.txt b/file.txt",
    "index 1234567..89abcde 100644",
    "--- a/file.txt",
    "+++ b/file.txt",
    "@@ -1 +1,2 @@",
    " Hello World",
    "+This is a new line",
];

/// Fast-forward report shared by `merge` and `pull`
pub const FAST_FORWARD: &[&str] = &[
    "Updating abc1234..def5678",
    "Fast-forward",
    " file.txt | 1 +",
    " 1 file changed, 1 insertion(+)",
];

/// Own a list of static lines
pub fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

/// Convert String slice to &str slice for easier matching
pub fn args_to_strs(args: &[String]) -> Vec<&str> {
    args.iter().map(|s| s.as_str()).collect()
}

/// Unquoted argument at `index`; an empty quoted word counts as absent
pub fn operand(args: &[String], index: usize) -> Option<String> {
    args.get(index)
        .map(|word| strip_quotes(word))
        .filter(|word| !word.is_empty())
}

/// `s` when `n != 1`
pub fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
