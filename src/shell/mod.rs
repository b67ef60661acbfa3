//! Shell - the git command interpreter
//!
//! A small, git-flavoured command line for teaching. Features:
//! - Quote-aware tokenizing of command lines
//! - One registry entry per surface name (`git add` and `add` alike)
//! - Repository guard applied before any repository command runs
//! - Meta builtins (help, mission, clear, history)
//! - Terminal session with transcript and history recall

pub mod builtins;
pub mod executor;
pub mod history;
pub mod parser;
pub mod programs;
pub mod registry;
pub mod terminal;

pub use builtins::{execute as execute_builtin, is_builtin};
pub use executor::{
    CommandOutcome, ConfigScope, ExecResult, Executor, GitConfig, SessionState,
};
pub use history::History;
pub use parser::{strip_quotes, tokenize};
pub use registry::{CommandKind, CommandSpec, Registry};
pub use terminal::{Terminal, TerminalLine, Transcript, TranscriptUpdate};
