//! Command executor
//!
//! Runs one submitted line:
//! 1. Tokenizing it and resolving the command against the registry
//! 2. Recording the invocation in history
//! 3. Applying the repository guard
//! 4. Running the git handler or meta builtin for the resolved kind

use std::collections::BTreeMap;

use serde::Serialize;

use super::builtins;
use super::history::History;
use super::parser::tokenize;
use super::programs::{self, CommandResult};
use super::registry::{CommandKind, Registry};
use crate::config::SimConfig;
use crate::error::CommandError;
use crate::mission::MissionTracker;
use crate::repo::{CommitIds, Repository};

/// Which `git config` table a key lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    Local,
    Global,
}

/// Session-level `git config` values.
///
/// Lives beside the repository rather than in it, so `reset --hard` and
/// `stash` leave it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GitConfig {
    local: BTreeMap<String, String>,
    global: BTreeMap<String, String>,
}

impl GitConfig {
    /// Local lookups fall back to the global table, like git does
    pub fn get(&self, scope: ConfigScope, key: &str) -> Option<&str> {
        let global = self.global.get(key);
        match scope {
            ConfigScope::Local => self.local.get(key).or(global),
            ConfigScope::Global => global,
        }
        .map(|s| s.as_str())
    }

    pub fn set(&mut self, scope: ConfigScope, key: &str, value: impl Into<String>) {
        let table = match scope {
            ConfigScope::Local => &mut self.local,
            ConfigScope::Global => &mut self.global,
        };
        table.insert(key.to_string(), value.into());
    }
}

/// Everything a git handler may read or mutate
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub repo: Repository,
    pub missions: MissionTracker,
    pub git_config: GitConfig,
    #[serde(skip)]
    pub ids: CommitIds,
    #[serde(skip)]
    pub config: SimConfig,
}

impl SessionState {
    pub fn new(config: SimConfig) -> Self {
        Self::with_ids(config, CommitIds::from_clock())
    }

    /// State with a fixed id sequence, for reproducible sessions
    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        Self::with_ids(config, CommitIds::with_seed(seed))
    }

    fn with_ids(config: SimConfig, ids: CommitIds) -> Self {
        Self {
            repo: Repository::new(config.default_branch.clone()),
            missions: MissionTracker::new(),
            git_config: GitConfig::default(),
            ids,
            config,
        }
    }

    /// `Name <email>` for log output, preferring `git config` values
    pub fn author(&self) -> String {
        let name = self
            .git_config
            .get(ConfigScope::Local, "user.name")
            .unwrap_or(self.config.author_name.as_str());
        let email = self
            .git_config
            .get(ConfigScope::Local, "user.email")
            .unwrap_or(self.config.author_email.as_str());
        format!("{} <{}>", name, email)
    }
}

/// What running a command asks the transcript to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Append these lines
    Lines(Vec<String>),
    /// Append the error's lines
    Failed(CommandError),
    /// Wipe the transcript
    Clear,
}

impl From<CommandResult> for CommandOutcome {
    fn from(result: CommandResult) -> Self {
        match result {
            Ok(lines) => CommandOutcome::Lines(lines),
            Err(e) => CommandOutcome::Failed(e),
        }
    }
}

/// Result of executing a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code (0 = success)
    pub code: i32,
    /// Transcript lines, errors included
    pub output: Vec<String>,
    /// Should the transcript be cleared first?
    pub clear: bool,
}

impl ExecResult {
    pub fn success() -> Self {
        Self {
            code: 0,
            output: Vec::new(),
            clear: false,
        }
    }

    pub fn with_output(mut self, output: Vec<String>) -> Self {
        self.output = output;
        self
    }

    pub fn with_error(mut self, error: &CommandError) -> Self {
        self.output = error.lines();
        self.code = 1;
        self
    }

    pub fn with_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    pub fn cleared() -> Self {
        Self {
            clear: true,
            ..Self::success()
        }
    }
}

impl From<CommandOutcome> for ExecResult {
    fn from(outcome: CommandOutcome) -> Self {
        match outcome {
            CommandOutcome::Lines(lines) => ExecResult::success().with_output(lines),
            CommandOutcome::Failed(e) => ExecResult::success().with_error(&e),
            CommandOutcome::Clear => ExecResult::cleared(),
        }
    }
}

/// A git command handler
pub type HandlerFn = fn(&mut SessionState, &[String]) -> CommandResult;

/// Handler for a git kind; `None` for the meta builtins
pub fn handler(kind: CommandKind) -> Option<HandlerFn> {
    let run: HandlerFn = match kind {
        CommandKind::Config => programs::git_config,
        CommandKind::Init => programs::git_init,
        CommandKind::Clone => programs::git_clone,
        CommandKind::Add => programs::git_add,
        CommandKind::Status => programs::git_status,
        CommandKind::Diff => programs::git_diff,
        CommandKind::Commit => programs::git_commit,
        CommandKind::Branch => programs::git_branch,
        CommandKind::Checkout => programs::git_checkout,
        CommandKind::Merge => programs::git_merge,
        CommandKind::Remote => programs::git_remote,
        CommandKind::Fetch => programs::git_fetch,
        CommandKind::Pull => programs::git_pull,
        CommandKind::Push => programs::git_push,
        CommandKind::Log => programs::git_log,
        CommandKind::Show => programs::git_show,
        CommandKind::Reset => programs::git_reset,
        CommandKind::Revert => programs::git_revert,
        CommandKind::Stash => programs::git_stash,
        CommandKind::Rebase => programs::git_rebase,
        CommandKind::Help | CommandKind::Mission | CommandKind::Clear | CommandKind::History => {
            return None;
        }
    };
    Some(run)
}

/// How an invocation is written into history
pub fn history_entry(key: &str, kind: CommandKind, args: &[String]) -> String {
    let entry = match kind {
        CommandKind::Commit => match programs::commit_message(args) {
            Some(msg) => return format!("{} -m \"{}\"", key, msg),
            None => format!("{} {}", key, args.join(" ")),
        },
        CommandKind::Checkout | CommandKind::Merge => {
            format!("{} {}", key, args.first().map(String::as_str).unwrap_or_default())
        }
        _ => format!("{} {}", key, args.join(" ")),
    };
    entry.trim_end().to_string()
}

/// The interpreter: session state, history and the command table
pub struct Executor {
    pub state: SessionState,
    pub history: History,
    registry: Registry,
}

impl Executor {
    pub fn new(config: SimConfig) -> Self {
        let history = History::with_limit(config.history_limit);
        Self {
            state: SessionState::new(config),
            history,
            registry: Registry::new(),
        }
    }

    /// Executor whose commit ids come from a fixed seed
    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        let history = History::with_limit(config.history_limit);
        Self {
            state: SessionState::with_seed(config, seed),
            history,
            registry: Registry::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Execute a raw command line
    pub fn execute_line(&mut self, line: &str) -> ExecResult {
        let words = tokenize(line);
        if words.is_empty() {
            return ExecResult::success();
        }

        let Some((spec, args)) = self.registry.resolve(&words) else {
            log::debug!("[exec] unknown command: {}", words[0]);
            self.history.push(line.trim());
            return ExecResult::success()
                .with_error(&CommandError::UnknownCommand(words[0].clone()))
                .with_code(127);
        };

        let kind = spec.kind;
        self.history.push(history_entry(&spec.name, kind, args));
        log::debug!("[exec] {} -> {:?} {:?}", spec.name, kind, args);

        let result = ExecResult::from(self.dispatch(kind, args));
        if result.code != 0 {
            log::debug!("[exec] failed: {}", result.output.join(" / "));
        }
        result
    }

    /// Run a resolved command, guard first
    pub fn dispatch(&mut self, kind: CommandKind, args: &[String]) -> CommandOutcome {
        if kind.requires_repository() && !self.state.repo.initialized {
            return CommandOutcome::Failed(CommandError::NotARepository);
        }
        match handler(kind) {
            Some(run) => run(&mut self.state, args).into(),
            None => builtins::execute(kind, args, &mut self.state, &self.history, &self.registry),
        }
    }
}
