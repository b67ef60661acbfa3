//! Command registry
//!
//! Every accepted surface string maps to exactly one [`CommandKind`]. Git
//! subcommands are registered twice, as `git <sub>` and as the bare `<sub>`
//! shortcut, and both resolve to the same kind so there is only ever one
//! handler body per operation.

use std::collections::HashMap;

/// One operation the simulator knows how to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    // Setup & config
    Config,
    Init,
    Clone,
    // Snapshotting
    Add,
    Status,
    Diff,
    Commit,
    // Branching & merging
    Branch,
    Checkout,
    Merge,
    // Remotes
    Remote,
    Fetch,
    Pull,
    Push,
    // History & inspection
    Log,
    Show,
    // Undoing changes
    Reset,
    Revert,
    // Advanced
    Stash,
    Rebase,
    // Simulator meta commands
    Help,
    Mission,
    Clear,
    History,
}

impl CommandKind {
    /// Whether the handler refuses to run outside an initialized repository
    pub fn requires_repository(self) -> bool {
        !matches!(
            self,
            CommandKind::Init
                | CommandKind::Clone
                | CommandKind::Config
                | CommandKind::Help
                | CommandKind::Mission
                | CommandKind::Clear
                | CommandKind::History
        )
    }
}

/// Registry entry for one surface name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    pub kind: CommandKind,
    pub description: String,
    pub usage: String,
    /// Canonical name when this entry is a shortcut
    pub alias_of: Option<String>,
}

/// (subcommand, kind, description, usage without the `git ` prefix)
const GIT_COMMANDS: &[(&str, CommandKind, &str, &str)] = &[
    (
        "config",
        CommandKind::Config,
        "Get and set repository or global options",
        "config [--global] <key> [<value>]",
    ),
    (
        "init",
        CommandKind::Init,
        "Create an empty Git repository or reinitialize an existing one",
        "init [<directory>]",
    ),
    (
        "clone",
        CommandKind::Clone,
        "Clone a repository into a new directory",
        "clone <repository> [<directory>]",
    ),
    ("add", CommandKind::Add, "Add file contents to the index", "add <file>"),
    (
        "status",
        CommandKind::Status,
        "Show the working tree status",
        "status [<options>]",
    ),
    (
        "diff",
        CommandKind::Diff,
        "Show changes between commits, commit and working tree, etc",
        "diff [<options>] [<commit>] [--] [<path>...]",
    ),
    (
        "commit",
        CommandKind::Commit,
        "Record changes to the repository",
        "commit [-m <msg>]",
    ),
    (
        "branch",
        CommandKind::Branch,
        "List, create, or delete branches",
        "branch [--list | -a | -r] [<branchname>]",
    ),
    (
        "checkout",
        CommandKind::Checkout,
        "Switch branches or restore working tree files",
        "checkout <branch>",
    ),
    (
        "merge",
        CommandKind::Merge,
        "Join two or more development histories together",
        "merge <branch>",
    ),
    (
        "remote",
        CommandKind::Remote,
        "Manage set of tracked repositories",
        "remote [-v | --verbose] [add <name> <url>]",
    ),
    (
        "fetch",
        CommandKind::Fetch,
        "Download objects and refs from another repository",
        "fetch [<options>] [<repository> [<refspec>...]]",
    ),
    (
        "pull",
        CommandKind::Pull,
        "Fetch from and integrate with another repository or a local branch",
        "pull [<options>] [<repository> [<refspec>...]]",
    ),
    (
        "push",
        CommandKind::Push,
        "Update remote refs along with associated objects",
        "push [<options>] [<repository> [<refspec>...]]",
    ),
    ("log", CommandKind::Log, "Show commit logs", "log"),
    (
        "show",
        CommandKind::Show,
        "Show various types of objects",
        "show [<options>] [<object>...]",
    ),
    (
        "reset",
        CommandKind::Reset,
        "Reset current HEAD to the specified state",
        "reset [--soft | --mixed | --hard] [<commit>]",
    ),
    (
        "revert",
        CommandKind::Revert,
        "Revert some existing commits",
        "revert <commit>...",
    ),
    (
        "stash",
        CommandKind::Stash,
        "Stash the changes in a dirty working directory away",
        "stash [save | pop | list]",
    ),
    (
        "rebase",
        CommandKind::Rebase,
        "Reapply commits on top of another base tip",
        "rebase [-i] [<upstream> [<branch>]]",
    ),
];

/// (name, kind, description, usage)
const META_COMMANDS: &[(&str, CommandKind, &str, &str)] = &[
    ("help", CommandKind::Help, "Show available commands", "help [command]"),
    ("mission", CommandKind::Mission, "Start a learning mission", "mission [1|2|3]"),
    ("clear", CommandKind::Clear, "Clear the terminal screen", "clear"),
    ("history", CommandKind::History, "Show command history", "history"),
];

/// Lookup table from surface names to commands
pub struct Registry {
    /// Entries in help order: meta `help` first, git commands, then the rest
    entries: Vec<CommandSpec>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        let mut reg = Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
        };

        let (help, rest) = META_COMMANDS.split_at(1);
        for &(name, kind, description, usage) in help {
            reg.register(name, kind, description, usage, None);
        }

        for &(sub, kind, description, usage) in GIT_COMMANDS {
            let canonical = format!("git {}", sub);
            reg.register(&canonical, kind, description, &format!("git {}", usage), None);
        }
        for &(sub, kind, description, usage) in GIT_COMMANDS {
            let canonical = format!("git {}", sub);
            reg.register(sub, kind, description, usage, Some(canonical));
        }

        for &(name, kind, description, usage) in rest {
            reg.register(name, kind, description, usage, None);
        }

        reg
    }

    fn register(
        &mut self,
        name: &str,
        kind: CommandKind,
        description: &str,
        usage: &str,
        alias_of: Option<String>,
    ) {
        let description = match &alias_of {
            Some(canonical) => format!("{} (alias for {})", description, canonical),
            None => description.to_string(),
        };
        self.by_name.insert(name.to_string(), self.entries.len());
        self.entries.push(CommandSpec {
            name: name.to_string(),
            kind,
            description,
            usage: usage.to_string(),
            alias_of,
        });
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All entries in help order
    pub fn entries(&self) -> &[CommandSpec] {
        &self.entries
    }

    /// Resolve the leading words of a command line.
    ///
    /// A two-word name (`git commit`) wins over a one-word name. Returns the
    /// matched entry and the remaining arguments.
    pub fn resolve<'w>(&self, words: &'w [String]) -> Option<(&CommandSpec, &'w [String])> {
        if words.len() >= 2 {
            let two = format!("{} {}", words[0], words[1]);
            if let Some(spec) = self.get(&two) {
                return Some((spec, &words[2..]));
            }
        }
        let first = words.first()?;
        self.get(first).map(|spec| (spec, &words[1..]))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
