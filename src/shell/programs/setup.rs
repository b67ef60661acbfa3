//! Setup & config: init, clone, config

use super::{args_to_strs, lines, CommandResult};
use crate::error::CommandError;
use crate::shell::executor::{ConfigScope, SessionState};
use crate::shell::parser::strip_quotes;

const CONFIG_USAGE: &str =
    "usage: git config [<options>] [--type=<type>] [--fixed-value] [--null] [<key> [<value>]]";

/// Value reported for a key nobody has set
const UNSET_CONFIG_VALUE: &str = "some_value";

/// init - create (or reinitialize) the repository
pub fn git_init(state: &mut SessionState, _args: &[String]) -> CommandResult {
    if state.repo.initialized {
        return Ok(lines(&["Reinitialized existing Git repository."]));
    }
    state.repo.initialized = true;
    log::info!("repository initialized");
    Ok(lines(&["Initialized empty Git repository."]))
}

/// clone - pretend to copy a repository
pub fn git_clone(state: &mut SessionState, args: &[String]) -> CommandResult {
    let repo = args.first().ok_or(CommandError::NoCloneSource)?;
    let dir = match args.get(1) {
        Some(dir) => dir.clone(),
        None => clone_directory(repo),
    };

    state.repo.initialized = true;
    log::info!("cloned {} into {}", repo, dir);

    let mut out = vec![format!("Cloning into '{}'...", dir)];
    out.extend(lines(&[
        "remote: Counting objects: 100% (42/42), done.",
        "remote: Compressing objects: 100% (28/28), done.",
        "Receiving objects: 100% (42/42), done.",
        "Resolving deltas: 100% (15/15), done.",
    ]));
    Ok(out)
}

/// Directory a clone lands in: last path segment without `.git`
pub fn clone_directory(repo: &str) -> String {
    let last = repo.trim_end_matches('/').rsplit('/').next().unwrap_or(repo);
    last.strip_suffix(".git").unwrap_or(last).to_string()
}

/// config - get and set options
pub fn git_config(state: &mut SessionState, args: &[String]) -> CommandResult {
    let strs = args_to_strs(args);
    if strs.is_empty() {
        return Err(CommandError::Usage(CONFIG_USAGE));
    }

    let (scope, rest) = match strs.iter().position(|a| *a == "--global") {
        Some(pos) => (ConfigScope::Global, &args[pos + 1..]),
        None => (ConfigScope::Local, args),
    };
    let label = match scope {
        ConfigScope::Global => "Global config",
        ConfigScope::Local => "Config",
    };

    let Some(key) = rest.first() else {
        return Ok(Vec::new());
    };

    match rest.get(1) {
        Some(value) => {
            let value = strip_quotes(value);
            let out = format!("{} {} set to {}", label, key, value);
            state.git_config.set(scope, key, value);
            Ok(vec![out])
        }
        None => {
            let value = state.git_config.get(scope, key).unwrap_or(UNSET_CONFIG_VALUE);
            Ok(vec![format!("{} {} = {}", label, key, value)])
        }
    }
}
