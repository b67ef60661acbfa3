//! Advanced: stash, rebase

use super::{lines, CommandResult, PLACEHOLDER_COMMIT};
use crate::error::CommandError;
use crate::shell::executor::SessionState;

const REBASE_USAGE: &str = "usage: git rebase [<options>] [--exec <cmd>] [--onto <newbase> [<upstream>]] [<upstream>] [<branch>]";

/// stash - shelve local changes, or pretend to restore/list them
pub fn git_stash(state: &mut SessionState, args: &[String]) -> CommandResult {
    let branch = state.repo.current_branch().to_string();

    match args.first().map(String::as_str) {
        None | Some("save") => {
            if !state.repo.discard_changes() {
                return Ok(lines(&["No local changes to save"]));
            }
            log::info!("stashed changes on {}", branch);
            Ok(vec![format!(
                "Saved working directory and index state WIP on {}: {}",
                branch, PLACEHOLDER_COMMIT
            )])
        }
        Some("pop") => {
            let mut out = vec![format!("On branch {}", branch)];
            out.extend(lines(&[
                "Changes not staged for commit:",
                "  (use \"git add <file>...\" to update what will be committed)",
                "  (use \"git restore <file>...\" to discard changes in working directory)",
                "\tmodified:   file.txt",
                "",
                "no changes added to commit (use \"git add\" and/or \"git commit -a\")",
            ]));
            Ok(out)
        }
        Some("list") => Ok(vec![format!(
            "stash@{{0}}: WIP on {}: {}",
            branch, PLACEHOLDER_COMMIT
        )]),
        Some(_) => Ok(Vec::new()),
    }
}

/// rebase - canned replay transcript
pub fn git_rebase(_state: &mut SessionState, args: &[String]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::Usage(REBASE_USAGE));
    }
    Ok(lines(&[
        "First, rewinding head to replay your work on top of it...",
        "Applying: First commit",
        "Applying: Second commit",
        "Applying: Third commit",
    ]))
}
