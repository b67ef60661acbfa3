//! Branching & merging: branch, checkout, merge

use super::{lines, operand, CommandResult, FAST_FORWARD};
use crate::error::CommandError;
use crate::mission::MissionEvent;
use crate::shell::executor::SessionState;

/// branch - list branches, or create one
pub fn git_branch(state: &mut SessionState, args: &[String]) -> CommandResult {
    match args.first().map(String::as_str) {
        None | Some("--list") | Some("-a") | Some("-r") => return Ok(list_branches(state)),
        Some(_) => {}
    }
    let name = operand(args, 0)
        .ok_or_else(|| CommandError::InvalidBranchName(String::new()))?;

    if !state.repo.create_branch(&name) {
        return Err(CommandError::BranchExists(name));
    }
    log::info!("created branch {}", name);

    let mut out = vec![format!("Created branch {}", name)];
    out.extend(state.missions.observe(MissionEvent::BranchCreated));
    Ok(out)
}

fn list_branches(state: &SessionState) -> Vec<String> {
    let current = state.repo.current_branch();
    state
        .repo
        .branches()
        .iter()
        .map(|b| {
            if b == current {
                format!("* {}", b)
            } else {
                format!("  {}", b)
            }
        })
        .collect()
}

/// checkout - switch to an existing branch
pub fn git_checkout(state: &mut SessionState, args: &[String]) -> CommandResult {
    let name = operand(args, 0).ok_or(CommandError::Usage("usage: git checkout <branch>"))?;

    if !state.repo.switch_branch(&name) {
        return Err(CommandError::PathspecMismatch(name));
    }
    log::debug!("switched to {}", name);

    let mut out = vec![format!("Switched to branch '{}'", name)];
    out.extend(state.missions.observe(MissionEvent::CheckedOut));
    Ok(out)
}

/// merge - simulated fast-forward of another branch into the current one
pub fn git_merge(state: &mut SessionState, args: &[String]) -> CommandResult {
    let name = operand(args, 0).ok_or(CommandError::Usage("usage: git merge <branch>"))?;

    if !state.repo.has_branch(&name) {
        return Err(CommandError::UnknownRef(name));
    }
    if name == state.repo.current_branch() {
        return Ok(lines(&["Already up to date."]));
    }

    let mut out = lines(FAST_FORWARD);
    out.extend(state.missions.observe(MissionEvent::Merged));
    Ok(out)
}
