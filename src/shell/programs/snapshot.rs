//! Snapshotting: add, status, diff, commit

use chrono::Utc;

use super::{lines, operand, plural, CommandResult, SAMPLE_DIFF};
use crate::error::CommandError;
use crate::mission::MissionEvent;
use crate::repo::StageResult;
use crate::shell::executor::SessionState;
use crate::shell::parser::strip_quotes;

/// add - move files from the working tree to the index
pub fn git_add(state: &mut SessionState, args: &[String]) -> CommandResult {
    let file = operand(args, 0).ok_or(CommandError::NothingSpecified)?;

    if file == "." {
        if !state.repo.has_unstaged() {
            return Err(CommandError::NothingSpecified);
        }
        let moved = state.repo.stage_all();
        log::debug!("staged {} files", moved.len());
        return Ok(lines(&["All files added to staging area."]));
    }

    let message = match state.repo.stage(&file) {
        StageResult::Staged => format!("Added {} to staging area.", file),
        StageResult::AlreadyStaged => format!("File {} is already staged.", file),
        StageResult::NotFound => format!("File {} not found in working directory.", file),
    };
    Ok(vec![message])
}

/// status - list staged and unstaged files
pub fn git_status(state: &mut SessionState, _args: &[String]) -> CommandResult {
    let repo = &state.repo;
    let mut out = vec![format!("On branch {}", repo.current_branch())];

    if repo.has_staged() {
        out.push("Changes to be committed:".to_string());
        out.push("  (use \"git reset HEAD <file>...\" to unstage)".to_string());
        out.extend(repo.staged_files().map(|f| format!("        {}", f)));
    }
    if repo.has_unstaged() {
        out.push("Changes not staged for commit:".to_string());
        out.push("  (use \"git add <file>...\" to update what will be committed)".to_string());
        out.extend(repo.working_files().map(|f| format!("        {}", f)));
    }
    if repo.is_clean() {
        out.push("nothing to commit, working tree clean".to_string());
    }
    Ok(out)
}

/// diff - show unstaged changes
pub fn git_diff(state: &mut SessionState, _args: &[String]) -> CommandResult {
    if state.repo.has_unstaged() {
        Ok(lines(SAMPLE_DIFF))
    } else {
        Ok(lines(&["No changes in working directory"]))
    }
}

/// Message given as `-m <msg>`, unquoted
pub fn commit_message(args: &[String]) -> Option<String> {
    match args {
        [flag, msg, ..] if flag == "-m" => {
            let msg = strip_quotes(msg);
            (!msg.is_empty()).then_some(msg)
        }
        _ => None,
    }
}

/// commit - record the index as a new commit
pub fn git_commit(state: &mut SessionState, args: &[String]) -> CommandResult {
    if !state.repo.has_staged() {
        return Err(CommandError::NothingToCommit {
            branch: state.repo.current_branch().to_string(),
        });
    }
    let message = commit_message(args).ok_or(CommandError::MissingMessage)?;

    let root = state.repo.commits().is_empty();
    let id = state.ids.next_id();
    let Some(commit) = state.repo.record_commit(id, message, Utc::now()) else {
        return Err(CommandError::NothingToCommit {
            branch: state.repo.current_branch().to_string(),
        });
    };
    log::info!("commit {} on {}", commit.id, commit.branch);

    let header = if root {
        format!("[{} (root-commit) {}] {}", commit.branch, commit.id, commit.message)
    } else {
        format!("[{} {}] {}", commit.branch, commit.id, commit.message)
    };
    let n = commit.files.len();
    let mut out = vec![
        header,
        format!(" {} file{} changed, {} insertion{}(+)", n, plural(n), n, plural(n)),
    ];
    out.extend(commit.files.iter().map(|f| format!(" create mode 100644 {}", f)));

    out.extend(state.missions.observe(MissionEvent::Committed));
    Ok(out)
}
