//! History & inspection: log, show

use super::{CommandResult, SAMPLE_DIFF};
use crate::error::CommandError;
use crate::repo::Commit;
use crate::shell::executor::SessionState;

/// git's default date layout, e.g. `Thu Oct 16 09:30:00 2026 +0000`
const DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

fn commit_block(commit: &Commit, author: &str) -> Vec<String> {
    vec![
        format!("commit {}", commit.id),
        format!("Author: {}", author),
        format!("Date:   {}", commit.timestamp.format(DATE_FORMAT)),
        String::new(),
        format!("    {}", commit.message),
        String::new(),
    ]
}

/// log - every commit, newest first
pub fn git_log(state: &mut SessionState, _args: &[String]) -> CommandResult {
    let commits = state.repo.commits();
    if commits.is_empty() {
        return Err(CommandError::NoCommitsYet(state.repo.current_branch().to_string()));
    }
    let author = state.author();
    Ok(commits
        .iter()
        .rev()
        .flat_map(|c| commit_block(c, &author))
        .collect())
}

/// show - the newest commit with its diff
pub fn git_show(state: &mut SessionState, _args: &[String]) -> CommandResult {
    let head = state.repo.head().ok_or(CommandError::BadRevision)?;
    let mut out = commit_block(head, &state.author());
    out.extend(SAMPLE_DIFF.iter().map(|s| s.to_string()));
    Ok(out)
}
