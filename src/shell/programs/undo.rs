//! Undoing changes: reset, revert

use super::{args_to_strs, lines, CommandResult, PLACEHOLDER_COMMIT};
use crate::error::CommandError;
use crate::shell::executor::SessionState;

/// reset - `--hard` throws away working and staged changes
pub fn git_reset(state: &mut SessionState, args: &[String]) -> CommandResult {
    let args = args_to_strs(args);

    if args.contains(&"--hard") {
        state.repo.discard_changes();
        log::info!("hard reset on {}", state.repo.current_branch());
        return Ok(vec![format!("HEAD is now at {}", PLACEHOLDER_COMMIT)]);
    }

    if args.is_empty() {
        return Err(CommandError::Usage("usage: git reset [<mode>] [<commit>]"));
    }
    Ok(lines(&["Unstaged changes after reset:", "M\tfile.txt"]))
}

/// revert - report a revert commit for the given reference
pub fn git_revert(state: &mut SessionState, args: &[String]) -> CommandResult {
    let target = args.first().ok_or(CommandError::NoCommitsToRevert)?;
    Ok(vec![
        format!("[{} abc1234] Revert \"{}\"", state.repo.current_branch(), target),
        " 1 file changed, 1 deletion(-)".to_string(),
    ])
}
