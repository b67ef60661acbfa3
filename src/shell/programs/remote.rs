//! Remotes: remote, fetch, pull, push
//!
//! Nothing here touches the network. The transcripts are canned and only
//! mention the configured URL.

use super::{args_to_strs, lines, CommandResult, FAST_FORWARD};
use crate::error::CommandError;
use crate::repo::Remote;
use crate::shell::executor::SessionState;

/// remote - show or add the remote
pub fn git_remote(state: &mut SessionState, args: &[String]) -> CommandResult {
    match args_to_strs(args).as_slice() {
        [] => Ok(state.repo.remote().map(|r| r.name.clone()).into_iter().collect()),
        ["-v" | "--verbose", ..] => Ok(match state.repo.remote() {
            Some(Remote { name, url }) => vec![
                format!("{} {} (fetch)", name, url),
                format!("{} {} (push)", name, url),
            ],
            None => Vec::new(),
        }),
        ["add", name, url, ..] => {
            state.repo.set_remote(*name, *url);
            log::info!("remote {} -> {}", name, url);
            Ok(vec![format!("Added remote {}", name)])
        }
        _ => Ok(Vec::new()),
    }
}

fn remote_url(state: &SessionState) -> Result<String, CommandError> {
    state
        .repo
        .remote()
        .map(|r| r.url.clone())
        .ok_or(CommandError::NoRemote)
}

/// fetch - download refs from the remote
pub fn git_fetch(state: &mut SessionState, _args: &[String]) -> CommandResult {
    let url = remote_url(state)?;
    let mut out = lines(&[
        "remote: Counting objects: 100% (10/10), done.",
        "remote: Compressing objects: 100% (6/6), done.",
        "Unpacking objects: 100% (10/10), done.",
    ]);
    out.push(format!("From {}", url));
    out.push(" * [new branch]      feature-branch -> origin/feature-branch".to_string());
    Ok(out)
}

/// pull - fetch and fast-forward
pub fn git_pull(state: &mut SessionState, _args: &[String]) -> CommandResult {
    let url = remote_url(state)?;
    let mut out = lines(&[
        "remote: Counting objects: 100% (10/10), done.",
        "remote: Compressing objects: 100% (6/6), done.",
        "Unpacking objects: 100% (10/10), done.",
    ]);
    out.push(format!("From {}", url));
    out.push(format!(
        " * branch            {:<10} -> FETCH_HEAD",
        state.repo.current_branch()
    ));
    out.extend(lines(FAST_FORWARD));
    Ok(out)
}

/// push - upload the current branch
pub fn git_push(state: &mut SessionState, _args: &[String]) -> CommandResult {
    let url = remote_url(state)?;
    let branch = state.repo.current_branch();
    let mut out = lines(&[
        "Counting objects: 100% (10/10), done.",
        "Delta compression using up to 4 threads.",
        "Compressing objects: 100% (6/6), done.",
        "Writing objects: 100% (10/10), 800 bytes | 800.00 KiB/s, done.",
        "Total 10 (delta 2), reused 0 (delta 0)",
    ]);
    out.push(format!("To {}", url));
    out.push(format!("   abc1234..def5678  {} -> {}", branch, branch));
    Ok(out)
}
