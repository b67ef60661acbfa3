//! Integration tests for the gitlearn interpreter
//!
//! Tests end-to-end behaviour across the registry, executor, handlers,
//! missions and the terminal transcript. Each test builds its own session.

use gitlearn::mission::Mission;
use gitlearn::repo::is_commit_id;
use gitlearn::shell::{Executor, Terminal};
use gitlearn::SimConfig;

const NOT_A_REPO: &str = "fatal: not a git repository (or any of the parent directories): .git";

fn init_test() -> Executor {
    Executor::with_seed(SimConfig::default(), 42)
}

/// Helper to run a command and get its output lines and exit code
fn run_cmd(exec: &mut Executor, cmd: &str) -> (Vec<String>, i32) {
    let result = exec.execute_line(cmd);
    (result.output, result.code)
}

fn initialized() -> Executor {
    let mut exec = init_test();
    run_cmd(&mut exec, "git init");
    exec
}

// ============================================================================
// Repository guard
// ============================================================================

#[test]
fn test_guard_on_every_repository_command() {
    let commands = [
        "git add .",
        "git status",
        "git diff",
        "git commit -m \"x\"",
        "git branch feature",
        "git checkout main",
        "git merge main",
        "git remote add origin http://x/y.git",
        "git fetch",
        "git pull",
        "git push",
        "git log",
        "git show",
        "git reset --hard",
        "git revert abc",
        "git stash",
        "git rebase main",
        "add .",
        "status",
        "branch",
        "log",
    ];

    for cmd in commands {
        let mut exec = init_test();
        exec.state.repo.write_file("a.txt", "x");
        let before = exec.state.repo.clone();
        let (out, code) = run_cmd(&mut exec, cmd);
        assert_eq!(out, vec![NOT_A_REPO], "{}", cmd);
        assert_eq!(code, 1, "{}", cmd);
        assert_eq!(exec.state.repo, before, "{}", cmd);
    }
}

#[test]
fn test_guard_exempt_commands() {
    for cmd in ["help", "mission", "clear", "history", "git config user.name Ada"] {
        let mut exec = init_test();
        let (out, _) = run_cmd(&mut exec, cmd);
        assert!(!out.contains(&NOT_A_REPO.to_string()), "{}", cmd);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_add_dot_with_no_files() {
    let mut exec = initialized();
    let (out, _) = run_cmd(&mut exec, "add .");
    assert_eq!(
        out,
        vec!["Nothing specified, nothing added.", "Maybe you wanted to say 'git add .'?"]
    );
    assert!(!exec.state.repo.has_staged());
}

#[test]
fn test_add_dot_then_status() {
    let mut exec = initialized();
    exec.state.repo.write_file("a.txt", "1");
    exec.state.repo.write_file("b.txt", "2");
    run_cmd(&mut exec, "git add .");
    let (out, _) = run_cmd(&mut exec, "git status");
    assert_eq!(
        out,
        vec![
            "On branch main",
            "Changes to be committed:",
            "  (use \"git reset HEAD <file>...\" to unstage)",
            "        a.txt",
            "        b.txt",
        ]
    );
}

#[test]
fn test_first_commit() {
    let mut exec = initialized();
    exec.state.repo.write_file("README.md", "Initial content");
    run_cmd(&mut exec, "add README.md");
    let (out, code) = run_cmd(&mut exec, "commit -m \"Initial commit\"");
    assert_eq!(code, 0);

    let commits = exec.state.repo.commits();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].files, vec!["README.md".to_string()]);
    assert_eq!(commits[0].message, "Initial commit");
    assert!(is_commit_id(&commits[0].id));
    assert_eq!(out[0], format!("[main (root-commit) {}] Initial commit", commits[0].id));
    assert_eq!(out[1], " 1 file changed, 1 insertion(+)");
    assert_eq!(out[2], " create mode 100644 README.md");
    assert!(!exec.state.repo.has_staged());
}

#[test]
fn test_single_quoted_message_and_quoted_path() {
    let mut exec = initialized();
    exec.state.repo.write_file("a b", "x");
    let (out, code) = run_cmd(&mut exec, "git add \"a b\"");
    assert_eq!((out, code), (vec!["Added a b to staging area.".to_string()], 0));

    let (out, _) = run_cmd(&mut exec, "git commit -m 'fix bug'");
    let commits = exec.state.repo.commits();
    assert_eq!(commits[0].message, "fix bug");
    assert_eq!(commits[0].files, vec!["a b".to_string()]);
    assert!(out[0].ends_with("] fix bug"));
    assert_eq!(exec.history.entries().last(), Some("git commit -m \"fix bug\""));

    let (out, code) = run_cmd(&mut exec, "git branch \"\"");
    assert_eq!((out, code), (vec!["fatal: '' is not a valid branch name".to_string()], 1));
    assert_eq!(exec.state.repo.branches().to_vec(), vec!["main".to_string()]);
}

#[test]
fn test_commit_with_nothing_staged() {
    let mut exec = initialized();
    let (out, _) = run_cmd(&mut exec, "git commit -m \"nothing\"");
    assert_eq!(out, vec!["On branch main", "nothing to commit, working tree clean"]);
    assert!(exec.state.repo.commits().is_empty());
}

#[test]
fn test_commit_without_message() {
    let mut exec = initialized();
    exec.state.repo.write_file("a", "x");
    run_cmd(&mut exec, "git add a");
    let (out, _) = run_cmd(&mut exec, "git commit");
    assert_eq!(out, vec!["Please provide a commit message with -m \"message\""]);
    assert!(exec.state.repo.has_staged());
    assert!(exec.state.repo.commits().is_empty());
}

#[test]
fn test_branch_checkout_merge_flow() {
    let mut exec = initialized();
    for cmd in ["branch feature", "checkout feature", "checkout main"] {
        let (_, code) = run_cmd(&mut exec, cmd);
        assert_eq!(code, 0, "{}", cmd);
    }
    let (out, code) = run_cmd(&mut exec, "merge feature");
    assert_eq!(code, 0);
    assert_eq!(exec.state.repo.current_branch(), "main");
    assert_eq!(
        out,
        vec![
            "Updating abc1234..def5678",
            "Fast-forward",
            " file.txt | 1 +",
            " 1 file changed, 1 insertion(+)",
        ]
    );
}

#[test]
fn test_duplicate_branch_and_unknown_checkout() {
    let mut exec = initialized();
    run_cmd(&mut exec, "git branch feature");
    let branches = exec.state.repo.branches().to_vec();
    let (out, _) = run_cmd(&mut exec, "git branch feature");
    assert_eq!(out, vec!["fatal: A branch named 'feature' already exists."]);
    assert_eq!(exec.state.repo.branches(), branches.as_slice());

    let (out, _) = run_cmd(&mut exec, "git checkout ghost");
    assert_eq!(out, vec!["error: pathspec 'ghost' did not match any file(s) known to git"]);
    assert_eq!(exec.state.repo.current_branch(), "main");
}

#[test]
fn test_remote_then_fetch() {
    let mut exec = initialized();
    run_cmd(&mut exec, "git remote add origin http://x/y.git");
    let (out, code) = run_cmd(&mut exec, "git fetch");
    assert_eq!(code, 0);
    assert!(out.contains(&"From http://x/y.git".to_string()));
    assert!(!out.contains(&"fatal: No remote repository specified.".to_string()));
}

#[test]
fn test_log_and_show_with_configured_author() {
    let mut exec = initialized();
    run_cmd(&mut exec, "git config --global user.name \"Grace Hopper\"");
    run_cmd(&mut exec, "git config user.email grace@navy.mil");
    exec.state.repo.write_file("a", "x");
    run_cmd(&mut exec, "git add a");
    run_cmd(&mut exec, "git commit -m \"First\"");

    let (log, _) = run_cmd(&mut exec, "git log");
    assert_eq!(log[1], "Author: Grace Hopper <grace@navy.mil>");
    assert_eq!(log[4], "    First");

    let (show, _) = run_cmd(&mut exec, "git show");
    assert_eq!(show[..6], log[..6]);
    assert_eq!(show[6], "diff --git a/file.txt b/file.txt");
}

#[test]
fn test_stash_and_reset_clear_changes() {
    let mut exec = initialized();
    exec.state.repo.write_file("a", "x");
    let (out, _) = run_cmd(&mut exec, "git stash");
    assert_eq!(
        out,
        vec!["Saved working directory and index state WIP on main: abc1234 Previous commit"]
    );
    let (out, _) = run_cmd(&mut exec, "git stash");
    assert_eq!(out, vec!["No local changes to save"]);

    exec.state.repo.write_file("b", "x");
    run_cmd(&mut exec, "git add b");
    run_cmd(&mut exec, "git commit -m \"First\"");
    exec.state.repo.write_file("c", "x");
    let (out, _) = run_cmd(&mut exec, "git reset --hard");
    assert_eq!(out, vec!["HEAD is now at abc1234 Previous commit"]);
    assert!(exec.state.repo.is_clean());
}

#[test]
fn test_clone_initializes() {
    let mut exec = init_test();
    let (out, _) = run_cmd(&mut exec, "git clone https://github.com/user/demo.git");
    assert_eq!(out[0], "Cloning into 'demo'...");
    let (out, _) = run_cmd(&mut exec, "git status");
    assert_eq!(out[0], "On branch main");
}

// ============================================================================
// Aliases
// ============================================================================

/// Repository contents without commit timestamps
fn repo_shape(exec: &Executor) -> (bool, Vec<String>, Vec<String>, Vec<String>, String, Vec<(String, String, Vec<String>)>) {
    let repo = &exec.state.repo;
    (
        repo.initialized,
        repo.working_files().map(String::from).collect(),
        repo.staged_files().map(String::from).collect(),
        repo.branches().to_vec(),
        repo.current_branch().to_string(),
        repo.commits()
            .iter()
            .map(|c| (c.id.clone(), c.message.clone(), c.files.clone()))
            .collect(),
    )
}

#[test]
fn test_alias_and_canonical_are_identical() {
    let script = [
        ("init", "git init"),
        ("add README.md", "git add README.md"),
        ("status", "git status"),
        ("commit -m \"Initial commit\"", "git commit -m \"Initial commit\""),
        ("branch feature", "git branch feature"),
        ("checkout feature", "git checkout feature"),
        ("branch", "git branch"),
        ("merge main", "git merge main"),
        ("diff", "git diff"),
        ("remote", "git remote"),
        ("push", "git push"),
        ("stash list", "git stash list"),
        ("rebase main", "git rebase main"),
        ("revert HEAD", "git revert HEAD"),
    ];

    let mut bare = init_test();
    let mut full = init_test();
    bare.state.repo.write_file("README.md", "Initial content");
    full.state.repo.write_file("README.md", "Initial content");

    for (alias, canonical) in script {
        let a = bare.execute_line(alias);
        let c = full.execute_line(canonical);
        assert_eq!(a, c, "{} vs {}", alias, canonical);
        assert_eq!(repo_shape(&bare), repo_shape(&full), "{}", alias);
    }
}

#[test]
fn test_alias_help_text() {
    let mut exec = init_test();
    let (out, _) = run_cmd(&mut exec, "help add");
    assert_eq!(out[0], "$ add - Add file contents to the index (alias for git add)");
    let (out, _) = run_cmd(&mut exec, "help git add");
    assert_eq!(out[0], "$ git add - Add file contents to the index");
}

// ============================================================================
// Missions
// ============================================================================

#[test]
fn test_mission_one_flow() {
    let mut exec = init_test();
    let (out, _) = run_cmd(&mut exec, "mission 1");
    assert_eq!(out.last().unwrap(), "📝 Created README.md file");
    assert_eq!(exec.state.missions.active(), Some(Mission::Init));

    run_cmd(&mut exec, "git init");
    run_cmd(&mut exec, "git add .");
    let (out, _) = run_cmd(&mut exec, "git commit -m \"Initial commit\"");
    // No step takes mission 1 from 0 to 1, so the commit never completes it
    assert!(!out.iter().any(|l| l.starts_with("✅")));
    assert_eq!(exec.state.missions.progress(), 0);
    assert_eq!(exec.state.repo.commits().len(), 1);
}

#[test]
fn test_mission_two_flow() {
    let mut exec = initialized();
    run_cmd(&mut exec, "mission 2");
    assert_eq!(exec.state.missions.progress(), 0);

    let (out, _) = run_cmd(&mut exec, "git branch feature-login");
    assert_eq!(
        out,
        vec!["Created branch feature-login", "✅ Step 1 completed! You've created a new branch."]
    );
    assert_eq!(exec.state.missions.progress(), 1);

    // Step 2 has no trigger, so checkout and merge find progress still at 1
    let (out, _) = run_cmd(&mut exec, "git checkout feature-login");
    assert_eq!(out, vec!["Switched to branch 'feature-login'"]);
    run_cmd(&mut exec, "git checkout main");
    let (out, _) = run_cmd(&mut exec, "git merge feature-login");
    assert_eq!(out.len(), 4);
    assert_eq!(exec.state.missions.progress(), 1);
    assert_eq!(exec.state.missions.active(), Some(Mission::Branching));
}

#[test]
fn test_mission_three_is_immediate() {
    let mut exec = init_test();
    let (out, _) = run_cmd(&mut exec, "mission 3");
    assert_eq!(out, vec!["🚀 Mission 3: Collaboration", "This mission is coming soon!"]);
    assert_eq!(exec.state.missions.active(), None);
}

#[test]
fn test_restarting_mission_resets_progress() {
    let mut exec = initialized();
    run_cmd(&mut exec, "mission 2");
    run_cmd(&mut exec, "branch one");
    assert_eq!(exec.state.missions.progress(), 1);
    run_cmd(&mut exec, "mission 2");
    assert_eq!(exec.state.missions.progress(), 0);
}

// ============================================================================
// Terminal session
// ============================================================================

#[test]
fn test_terminal_transcript_and_history() {
    let config = SimConfig {
        welcome: Vec::new(),
        ..SimConfig::default()
    };
    let mut term = Terminal::with_seed(config, 9);
    term.submit("git init");
    term.submit("nonsense here");
    term.submit("history");

    let text: Vec<String> = term.transcript().lines().map(|l| l.text.clone()).collect();
    assert_eq!(
        text,
        vec![
            "$ git init",
            "Initialized empty Git repository.",
            "$ nonsense here",
            "Command 'nonsense' not found. Type 'help' for available commands.",
            "$ history",
            "  1  git init",
            "  2  nonsense here",
            "  3  history",
        ]
    );

    assert_eq!(term.recall_previous().as_deref(), Some("history"));
    assert_eq!(term.recall_previous().as_deref(), Some("nonsense here"));
    assert_eq!(term.recall_next(), "history");
    assert_eq!(term.recall_next(), "");
}

#[test]
fn test_history_cap() {
    let config = SimConfig {
        history_limit: 5,
        welcome: Vec::new(),
        ..SimConfig::default()
    };
    let mut term = Terminal::with_seed(config, 9);
    for i in 0..12 {
        term.submit(&format!("git branch b{}", i));
    }
    let entries: Vec<&str> = term.history().entries().collect();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0], "git branch b7");
    assert!(term.history().cursor() <= term.history().len());
}

#[test]
fn test_config_from_json_changes_branch_and_prompt() {
    let config =
        SimConfig::from_json(r#"{"default_branch": "trunk", "prompt": "> ", "welcome": []}"#)
            .unwrap();
    let mut term = Terminal::with_seed(config, 1);
    term.submit("init");
    term.submit("status");
    let text: Vec<String> = term.transcript().lines().map(|l| l.text.clone()).collect();
    assert_eq!(text[2], "> status");
    assert_eq!(text[3], "On branch trunk");
}
