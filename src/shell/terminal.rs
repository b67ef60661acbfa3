//! Terminal - the simulator session
//!
//! Provides:
//! - Transcript of echoed input and command output
//! - History recall for the input box
//! - Connection to the command executor
//! - Incremental updates for whatever renders the transcript

use std::collections::VecDeque;

use serde::Serialize;

use super::executor::{ExecResult, Executor, SessionState};
use super::history::History;
use super::registry::CommandKind;
use crate::config::SimConfig;
use crate::error::GitLearnResult;

/// A line in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalLine {
    pub text: String,
    /// Was this the echo of a submitted line?
    pub is_input: bool,
}

impl TerminalLine {
    pub fn output(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_input: false }
    }

    pub fn input(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_input: true }
    }
}

/// What changed since the renderer last looked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptUpdate {
    /// The renderer must empty its view before appending
    pub cleared: bool,
    pub lines: Vec<TerminalLine>,
}

/// Bounded, append-only output log.
///
/// When full, the oldest lines are discarded from the top (FIFO).
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    lines: VecDeque<TerminalLine>,
    limit: usize,
    /// Lines at the back not yet handed out by `take_updates`
    #[serde(skip)]
    pending: usize,
    #[serde(skip)]
    cleared: bool,
}

impl Transcript {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            lines: VecDeque::with_capacity(limit.min(1024)),
            limit,
            pending: 0,
            cleared: false,
        }
    }

    pub fn push(&mut self, line: TerminalLine) {
        self.lines.push_back(line);
        self.pending += 1;
        while self.lines.len() > self.limit {
            self.lines.pop_front();
        }
        self.pending = self.pending.min(self.lines.len());
    }

    /// Append output, one line per `\n`-separated piece
    pub fn print(&mut self, text: &str) {
        for line in text.split('\n') {
            self.push(TerminalLine::output(line));
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.pending = 0;
        self.cleared = true;
    }

    pub fn lines(&self) -> impl Iterator<Item = &TerminalLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drain the clear flag and everything appended since the last call
    pub fn take_updates(&mut self) -> TranscriptUpdate {
        let start = self.lines.len() - self.pending;
        let update = TranscriptUpdate {
            cleared: self.cleared,
            lines: self.lines.range(start..).cloned().collect(),
        };
        self.pending = 0;
        self.cleared = false;
        update
    }
}

/// JSON view of a session
#[derive(Serialize)]
struct Snapshot<'a> {
    state: &'a SessionState,
    history: &'a History,
    transcript: &'a Transcript,
}

/// Terminal state
pub struct Terminal {
    transcript: Transcript,
    executor: Executor,
    prompt: String,
}

impl Terminal {
    pub fn new(config: SimConfig) -> Self {
        let prompt = config.prompt.clone();
        let transcript = Transcript::new(config.transcript_limit);
        Self::boot(Executor::new(config), transcript, prompt)
    }

    /// Terminal with reproducible commit ids
    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        let prompt = config.prompt.clone();
        let transcript = Transcript::new(config.transcript_limit);
        Self::boot(Executor::with_seed(config, seed), transcript, prompt)
    }

    fn boot(executor: Executor, transcript: Transcript, prompt: String) -> Self {
        let mut term = Self { transcript, executor, prompt };
        let welcome = term.executor.state.config.welcome.clone();
        for line in &welcome {
            term.print(line);
        }
        term
    }

    /// Print a line to the transcript
    pub fn print(&mut self, text: &str) {
        self.transcript.print(text);
    }

    /// Submit one line of input: echo it, run it, print the result
    pub fn submit(&mut self, line: &str) -> ExecResult {
        if line.trim().is_empty() {
            return ExecResult::success();
        }

        self.transcript
            .push(TerminalLine::input(format!("{}{}", self.prompt, line)));

        let result = self.executor.execute_line(line);
        self.render(&result);
        result
    }

    fn render(&mut self, result: &ExecResult) {
        if result.clear {
            self.transcript.clear();
        }
        for line in &result.output {
            self.print(line);
        }
    }

    /// Start a mission as if `mission <n>` was typed, without the echo
    pub fn start_mission(&mut self, number: u32) -> ExecResult {
        let outcome = self
            .executor
            .dispatch(CommandKind::Mission, &[number.to_string()]);
        let result = ExecResult::from(outcome);
        self.render(&result);
        result
    }

    /// Older history entry for the input box; `None` when there is no history
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.executor.history.is_empty() {
            return None;
        }
        Some(self.executor.history.previous().to_string())
    }

    /// Newer history entry; empty past the newest
    pub fn recall_next(&mut self) -> String {
        self.executor.history.next().to_string()
    }

    /// Handle a key press in the input box.
    ///
    /// Returns the new input box contents when the key was handled.
    pub fn handle_key(&mut self, key: &str, input: &str) -> Option<String> {
        match key {
            "Enter" | "NumpadEnter" => {
                self.submit(input);
                Some(String::new())
            }
            "ArrowUp" => Some(self.recall_previous().unwrap_or_else(|| input.to_string())),
            "ArrowDown" => Some(self.recall_next()),
            _ => None,
        }
    }

    pub fn take_updates(&mut self) -> TranscriptUpdate {
        self.transcript.take_updates()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> &SessionState {
        &self.executor.state
    }

    pub fn history(&self) -> &History {
        &self.executor.history
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Serialize repository, missions, config, history and transcript
    pub fn snapshot_json(&self) -> GitLearnResult<String> {
        let snapshot = Snapshot {
            state: &self.executor.state,
            history: &self.executor.history,
            transcript: &self.transcript,
        };
        Ok(serde_json::to_string(&snapshot)?)
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Terminal {
        let config = SimConfig {
            welcome: Vec::new(),
            ..SimConfig::default()
        };
        Terminal::with_seed(config, 11)
    }

    fn texts(term: &Terminal) -> Vec<String> {
        term.transcript().lines().map(|l| l.text.clone()).collect()
    }

    #[test]
    fn test_terminal_new_prints_welcome() {
        let mut term = Terminal::with_seed(SimConfig::default(), 1);
        assert!(!term.transcript().is_empty());
        let update = term.take_updates();
        assert!(!update.cleared);
        assert_eq!(update.lines.len(), term.transcript().len());
    }

    #[test]
    fn test_submit_echoes_then_prints() {
        let mut term = quiet();
        term.submit("git init");
        let lines: Vec<_> = term.transcript().lines().cloned().collect();
        assert_eq!(lines[0], TerminalLine::input("$ git init"));
        assert_eq!(lines[1], TerminalLine::output("Initialized empty Git repository."));
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut term = quiet();
        term.submit("   ");
        assert!(term.transcript().is_empty());
        assert!(term.history().is_empty());
    }

    #[test]
    fn test_multi_line_error_splits() {
        let mut term = quiet();
        term.submit("init");
        term.submit("add");
        assert_eq!(
            texts(&term)[3..].to_vec(),
            vec!["Nothing specified, nothing added.", "Maybe you wanted to say 'git add .'?"]
        );
    }

    #[test]
    fn test_clear_empties_and_flags() {
        let mut term = quiet();
        term.submit("help");
        term.take_updates();
        term.submit("clear");
        assert!(term.transcript().is_empty());
        let update = term.take_updates();
        assert!(update.cleared);
        assert!(update.lines.is_empty());
        assert!(!term.take_updates().cleared);
    }

    #[test]
    fn test_updates_are_incremental() {
        let mut term = quiet();
        term.submit("init");
        assert_eq!(term.take_updates().lines.len(), 2);
        term.submit("status");
        let update = term.take_updates();
        assert_eq!(update.lines[0].text, "$ status");
        assert_eq!(update.lines.len(), 3);
        assert!(term.take_updates().lines.is_empty());
    }

    #[test]
    fn test_transcript_trimming() {
        let mut transcript = Transcript::new(10);
        for i in 0..25 {
            transcript.print(&format!("line {}", i));
        }
        assert_eq!(transcript.len(), 10);
        assert_eq!(transcript.lines().next().unwrap().text, "line 15");
        let update = transcript.take_updates();
        assert_eq!(update.lines.len(), 10);
        assert_eq!(update.lines.last().unwrap().text, "line 24");
    }

    #[test]
    fn test_history_recall() {
        let mut term = quiet();
        assert_eq!(term.recall_previous(), None);
        term.submit("git init");
        term.submit("status");
        assert_eq!(term.recall_previous().as_deref(), Some("status"));
        assert_eq!(term.recall_previous().as_deref(), Some("git init"));
        assert_eq!(term.recall_previous().as_deref(), Some("git init"));
        assert_eq!(term.recall_next(), "status");
        assert_eq!(term.recall_next(), "");
        assert_eq!(term.recall_next(), "");
    }

    #[test]
    fn test_handle_key() {
        let mut term = quiet();
        assert_eq!(term.handle_key("ArrowUp", "draft"), Some("draft".to_string()));
        assert_eq!(term.handle_key("Enter", "git init"), Some(String::new()));
        assert!(term.state().repo.initialized);
        assert_eq!(term.handle_key("ArrowUp", ""), Some("git init".to_string()));
        assert_eq!(term.handle_key("ArrowDown", "git init"), Some(String::new()));
        assert_eq!(term.handle_key("a", ""), None);
    }

    #[test]
    fn test_start_mission_has_no_echo() {
        let mut term = quiet();
        term.start_mission(2);
        let lines = texts(&term);
        assert_eq!(lines[0], "🚀 Mission 2: Branching");
        assert!(term.transcript().lines().all(|l| !l.is_input));
        assert!(term.history().is_empty());
    }

    #[test]
    fn test_snapshot_json() {
        let mut term = quiet();
        term.submit("git init");
        term.submit("git config user.name Ada");
        let json = term.snapshot_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["state"]["repo"]["initialized"], true);
        assert_eq!(value["state"]["git_config"]["local"]["user.name"], "Ada");
        assert_eq!(value["history"]["entries"][0], "git init");
    }
}
