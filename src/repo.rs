//! Simulated repository state
//!
//! A plain in-memory record of what a real repository would track. Nothing
//! here hashes, diffs or touches storage. The methods exist to keep the
//! invariants in one place:
//! - a filename is either in the working tree or staged, never both
//! - the current branch is always one of the known branches
//! - commits are append-only

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Length of a generated commit id
pub const COMMIT_ID_LEN: usize = 7;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A recorded commit. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
    /// Filenames that were staged when the commit was made
    pub files: Vec<String>,
    /// Branch that was checked out at commit time
    pub branch: String,
    pub timestamp: DateTime<Utc>,
}

/// The single configured remote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remote {
    pub name: String,
    pub url: String,
}

/// Outcome of staging one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageResult {
    Staged,
    AlreadyStaged,
    NotFound,
}

/// Repository state for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub initialized: bool,
    working: BTreeMap<String, String>,
    staged: BTreeMap<String, String>,
    commits: Vec<Commit>,
    branches: Vec<String>,
    current_branch: String,
    remote: Option<Remote>,
}

impl Repository {
    pub fn new(default_branch: impl Into<String>) -> Self {
        let branch = default_branch.into();
        Self {
            initialized: false,
            working: BTreeMap::new(),
            staged: BTreeMap::new(),
            commits: Vec::new(),
            branches: vec![branch.clone()],
            current_branch: branch,
            remote: None,
        }
    }

    // ===== Working tree and index =====

    /// Put a file into the working tree, unstaging any previous version
    pub fn write_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        self.staged.remove(&name);
        self.working.insert(name, content.into());
    }

    pub fn working_files(&self) -> impl Iterator<Item = &str> {
        self.working.keys().map(|s| s.as_str())
    }

    pub fn staged_files(&self) -> impl Iterator<Item = &str> {
        self.staged.keys().map(|s| s.as_str())
    }

    pub fn has_unstaged(&self) -> bool {
        !self.working.is_empty()
    }

    pub fn has_staged(&self) -> bool {
        !self.staged.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.working.is_empty() && self.staged.is_empty()
    }

    /// Move one file from the working tree to the index
    pub fn stage(&mut self, name: &str) -> StageResult {
        if let Some(content) = self.working.remove(name) {
            self.staged.insert(name.to_string(), content);
            StageResult::Staged
        } else if self.staged.contains_key(name) {
            StageResult::AlreadyStaged
        } else {
            StageResult::NotFound
        }
    }

    /// Move every working file to the index, returning the moved names
    pub fn stage_all(&mut self) -> Vec<String> {
        let moved: Vec<String> = self.working.keys().cloned().collect();
        self.staged.append(&mut self.working);
        moved
    }

    /// Drop all working and staged changes. Returns whether anything was dropped.
    pub fn discard_changes(&mut self) -> bool {
        let dirty = !self.is_clean();
        self.working.clear();
        self.staged.clear();
        dirty
    }

    // ===== Commits =====

    /// Record a commit of everything staged.
    ///
    /// Returns `None` and changes nothing when the index is empty.
    pub fn record_commit(
        &mut self,
        id: String,
        message: String,
        timestamp: DateTime<Utc>,
    ) -> Option<&Commit> {
        if self.staged.is_empty() {
            return None;
        }
        let files: Vec<String> = std::mem::take(&mut self.staged).into_keys().collect();
        self.commits.push(Commit {
            id,
            message,
            files,
            branch: self.current_branch.clone(),
            timestamp,
        });
        self.commits.last()
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Most recent commit
    pub fn head(&self) -> Option<&Commit> {
        self.commits.last()
    }

    // ===== Branches =====

    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    pub fn current_branch(&self) -> &str {
        &self.current_branch
    }

    pub fn has_branch(&self, name: &str) -> bool {
        self.branches.iter().any(|b| b == name)
    }

    /// Create a branch. Returns false if it already exists.
    pub fn create_branch(&mut self, name: &str) -> bool {
        if self.has_branch(name) {
            return false;
        }
        self.branches.push(name.to_string());
        true
    }

    /// Check out an existing branch. Returns false if it is unknown.
    pub fn switch_branch(&mut self, name: &str) -> bool {
        if !self.has_branch(name) {
            return false;
        }
        self.current_branch = name.to_string();
        true
    }

    // ===== Remote =====

    pub fn remote(&self) -> Option<&Remote> {
        self.remote.as_ref()
    }

    /// Set the remote, replacing any previous one
    pub fn set_remote(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.remote = Some(Remote {
            name: name.into(),
            url: url.into(),
        });
    }
}

/// Source of plausible-looking commit ids
#[derive(Debug, Clone)]
pub struct CommitIds {
    rng: SmallRng,
}

impl CommitIds {
    /// Seed from the current time
    pub fn from_clock() -> Self {
        let now = Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_millis()) as u64;
        Self::with_seed(seed)
    }

    /// Deterministic ids, for tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_id(&mut self) -> String {
        (0..COMMIT_ID_LEN)
            .map(|_| ID_ALPHABET[self.rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect()
    }
}

/// Whether `id` has the shape of a generated commit id
pub fn is_commit_id(id: &str) -> bool {
    id.len() == COMMIT_ID_LEN && id.bytes().all(|b| ID_ALPHABET.contains(&b))
}
