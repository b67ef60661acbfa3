//! Guided missions
//!
//! A mission is a short scripted exercise. The tracker only knows which
//! mission is running and how far along it is; handlers report what they
//! just did through [`MissionEvent`] and the tracker answers with any
//! progress lines to append.
//!
//! Mission 1 completes on a commit made while progress is 1, but nothing
//! ever moves mission 1 from 0 to 1. The step table below keeps that
//! behavior as-is.

use serde::Serialize;

use crate::repo::Repository;

/// File seeded into the working tree by mission 1
pub const MISSION_ONE_FILE: &str = "README.md";

/// The available missions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mission {
    /// Initialize a repository and make the first commit
    Init,
    /// Create, switch and merge a feature branch
    Branching,
    /// Not written yet
    Collaboration,
}

impl Mission {
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Mission::Init),
            2 => Some(Mission::Branching),
            3 => Some(Mission::Collaboration),
            _ => None,
        }
    }

    pub fn number(self) -> u32 {
        match self {
            Mission::Init => 1,
            Mission::Branching => 2,
            Mission::Collaboration => 3,
        }
    }
}

/// Something a handler did successfully that a mission may care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionEvent {
    Committed,
    BranchCreated,
    CheckedOut,
    /// Merge of a branch other than the current one
    Merged,
}

/// Active mission and its step counter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissionTracker {
    active: Option<Mission>,
    progress: u8,
}

/// (mission, event, required progress, new progress, completes, message)
type Step = (Mission, MissionEvent, u8, u8, bool, &'static str);

const STEPS: &[Step] = &[
    (
        Mission::Init,
        MissionEvent::Committed,
        1,
        2,
        true,
        "✅ Mission 1 completed! You've successfully initialized a repository and made your first commit.",
    ),
    (
        Mission::Branching,
        MissionEvent::BranchCreated,
        0,
        1,
        false,
        "✅ Step 1 completed! You've created a new branch.",
    ),
    (
        Mission::Branching,
        MissionEvent::CheckedOut,
        2,
        3,
        false,
        "✅ Step 3 completed! You've switched back to the main branch.",
    ),
    (
        Mission::Branching,
        MissionEvent::Merged,
        3,
        4,
        true,
        "✅ Mission 2 completed! You've successfully merged a branch.",
    ),
];

impl MissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Mission> {
        self.active
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Start (or restart) a mission, replacing whatever was running
    pub fn start(&mut self, mission: Mission, repo: &mut Repository) -> Vec<String> {
        self.active = Some(mission);
        self.progress = 0;
        log::info!("mission {} started", mission.number());

        match mission {
            Mission::Init => {
                let mut lines = lines(&[
                    "🚀 Mission 1: Initialize Repository",
                    "Your task: Create a new Git repository and make your first commit",
                    "",
                    "Steps:",
                    "1. Initialize a new repository with 'git init'",
                    "2. Create a file (simulated)",
                    "3. Add the file to staging with 'git add .'",
                    "4. Commit the file with 'git commit -m \"Initial commit\"'",
                    "",
                    "💡 Tip: Type 'help' to see available commands",
                ]);
                repo.write_file(MISSION_ONE_FILE, "Initial content");
                lines.push(format!("📝 Created {} file", MISSION_ONE_FILE));
                lines
            }
            Mission::Branching => lines(&[
                "🚀 Mission 2: Branching",
                "Your task: Create and merge a feature branch",
                "",
                "Steps:",
                "1. Create a new branch with 'git branch feature-login'",
                "2. Switch to the new branch with 'git checkout feature-login'",
                "3. Make changes and commit them",
                "4. Switch back to main branch with 'git checkout main'",
                "5. Merge the feature branch with 'git merge feature-login'",
                "",
                "💡 Tip: Type 'help' to see available commands",
            ]),
            Mission::Collaboration => {
                self.active = None;
                lines(&["🚀 Mission 3: Collaboration", "This mission is coming soon!"])
            }
        }
    }

    /// Feed a successful handler outcome to the active mission
    pub fn observe(&mut self, event: MissionEvent) -> Vec<String> {
        let Some(active) = self.active else {
            return Vec::new();
        };

        let step = STEPS
            .iter()
            .find(|(m, e, required, ..)| *m == active && *e == event && *required == self.progress);

        match step {
            Some(&(_, _, _, next, completes, message)) => {
                self.progress = next;
                if completes {
                    log::info!("mission {} completed", active.number());
                    self.active = None;
                } else {
                    log::debug!("mission {} progress {}", active.number(), next);
                }
                vec![message.to_string()]
            }
            None => Vec::new(),
        }
    }

    /// Listing shown by a bare `mission`
    pub fn catalog() -> Vec<String> {
        lines(&[
            "Available missions:",
            "  1 - Initialize Repository",
            "  2 - Branching",
            "  3 - Collaboration (coming soon)",
        ])
    }
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}
