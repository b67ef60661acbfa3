//! Built-in simulator commands
//!
//! These are not git commands. They need more than the repository: `help`
//! reads the registry, `history` reads the input history, and `clear`
//! talks to the transcript.

use super::executor::{CommandOutcome, SessionState};
use super::history::History;
use super::registry::{CommandKind, Registry};
use crate::error::CommandError;
use crate::mission::{Mission, MissionTracker};

/// Check if a command kind is a builtin
pub fn is_builtin(kind: CommandKind) -> bool {
    matches!(
        kind,
        CommandKind::Help | CommandKind::Mission | CommandKind::Clear | CommandKind::History
    )
}

/// Execute a builtin command
pub fn execute(
    kind: CommandKind,
    args: &[String],
    state: &mut SessionState,
    history: &History,
    registry: &Registry,
) -> CommandOutcome {
    match kind {
        CommandKind::Help => builtin_help(args, registry),
        CommandKind::Mission => builtin_mission(args, state),
        CommandKind::Clear => CommandOutcome::Clear,
        CommandKind::History => builtin_history(history),
        other => {
            log::warn!("{:?} is not a builtin", other);
            CommandOutcome::Lines(Vec::new())
        }
    }
}

fn builtin_help(args: &[String], registry: &Registry) -> CommandOutcome {
    if args.is_empty() {
        let mut out = vec!["Available commands:".to_string()];
        out.extend(
            registry
                .entries()
                .iter()
                .map(|spec| format!("  {} - {}", spec.name, spec.description)),
        );
        out.push("Type 'help [command]' for more information on a specific command.".to_string());
        return CommandOutcome::Lines(out);
    }

    // `help git commit` asks about the two-word name
    let topic = args.join(" ");
    match registry.get(&topic) {
        Some(spec) => CommandOutcome::Lines(vec![
            format!("$ {} - {}", spec.name, spec.description),
            format!("  Usage: {}", spec.usage),
        ]),
        None => CommandOutcome::Failed(CommandError::UnknownCommand(topic)),
    }
}

fn builtin_mission(args: &[String], state: &mut SessionState) -> CommandOutcome {
    let Some(arg) = args.first() else {
        return CommandOutcome::Lines(MissionTracker::catalog());
    };

    match mission_number(arg).and_then(Mission::from_number) {
        Some(mission) => CommandOutcome::Lines(state.missions.start(mission, &mut state.repo)),
        None => CommandOutcome::Failed(CommandError::InvalidMission),
    }
}

/// Leading decimal digits of `arg`, so `2nd` still means mission 2
fn mission_number(arg: &str) -> Option<u32> {
    let digits: String = arg.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn builtin_history(history: &History) -> CommandOutcome {
    CommandOutcome::Lines(
        history
            .entries()
            .enumerate()
            .map(|(i, line)| format!("  {}  {}", i + 1, line))
            .collect(),
    )
}
