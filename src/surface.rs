//! Terminal presentation surface.
//!
//! Renders recorder snapshots and the saved collection for the CLI. Pure
//! formatting; every decision it displays (can-save gating included) comes
//! from the snapshot itself.

use action_model::{Action, RecorderSnapshot, SavedRecording};

/// One status line: recording state, scope, action count.
pub fn status_line(snapshot: &RecorderSnapshot) -> String {
    match snapshot.scope_tab {
        Some(tab) if snapshot.is_recording => format!(
            "recording on {} ({} actions)",
            tab,
            snapshot.actions.len()
        ),
        _ => format!("idle ({} actions pending)", snapshot.actions.len()),
    }
}

/// The live action list, one numbered line per action.
pub fn action_lines(snapshot: &RecorderSnapshot) -> Vec<String> {
    snapshot
        .actions
        .iter()
        .enumerate()
        .map(|(index, action)| format_action(index, action))
        .collect()
}

fn format_action(index: usize, action: &Action) -> String {
    let mut line = format!("{:>3}. {} {} {}", index + 1, action.icon(), action.kind(), action.details());
    if let Some(selector) = action.selector() {
        line.push_str(&format!("  [{selector}]"));
    }
    line
}

/// Whether the save control is offered.
pub fn offer_save(snapshot: &RecorderSnapshot) -> bool {
    snapshot.can_save()
}

/// The saved collection, newest first, one line per recording.
pub fn recording_lines(recordings: &[SavedRecording]) -> Vec<String> {
    recordings
        .iter()
        .map(|recording| {
            format!(
                "{}  {}  {} actions  {}",
                recording.id,
                recording.name,
                recording.actions.len(),
                recording.created_at.format("%Y-%m-%d %H:%M:%S"),
            )
        })
        .collect()
}
