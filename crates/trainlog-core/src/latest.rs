//! Latest-completion resolution.
//!
//! People retake trainings, so one history can hold several entries with the
//! same training name. Every query works on the deduplicated view produced
//! here: one entry per training name, the most recent one.

use std::collections::HashMap;

use crate::model::CompletionEntry;

/// Resolve a completion history to one entry per distinct training name.
///
/// A later entry replaces the current one only when its timestamp is strictly
/// greater, so on equal timestamps the first entry seen wins. An undated
/// timestamp sorts below every real date. Output follows the order in which
/// training names are first seen.
pub fn latest_completions(entries: &[CompletionEntry]) -> Vec<&CompletionEntry> {
    let mut latest: Vec<&CompletionEntry> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        match slots.get(entry.name.as_str()).copied() {
            Some(slot) => {
                if entry.timestamp > latest[slot].timestamp {
                    latest[slot] = entry;
                }
            }
            None => {
                slots.insert(entry.name.as_str(), latest.len());
                latest.push(entry);
            }
        }
    }

    latest
}
