//! Pure state transitions.

use dashgen_manifest::Interface;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Maximum number of history entries kept.
pub const HISTORY_LIMIT: usize = 20;

/// Everything the store persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedState {
    /// Named interfaces, in save order.
    pub saved: IndexMap<String, Interface>,
    /// Raw inputs of recent generations, newest first.
    pub history: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Save an interface under a name, replacing any previous one.
    Save { name: String, interface: Interface },
    Remove { name: String },
    /// Record an input that was generated from.
    Record { input: String },
    ClearHistory,
}

/// Apply an action to the state.
pub fn reduce(mut state: SavedState, action: StoreAction) -> SavedState {
    match action {
        StoreAction::Save { name, interface } => {
            state.saved.insert(name, interface);
        }
        StoreAction::Remove { name } => {
            state.saved.shift_remove(&name);
        }
        StoreAction::Record { input } => {
            if state.history.first() != Some(&input) {
                state.history.insert(0, input);
                state.history.truncate(HISTORY_LIMIT);
            }
        }
        StoreAction::ClearHistory => state.history.clear(),
    }
    state
}
