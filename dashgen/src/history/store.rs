//! State container persisting through a port.

use eyre::{Context, Result};
use log::debug;

use super::{KeyValuePort, SavedState, StoreAction, reduce};

/// Key the state is stored under.
pub const STATE_KEY: &str = "interfaces";

/// Holds the current [`SavedState`] and persists it after every action.
pub struct InterfaceStore<P> {
    port: P,
    state: SavedState,
}

impl<P: KeyValuePort> InterfaceStore<P> {
    /// Load the state from `port`, starting empty when nothing is stored.
    pub fn open(port: P) -> Result<Self> {
        let state = match port.read(STATE_KEY)? {
            Some(json) => serde_json::from_str(&json).wrap_err("stored state is corrupt")?,
            None => SavedState::default(),
        };
        Ok(Self { port, state })
    }

    pub fn state(&self) -> &SavedState {
        &self.state
    }

    /// Apply `action` and persist the new state.
    pub fn dispatch(&mut self, action: StoreAction) -> Result<&SavedState> {
        debug!("store action {:?}", action);
        self.state = reduce(std::mem::take(&mut self.state), action);
        let json = serde_json::to_string_pretty(&self.state)?;
        self.port.write(STATE_KEY, &json)?;
        Ok(&self.state)
    }

    #[cfg(test)]
    pub fn into_port(self) -> P {
        self.port
    }
}
