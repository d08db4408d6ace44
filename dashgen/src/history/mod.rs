//! Saved interfaces and generation history.
//!
//! State lives in an [`InterfaceStore`]: a pure [`reduce`] function over
//! [`StoreAction`]s plus a [`KeyValuePort`] the store persists through.

mod port;
mod state;
mod store;

#[cfg(test)]
pub use port::MemoryPort;
pub use port::{FilePort, KeyValuePort};
pub use state::{HISTORY_LIMIT, SavedState, StoreAction, reduce};
pub use store::InterfaceStore;

use std::path::PathBuf;

/// Environment variable overriding the state directory.
pub const STATE_DIR_ENV: &str = "DASHGEN_STATE_DIR";

/// Directory the CLI keeps its state in (`.dashgen` unless overridden).
pub fn state_dir() -> PathBuf {
    std::env::var_os(STATE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".dashgen"))
}

/// Open the store backed by [`state_dir`].
pub fn open_default() -> eyre::Result<InterfaceStore<FilePort>> {
    InterfaceStore::open(FilePort::new(state_dir()))
}
