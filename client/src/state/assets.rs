//! Before/after listing state.
//!
//! DESIGN
//! ======
//! The listing is a read-through copy of backend state: it is refetched
//! after every mutation and never patched locally. Each fetch captures a
//! sequence number at issue time; a completion whose number no longer
//! matches was superseded by a newer fetch and is discarded, so a slow
//! response can never overwrite fresher state.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use crate::net::types::Asset;

/// Example-listing state shared via context.
#[derive(Clone, Debug, Default)]
pub struct AssetsState {
    pub items: Vec<Asset>,
    pub loading: bool,
    pub error: Option<String>,
    fetch_seq: u64,
}

impl AssetsState {
    /// Start a fetch, superseding any still in flight. Returns the sequence
    /// number the completion must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Apply a fetch result; stale completions are dropped silently.
    pub fn finish(&mut self, seq: u64, result: Result<Vec<Asset>, String>) {
        if seq != self.fetch_seq {
            return;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }
}
