//! Audio listing state.
//!
//! Same refetch-after-mutation and stale-completion discipline as the
//! before/after listing, plus the selected `(speaker mode, language)` group.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

use crate::net::types::{AudioAsset, Language, SpeakerMode};

/// Audio-listing state shared via context.
#[derive(Clone, Debug)]
pub struct AudioState {
    pub items: Vec<AudioAsset>,
    pub loading: bool,
    pub error: Option<String>,
    pub mode: SpeakerMode,
    pub language: Language,
    fetch_seq: u64,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            mode: SpeakerMode::Single,
            language: Language::English,
            fetch_seq: 0,
        }
    }
}

impl AudioState {
    /// Start a fetch, superseding any still in flight.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Apply a fetch result; stale completions are dropped silently.
    pub fn finish(&mut self, seq: u64, result: Result<Vec<AudioAsset>, String>) {
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
