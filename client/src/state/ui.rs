//! Local UI chrome state.
//!
//! Keeps transient presentation concerns (theme, mutation-in-flight flag)
//! out of the domain listing state.

use leptos::prelude::*;

/// UI state for the console chrome.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// True while an upload or delete is in flight; upload/delete surfaces
    /// are disabled rather than queued.
    pub busy: bool,
}

/// Flip the theme and persist the preference.
pub fn toggle_dark_mode(ui: RwSignal<UiState>) {
    let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
    ui.update(|state| state.dark_mode = next);
}
