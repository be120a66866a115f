//! Console chrome: title, section navigation, theme toggle, logout.

use leptos::prelude::*;

use crate::state::auth::{AuthState, force_logout};
use crate::state::ui::{UiState, toggle_dark_mode};

/// Top-level console sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Examples,
    Audio,
}

#[component]
pub fn TopBar(active: Section) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let section_class = move |section: Section| {
        if section == active { "top-bar__link top-bar__link--active" } else { "top-bar__link" }
    };

    view! {
        <header class="top-bar">
            <span class="top-bar__title">"Showcase Admin"</span>
            <nav class="top-bar__nav">
                <a href="/" class=section_class(Section::Examples)>
                    "Examples"
                </a>
                <a href="/audio" class=section_class(Section::Audio)>
                    "Audio"
                </a>
            </nav>
            <div class="top-bar__actions">
                <button
                    class="top-bar__button"
                    title="Toggle dark mode"
                    on:click=move |_| toggle_dark_mode(ui)
                >
                    {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
                </button>
                <button class="top-bar__button" on:click=move |_| force_logout(auth)>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
