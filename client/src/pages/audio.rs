//! Audio samples console.
//!
//! Parallel to the examples console but keyed by (speaker mode, language)
//! instead of before/after sides. Group switching is pure client-side
//! filtering over the flat listing; mutations refetch.

#[cfg(test)]
#[path = "audio_page_test.rs"]
mod audio_page_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::audio_grid::AudioGrid;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::top_bar::{Section, TopBar};
use crate::net::error::ApiError;
use crate::net::types::{AudioAsset, Language, SpeakerMode};
use crate::state::audio::AudioState;
use crate::state::auth::{AuthState, force_logout, should_redirect_to_login};
use crate::state::ui::UiState;
use crate::util::audio_catalog::audio_slots;

const SPEAKER_MODES: [SpeakerMode; 2] = [SpeakerMode::Single, SpeakerMode::Multi];
const LANGUAGES: [Language; 2] = [Language::English, Language::Hindi];

/// Confirmation copy for an audio delete.
fn audio_delete_prompt(asset: &AudioAsset) -> String {
    format!(
        "Delete {} from {}/{}? This cannot be undone.",
        asset.filename, asset.speaker_mode, asset.language
    )
}

/// Refetch the full audio listing; stale completions are discarded by the
/// state's sequence guard.
fn refresh_audio(auth: RwSignal<AuthState>, audio: RwSignal<AudioState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(credentials) = auth.get_untracked().credentials else {
            return;
        };
        let mut seq = 0;
        audio.update(|state| seq = state.begin_fetch());
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_audio_assets(&credentials).await {
                Ok(items) => audio.update(|state| state.finish(seq, Ok(items))),
                Err(ApiError::Unauthorized) => force_logout(auth),
                Err(error) => {
                    audio.update(|state| state.finish(seq, Err(error.user_message())));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, audio);
    }
}

#[component]
pub fn AudioPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let audio = expect_context::<RwSignal<AudioState>>();
    let navigate = use_navigate();

    let banner = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<AudioAsset>);

    Effect::new(move || {
        if should_redirect_to_login(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    Effect::new(move || {
        if auth.get().is_authenticated() {
            refresh_audio(auth, audio);
        }
    });

    let slots = Memo::new(move |_| {
        let state = audio.get();
        audio_slots(&state.items, state.mode, state.language)
    });

    let busy = Signal::derive(move || ui.get().busy);

    let on_upload = Callback::new(move |(ordinal, file): (u32, crate::util::files::PickedFile)| {
        #[cfg(feature = "hydrate")]
        {
            let Some(credentials) = auth.get_untracked().credentials else {
                return;
            };
            let state = audio.get_untracked();
            let (mode, language) = (state.mode, state.language);
            let filename = crate::util::files::numbered_filename(
                &crate::util::files::picked_file_name(&file),
                ordinal,
            );
            ui.update(|state| state.busy = true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::upload_audio_asset(
                    &credentials,
                    &file,
                    &filename,
                    mode,
                    language,
                )
                .await;
                ui.update(|state| state.busy = false);
                match result {
                    Ok(()) => {
                        banner.set(None);
                        refresh_audio(auth, audio);
                    }
                    Err(ApiError::Unauthorized) => force_logout(auth),
                    Err(error) => banner.set(Some(error.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ordinal, file);
        }
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(asset) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            let Some(credentials) = auth.get_untracked().credentials else {
                return;
            };
            ui.update(|state| state.busy = true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_audio_asset(&credentials, &asset).await;
                ui.update(|state| state.busy = false);
                match result {
                    Ok(()) => {
                        banner.set(None);
                        refresh_audio(auth, audio);
                    }
                    Err(ApiError::Unauthorized) => force_logout(auth),
                    Err(error) => banner.set(Some(error.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = asset;
        }
    });

    view! {
        <div class="console-page">
            <TopBar active=Section::Audio/>
            <main class="console-page__body">
                <div class="audio-filters">
                    <div class="audio-filters__group">
                        {SPEAKER_MODES
                            .into_iter()
                            .map(|mode| {
                                view! {
                                    <button
                                        class=move || {
                                            if audio.get().mode == mode {
                                                "audio-filters__tab audio-filters__tab--active"
                                            } else {
                                                "audio-filters__tab"
                                            }
                                        }
                                        on:click=move |_| audio.update(|state| state.mode = mode)
                                    >
                                        {mode.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="audio-filters__group">
                        {LANGUAGES
                            .into_iter()
                            .map(|language| {
                                view! {
                                    <button
                                        class=move || {
                                            if audio.get().language == language {
                                                "audio-filters__tab audio-filters__tab--active"
                                            } else {
                                                "audio-filters__tab"
                                            }
                                        }
                                        on:click=move |_| {
                                            audio.update(|state| state.language = language)
                                        }
                                    >
                                        {language.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <Show when=move || banner.get().is_some()>
                    <p class="console-page__banner console-page__banner--error">
                        {move || banner.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || audio.get().error.is_some()>
                    <p class="console-page__banner console-page__banner--error">
                        {move || audio.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || audio.get().loading>
                    <p class="console-page__loading">"Loading samples..."</p>
                </Show>

                <AudioGrid
                    slots=slots
                    busy=busy
                    on_upload=on_upload
                    on_delete=Callback::new(move |asset| pending_delete.set(Some(asset)))
                />
            </main>

            {move || {
                pending_delete
                    .get()
                    .map(|asset| {
                        let message = audio_delete_prompt(&asset);
                        view! {
                            <ConfirmDialog
                                title="Delete sample".to_owned()
                                message=message
                                confirm_label="Delete".to_owned()
                                on_confirm=on_confirm_delete
                                on_cancel=Callback::new(move |()| pending_delete.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
