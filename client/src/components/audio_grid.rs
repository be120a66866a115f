//! Ordered audio sample grid for one (speaker mode, language) group.
//!
//! Always renders at least three slots; the trailing tile uploads into the
//! next unused ordinal.

use leptos::prelude::*;

use crate::components::upload_dropzone::UploadDropzone;
use crate::net::types::AudioAsset;
use crate::util::audio_catalog::{AudioSlot, next_ordinal, placeholder_count};
use crate::util::files::PickedFile;
use crate::util::media::format_size;

#[component]
pub fn AudioGrid(
    #[prop(into)] slots: Signal<Vec<AudioSlot>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_upload: Callback<(u32, PickedFile)>,
    #[prop(into)] on_delete: Callback<AudioAsset>,
) -> impl IntoView {
    view! {
        <div class="audio-grid">
            {move || {
                let occupied = slots.get();
                let next = next_ordinal(&occupied);
                let placeholders = placeholder_count(occupied.len());

                let mut cells = occupied
                    .into_iter()
                    .map(|slot| {
                        let delete_asset = slot.asset.clone();
                        let footer =
                            format!("{} · {}", slot.asset.filename, format_size(slot.asset.size));
                        view! {
                            <div class="audio-grid__cell">
                                <span class="audio-grid__ordinal">{format!("Sample {}", slot.ordinal)}</span>
                                <audio class="audio-grid__player" src=slot.asset.url.clone() controls=true></audio>
                                <div class="audio-grid__footer">
                                    <span class="audio-grid__name">{footer}</span>
                                    <button
                                        class="audio-grid__delete"
                                        title="Delete sample"
                                        disabled=move || busy.get()
                                        on:click=move |_| on_delete.run(delete_asset.clone())
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                        .into_any()
                    })
                    .collect::<Vec<_>>();

                cells.extend((0..placeholders).map(|_| {
                    view! {
                        <div class="audio-grid__cell audio-grid__cell--empty">
                            <span class="audio-grid__hint">"Empty slot"</span>
                        </div>
                    }
                    .into_any()
                }));

                cells.push(
                    view! {
                        <div class="audio-grid__cell audio-grid__cell--upload">
                            <UploadDropzone
                                label=format!("Add sample {next}")
                                accept="audio/*"
                                disabled=busy
                                on_file=Callback::new(move |file: PickedFile| {
                                    on_upload.run((next, file));
                                })
                            />
                        </div>
                    }
                    .into_any(),
                );

                cells
            }}
        </div>
    }
}
