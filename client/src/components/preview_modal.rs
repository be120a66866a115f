//! Full-size media preview modal.

use leptos::prelude::*;

use crate::net::types::Asset;
use crate::util::media::is_video_filename;

#[component]
pub fn PreviewModal(asset: Asset, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let caption = match &asset.subcategory {
        Some(subcategory) => {
            format!("{} / {} / {} / {}", asset.category, subcategory, asset.kind, asset.filename)
        }
        None => format!("{} / {} / {}", asset.category, asset.kind, asset.filename),
    };

    let media = if is_video_filename(&asset.filename) {
        view! {
            <video class="preview-modal__media" src=asset.url.clone() controls=true></video>
        }
        .into_any()
    } else {
        view! {
            <img class="preview-modal__media" src=asset.url.clone() alt=asset.filename.clone()/>
        }
        .into_any()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="preview-modal" on:click=move |ev| ev.stop_propagation()>
                {media}
                <div class="preview-modal__footer">
                    <span class="preview-modal__caption">{caption}</span>
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
