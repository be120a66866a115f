//! One occupied media cell in the pair grid.

use leptos::prelude::*;

use crate::net::types::Asset;
use crate::util::media::{format_size, is_video_filename};

#[component]
pub fn MediaCell(
    asset: Asset,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_preview: Callback<Asset>,
    #[prop(into)] on_delete: Callback<Asset>,
) -> impl IntoView {
    let preview_asset = asset.clone();
    let delete_asset = asset.clone();
    let footer = format!("{} · {}", asset.filename, format_size(asset.size));

    let thumbnail = if is_video_filename(&asset.filename) {
        view! {
            <video class="media-cell__thumb" src=asset.url.clone() preload="metadata" muted=true></video>
        }
        .into_any()
    } else {
        view! {
            <img class="media-cell__thumb" src=asset.url.clone() alt=asset.filename.clone() loading="lazy"/>
        }
        .into_any()
    };

    view! {
        <div class="media-cell">
            <button
                class="media-cell__preview"
                title="Open preview"
                on:click=move |_| on_preview.run(preview_asset.clone())
            >
                {thumbnail}
            </button>
            <div class="media-cell__footer">
                <span class="media-cell__name">{footer}</span>
                <button
                    class="media-cell__delete"
                    title="Delete asset"
                    disabled=move || busy.get()
                    on:click=move |_| on_delete.run(delete_asset.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
