//! Reconciled before/after pair grid.
//!
//! Each row is one ordinal: two media cells when complete, an upload
//! affordance for any missing side, and a trailing row that starts the next
//! pair at the first unused ordinal.

#[cfg(test)]
#[path = "pair_grid_test.rs"]
mod pair_grid_test;

use leptos::prelude::*;

use crate::components::media_cell::MediaCell;
use crate::components::upload_dropzone::UploadDropzone;
use crate::net::types::{Asset, AssetKind};
use crate::util::files::PickedFile;
use crate::util::pairing::{AssetPair, next_pair_ordinal};

const MEDIA_ACCEPT: &str = "image/*,video/*";

/// Row badge describing pair completeness.
fn pair_status_label(pair: &AssetPair) -> &'static str {
    match (&pair.before, &pair.after) {
        (Some(_), Some(_)) => "Complete",
        (Some(_), None) => "Missing after",
        (None, Some(_)) => "Missing before",
        (None, None) => "Empty",
    }
}

#[component]
pub fn PairGrid(
    #[prop(into)] pairs: Signal<Vec<AssetPair>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_upload: Callback<(AssetKind, u32, PickedFile)>,
    #[prop(into)] on_preview: Callback<Asset>,
    #[prop(into)] on_delete: Callback<Asset>,
) -> impl IntoView {
    let side_cell = move |kind: AssetKind, ordinal: u32, asset: Option<Asset>| match asset {
        Some(asset) => view! {
            <MediaCell asset=asset busy=busy on_preview=on_preview on_delete=on_delete/>
        }
        .into_any(),
        None => view! {
            <UploadDropzone
                label=format!("Add {kind}")
                accept=MEDIA_ACCEPT
                disabled=busy
                on_file=Callback::new(move |file: PickedFile| {
                    on_upload.run((kind, ordinal, file));
                })
            />
        }
        .into_any(),
    };

    view! {
        <div class="pair-grid">
            <div class="pair-grid__head">
                <span class="pair-grid__col">"#"</span>
                <span class="pair-grid__col">"Before"</span>
                <span class="pair-grid__col">"After"</span>
            </div>
            {move || {
                let rows = pairs.get();
                let next = next_pair_ordinal(&rows);
                let mut views = rows
                    .into_iter()
                    .map(|pair| {
                        let status = pair_status_label(&pair);
                        view! {
                            <div class="pair-grid__row">
                                <div class="pair-grid__ordinal">
                                    <span>{pair.ordinal}</span>
                                    <span class=if pair.is_complete() {
                                        "pair-grid__status pair-grid__status--complete"
                                    } else {
                                        "pair-grid__status pair-grid__status--incomplete"
                                    }>{status}</span>
                                </div>
                                {side_cell(AssetKind::Before, pair.ordinal, pair.before)}
                                {side_cell(AssetKind::After, pair.ordinal, pair.after)}
                            </div>
                        }
                        .into_any()
                    })
                    .collect::<Vec<_>>();
                views.push(
                    view! {
                        <div class="pair-grid__row pair-grid__row--new">
                            <div class="pair-grid__ordinal">
                                <span>{next}</span>
                                <span class="pair-grid__status">"New pair"</span>
                            </div>
                            {side_cell(AssetKind::Before, next, None)}
                            {side_cell(AssetKind::After, next, None)}
                        </div>
                    }
                    .into_any(),
                );
                views
            }}
        </div>
    }
}
