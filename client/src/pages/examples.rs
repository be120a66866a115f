//! Before/after examples console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Orchestrates the listing lifecycle for paired media examples: fetch on
//! entry, reconcile into ordered pairs, and refetch after every mutation.
//! Consistency always comes from re-reading backend state; uploads and
//! deletes never patch the local listing.

#[cfg(test)]
#[path = "examples_test.rs"]
mod examples_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::category_tabs::CategoryTabs;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pair_grid::PairGrid;
use crate::components::preview_modal::PreviewModal;
use crate::components::top_bar::{Section, TopBar};
use crate::net::error::ApiError;
use crate::net::types::{Asset, AssetKind, Category};
use crate::state::assets::AssetsState;
use crate::state::auth::{AuthState, force_logout, should_redirect_to_login};
use crate::state::ui::UiState;
use crate::util::pairing::reconcile_pairs;

/// Distinct subcategories observed in the listing for one category, sorted.
fn subcategory_options(items: &[Asset], category: &str) -> Vec<String> {
    let mut options: Vec<String> = items
        .iter()
        .filter(|asset| asset.category == category)
        .filter_map(|asset| asset.subcategory.clone())
        .collect();
    options.sort_unstable();
    options.dedup();
    options
}

/// Assets shown for the current selection.
fn assets_in_view(items: &[Asset], category: &str, subcategory: Option<&str>) -> Vec<Asset> {
    items
        .iter()
        .filter(|asset| asset.category == category)
        .filter(|asset| match subcategory {
            Some(subcategory) => asset.subcategory.as_deref() == Some(subcategory),
            None => true,
        })
        .cloned()
        .collect()
}

/// Resolve the subcategory an upload should target.
///
/// A typed value wins (it is how the first asset of a new subcategory gets
/// created); otherwise the selected filter is used. A category that already
/// has subcategories refuses uploads without one.
fn upload_subcategory(
    options: &[String],
    selected: Option<&str>,
    typed: &str,
) -> Result<Option<String>, &'static str> {
    let typed = typed.trim();
    if !typed.is_empty() {
        return Ok(Some(typed.to_owned()));
    }
    match selected {
        Some(selected) => Ok(Some(selected.to_owned())),
        None if options.is_empty() => Ok(None),
        None => Err("Select a subcategory before uploading."),
    }
}

/// Confirmation copy for a delete.
fn delete_prompt(asset: &Asset) -> String {
    let location = match &asset.subcategory {
        Some(subcategory) => format!("{}/{}/{}", asset.category, subcategory, asset.kind),
        None => format!("{}/{}", asset.category, asset.kind),
    };
    format!("Delete {} from {location}? This cannot be undone.", asset.filename)
}

/// Refetch the full asset listing; stale completions are discarded by the
/// state's sequence guard.
fn refresh_assets(auth: RwSignal<AuthState>, assets: RwSignal<AssetsState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(credentials) = auth.get_untracked().credentials else {
            return;
        };
        let mut seq = 0;
        assets.update(|state| seq = state.begin_fetch());
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_assets(&credentials).await {
                Ok(items) => assets.update(|state| state.finish(seq, Ok(items))),
                Err(ApiError::Unauthorized) => force_logout(auth),
                Err(error) => {
                    assets.update(|state| state.finish(seq, Err(error.user_message())));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, assets);
    }
}

/// Fetch the category directory once per session entry.
fn refresh_categories(
    auth: RwSignal<AuthState>,
    categories: RwSignal<Vec<Category>>,
    banner: RwSignal<Option<String>>,
) {
    #[cfg(feature = "hydrate")]
    {
        let Some(credentials) = auth.get_untracked().credentials else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_categories(&credentials).await {
                Ok(list) => categories.set(list),
                Err(ApiError::Unauthorized) => force_logout(auth),
                Err(error) => banner.set(Some(error.user_message())),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, categories, banner);
    }
}

#[component]
pub fn ExamplesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let assets = expect_context::<RwSignal<AssetsState>>();
    let navigate = use_navigate();

    let categories = RwSignal::new(Vec::<Category>::new());
    let selected_category = RwSignal::new(None::<String>);
    let selected_subcategory = RwSignal::new(None::<String>);
    let new_subcategory = RwSignal::new(String::new());
    let banner = RwSignal::new(None::<String>);
    let preview = RwSignal::new(None::<Asset>);
    let pending_delete = RwSignal::new(None::<Asset>);

    Effect::new(move || {
        if should_redirect_to_login(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Fetch on entry once the session is (or becomes) authenticated.
    Effect::new(move || {
        if auth.get().is_authenticated() {
            refresh_categories(auth, categories, banner);
            refresh_assets(auth, assets);
        }
    });

    // Default to the first category once the directory arrives.
    Effect::new(move || {
        let list = categories.get();
        if selected_category.get().is_none() {
            if let Some(first) = list.first() {
                selected_category.set(Some(first.id.clone()));
            }
        }
    });

    let options = Memo::new(move |_| {
        let items = assets.get().items;
        selected_category.get().map_or_else(Vec::new, |category| {
            subcategory_options(&items, &category)
        })
    });

    let pairs = Memo::new(move |_| {
        let items = assets.get().items;
        let Some(category) = selected_category.get() else {
            return Vec::new();
        };
        let selected = selected_subcategory.get();
        reconcile_pairs(&assets_in_view(&items, &category, selected.as_deref()))
    });

    let busy = Signal::derive(move || ui.get().busy);

    let on_select_category = Callback::new(move |id: String| {
        selected_category.set(Some(id));
        selected_subcategory.set(None);
        new_subcategory.set(String::new());
        banner.set(None);
    });

    let on_upload = Callback::new(move |(kind, ordinal, file): (AssetKind, u32, crate::util::files::PickedFile)| {
        #[cfg(feature = "hydrate")]
        {
            let Some(credentials) = auth.get_untracked().credentials else {
                return;
            };
            let Some(category) = selected_category.get_untracked() else {
                return;
            };
            let selected = selected_subcategory.get_untracked();
            let subcategory = match upload_subcategory(
                &options.get_untracked(),
                selected.as_deref(),
                &new_subcategory.get_untracked(),
            ) {
                Ok(subcategory) => subcategory,
                Err(message) => {
                    banner.set(Some(message.to_owned()));
                    return;
                }
            };
            let filename = crate::util::files::numbered_filename(
                &crate::util::files::picked_file_name(&file),
                ordinal,
            );
            ui.update(|state| state.busy = true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::upload_asset(
                    &credentials,
                    &file,
                    &filename,
                    &category,
                    kind,
                    subcategory.as_deref(),
                )
                .await;
                ui.update(|state| state.busy = false);
                match result {
                    Ok(()) => {
                        banner.set(None);
                        refresh_assets(auth, assets);
                    }
                    Err(ApiError::Unauthorized) => force_logout(auth),
                    Err(error) => banner.set(Some(error.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, ordinal, file);
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
                let result = crate::net::api::delete_asset(&credentials, &asset).await;
                ui.update(|state| state.busy = false);
                match result {
                    Ok(()) => {
                        banner.set(None);
                        refresh_assets(auth, assets);
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
            <TopBar active=Section::Examples/>
            <main class="console-page__body">
                <CategoryTabs
                    categories=categories
                    selected=selected_category
                    on_select=on_select_category
                />

                <div class="console-page__filters">
                    <Show when=move || !options.get().is_empty()>
                        <label class="console-page__filter">
                            "Subcategory"
                            <select
                                class="console-page__select"
                                prop:value=move || selected_subcategory.get().unwrap_or_default()
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    selected_subcategory
                                        .set((!value.is_empty()).then_some(value));
                                }
                            >
                                <option value="">"All"</option>
                                {move || {
                                    options
                                        .get()
                                        .into_iter()
                                        .map(|option| {
                                            view! { <option value=option.clone()>{option.clone()}</option> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>
                    </Show>
                    <label class="console-page__filter">
                        "New subcategory"
                        <input
                            class="console-page__input"
                            type="text"
                            placeholder="e.g. japanese"
                            prop:value=move || new_subcategory.get()
                            on:input=move |ev| new_subcategory.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <Show when=move || banner.get().is_some()>
                    <p class="console-page__banner console-page__banner--error">
                        {move || banner.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || assets.get().error.is_some()>
                    <p class="console-page__banner console-page__banner--error">
                        {move || assets.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || assets.get().loading>
                    <p class="console-page__loading">"Loading examples..."</p>
                </Show>

                <PairGrid
                    pairs=pairs
                    busy=busy
                    on_upload=on_upload
                    on_preview=Callback::new(move |asset| preview.set(Some(asset)))
                    on_delete=Callback::new(move |asset| pending_delete.set(Some(asset)))
                />
            </main>

            {move || {
                preview
                    .get()
                    .map(|asset| {
                        view! {
                            <PreviewModal
                                asset=asset
                                on_close=Callback::new(move |()| preview.set(None))
                            />
                        }
                    })
            }}
            {move || {
                pending_delete
                    .get()
                    .map(|asset| {
                        let message = delete_prompt(&asset);
                        view! {
                            <ConfirmDialog
                                title="Delete asset".to_owned()
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
