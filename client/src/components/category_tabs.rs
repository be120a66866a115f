//! Category tab strip for the examples console.

use leptos::prelude::*;

use crate::net::types::Category;

#[component]
pub fn CategoryTabs(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-tabs">
            {move || {
                let active = selected.get();
                categories
                    .get()
                    .into_iter()
                    .map(|category| {
                        let is_active = active.as_deref() == Some(category.id.as_str());
                        let id = category.id.clone();
                        view! {
                            <button
                                class=if is_active {
                                    "category-tabs__tab category-tabs__tab--active"
                                } else {
                                    "category-tabs__tab"
                                }
                                title=category.description.clone()
                                on:click=move |_| on_select.run(id.clone())
                            >
                                {category.name.clone()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
