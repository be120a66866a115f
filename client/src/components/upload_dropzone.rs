//! Drag-and-drop / file-picker upload surface.
//!
//! Emits the picked browser file through `on_file`; what to do with it
//! (naming, form fields, refetch) is the calling page's business.

use leptos::html;
use leptos::prelude::*;

use crate::util::files::PickedFile;

#[component]
pub fn UploadDropzone(
    /// Short call to action, e.g. `"Add before"`.
    label: String,
    /// `accept` attribute for the hidden file input.
    accept: &'static str,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_file: Callback<PickedFile>,
) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();
    let drag_over = RwSignal::new(false);

    let on_browse = move |_| {
        if disabled.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = crate::util::files::first_input_file(&input) {
                on_file.run(file);
            }
            // Allow re-picking the same file later.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            drag_over.set(true);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        if disabled.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Some(file) = crate::util::files::first_dropped_file(&ev) {
            on_file.run(file);
        }
    };

    view! {
        <div
            class=move || {
                let mut class = String::from("dropzone");
                if drag_over.get() {
                    class.push_str(" dropzone--over");
                }
                if disabled.get() {
                    class.push_str(" dropzone--disabled");
                }
                class
            }
            on:click=on_browse
            on:dragover=on_drag_over
            on:dragleave=move |_| drag_over.set(false)
            on:drop=on_drop
        >
            <span class="dropzone__label">{label}</span>
            <span class="dropzone__hint">"Drop a file or click to browse"</span>
            <input
                node_ref=input_ref
                class="dropzone__input"
                type="file"
                accept=accept
                on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
