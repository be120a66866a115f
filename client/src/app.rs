//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{audio::AudioPage, examples::ExamplesPage, login::LoginPage};
use crate::state::{assets::AssetsState, audio::AudioState, auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing. On the
/// browser side, credentials cached in `sessionStorage` are restored into the
/// auth gate before route guards run; the backend's 401 response remains the
/// only authority on whether they are still valid.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let assets = RwSignal::new(AssetsState::default());
    let audio = RwSignal::new(AudioState::default());

    #[cfg(feature = "hydrate")]
    {
        match crate::util::credentials::load() {
            Some(credentials) => auth.set(AuthState::authenticated(credentials)),
            None => auth.set(AuthState::logged_out()),
        }
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|state| state.dark_mode = dark);
    }

    provide_context(auth);
    provide_context(ui);
    provide_context(assets);
    provide_context(audio);

    view! {
        <Stylesheet id="leptos" href="/pkg/showcase-admin.css"/>
        <Title text="Showcase Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=ExamplesPage/>
                <Route path=StaticSegment("audio") view=AudioPage/>
            </Routes>
        </Router>
    }
}
