use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{AddressesPage, FreightPage, QuotePage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[redirect("/freight", || Route::Freight {})]
    #[route("/")]
    Freight {},
    #[route("/addresses")]
    Addresses {},
    #[route("/quote")]
    Quote {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let mut state = use_signal(AppState::default);
    use_hook(move || {
        if let Some(saved) = load_persisted_state() {
            state.with_mut(|st| {
                st.apply_persisted(saved);
                st.prune_quote_addresses();
            });
            log::info!(
                "[app] Restored {} freight lines and {} addresses",
                state.with(|st| st.cargo_items.len()),
                state.with(|st| st.addresses.len())
            );
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        log::error!("[persist] Failed to persist user state: {err}");
    }
}

#[component]
pub fn Freight() -> Element {
    rsx! { Shell { FreightPage {} } }
}

#[component]
pub fn Addresses() -> Element {
    rsx! { Shell { AddressesPage {} } }
}

#[component]
pub fn Quote() -> Element {
    rsx! { Shell { QuotePage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
