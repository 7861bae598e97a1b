use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let company = state.with(|st| st.preferences.company_name.clone());
    let tagline = if company.trim().is_empty() {
        "density · class · quotes".to_string()
    } else {
        company
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-sky-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🚚" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-sky-200", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "{tagline} · {version_label()}" }
                        }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton { active: matches!(current_route, Route::Freight {}), onclick: move |_| { nav.push(Route::Freight {}); }, label: "📦 Freight" }
                        NavButton { active: matches!(current_route, Route::Addresses {}), onclick: move |_| { nav.push(Route::Addresses {}); }, label: "📇 Addresses" }
                        NavButton { active: matches!(current_route, Route::Quote {}), onclick: move |_| { nav.push(Route::Quote {}); }, label: "🧾 Quote" }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "min-w-[5.5rem] rounded-lg border border-sky-500/60 bg-sky-500/15 px-4 py-2 font-semibold text-sky-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-sky-700 hover:bg-sky-900/20 hover:text-sky-300"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
