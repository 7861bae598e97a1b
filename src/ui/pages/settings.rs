use std::path::PathBuf;

use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, FreightMode, Preferences},
    infra::export::default_export_dir,
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::{
        persistence::{data_dir, DATA_DIR_ENV},
        version::{version_label, APP_NAME},
    },
};

const INPUT_CLASS: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none";

#[component]
pub fn SettingsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.preferences.clone());

    let mut company_input = use_signal(|| initial.company_name.clone());
    let mut email_input = use_signal(|| initial.contact_email.clone());
    let mut mode_input = use_signal(|| initial.default_mode);
    let mut export_input = use_signal(|| {
        initial
            .export_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default()
    });

    let effective_export = state.with(|st| default_export_dir(&st.preferences));
    let data_location = data_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());

    let on_apply = move |_| {
        match parse_preferences(company_input(), email_input(), mode_input(), export_input()) {
            Ok(preferences) => {
                state.with_mut(|st| st.preferences = preferences);
                persist_user_state(&state);
                push_toast(toasts, ToastKind::Success, "Preferences saved.");
            }
            Err(message) => push_toast(toasts, ToastKind::Error, message),
        }
    };

    let on_reset = move |_| {
        let defaults = Preferences::default();
        company_input.set(defaults.company_name.clone());
        email_input.set(defaults.contact_email.clone());
        mode_input.set(defaults.default_mode);
        export_input.set(String::new());
        state.with_mut(|st| st.preferences = defaults);
        persist_user_state(&state);
        push_toast(toasts, ToastKind::Info, "Restored default preferences.");
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Preferences" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    div {
                        label { class: "block text-xs font-semibold uppercase text-slate-500", "Company name" }
                        input {
                            class: INPUT_CLASS,
                            value: company_input(),
                            oninput: move |evt| company_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "block text-xs font-semibold uppercase text-slate-500", "Contact email" }
                        input {
                            class: INPUT_CLASS,
                            value: email_input(),
                            oninput: move |evt| email_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "block text-xs font-semibold uppercase text-slate-500", "Default mode" }
                        select {
                            class: INPUT_CLASS,
                            onchange: move |evt| {
                                if let Some(mode) = FreightMode::from_label(&evt.value()) {
                                    mode_input.set(mode);
                                }
                            },
                            for mode in FreightMode::ALL {
                                option { value: mode.label(), selected: mode == mode_input(), "{mode.label()}" }
                            }
                        }
                    }
                    div {
                        label { class: "block text-xs font-semibold uppercase text-slate-500", "Quote export folder" }
                        input {
                            class: INPUT_CLASS,
                            value: export_input(),
                            placeholder: "{effective_export.display()}",
                            oninput: move |evt| export_input.set(evt.value()),
                        }
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "rounded-lg bg-sky-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-sky-400", onclick: on_apply, "Apply" }
                    button { class: "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800", onclick: on_reset, "Reset Defaults" }
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-sm text-slate-400",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "About" }
                p { class: "mt-3", "{APP_NAME} {version_label()}" }
                p { class: "mt-1", "Saved data: {data_location}" }
                p { class: "mt-1 text-xs text-slate-500", "Set {DATA_DIR_ENV} to keep data somewhere else." }
            }
        }
    }
}

fn parse_preferences(
    company_name: String,
    contact_email: String,
    default_mode: FreightMode,
    export_dir: String,
) -> Result<Preferences, String> {
    let contact_email = contact_email.trim().to_string();
    if !contact_email.is_empty() && !contact_email.contains('@') {
        return Err("Contact email must contain @".to_string());
    }
    let export_dir = export_dir.trim();
    Ok(Preferences {
        company_name: company_name.trim().to_string(),
        contact_email,
        default_mode,
        export_dir: (!export_dir.is_empty()).then(|| PathBuf::from(export_dir)),
    })
}
