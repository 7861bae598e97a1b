use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::{persist_user_state, Route},
    domain::{
        compute_density, summarize_shipment, validate_quote, AppState, FreightMode, QuoteRequest,
    },
    infra::export::{default_export_dir, export_quote},
    ui::components::{
        class_badge::ClassBadge,
        kpi_card::KpiCard,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

const INPUT_CLASS: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none";
const LABEL_CLASS: &str = "block text-xs font-semibold uppercase text-slate-500";

fn today() -> time::Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

#[component]
pub fn QuotePage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();
    let mut validated = use_signal(|| None::<QuoteRequest>);

    let draft = state.with(|st| st.quote_draft.clone());
    let no_addresses = state.with(|st| st.addresses.is_empty());
    let origins = state.with(|st| st.addresses.origins().into_iter().cloned().collect::<Vec<_>>());
    let destinations =
        state.with(|st| st.addresses.destinations().into_iter().cloned().collect::<Vec<_>>());
    let summary = summarize_shipment(&draft.items);
    let lines = draft
        .items
        .iter()
        .map(|item| (item.clone(), compute_density(item)))
        .collect::<Vec<_>>();

    let mut update_draft = move |apply: Box<dyn FnOnce(&mut AppState)>| {
        state.with_mut(|st| apply(st));
        validated.set(None);
        persist_user_state(&state);
    };

    let on_validate = move |_| {
        let outcome = state.with(|st| validate_quote(&st.quote_draft, &st.addresses, today()));
        match outcome {
            Ok(request) => {
                push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("{} quote request is ready.", request.mode.label()),
                );
                validated.set(Some(request));
            }
            Err(err) => {
                validated.set(None);
                push_toast(toasts, ToastKind::Error, err.to_string());
            }
        }
    };

    let on_export = move |_| {
        let Some(request) = validated() else {
            push_toast(toasts, ToastKind::Warning, "Validate the quote before exporting.");
            return;
        };
        let dir = state.with(|st| default_export_dir(&st.preferences));
        match export_quote(&request, &dir) {
            Ok(path) => push_toast(
                toasts,
                ToastKind::Success,
                format!("Quote saved to {}", path.display()),
            ),
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
    };

    let on_reload_lines = move |_| {
        state.with_mut(|st| st.reload_quote_lines());
        validated.set(None);
        persist_user_state(&state);
    };

    let ready = validated().is_some();

    rsx! {
        div { class: "space-y-8",
            if no_addresses {
                div {
                    class: "flex items-center justify-between rounded-xl border border-amber-500/40 bg-amber-500/10 px-4 py-3 text-sm text-amber-100",
                    "The address book is empty. Add a shipper and a consignee first."
                    button {
                        class: "text-xs font-semibold uppercase tracking-wide text-amber-200 hover:text-white",
                        onclick: move |_| { nav.push(Route::Addresses {}); },
                        "Open Addresses"
                    }
                }
            }
            section {
                class: "grid gap-4 rounded-xl border border-slate-800 bg-slate-900/40 p-6 sm:grid-cols-2",
                div {
                    label { class: LABEL_CLASS, "Mode" }
                    div { class: "mt-1 flex flex-wrap gap-2",
                        for mode in FreightMode::ALL {
                            button {
                                class: if mode == draft.mode {
                                    "rounded px-3 py-1.5 text-xs font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40"
                                } else {
                                    "rounded px-3 py-1.5 text-xs text-slate-500 border border-slate-700 hover:border-sky-600 hover:text-sky-300"
                                },
                                onclick: move |_| update_draft(Box::new(move |st| st.quote_draft.mode = mode)),
                                "{mode.label()}"
                            }
                        }
                    }
                    p { class: "mt-2 text-xs text-slate-500", "{mode_hint(draft.mode)}" }
                }
                div {
                    label { class: LABEL_CLASS, "Pickup date" }
                    input {
                        class: INPUT_CLASS,
                        r#type: "date",
                        value: "{draft.pickup_date}",
                        oninput: move |evt| {
                            let value = evt.value();
                            update_draft(Box::new(move |st| st.quote_draft.pickup_date = value));
                        },
                    }
                }
                div {
                    label { class: LABEL_CLASS, "Origin" }
                    select {
                        class: INPUT_CLASS,
                        onchange: move |evt| {
                            let value = evt.value();
                            update_draft(Box::new(move |st| {
                                st.quote_draft.origin_id = Some(value).filter(|id| !id.is_empty());
                            }));
                        },
                        option { value: "", selected: draft.origin_id.is_none(), "Select shipper…" }
                        for address in origins {
                            option {
                                value: "{address.id}",
                                selected: draft.origin_id.as_deref() == Some(address.id.as_str()),
                                "{address.one_line()}"
                            }
                        }
                    }
                }
                div {
                    label { class: LABEL_CLASS, "Destination" }
                    select {
                        class: INPUT_CLASS,
                        onchange: move |evt| {
                            let value = evt.value();
                            update_draft(Box::new(move |st| {
                                st.quote_draft.destination_id = Some(value).filter(|id| !id.is_empty());
                            }));
                        },
                        option { value: "", selected: draft.destination_id.is_none(), "Select consignee…" }
                        for address in destinations {
                            option {
                                value: "{address.id}",
                                selected: draft.destination_id.as_deref() == Some(address.id.as_str()),
                                "{address.one_line()}"
                            }
                        }
                    }
                }
                div { class: "sm:col-span-2",
                    label { class: LABEL_CLASS, "Notes" }
                    textarea {
                        class: INPUT_CLASS,
                        rows: "2",
                        value: "{draft.notes}",
                        oninput: move |evt| {
                            let value = evt.value();
                            update_draft(Box::new(move |st| st.quote_draft.notes = value));
                        },
                    }
                }
            }

            section {
                class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Lines".to_string(),
                    value: format!("{} / {}", summary.classified_lines, summary.line_count),
                    description: Some("Complete / total".to_string()),
                }
                KpiCard {
                    title: "Weight · Volume".to_string(),
                    value: format!("{:.2} lb · {:.2} ft³", summary.total_weight, summary.total_cubic_feet),
                    description: None,
                }
                KpiCard {
                    title: "Shipment Class".to_string(),
                    value: summary.shipment_class.map(|c| c.to_string()).unwrap_or_else(|| "—".to_string()),
                    description: summary.shipment_density.map(|d| format!("{d:.2} lb/ft³")),
                }
            }

            section { class: "space-y-3",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-sm font-semibold text-slate-200", "Cargo" }
                    div { class: "flex gap-3",
                        button {
                            class: "text-xs font-semibold uppercase tracking-wide text-sky-300 hover:text-sky-100",
                            onclick: on_reload_lines,
                            "Reload From Calculator"
                        }
                        button {
                            class: "text-xs font-semibold uppercase tracking-wide text-sky-300 hover:text-sky-100",
                            onclick: move |_| { nav.push(Route::Freight {}); },
                            "Edit Lines"
                        }
                    }
                }
                if lines.is_empty() {
                    p { class: "text-sm text-slate-500", "No cargo lines on this quote yet." }
                }
                ul { class: "space-y-2",
                    for (index, (item, result)) in lines.into_iter().enumerate() {
                        li {
                            key: "{index}",
                            class: "flex items-center justify-between rounded-lg border border-slate-800 bg-slate-900/60 px-4 py-2 text-sm",
                            span { class: "text-slate-300",
                                "{index + 1}. {item.description} · {item.quantity.as_count()} × {item.weight} lb"
                            }
                            span { class: "flex items-center gap-3 text-slate-400 tabular",
                                "{result.cubic_feet_display()} ft³ · {result.density_display()} lb/ft³"
                                ClassBadge { class: result.freight_class }
                            }
                        }
                    }
                }
            }

            section { class: "flex gap-3",
                button {
                    class: "rounded-lg bg-sky-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-sky-400",
                    onclick: on_validate,
                    "Validate Quote"
                }
                button {
                    class: "rounded-lg border border-emerald-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-emerald-200 hover:bg-emerald-500/10 disabled:opacity-40",
                    disabled: !ready,
                    onclick: on_export,
                    "Export JSON"
                }
            }
        }
    }
}

fn mode_hint(mode: FreightMode) -> &'static str {
    if mode.requires_freight_class() {
        "Ground LTL: every line needs a freight class."
    } else if mode.is_ground() {
        "Ground service: priced on total weight and volume."
    } else {
        "Air and ocean: at least one measured line is required."
    }
}
