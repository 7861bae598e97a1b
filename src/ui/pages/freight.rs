use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, Route},
    domain::{compute_density, summarize_shipment, AppState, CargoItem},
    ui::components::{
        freight_table::{FreightEdit, FreightRow, FreightTable},
        kpi_card::KpiCard,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    util::generate_id,
};

#[component]
pub fn FreightPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let items = state.with(|st| st.cargo_items.clone());
    let summary = summarize_shipment(&items);

    // Recomputed on every render; nothing is cached.
    let rows: Vec<FreightRow> = items
        .into_iter()
        .map(|item| {
            let result = compute_density(&item);
            FreightRow { item, result }
        })
        .collect();

    let on_add = move |_| {
        state.with_mut(|st| {
            st.cargo_items.push(CargoItem {
                id: generate_id("line"),
                quantity: "1".into(),
                ..CargoItem::default()
            })
        });
        persist_user_state(&state);
    };

    let on_edit = move |(id, field, value): FreightEdit| {
        state.with_mut(|st| {
            if let Some(item) = st.cargo_items.iter_mut().find(|item| item.id == id) {
                item.set_field(field, value);
            }
        });
        persist_user_state(&state);
    };

    let on_remove = move |id: String| {
        state.with_mut(|st| st.cargo_items.retain(|item| item.id != id));
        persist_user_state(&state);
        push_toast(toasts, ToastKind::Info, "Freight line removed.");
    };

    let on_clear = move |_| {
        state.with_mut(|st| st.cargo_items.clear());
        persist_user_state(&state);
    };

    let on_quote = move |_| {
        let empty = state.with(|st| summarize_shipment(&st.cargo_items).is_empty());
        if empty {
            push_toast(
                toasts,
                ToastKind::Warning,
                "Complete at least one line before requesting a quote.",
            );
            return;
        }
        state.with_mut(|st| st.start_quote_from_cargo());
        persist_user_state(&state);
        nav.push(Route::Quote {});
    };

    let shipment_class = summary
        .shipment_class
        .map(|class| class.to_string())
        .unwrap_or_else(|| "—".to_string());
    let shipment_density = summary
        .shipment_density
        .map(|density| format!("{density:.2} lb/ft³"))
        .unwrap_or_else(|| "n/a".to_string());
    let highest_class = summary
        .highest_class
        .map(|class| format!("Highest line class {class}"));

    rsx! {
        div { class: "space-y-8",
            section {
                class: "grid gap-4 sm:grid-cols-4",
                KpiCard {
                    title: "Handling Units".to_string(),
                    value: summary.handling_units.to_string(),
                    description: Some(format!("{} of {} lines complete", summary.classified_lines, summary.line_count)),
                }
                KpiCard {
                    title: "Total Weight".to_string(),
                    value: format!("{:.2} lb", summary.total_weight),
                    description: None,
                }
                KpiCard {
                    title: "Total Volume".to_string(),
                    value: format!("{:.2} ft³", summary.total_cubic_feet),
                    description: Some(shipment_density),
                }
                KpiCard {
                    title: "Shipment Class".to_string(),
                    value: shipment_class,
                    description: highest_class,
                }
            }

            section { class: "space-y-4",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-sm font-semibold text-slate-200", "Freight Lines" }
                    div { class: "flex gap-3",
                        button {
                            class: "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800",
                            onclick: on_clear,
                            "Clear"
                        }
                        button {
                            class: "rounded-lg border border-sky-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-sky-200 hover:bg-sky-500/10",
                            onclick: on_quote,
                            "Request Quote"
                        }
                        button {
                            class: "rounded-lg bg-sky-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-sky-400",
                            onclick: on_add,
                            "Add Line"
                        }
                    }
                }
                FreightTable { rows, on_edit, on_remove }
                p { class: "text-xs text-slate-500",
                    "Density uses the line weight over the volume of all units on the line."
                }
            }
        }
    }
}
