use dioxus::prelude::*;

use super::class_badge::ClassBadge;
use crate::domain::{CargoField, CargoItem, DensityResult};

#[derive(Clone, PartialEq)]
pub struct FreightRow {
    pub item: CargoItem,
    pub result: DensityResult,
}

/// Field edit coming from a table cell: line id, field, raw text.
pub type FreightEdit = (String, CargoField, String);

#[component]
pub fn FreightTable(
    rows: Vec<FreightRow>,
    on_edit: EventHandler<FreightEdit>,
    on_remove: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();
    let keyed_rows = rows
        .into_iter()
        .map(|row| (row.item.id.clone(), row))
        .collect::<Vec<_>>();
    rsx! {
        div {
            class: "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden",
            table {
                class: "min-w-full divide-y divide-slate-800 text-sm",
                thead {
                    class: "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500 text-left tracking-wide",
                    tr {
                        th { class: "px-3 py-3 font-medium", "Description" }
                        th { class: "px-3 py-3 font-medium", "Qty" }
                        th { class: "px-3 py-3 font-medium", "Weight (lb)" }
                        th { class: "px-3 py-3 font-medium", "L (in)" }
                        th { class: "px-3 py-3 font-medium", "W (in)" }
                        th { class: "px-3 py-3 font-medium", "H (in)" }
                        th { class: "px-3 py-3 font-medium", "ft³" }
                        th { class: "px-3 py-3 font-medium", "lb/ft³" }
                        th { class: "px-3 py-3 font-medium", "Class" }
                        th { class: "px-3 py-3" }
                    }
                }
                tbody {
                    class: "divide-y divide-slate-800",
                    for (line_key, row) in keyed_rows {
                        FreightRowView {
                            key: "{line_key}",
                            row,
                            on_edit,
                            on_remove,
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm text-slate-500",
                                colspan: "10",
                                "Add a freight line to see its density and class."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FreightRowView(
    row: FreightRow,
    on_edit: EventHandler<FreightEdit>,
    on_remove: EventHandler<String>,
) -> Element {
    let item = row.item;
    let result = row.result;
    let remove_id = item.id.clone();
    let muted = if result.is_complete() { "" } else { "opacity-60" };

    rsx! {
        tr {
            class: "hover:bg-slate-800/40 transition-colors",
            td { class: "px-3 py-2",
                CellInput { id: item.id.clone(), field: CargoField::Description, value: item.description.clone(), numeric: false, on_edit }
            }
            td { class: "px-3 py-2 w-20",
                CellInput { id: item.id.clone(), field: CargoField::Quantity, value: item.quantity.to_string(), numeric: true, on_edit }
            }
            td { class: "px-3 py-2 w-28",
                CellInput { id: item.id.clone(), field: CargoField::Weight, value: item.weight.to_string(), numeric: true, on_edit }
            }
            td { class: "px-3 py-2 w-20",
                CellInput { id: item.id.clone(), field: CargoField::Length, value: item.length.to_string(), numeric: true, on_edit }
            }
            td { class: "px-3 py-2 w-20",
                CellInput { id: item.id.clone(), field: CargoField::Width, value: item.width.to_string(), numeric: true, on_edit }
            }
            td { class: "px-3 py-2 w-20",
                CellInput { id: item.id.clone(), field: CargoField::Height, value: item.height.to_string(), numeric: true, on_edit }
            }
            td { class: "px-3 py-2 text-slate-300 tabular {muted}", "{result.cubic_feet_display()}" }
            td { class: "px-3 py-2 text-slate-300 tabular {muted}", "{result.density_display()}" }
            td { class: "px-3 py-2", ClassBadge { class: result.freight_class } }
            td {
                class: "px-3 py-2 text-right",
                button {
                    class: "rounded-md border border-rose-500/40 px-2 py-1 text-[10px] font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10",
                    onclick: move |_| on_remove.call(remove_id.clone()),
                    "Remove"
                }
            }
        }
    }
}

#[component]
fn CellInput(
    id: String,
    field: CargoField,
    value: String,
    numeric: bool,
    on_edit: EventHandler<FreightEdit>,
) -> Element {
    rsx! {
        input {
            class: "freight-cell-input",
            inputmode: if numeric { "decimal" } else { "text" },
            value: "{value}",
            oninput: move |evt| on_edit.call((id.clone(), field, evt.value())),
        }
    }
}
