use dioxus::prelude::*;

use crate::domain::FreightClass;

/// Dense classes read green, light ones red; empty while incomplete.
#[component]
pub fn ClassBadge(class: Option<FreightClass>) -> Element {
    let Some(class) = class else {
        return rsx! {
            span {
                class: "inline-flex items-center rounded-full border border-slate-600/60 bg-slate-700/40 px-2 py-0.5 text-xs font-medium text-slate-400",
                title: "Enter weight, length, width and height",
                "—"
            }
        };
    };

    let color = match class.numeric() {
        n if n <= 70.0 => "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        n if n <= 125.0 => "bg-sky-500/10 text-sky-300 border-sky-500/40",
        n if n <= 250.0 => "bg-amber-500/10 text-amber-300 border-amber-500/40",
        _ => "bg-rose-500/10 text-rose-300 border-rose-500/40",
    };
    let (min, max) = class.band();
    let hint = match max {
        Some(max) => format!("{min} to {max} lbs/ft³"),
        None => format!("{min}+ lbs/ft³"),
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            title: "{hint}",
            "Class {class}"
        }
    }
}
