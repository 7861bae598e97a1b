use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AddressDraft, AddressRole, AppState},
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
};

const INPUT_CLASS: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none";
const LABEL_CLASS: &str = "block text-xs font-semibold uppercase text-slate-500";

#[component]
pub fn AddressesPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut draft = use_signal(AddressDraft::default);
    let mut editing = use_signal(|| None::<String>);
    let mut query = use_signal(String::new);

    let matches = state.with(|st| {
        st.addresses
            .search(&query())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });
    let total = state.with(|st| st.addresses.len());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let fields = draft();
        let result = state.with_mut(|st| match editing() {
            Some(id) => st.addresses.update(&id, fields).map(|_| "Address updated."),
            None => st.addresses.add(fields).map(|_| "Address saved."),
        });
        match result {
            Ok(message) => {
                draft.set(AddressDraft::default());
                editing.set(None);
                persist_user_state(&state);
                push_toast(toasts, ToastKind::Success, message);
            }
            Err(err) => push_toast(toasts, ToastKind::Error, format!("Cannot save address: {err}")),
        }
    };

    let on_cancel = move |_| {
        draft.set(AddressDraft::default());
        editing.set(None);
    };

    let mut on_edit = move |id: String| {
        let found = state.with(|st| st.addresses.get(&id).map(|address| address.fields.clone()));
        if let Some(fields) = found {
            draft.set(fields);
            editing.set(Some(id));
        }
    };

    let mut on_delete = move |id: String| {
        let removed = state.with_mut(|st| {
            let removed = st.addresses.remove(&id);
            st.prune_quote_addresses();
            removed
        });
        if removed {
            if editing().as_deref() == Some(id.as_str()) {
                draft.set(AddressDraft::default());
                editing.set(None);
            }
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Info, "Address deleted.");
        }
    };

    let submit_label = if editing().is_some() { "Update Address" } else { "Save Address" };
    let current = draft();

    rsx! {
        div { class: "grid gap-6 lg:grid-cols-[1fr,1fr]",
            form {
                class: "space-y-4 rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                onsubmit: on_submit,
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500",
                    if editing().is_some() { "Edit Address" } else { "New Address" }
                }
                div { class: "grid gap-4 sm:grid-cols-2",
                    TextField { label: "Company", value: current.company.clone(), on_input: move |v| draft.with_mut(|d| d.company = v) }
                    TextField { label: "Contact", value: current.contact.clone(), on_input: move |v| draft.with_mut(|d| d.contact = v) }
                    TextField { label: "Street", value: current.street.clone(), on_input: move |v| draft.with_mut(|d| d.street = v) }
                    TextField { label: "City", value: current.city.clone(), on_input: move |v| draft.with_mut(|d| d.city = v) }
                    TextField { label: "State", value: current.state.clone(), on_input: move |v| draft.with_mut(|d| d.state = v) }
                    TextField { label: "Postal Code", value: current.postal_code.clone(), on_input: move |v| draft.with_mut(|d| d.postal_code = v) }
                    TextField { label: "Country", value: current.country.clone(), on_input: move |v| draft.with_mut(|d| d.country = v) }
                    TextField { label: "Phone", value: current.phone.clone(), on_input: move |v| draft.with_mut(|d| d.phone = v) }
                    div {
                        label { class: LABEL_CLASS, "Role" }
                        select {
                            class: INPUT_CLASS,
                            value: current.role.key(),
                            onchange: move |evt| draft.with_mut(|d| d.role = AddressRole::from_key(&evt.value())),
                            for role in AddressRole::ALL {
                                option { value: role.key(), selected: role == current.role, "{role.label()}" }
                            }
                        }
                    }
                }
                div { class: "flex gap-3",
                    button {
                        class: "rounded-lg bg-sky-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-sky-400",
                        r#type: "submit",
                        "{submit_label}"
                    }
                    if editing().is_some() {
                        button {
                            class: "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800",
                            r#type: "button",
                            onclick: on_cancel,
                            "Cancel"
                        }
                    }
                }
            }

            section { class: "space-y-4",
                div { class: "flex items-center justify-between gap-4",
                    h2 { class: "text-sm font-semibold text-slate-200", "Address Book ({total})" }
                    input {
                        class: "w-64 rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none",
                        placeholder: "Search company, city, ZIP…",
                        value: query(),
                        oninput: move |evt| query.set(evt.value()),
                    }
                }
                if matches.is_empty() {
                    p { class: "text-sm text-slate-500", "No saved addresses match." }
                }
                ul { class: "space-y-2",
                    for address in matches {
                        li {
                            key: "{address.id}",
                            class: "flex items-start justify-between gap-3 rounded-lg border border-slate-800 bg-slate-900/60 px-4 py-3",
                            div {
                                p { class: "text-sm font-medium text-slate-200", "{address.one_line()}" }
                                p { class: "text-xs text-slate-500",
                                    "{address.fields.role.label()} · {address.fields.contact} {address.fields.phone}"
                                }
                            }
                            div { class: "flex gap-2",
                                button {
                                    class: "text-xs font-semibold uppercase tracking-wide text-sky-300 hover:text-sky-100",
                                    onclick: {
                                        let id = address.id.clone();
                                        move |_| on_edit(id.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "text-xs font-semibold uppercase tracking-wide text-rose-300 hover:text-rose-100",
                                    onclick: {
                                        let id = address.id.clone();
                                        move |_| on_delete(id.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TextField(label: &'static str, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{label}" }
            input {
                class: INPUT_CLASS,
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}
