use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{address_book::AddressBook, entities::CargoItem, quote::FreightMode, quote::QuoteDraft};

/// User-editable settings, persisted with the rest of the state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub default_mode: FreightMode,
    /// Where exported quotes go; falls back to the documents folder.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            contact_email: String::new(),
            default_mode: FreightMode::Ltl,
            export_dir: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Lines on the freight calculator page; copied into a quote on demand.
    pub cargo_items: Vec<CargoItem>,
    pub addresses: AddressBook,
    pub quote_draft: QuoteDraft,
    pub preferences: Preferences,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.cargo_items = persisted.cargo_items;
        self.addresses = persisted.addresses;
        self.quote_draft = persisted.quote_draft;
        self.preferences = persisted.preferences;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            cargo_items: self.cargo_items.clone(),
            addresses: self.addresses.clone(),
            quote_draft: self.quote_draft.clone(),
            preferences: self.preferences.clone(),
        }
    }

    /// Starts a fresh quote with the calculator lines and the preferred mode.
    pub fn start_quote_from_cargo(&mut self) {
        self.quote_draft = QuoteDraft {
            mode: self.preferences.default_mode,
            ..QuoteDraft::default()
        };
        self.reload_quote_lines();
    }

    /// Copies the freight lines into the quote, skipping rows that were never filled in.
    pub fn reload_quote_lines(&mut self) {
        self.quote_draft.items = self
            .cargo_items
            .iter()
            .filter(|item| !item.is_untouched())
            .cloned()
            .collect();
    }

    /// Drops quote address picks that no longer exist in the book.
    pub fn prune_quote_addresses(&mut self) {
        let book = &self.addresses;
        for slot in [
            &mut self.quote_draft.origin_id,
            &mut self.quote_draft.destination_id,
        ] {
            if slot.as_deref().is_some_and(|id| book.get(id).is_none()) {
                *slot = None;
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub cargo_items: Vec<CargoItem>,
    #[serde(default)]
    pub addresses: AddressBook,
    #[serde(default)]
    pub quote_draft: QuoteDraft,
    #[serde(default)]
    pub preferences: Preferences,
}
