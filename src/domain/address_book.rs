use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressRole {
    Shipper,
    Consignee,
    #[default]
    Both,
}

impl AddressRole {
    pub const ALL: [AddressRole; 3] = [AddressRole::Shipper, AddressRole::Consignee, AddressRole::Both];

    pub fn label(&self) -> &'static str {
        match self {
            AddressRole::Shipper => "Shipper",
            AddressRole::Consignee => "Consignee",
            AddressRole::Both => "Shipper & Consignee",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AddressRole::Shipper => "shipper",
            AddressRole::Consignee => "consignee",
            AddressRole::Both => "both",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "shipper" => AddressRole::Shipper,
            "consignee" => AddressRole::Consignee,
            _ => AddressRole::Both,
        }
    }

    pub fn can_ship(&self) -> bool {
        matches!(self, AddressRole::Shipper | AddressRole::Both)
    }

    pub fn can_receive(&self) -> bool {
        matches!(self, AddressRole::Consignee | AddressRole::Both)
    }
}

fn default_country() -> String {
    "US".to_string()
}

/// Editable address fields. Also the payload for add/update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressDraft {
    pub company: String,
    #[serde(default)]
    pub contact: String,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: AddressRole,
}

impl Default for AddressDraft {
    fn default() -> Self {
        Self {
            company: String::new(),
            contact: String::new(),
            street: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: default_country(),
            phone: String::new(),
            role: AddressRole::default(),
        }
    }
}

impl AddressDraft {
    fn validate(&self) -> Result<(), AddressError> {
        let required = [
            ("company", &self.company),
            ("street", &self.street),
            ("city", &self.city),
            ("postal code", &self.postal_code),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(AddressError::MissingField(*name)),
            None => Ok(()),
        }
    }

    fn trimmed(mut self) -> Self {
        for field in [
            &mut self.company,
            &mut self.contact,
            &mut self.street,
            &mut self.city,
            &mut self.state,
            &mut self.postal_code,
            &mut self.country,
            &mut self.phone,
        ] {
            *field = field.trim().to_string();
        }
        if self.country.is_empty() {
            self.country = default_country();
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    #[serde(flatten)]
    pub fields: AddressDraft,
}

impl Address {
    pub fn one_line(&self) -> String {
        let f = &self.fields;
        let mut locality = f.city.clone();
        if !f.state.is_empty() {
            locality = format!("{locality}, {}", f.state);
        }
        format!("{} · {} · {} {}", f.company, f.street, locality, f.postal_code)
    }

    fn matches(&self, needle: &str) -> bool {
        let f = &self.fields;
        [&f.company, &f.contact, &f.city, &f.postal_code]
            .iter()
            .any(|value| value.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AddressError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("no address with id {0}")]
    NotFound(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    entries: Vec<Address>,
}

impl AddressBook {
    pub fn add(&mut self, draft: AddressDraft) -> Result<String, AddressError> {
        let fields = draft.trimmed();
        fields.validate()?;
        let id = Uuid::new_v4().to_string();
        self.entries.push(Address {
            id: id.clone(),
            fields,
        });
        Ok(id)
    }

    pub fn update(&mut self, id: &str, draft: AddressDraft) -> Result<(), AddressError> {
        let fields = draft.trimmed();
        fields.validate()?;
        let entry = self
            .entries
            .iter_mut()
            .find(|address| address.id == id)
            .ok_or_else(|| AddressError::NotFound(id.to_string()))?;
        entry.fields = fields;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|address| address.id != id);
        self.entries.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Address> {
        self.entries.iter().find(|address| address.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive match on company, contact, city or postal code.
    /// A blank query returns everything.
    pub fn search(&self, query: &str) -> Vec<&Address> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|address| needle.is_empty() || address.matches(&needle))
            .collect()
    }

    pub fn origins(&self) -> Vec<&Address> {
        self.entries
            .iter()
            .filter(|address| address.fields.role.can_ship())
            .collect()
    }

    pub fn destinations(&self) -> Vec<&Address> {
        self.entries
            .iter()
            .filter(|address| address.fields.role.can_receive())
            .collect()
    }
}
