use serde::{Deserialize, Serialize};

use super::loose_number::LooseNumber;

/// One freight line as the user typed it. Measurements stay loose so the
/// form can show exactly what was entered; see [`CargoItem::measurements`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Pounds.
    #[serde(default)]
    pub weight: LooseNumber,
    /// Inches.
    #[serde(default)]
    pub length: LooseNumber,
    #[serde(default)]
    pub width: LooseNumber,
    #[serde(default)]
    pub height: LooseNumber,
    #[serde(default)]
    pub quantity: LooseNumber,
}

impl CargoItem {
    /// A freshly added row nobody has typed into yet.
    pub fn is_untouched(&self) -> bool {
        self.description.trim().is_empty()
            && [&self.weight, &self.length, &self.width, &self.height]
                .iter()
                .all(|value| value.is_blank())
    }

    pub fn measurements(&self) -> CargoMeasurements {
        CargoMeasurements {
            weight: self.weight.as_float(),
            length: self.length.as_float(),
            width: self.width.as_float(),
            height: self.height.as_float(),
            quantity: self.quantity.as_count(),
        }
    }

    pub fn set_field(&mut self, field: CargoField, value: String) {
        match field {
            CargoField::Description => self.description = value,
            CargoField::Weight => self.weight = value.into(),
            CargoField::Length => self.length = value.into(),
            CargoField::Width => self.width = value.into(),
            CargoField::Height => self.height = value.into(),
            CargoField::Quantity => self.quantity = value.into(),
        }
    }
}

/// Strictly typed measurements after coercion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CargoMeasurements {
    pub weight: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Always at least 1.
    pub quantity: u32,
}

impl CargoMeasurements {
    pub fn is_complete(&self) -> bool {
        [self.weight, self.length, self.width, self.height]
            .iter()
            .all(|value| *value > 0.0)
    }

    pub fn cubic_inches(&self) -> f64 {
        self.length * self.width * self.height * f64::from(self.quantity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CargoField {
    Description,
    Weight,
    Length,
    Width,
    Height,
    Quantity,
}
