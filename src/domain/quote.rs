//! Quote request drafts and their validation.

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

use super::{
    address_book::{Address, AddressBook},
    density::{compute_density, DensityResult},
    entities::CargoItem,
    shipment::{summarize_shipment, ShipmentSummary},
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreightMode {
    #[default]
    Ltl,
    Ftl,
    Expedited,
    Air,
    Ocean,
}

impl FreightMode {
    pub const ALL: [FreightMode; 5] = [
        FreightMode::Ltl,
        FreightMode::Ftl,
        FreightMode::Expedited,
        FreightMode::Air,
        FreightMode::Ocean,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FreightMode::Ltl => "LTL",
            FreightMode::Ftl => "FTL",
            FreightMode::Expedited => "Expedited",
            FreightMode::Air => "Air",
            FreightMode::Ocean => "Ocean",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(label.trim()))
    }

    pub fn is_ground(&self) -> bool {
        matches!(
            self,
            FreightMode::Ltl | FreightMode::Ftl | FreightMode::Expedited
        )
    }

    /// LTL carriers price by class, so every line must classify.
    pub fn requires_freight_class(&self) -> bool {
        matches!(self, FreightMode::Ltl)
    }
}

/// Quote form state as the user is filling it in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteDraft {
    #[serde(default)]
    pub mode: FreightMode,
    #[serde(default)]
    pub origin_id: Option<String>,
    #[serde(default)]
    pub destination_id: Option<String>,
    #[serde(default)]
    pub pickup_date: String,
    #[serde(default)]
    pub items: Vec<CargoItem>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    #[error("select an origin address")]
    MissingOrigin,
    #[error("select a destination address")]
    MissingDestination,
    #[error("address {0} is no longer in the address book")]
    UnknownAddress(String),
    #[error("origin and destination must differ")]
    SameOriginAndDestination,
    #[error("{0} is not set up as a shipper")]
    OriginCannotShip(String),
    #[error("{0} is not set up as a consignee")]
    DestinationCannotReceive(String),
    #[error("pickup date `{0}` is not a YYYY-MM-DD date")]
    InvalidPickupDate(String),
    #[error("pickup date {0} is in the past")]
    PickupInPast(String),
    #[error("add at least one cargo line")]
    NoItems,
    #[error("line {0} needs weight and dimensions for a freight class")]
    UnclassifiedLine(usize),
    #[error("no cargo line has complete weight and dimensions")]
    NoMeasuredItems,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub description: String,
    pub quantity: u32,
    pub weight: f64,
    #[serde(flatten)]
    pub result: DensityResult,
}

/// A draft that passed validation, ready to export or submit.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub mode: FreightMode,
    pub origin: Address,
    pub destination: Address,
    #[serde(serialize_with = "serialize_date")]
    pub pickup_date: Date,
    pub lines: Vec<QuoteLine>,
    pub summary: ShipmentSummary,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

fn serialize_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date(*date))
}

pub fn parse_pickup_date(raw: &str) -> Result<Date, QuoteError> {
    Date::parse(raw.trim(), DATE_FORMAT)
        .map_err(|_| QuoteError::InvalidPickupDate(raw.trim().to_string()))
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

fn resolve<'a>(book: &'a AddressBook, id: &str) -> Result<&'a Address, QuoteError> {
    book.get(id)
        .ok_or_else(|| QuoteError::UnknownAddress(id.to_string()))
}

/// Checks run in form order so the first error points at the first field
/// the user has to fix.
pub fn validate_quote(
    draft: &QuoteDraft,
    book: &AddressBook,
    today: Date,
) -> Result<QuoteRequest, QuoteError> {
    let origin_id = draft
        .origin_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(QuoteError::MissingOrigin)?;
    let destination_id = draft
        .destination_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(QuoteError::MissingDestination)?;
    let origin = resolve(book, origin_id)?;
    let destination = resolve(book, destination_id)?;
    if origin.id == destination.id {
        return Err(QuoteError::SameOriginAndDestination);
    }
    if !origin.fields.role.can_ship() {
        return Err(QuoteError::OriginCannotShip(origin.fields.company.clone()));
    }
    if !destination.fields.role.can_receive() {
        return Err(QuoteError::DestinationCannotReceive(
            destination.fields.company.clone(),
        ));
    }

    let pickup_date = parse_pickup_date(&draft.pickup_date)?;
    if pickup_date < today {
        return Err(QuoteError::PickupInPast(format_date(pickup_date)));
    }

    if draft.items.is_empty() {
        return Err(QuoteError::NoItems);
    }

    let lines: Vec<QuoteLine> = draft
        .items
        .iter()
        .map(|item| QuoteLine {
            description: item.description.trim().to_string(),
            quantity: item.quantity.as_count(),
            weight: item.weight.as_float(),
            result: compute_density(item),
        })
        .collect();

    if draft.mode.requires_freight_class() {
        if let Some(index) = lines.iter().position(|line| !line.result.is_complete()) {
            return Err(QuoteError::UnclassifiedLine(index + 1));
        }
    } else if !lines.iter().any(|line| line.result.is_complete()) {
        return Err(QuoteError::NoMeasuredItems);
    }

    Ok(QuoteRequest {
        mode: draft.mode,
        origin: origin.clone(),
        destination: destination.clone(),
        pickup_date,
        lines,
        summary: summarize_shipment(&draft.items),
        notes: draft.notes.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::address_book::{AddressDraft, AddressRole};

    fn book_with_two() -> (AddressBook, String, String) {
        let mut book = AddressBook::default();
        let origin = book
            .add(AddressDraft {
                company: "Acme Supply".to_string(),
                street: "100 Dock Rd".to_string(),
                city: "Columbus".to_string(),
                postal_code: "43215".to_string(),
                role: AddressRole::Shipper,
                ..AddressDraft::default()
            })
            .unwrap();
        let destination = book
            .add(AddressDraft {
                company: "Birch Foods".to_string(),
                street: "9 Market St".to_string(),
                city: "Toledo".to_string(),
                postal_code: "43604".to_string(),
                role: AddressRole::Consignee,
                ..AddressDraft::default()
            })
            .unwrap();
        (book, origin, destination)
    }

    fn pallet(weight: &str) -> CargoItem {
        CargoItem {
            description: " Pallet of widgets ".to_string(),
            weight: weight.into(),
            length: "48".into(),
            width: "40".into(),
            height: "48".into(),
            quantity: "1".into(),
            ..CargoItem::default()
        }
    }

    fn draft(origin: &str, destination: &str) -> QuoteDraft {
        QuoteDraft {
            mode: FreightMode::Ltl,
            origin_id: Some(origin.to_string()),
            destination_id: Some(destination.to_string()),
            pickup_date: "2026-10-20".to_string(),
            items: vec![pallet("500")],
            notes: String::new(),
        }
    }

    const TODAY: Date = date!(2026 - 10 - 17);

    #[test]
    fn valid_ltl_quote() {
        let (book, origin, destination) = book_with_two();
        let request = validate_quote(&draft(&origin, &destination), &book, TODAY).unwrap();
        assert_eq!(request.origin.fields.company, "Acme Supply");
        assert_eq!(request.pickup_date, date!(2026 - 10 - 20));
        assert_eq!(request.lines.len(), 1);
        assert_eq!(request.lines[0].description, "Pallet of widgets");
        assert_eq!(request.lines[0].result.class_token(), "100");
        assert_eq!(request.summary.classified_lines, 1);
    }

    #[test]
    fn addresses_are_checked_first() {
        let (book, origin, destination) = book_with_two();
        let mut input = draft(&origin, &destination);
        input.origin_id = None;
        assert_eq!(validate_quote(&input, &book, TODAY), Err(QuoteError::MissingOrigin));

        input.origin_id = Some(origin.clone());
        input.destination_id = Some(String::new());
        assert_eq!(
            validate_quote(&input, &book, TODAY),
            Err(QuoteError::MissingDestination)
        );

        input.destination_id = Some("gone".to_string());
        assert_eq!(
            validate_quote(&input, &book, TODAY),
            Err(QuoteError::UnknownAddress("gone".to_string()))
        );

        input.destination_id = Some(origin);
        assert_eq!(
            validate_quote(&input, &book, TODAY),
            Err(QuoteError::SameOriginAndDestination)
        );
    }

    #[test]
    fn address_roles_must_fit_their_slot() {
        let (mut book, shipper, consignee) = book_with_two();
        let either = book
            .add(AddressDraft {
                company: "Cedar Depot".to_string(),
                street: "5 Yard Ln".to_string(),
                city: "Dayton".to_string(),
                postal_code: "45402".to_string(),
                role: AddressRole::Both,
                ..AddressDraft::default()
            })
            .unwrap();

        assert_eq!(
            validate_quote(&draft(&consignee, &either), &book, TODAY),
            Err(QuoteError::OriginCannotShip("Birch Foods".to_string()))
        );
        assert_eq!(
            validate_quote(&draft(&either, &shipper), &book, TODAY),
            Err(QuoteError::DestinationCannotReceive("Acme Supply".to_string()))
        );
        assert!(validate_quote(&draft(&either, &consignee), &book, TODAY).is_ok());
        assert!(validate_quote(&draft(&shipper, &either), &book, TODAY).is_ok());
    }

    #[test]
    fn pickup_date_rules() {
        let (book, origin, destination) = book_with_two();
        let mut input = draft(&origin, &destination);
        input.pickup_date = "10/20/2026".to_string();
        assert_eq!(
            validate_quote(&input, &book, TODAY),
            Err(QuoteError::InvalidPickupDate("10/20/2026".to_string()))
        );
        input.pickup_date = "2026-10-16".to_string();
        assert_eq!(
            validate_quote(&input, &book, TODAY),
            Err(QuoteError::PickupInPast("2026-10-16".to_string()))
        );
        input.pickup_date = " 2026-10-17 ".to_string();
        assert!(validate_quote(&input, &book, TODAY).is_ok());
    }

    #[test]
    fn ltl_needs_every_line_classified() {
        let (book, origin, destination) = book_with_two();
        let mut input = draft(&origin, &destination);
        input.items.push(pallet(""));
        assert_eq!(
            validate_quote(&input, &book, TODAY),
            Err(QuoteError::UnclassifiedLine(2))
        );

        input.mode = FreightMode::Ftl;
        let request = validate_quote(&input, &book, TODAY).unwrap();
        assert_eq!(request.summary.incomplete_lines, 1);

        input.items = vec![pallet("")];
        assert_eq!(
            validate_quote(&input, &book, TODAY),
            Err(QuoteError::NoMeasuredItems)
        );

        input.items.clear();
        assert_eq!(validate_quote(&input, &book, TODAY), Err(QuoteError::NoItems));
    }

    #[test]
    fn serializes_for_export() {
        let (book, origin, destination) = book_with_two();
        let request = validate_quote(&draft(&origin, &destination), &book, TODAY).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["pickupDate"], serde_json::json!("2026-10-20"));
        assert_eq!(json["mode"], serde_json::json!("Ltl"));
        assert_eq!(json["lines"][0]["freightClass"], serde_json::json!("100"));
        assert_eq!(json["lines"][0]["cubicFeet"], serde_json::json!(53.33));
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn mode_labels() {
        assert_eq!(FreightMode::from_label("ltl"), Some(FreightMode::Ltl));
        assert_eq!(FreightMode::from_label("Ocean"), Some(FreightMode::Ocean));
        assert_eq!(FreightMode::from_label("rail"), None);
        assert!(FreightMode::Expedited.is_ground());
        assert!(!FreightMode::Air.is_ground());
        assert!(!FreightMode::Ftl.requires_freight_class());
    }
}
