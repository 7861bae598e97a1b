//! Freight domain logic: density, classes, shipments, addresses and quotes.
//! Nothing in here touches the filesystem or the UI.

pub mod address_book;
pub mod app_state;
pub mod density;
pub mod entities;
pub mod freight_class;
pub mod loose_number;
pub mod quote;
pub mod shipment;

pub use address_book::{AddressDraft, AddressRole};
pub use app_state::{AppState, Preferences};
pub use density::{compute_density, DensityResult};
pub use entities::{CargoField, CargoItem};
pub use freight_class::FreightClass;
pub use quote::{validate_quote, FreightMode, QuoteRequest};
pub use shipment::summarize_shipment;
