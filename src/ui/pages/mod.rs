pub mod addresses;
pub mod freight;
pub mod quote;
pub mod settings;

pub use addresses::AddressesPage;
pub use freight::FreightPage;
pub use quote::QuotePage;
pub use settings::SettingsPage;
