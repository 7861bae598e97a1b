pub mod class_badge;
pub mod freight_table;
pub mod kpi_card;
pub mod toast;
