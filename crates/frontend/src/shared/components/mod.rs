pub mod kpi_card;
pub mod panel;
pub mod status;
pub mod tooltip;
