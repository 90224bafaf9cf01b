//! egui rendering of the dashboard. Widgets read and update [`AppState`];
//! all chart data comes from the handlers in `chart`.
//!
//! [`AppState`]: crate::state::AppState

pub mod panels;
pub mod plot;
pub mod table;
