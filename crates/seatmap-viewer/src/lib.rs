//! Read-only seat map viewer and the seat picker that drives it in the
//! purchase flow.

pub mod config;
pub mod picker;
pub mod viewer;

pub use config::ViewerConfig;
pub use picker::{Pick, SeatPicker};
pub use viewer::{SeatStats, Viewer, accessible_label};
