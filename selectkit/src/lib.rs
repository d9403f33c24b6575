//! Custom-styled dropdown that mirrors a native select control.
//!
//! [`SelectWidget`] hides the native control, renders a label and an option
//! list after it, and keeps the native selection in sync so a form reading
//! the control sees what the widget shows.

pub mod config;
pub mod error;
pub mod select;

pub use config::SelectConfig;
pub use error::SelectError;
pub use select::{SelectOption, SelectWidget};
