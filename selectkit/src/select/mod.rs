//! Select widget - a custom dropdown mirroring a native select control.

mod events;
mod item;
mod render;
mod search;
mod state;

pub use item::SelectOption;
pub use state::SelectWidget;
