//! Terminal presentation surface.
//!
//! Hosts dialogs in the controlling terminal using ratatui. Keys:
//! Up/Down move through lists, Space selects or toggles, Tab and
//! Left/Right move between buttons, Enter presses, Esc dismisses.

pub mod render;
mod surface;
mod terminal;
pub mod theme;
pub mod view;

pub use surface::TerminalSurface;
pub use view::{DialogView, LoadingView};
