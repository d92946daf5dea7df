//! Modal dialogs, notifications and small UI helpers.
//!
//! The centre of the crate is [`modal`]: a dialog request is validated,
//! handed to a [`modal::PresentationSurface`], and driven by a pure reducer
//! until it resolves to exactly one [`modal::DialogOutcome`].

pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod modal;
pub mod mvi;
pub mod notify;
pub mod palette;
pub mod text;
pub mod tui;
pub mod validate;

pub use error::DialogError;
pub use modal::{
    ActionRole, DialogKind, DialogOutcome, DialogRequest, ModalManager, Payload, SelectedItem,
};
