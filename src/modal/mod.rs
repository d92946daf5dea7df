//! Modal interaction subsystem.
//!
//! A caller builds a [`DialogRequest`] and hands it to a [`ModalManager`].
//! The manager validates it, asks the [`PresentationSurface`] to show it,
//! then feeds every reported [`DialogEvent`] through [`DialogReducer`] until
//! the instance reaches a terminal [`DialogState`]:
//!
//! ```text
//!          button / item press / confirm
//!   Open ─────────────────────────────────→ Resolved(outcome)
//!    │  outside tap or back (dismissible) ─→ Resolved(Dismissed)
//!    └── host teardown ────────────────────→ Aborted
//! ```
//!
//! Nothing leaves a terminal state, so the first resolving event wins.

mod intent;
mod loading;
mod manager;
mod outcome;
mod reducer;
mod request;
mod state;
mod surface;

pub use intent::DialogEvent;
pub use loading::LoadingHandle;
pub use manager::{ModalManager, PendingDialog};
pub use outcome::{DialogOutcome, Payload, SelectedItem};
pub use reducer::DialogReducer;
pub use request::{
    ActionRole, ActionSlot, DialogBody, DialogKind, DialogRequest, InitialSelection, InputClass,
    TextFieldSpec,
};
pub use state::{DialogState, SelectionState};
pub use surface::{LoadingRequest, PresentationSurface, SurfaceError, SurfaceSession};
