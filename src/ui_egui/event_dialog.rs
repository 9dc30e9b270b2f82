//! Add/edit form for a single event.

mod render;
mod state;
mod widgets;

pub use render::{render_event_dialog, EventDialogResult};
pub use state::{DialogMode, EventDialogState, TimeInput};
