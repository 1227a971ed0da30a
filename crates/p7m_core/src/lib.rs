//! Converter core: pure state machine, file set and view-model helpers.
mod effect;
mod file_set;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use file_set::{is_p7m_name, is_p7m_path, normalize_path, FileOrigin, FileSet};
pub use msg::Msg;
pub use state::{AppState, BatchState, ToolkitPhase};
pub use update::update;
pub use view_model::{AppViewModel, PendingRow};
