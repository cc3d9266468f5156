// Data Models
pub mod file_entry;
pub mod history;
pub mod operation;
pub mod panel_state;
pub mod sidebar;
pub mod tab_manager;

pub use file_entry::{Entry, EntryKind};
pub use panel_state::{PanelState, ViewMode};
pub use tab_manager::TabManager;
