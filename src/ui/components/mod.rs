// UI Components
pub mod context_menu;
pub mod dialog;
pub mod file_view;
pub mod nav_bar;
pub mod sidebar_panel;
pub mod status_bar;
pub mod tab_bar;
pub mod toolbar;
pub mod warning;

// Re-export components for convenience
pub use context_menu::{ContextMenu, ContextMenuState};
pub use dialog::{Dialog, DialogKind, InputPurpose};
pub use file_view::{FileView, FileViewStatus};
pub use nav_bar::NavBar;
pub use sidebar_panel::SidebarPanel;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use toolbar::Toolbar;
pub use warning::WarningScreen;
