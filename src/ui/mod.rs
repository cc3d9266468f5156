// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{
    Focus, LayoutAreas, LayoutManager, LayoutMode, LayoutState, MIN_HEIGHT, MIN_WIDTH,
    SIDEBAR_MIN_WIDTH,
};
pub use theme::{Theme, ThemeManager};

// Re-export components
pub use components::{
    ContextMenu, ContextMenuState, Dialog, DialogKind, FileView, FileViewStatus, InputPurpose,
    NavBar, SidebarPanel, StatusBar, TabBar, Toolbar, WarningScreen,
};
