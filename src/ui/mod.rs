// UI module
// Contains layout, panels, and shared UI components

/// Assistant transcript and input row
pub mod chat_panel;
/// Shared widgets
pub mod components;
/// Filter draft editor
pub mod filters_panel;
/// Panel arrangement
pub mod layout;
/// Product grid
pub mod product_list;
/// Free-text search input
pub mod search_bar;

pub use layout::render_app_layout;
