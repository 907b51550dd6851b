// State management module
// Handles the storefront coordinator state and panel drafts

/// Root coordinator and its command/event protocol
pub mod app_state;
/// Uncommitted search and filter input
pub mod drafts;

pub use app_state::{AppEvent, AppState, Command, Notice, SearchSeq};
pub use drafts::{FilterDraft, SearchDraft};
