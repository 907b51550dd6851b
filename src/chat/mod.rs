// Chat module
// Transcript, wire messages, and directive parsing for the assistant panel

pub mod directive;
pub mod models;
/// Transcript and input buffer of the chat panel
pub mod session;

pub use directive::{parse_directive, Directive};
pub use models::{Message, MessageRole};
pub use session::ChatSession;
