// Chat session state
// Transcript plus the input buffer of the chat panel

use crate::chat::models::Message;

/// Conversation held by the chat panel
///
/// Append-only for the lifetime of the window; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    /// Messages in the order they were appended
    messages: Vec<Message>,
    /// Text currently typed in the input box
    pub input: String,
    /// Number of chat round trips still in flight
    pending: usize,
}

impl ChatSession {
    /// Empty conversation
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether a reply is still outstanding
    pub fn is_waiting(&self) -> bool {
        self.pending > 0
    }

    /// Take the input buffer as a new user turn
    ///
    /// Returns the full transcript to post, or `None` if the input was blank
    /// (in which case the buffer is left untouched).
    pub fn submit_input(&mut self) -> Option<Vec<Message>> {
        if self.input.trim().is_empty() {
            return None;
        }
        let content = std::mem::take(&mut self.input);
        self.messages.push(Message::user(content));
        self.pending += 1;
        Some(self.messages.clone())
    }

    /// Record the assistant's reply to an outstanding turn
    pub fn push_reply(&mut self, content: impl Into<String>) {
        self.pending = self.pending.saturating_sub(1);
        self.messages.push(Message::assistant(content));
    }

    /// Record that an outstanding turn failed; the user message stays
    pub fn mark_failed(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }
}
