//! Wire types for the search and chat endpoints

use crate::catalog::Product;
use crate::chat::Message;
use serde::{Deserialize, Serialize};

/// Body of `GET /api/search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Matching products
    pub hits: Vec<Product>,
}

/// Body of `POST /api/chat`: the whole transcript so far
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    /// Every message so far, oldest first
    pub conversation: &'a [Message],
}

/// Reply from `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    /// Assistant text to append to the transcript
    pub response: String,
    /// Search directive, if the assistant wants the catalog refreshed
    #[serde(default)]
    pub query: Option<String>,
}

impl ChatResponse {
    /// Directive text, treating an empty string as absent
    pub fn directive(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}
