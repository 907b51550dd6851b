// Application state management
// Canonical products and filters, chat transcript, panel drafts, and the
// command/event protocol used to talk to the network layer

use crate::api::ChatResponse;
use crate::catalog::{apply_filters, CatalogItem, FilterPatch, FilterSet, Product};
use crate::chat::{parse_directive, ChatSession, Message};
use crate::error::ClientError;
use crate::state::drafts::{FilterDraft, SearchDraft};

/// Sequence number attached to every product search
pub type SearchSeq = u64;

/// Network work requested by the state
///
/// The state never performs I/O itself; the controller executes these and
/// answers with an `AppEvent`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `GET /api/search?query=...`
    FetchProducts {
        /// Sequence number of this search
        seq: SearchSeq,
        /// Free-text query
        query: String,
    },
    /// `POST /api/chat` with the full transcript
    SendChat {
        /// Transcript including the new user turn
        conversation: Vec<Message>,
    },
}

/// Completion of a `Command`
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A search returned its hits
    ProductsLoaded {
        /// Sequence number of the search
        seq: SearchSeq,
        /// Hits in service order
        products: Vec<Product>,
    },
    /// A search failed
    ProductsFailed {
        /// Sequence number of the search
        seq: SearchSeq,
        /// Query that failed, kept for Retry
        query: String,
        /// What went wrong
        error: ClientError,
    },
    /// The assistant answered a chat turn
    ChatReplied(ChatResponse),
    /// A chat turn failed
    ChatFailed(ClientError),
}

/// User-visible failure banner
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Text shown in the banner
    pub message: String,
    /// Query to re-issue when the user presses Retry
    pub retry_query: Option<String>,
}

/// Root coordinator state
///
/// Owns the canonical product list and filter set. The visible list is
/// always computed from those two and never stored.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Items from the last accepted search, in service order
    products: Vec<CatalogItem>,
    /// Committed filters
    filters: FilterSet,
    /// Assistant conversation and its input box
    pub chat: ChatSession,
    /// Search bar input
    pub search_draft: SearchDraft,
    /// Filters panel input
    pub filter_draft: FilterDraft,
    /// Most recently issued search
    latest_seq: SearchSeq,
    /// Most recent search whose response (or failure) was accepted
    settled_seq: SearchSeq,
    /// Whether the mount-time fetch has been issued
    loaded: bool,
    /// Failure banner, if any
    notice: Option<Notice>,
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount-time fetch with an empty query; only the first call issues it
    pub fn initial_load(&mut self) -> Option<Command> {
        if self.loaded {
            return None;
        }
        self.loaded = true;
        Some(self.fetch_products(""))
    }

    /// Issue a product search
    pub fn fetch_products(&mut self, query: &str) -> Command {
        self.latest_seq += 1;
        tracing::info!(seq = self.latest_seq, query = %query, "Fetching products");
        Command::FetchProducts {
            seq: self.latest_seq,
            query: query.to_string(),
        }
    }

    /// Search requested by the search bar, retry, or a chat directive
    pub fn handle_search(&mut self, query: &str) -> Command {
        self.fetch_products(query)
    }

    /// Submit the search bar draft
    pub fn submit_search(&mut self) -> Command {
        let query = self.search_draft.query.clone();
        self.handle_search(&query)
    }

    /// Merge a partial update into the canonical filters
    pub fn handle_filters_update(&mut self, patch: FilterPatch) {
        self.filters.merge(patch);
        tracing::debug!(filters = ?self.filters, "Filters updated");
    }

    /// Commit the whole filters panel draft
    pub fn apply_filter_draft(&mut self) {
        let filters = self.filter_draft.to_filter_set();
        self.handle_filters_update(FilterPatch::replace_all(filters));
    }

    /// Clear the filters panel draft and commit it
    pub fn reset_filters(&mut self) {
        self.filter_draft = FilterDraft::default();
        self.apply_filter_draft();
    }

    /// Send the chat input box as a new user turn
    pub fn send_chat_message(&mut self) -> Option<Command> {
        let conversation = self.chat.submit_input()?;
        tracing::info!(turns = conversation.len(), "Sending chat message");
        Some(Command::SendChat { conversation })
    }

    /// Re-issue the query of the current failure banner
    ///
    /// A banner without a retry query is left in place.
    pub fn retry(&mut self) -> Option<Command> {
        let query = self.notice.as_ref()?.retry_query.clone()?;
        self.notice = None;
        Some(self.handle_search(&query))
    }

    /// Hide the failure banner
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Fold a completed command back into the state
    ///
    /// Returns follow-up commands (a chat directive triggers a search).
    pub fn apply_event(&mut self, event: AppEvent) -> Vec<Command> {
        match event {
            AppEvent::ProductsLoaded { seq, products } => {
                if self.is_stale(seq) {
                    return Vec::new();
                }
                self.settled_seq = seq;
                self.products = products.into_iter().map(CatalogItem::from).collect();
                if self
                    .notice
                    .as_ref()
                    .is_some_and(|n| n.retry_query.is_some())
                {
                    self.notice = None;
                }
                tracing::info!(seq, count = self.products.len(), "Products loaded");
                Vec::new()
            }
            AppEvent::ProductsFailed { seq, query, error } => {
                if self.is_stale(seq) {
                    return Vec::new();
                }
                self.settled_seq = seq;
                tracing::error!(seq, query = %query, error = %error, "Error fetching products");
                self.notice = Some(Notice {
                    message: format!("{}: could not load products ({})", error.kind_label(), error),
                    retry_query: Some(query),
                });
                Vec::new()
            }
            AppEvent::ChatReplied(reply) => self.handle_chat_reply(reply),
            AppEvent::ChatFailed(error) => {
                tracing::error!(error = %error, "Error sending message");
                self.chat.mark_failed();
                self.notice = Some(Notice {
                    message: format!("{}: the assistant did not answer ({})", error.kind_label(), error),
                    retry_query: None,
                });
                Vec::new()
            }
        }
    }

    fn handle_chat_reply(&mut self, reply: ChatResponse) -> Vec<Command> {
        self.chat.push_reply(reply.response.clone());

        let Some(directive) = reply.directive().and_then(parse_directive) else {
            return Vec::new();
        };
        tracing::info!(
            directive = %directive.search_text,
            subject = %directive.subject,
            max_price = ?directive.max_price,
            "Assistant issued a search directive"
        );

        let command = self.handle_search(&directive.search_text);
        if let Some(max) = directive.max_price {
            self.handle_filters_update(FilterPatch::max_price(max));
        }
        vec![command]
    }

    fn is_stale(&self, seq: SearchSeq) -> bool {
        let stale = seq < self.latest_seq;
        if stale {
            tracing::debug!(seq, latest = self.latest_seq, "Ignoring stale search response");
        }
        stale
    }

    /// Canonical product list as last fetched
    pub fn products(&self) -> &[CatalogItem] {
        &self.products
    }

    /// Committed filters
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Products passing the committed filters
    pub fn visible_products(&self) -> Vec<&CatalogItem> {
        apply_filters(&self.products, &self.filters)
    }

    /// Whether the latest search is still in flight
    pub fn is_searching(&self) -> bool {
        self.latest_seq > self.settled_seq
    }

    /// Current failure banner
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;

    fn product(id: i64, price: f64, currency: &str) -> Product {
        Product {
            id: ProductId::Number(id),
            name: format!("Item {}", id),
            images: vec![],
            category_name: "shoes".to_string(),
            sizes: vec!["M".to_string()],
            current_price: price,
            old_price: None,
            off_percent: None,
            currency: currency.to_string(),
        }
    }

    fn seq_of(command: &Command) -> SearchSeq {
        match command {
            Command::FetchProducts { seq, .. } => *seq,
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.products().is_empty());
        assert!(state.filters().is_empty());
        assert!(!state.is_searching());
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_initial_load_only_once() {
        let mut state = AppState::new();
        let first = state.initial_load();
        assert_eq!(
            first,
            Some(Command::FetchProducts {
                seq: 1,
                query: String::new()
            })
        );
        assert!(state.initial_load().is_none());
        assert!(state.is_searching());
    }

    #[test]
    fn test_loaded_products_get_usd_prices() {
        let mut state = AppState::new();
        let seq = seq_of(&state.fetch_products("bags"));
        state.apply_event(AppEvent::ProductsLoaded {
            seq,
            products: vec![product(1, 100.0, "AED"), product(2, 10.0, "USD")],
        });
        assert_eq!(state.products()[0].current_price_usd, 27.23);
        assert_eq!(state.products()[1].current_price_usd, 10.0);
        assert!(!state.is_searching());
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = AppState::new();
        let slow = seq_of(&state.handle_search("first"));
        let fast = seq_of(&state.handle_search("second"));

        state.apply_event(AppEvent::ProductsLoaded {
            seq: fast,
            products: vec![product(2, 5.0, "USD")],
        });
        state.apply_event(AppEvent::ProductsLoaded {
            seq: slow,
            products: vec![product(1, 5.0, "USD"), product(3, 5.0, "USD")],
        });

        assert_eq!(state.products().len(), 1);
        assert_eq!(state.products()[0].product.id, ProductId::Number(2));
    }

    #[test]
    fn test_failed_fetch_keeps_products_and_offers_retry() {
        let mut state = AppState::new();
        let seq = seq_of(&state.fetch_products(""));
        state.apply_event(AppEvent::ProductsLoaded {
            seq,
            products: vec![product(1, 5.0, "USD")],
        });

        let seq = seq_of(&state.handle_search("hats"));
        state.apply_event(AppEvent::ProductsFailed {
            seq,
            query: "hats".to_string(),
            error: ClientError::Network("connection refused".to_string()),
        });

        assert_eq!(state.products().len(), 1);
        assert_eq!(state.visible_products().len(), 1);
        let notice = state.notice().unwrap();
        assert_eq!(notice.retry_query.as_deref(), Some("hats"));
        assert!(notice.message.starts_with("Network failure"));

        let retry = state.retry().unwrap();
        assert_eq!(
            retry,
            Command::FetchProducts {
                seq: 3,
                query: "hats".to_string()
            }
        );
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_filter_update_keeps_canonical_list() {
        let mut state = AppState::new();
        let seq = seq_of(&state.fetch_products(""));
        state.apply_event(AppEvent::ProductsLoaded {
            seq,
            products: vec![product(1, 20.0, "USD"), product(2, 60.0, "USD")],
        });

        state.handle_filters_update(FilterPatch::max_price(30.0));
        assert_eq!(state.visible_products().len(), 1);
        assert_eq!(state.products().len(), 2);
    }

    #[test]
    fn test_filters_persist_across_fetches() {
        let mut state = AppState::new();
        state.handle_filters_update(FilterPatch::max_price(30.0));
        let seq = seq_of(&state.handle_search("anything"));
        state.apply_event(AppEvent::ProductsLoaded {
            seq,
            products: vec![product(1, 20.0, "USD"), product(2, 60.0, "USD")],
        });
        assert_eq!(state.visible_products().len(), 1);
    }

    #[test]
    fn test_reset_filters_clears_everything() {
        let mut state = AppState::new();
        state.filter_draft.price_max = "30".to_string();
        state.filter_draft.size = Some("M".to_string());
        state.apply_filter_draft();
        assert_eq!(state.filters().price_max, Some(30.0));

        state.reset_filters();
        assert!(state.filters().is_empty());
        assert_eq!(state.filter_draft, FilterDraft::default());
    }

    #[test]
    fn test_chat_reply_without_directive() {
        let mut state = AppState::new();
        state.chat.input = "hi".to_string();
        assert!(state.send_chat_message().is_some());

        let follow_up = state.apply_event(AppEvent::ChatReplied(ChatResponse {
            response: "Hello!".to_string(),
            query: Some(String::new()),
        }));
        assert!(follow_up.is_empty());
        assert_eq!(state.chat.messages().len(), 2);
        assert!(state.filters().is_empty());
    }

    #[test]
    fn test_chat_directive_without_price_only_searches() {
        let mut state = AppState::new();
        state.chat.input = "any bags?".to_string();
        state.send_chat_message();

        let follow_up = state.apply_event(AppEvent::ChatReplied(ChatResponse {
            response: "Here are some bags".to_string(),
            query: Some("bags".to_string()),
        }));

        assert_eq!(
            follow_up,
            vec![Command::FetchProducts {
                seq: 1,
                query: "bags".to_string()
            }]
        );
        assert!(state.filters().is_empty());
        assert_eq!(state.chat.messages().len(), 2);
    }

    #[test]
    fn test_retry_keeps_banner_without_query() {
        let mut state = AppState::new();
        state.chat.input = "hello?".to_string();
        state.send_chat_message();
        state.apply_event(AppEvent::ChatFailed(ClientError::Network("reset".to_string())));

        assert!(state.retry().is_none());
        assert!(state.notice().is_some());
    }

    #[test]
    fn test_chat_failure_keeps_user_message() {
        let mut state = AppState::new();
        state.chat.input = "hello?".to_string();
        state.send_chat_message();
        state.apply_event(AppEvent::ChatFailed(ClientError::Timeout(30)));

        assert_eq!(state.chat.messages().len(), 1);
        assert!(!state.chat.is_waiting());
        assert!(state.notice().unwrap().retry_query.is_none());
    }

    #[test]
    fn test_empty_chat_input_sends_nothing() {
        let mut state = AppState::new();
        state.chat.input = "  ".to_string();
        assert!(state.send_chat_message().is_none());
        assert!(state.chat.messages().is_empty());
    }
}
