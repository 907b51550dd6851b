//! Storefront GUI Library
//!
//! Client-side state for the storefront: catalog filtering, chat directives,
//! currency conversion and the HTTP client for the search/chat service.
//! The desktop binary is in `src/main.rs`.

pub mod api;
/// Product records and structured filtering
pub mod catalog;
/// Assistant transcript and search directives
pub mod chat;
pub mod config;
pub mod controller;
pub mod currency;
pub mod error;
/// Coordinator state and panel drafts
///
/// Owns canonical products and filters, and turns UI events into commands.
pub mod state;
/// egui panels and layout
pub mod ui;
