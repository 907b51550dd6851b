//! HTTP access to the storefront service

pub mod client;
pub mod models;

pub use client::ApiClient;
pub use models::{ChatResponse, SearchResponse};
