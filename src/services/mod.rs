//! Service layer module
//!
//! HTTP client wrapper for the Trello REST API

pub mod client;

pub use client::{TrelloClient, UpstreamBody, UpstreamResponse};
