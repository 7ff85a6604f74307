//! Tavily-compatible search API backed by a SearXNG instance.
//!
//! The relay translates an inbound Tavily-shaped request into a SearXNG
//! query, optionally enriches each hit by concurrently scraping its URL
//! for bounded plain text, and re-emits the Tavily response envelope with
//! synthetic positional scores.

pub mod api;
pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod scrapper;
pub mod searx;
