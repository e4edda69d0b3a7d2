//! Notion adapter
//!
//! Implementation of the document-database API client.

pub mod client;

pub use client::NotionClientImpl;
