//! Blog adapter
//!
//! HTTP implementation of the downstream blog publisher.

pub mod client;

pub use client::HttpBlogPublisher;
