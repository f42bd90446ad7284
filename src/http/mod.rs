//! HTTP client module for bacheck

pub mod client;
pub use client::{HttpClient, ProbeResponse};
