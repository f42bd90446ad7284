//! bacheck - HTTP Basic-Authentication auditor
//!
//! Concurrently probes configured endpoints and verifies that Basic-Auth
//! is enforced exactly where it should be. Intended as a monitoring and
//! compliance check, with Nagios-style exit codes.

pub mod checker;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod report;
