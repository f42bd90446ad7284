//! Common test utilities

use bacheck::config::Site;
use bacheck::models::{CheckConfig, Thresholds};

/// Creates a test CheckConfig with default thresholds and no spinner
pub fn test_config() -> CheckConfig {
    CheckConfig {
        user_agent: "bacheck-test/0.1.0".to_string(),
        timeout_secs: Some(10),
        thresholds: Thresholds::default(),
        spinner: false,
    }
}

/// Builds a Site from string slices
pub fn site(base: &str, basic_auth: &[&str], no_basic_auth: &[&str]) -> Site {
    Site {
        base: base.to_string(),
        basic_auth: basic_auth.iter().map(|s| s.to_string()).collect(),
        no_basic_auth: no_basic_auth.iter().map(|s| s.to_string()).collect(),
    }
}
