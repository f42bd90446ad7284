//! Configuration loading for bacheck

use crate::error::{BacheckError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;
use url::Url;

/// One audited site: a base URL and the endpoint paths to check against it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Base URL, e.g. `https://example.org`
    pub base: String,
    /// Paths that must require Basic-Auth
    #[serde(default)]
    pub basic_auth: Vec<String>,
    /// Paths that must not require Basic-Auth
    #[serde(default)]
    pub no_basic_auth: Vec<String>,
}

/// File-level structure of the sites file
#[derive(Debug, Deserialize)]
struct SitesFile {
    sites: Vec<Site>,
}

/// Loads and validates the sites file.
///
/// Any malformed input is fatal here; the check engine is never invoked
/// with an invalid configuration.
pub fn load_sites(path: &Path) -> Result<Vec<Site>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| BacheckError::ConfigError(format!("cannot read {}: {e}", path.display())))?;
    let file: SitesFile = serde_json::from_str(&content)?;

    for site in &file.sites {
        Url::parse(&site.base).map_err(|e| {
            BacheckError::ConfigError(format!("invalid base URL '{}': {e}", site.base))
        })?;

        for path in &site.basic_auth {
            if site.no_basic_auth.contains(path) {
                warn!(
                    "path '{path}' of {} is listed both with and without Basic-Auth; \
                     it will be checked against both expectations",
                    site.base
                );
            }
        }
    }

    Ok(file.sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("bacheck-{}-{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let path = write_temp_config(
            "valid.json",
            r#"{
                "sites": [
                    {
                        "base": "https://example.org",
                        "basic_auth": ["admin"],
                        "no_basic_auth": ["index.html", ""]
                    }
                ]
            }"#,
        );
        let sites = load_sites(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].base, "https://example.org");
        assert_eq!(sites[0].basic_auth, vec!["admin"]);
        assert_eq!(sites[0].no_basic_auth, vec!["index.html", ""]);
    }

    #[test]
    fn test_load_missing_path_lists_defaults_empty() {
        let path = write_temp_config(
            "bare.json",
            r#"{"sites": [{"base": "https://example.org"}]}"#,
        );
        let sites = load_sites(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(sites[0].basic_auth.is_empty());
        assert!(sites[0].no_basic_auth.is_empty());
    }

    #[test]
    fn test_load_rejects_invalid_base_url() {
        let path = write_temp_config(
            "badurl.json",
            r#"{"sites": [{"base": "not a url", "basic_auth": ["admin"]}]}"#,
        );
        let err = load_sites(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, BacheckError::ConfigError(_)));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let path = write_temp_config("broken.json", "{ sites: nope");
        let err = load_sites(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, BacheckError::JsonError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_sites(Path::new("/nonexistent/bacheck.json")).unwrap_err();
        assert!(matches!(err, BacheckError::ConfigError(_)));
    }
}
