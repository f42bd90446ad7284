//! Core data models for bacheck

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification outcome of a single endpoint check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Verdict {
    /// Observed Basic-Auth state matches the expectation
    Success,
    /// Observed state is conclusive and does not match (status below or equal to 401)
    MismatchKnown,
    /// Status above 401; the response does not distinguish missing auth from a broken resource
    MismatchUnknown,
    /// No response obtained (DNS, connect, TLS, timeout)
    TransportError,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Success => write!(f, "success"),
            Verdict::MismatchKnown => write!(f, "mismatch"),
            Verdict::MismatchUnknown => write!(f, "unknown"),
            Verdict::TransportError => write!(f, "transport error"),
        }
    }
}

/// One unit of work: a fully-formed URL and the Basic-Auth state it must be in.
/// Immutable after expansion.
#[derive(Debug, Clone)]
pub struct EndpointJob {
    /// Index of the owning site in the loaded configuration
    pub site: usize,
    /// Full URL, base + "/" + path
    pub url: String,
    /// Whether this endpoint must require Basic-Auth
    pub auth_expected: bool,
}

/// Outcome of one endpoint check, written exactly once by the worker
/// that processed the paired job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointResult {
    /// Probed URL
    pub url: String,
    /// Expected Basic-Auth state
    pub auth_expected: bool,
    /// Whether the server presented a Basic-Auth challenge (status 401)
    pub ba_enabled: bool,
    /// Whether the response was inconclusive (status above 401)
    pub unknown: bool,
    /// Whether observed state matched the expectation
    pub success: bool,
    /// Verdict for this endpoint
    pub verdict: Verdict,
    /// HTTP status line, or the transport error detail
    pub status: String,
}

impl EndpointResult {
    /// Observed Basic-Auth state as displayed in reports
    pub fn observed_label(&self) -> &'static str {
        if self.verdict == Verdict::TransportError {
            "unknown"
        } else if self.ba_enabled {
            "yes"
        } else if self.unknown {
            "unknown"
        } else {
            "no"
        }
    }
}

/// All endpoint results belonging to one site, sorted by URL for
/// deterministic display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteReport {
    /// Base URL of the site
    pub base: String,
    /// Per-endpoint results, lexicographically ordered by URL
    pub results: Vec<EndpointResult>,
}

/// Failure-count boundaries mapping aggregate results to a status
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    /// Failure count at which the run is WARNING
    pub warning: usize,
    /// Failure count at which the run is CRITICAL
    pub critical: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: 1,
            critical: 2,
        }
    }
}

/// Aggregate status of a whole run, in monitoring-plugin convention
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Derives the run status from aggregate counts.
    ///
    /// CRITICAL is checked before UNKNOWN, and UNKNOWN takes priority over
    /// WARNING even when failures are below the warning threshold.
    pub fn from_counts(failures: usize, unknowns: usize, thresholds: Thresholds) -> Self {
        if failures >= thresholds.critical {
            Status::Critical
        } else if unknowns > 0 {
            Status::Unknown
        } else if failures >= thresholds.warning {
            Status::Warning
        } else {
            Status::Ok
        }
    }

    /// Process exit code for this status
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Warning => write!(f, "WARNING"),
            Status::Critical => write!(f, "CRITICAL"),
            Status::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Result of a complete audit run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Run start time (local timezone)
    pub started_at: DateTime<Local>,
    /// Run end time (local timezone)
    pub finished_at: Option<DateTime<Local>>,
    /// Per-site results
    pub sites: Vec<SiteReport>,
    /// Results where the expectation was not met, transport errors included
    pub failures: usize,
    /// Results that were inconclusive
    pub unknowns: usize,
    /// Derived run status
    pub status: Status,
}

impl AuditReport {
    /// Creates an empty report stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Local::now(),
            finished_at: None,
            sites: Vec::new(),
            failures: 0,
            unknowns: 0,
            status: Status::Ok,
        }
    }

    /// Recomputes aggregate counts and status, and marks the run finished
    pub fn finish(&mut self, thresholds: Thresholds) {
        self.failures = self
            .sites
            .iter()
            .flat_map(|s| &s.results)
            .filter(|r| !r.success)
            .count();
        self.unknowns = self
            .sites
            .iter()
            .flat_map(|s| &s.results)
            .filter(|r| r.unknown)
            .count();
        self.status = Status::from_counts(self.failures, self.unknowns, thresholds);
        self.finished_at = Some(Local::now());
    }
}

impl Default for AuditReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Runtime configuration for an audit run
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout in seconds; None leaves the client without a deadline
    pub timeout_secs: Option<u64>,
    /// Severity thresholds
    pub thresholds: Thresholds,
    /// Whether to show a progress spinner while checks run
    pub spinner: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("bacheck/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
            thresholds: Thresholds::default(),
            spinner: true,
        }
    }
}
