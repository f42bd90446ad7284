//! Check engine: job expansion, dispatch pool, and aggregation

pub mod classify;

use crate::config::Site;
use crate::http::HttpClient;
use crate::models::{AuditReport, CheckConfig, EndpointJob, EndpointResult, SiteReport, Verdict};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Fixed size of the dispatch pool
const WORKER_COUNT: usize = 30;

/// Expands every site's path lists into a flat list of endpoint jobs.
///
/// Pure over its input: repeated expansion of the same configuration yields
/// the same jobs. URL concatenation keeps a single "/" separator and does
/// not de-duplicate slashes; an empty path probes the site root with a
/// trailing slash.
pub fn expand_jobs(sites: &[Site]) -> Vec<EndpointJob> {
    let mut jobs = Vec::new();
    for (site_index, site) in sites.iter().enumerate() {
        for path in &site.basic_auth {
            jobs.push(EndpointJob {
                site: site_index,
                url: format!("{}/{path}", site.base),
                auth_expected: true,
            });
        }
        for path in &site.no_basic_auth {
            jobs.push(EndpointJob {
                site: site_index,
                url: format!("{}/{path}", site.base),
                auth_expected: false,
            });
        }
    }
    jobs
}

/// Probes one endpoint and classifies the outcome.
///
/// A transport failure is recorded on this result alone and is always a
/// failure, never an unknown.
async fn check_endpoint(client: &HttpClient, job: &EndpointJob) -> EndpointResult {
    let result = match client.probe(&job.url).await {
        Ok(response) => {
            let classification = classify::classify(response.code, job.auth_expected);
            if response.challenged != classification.ba_enabled {
                debug!(
                    "challenge header and status code disagree for {} ({})",
                    job.url, response.status
                );
            }
            EndpointResult {
                url: job.url.clone(),
                auth_expected: job.auth_expected,
                ba_enabled: classification.ba_enabled,
                unknown: classification.unknown,
                success: classification.success,
                verdict: classification.verdict(),
                status: response.status,
            }
        }
        Err(e) => EndpointResult {
            url: job.url.clone(),
            auth_expected: job.auth_expected,
            ba_enabled: false,
            unknown: false,
            success: false,
            verdict: Verdict::TransportError,
            status: e.to_string(),
        },
    };
    debug!("{}: {} ({})", result.url, result.verdict, result.status);
    result
}

/// Runs endpoint checks across a fixed pool of workers and aggregates
/// the results
pub struct CheckEngine {
    client: HttpClient,
    config: CheckConfig,
}

impl CheckEngine {
    /// Creates an engine around a shared HTTP client
    pub fn new(client: HttpClient, config: CheckConfig) -> Self {
        Self { client, config }
    }

    /// Checks every endpoint of every site and returns the aggregated report.
    ///
    /// Jobs are drained from a shared queue by the worker pool; each result
    /// slot is written exactly once. The completion channel carries one
    /// message per job and is drained in full before any result is read,
    /// so all slots are populated when aggregation starts. A run with zero
    /// jobs completes immediately.
    pub async fn run(&self, sites: &[Site]) -> AuditReport {
        let mut report = AuditReport::new();

        let jobs = expand_jobs(sites);
        let total = jobs.len();
        let site_of: Vec<usize> = jobs.iter().map(|j| j.site).collect();
        info!("checking {total} endpoints across {} sites", sites.len());

        let mut slots: Vec<Option<EndpointResult>> = vec![None; total];
        let queue: Arc<Mutex<VecDeque<(usize, EndpointJob)>>> =
            Arc::new(Mutex::new(jobs.into_iter().enumerate().collect()));
        let (tx, mut rx) = mpsc::channel::<(usize, EndpointResult)>(total.max(1));

        let mut workers = JoinSet::new();
        for _ in 0..WORKER_COUNT {
            let queue = Arc::clone(&queue);
            let tx = tx.clone();
            let client = self.client.clone();
            workers.spawn(async move {
                loop {
                    let next = queue.lock().await.pop_front();
                    let Some((slot, job)) = next else { break };
                    let result = check_endpoint(&client, &job).await;
                    if tx.send((slot, result)).await.is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);

        let progress = if self.config.spinner {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  {spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-"),
            );
            pb.set_message("Checking endpoints...");
            pb
        } else {
            ProgressBar::hidden()
        };

        // Completion barrier: one message per job, drained exactly once each
        let mut received = 0;
        while received < total {
            match rx.recv().await {
                Some((slot, result)) => {
                    slots[slot] = Some(result);
                    received += 1;
                    progress.inc(1);
                }
                None => break,
            }
        }
        progress.finish_and_clear();

        while workers.join_next().await.is_some() {}

        if received < total {
            warn!("only {received} of {total} endpoint checks reported a result");
        }

        report.sites = sites
            .iter()
            .map(|site| SiteReport {
                base: site.base.clone(),
                results: Vec::new(),
            })
            .collect();
        for (slot, result) in slots.into_iter().enumerate() {
            if let Some(result) = result {
                report.sites[site_of[slot]].results.push(result);
            }
        }
        for site in &mut report.sites {
            site.results.sort_by(|a, b| a.url.cmp(&b.url));
        }

        report.finish(self.config.thresholds);
        report
    }
}
