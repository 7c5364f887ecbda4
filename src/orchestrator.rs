//! Check orchestrator for coordinating the whole run
//!
//! This module provides:
//! - Workflow coordination: open session → fetch routing engines → assess → release
//! - Strictly sequential processing of targets in input order
//! - Per-target error capture so one bad device never stops the run

use crate::device::DeviceConnector;
use crate::domain::{EngineReport, Target, TargetReport};
use crate::progress::Progress;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Orchestrator for coordinating the check workflow
pub struct Orchestrator<C: DeviceConnector> {
    /// Devices to check, in order
    targets: Vec<Target>,
    /// Opens device sessions
    connector: C,
    /// Whether to show a spinner while talking to devices
    show_progress: bool,
}

/// Result of running the orchestrator
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// When the run started
    pub checked_at: DateTime<Utc>,
    /// One report per target, in input order
    pub targets: Vec<TargetReport>,
}

impl RunResult {
    /// Returns true if any target needs operator attention
    pub fn has_problems(&self) -> bool {
        self.targets.iter().any(|t| t.has_problems())
    }

    /// Number of targets that could not be reached or queried
    pub fn failed_targets(&self) -> usize {
        self.targets.iter().filter(|t| t.error.is_some()).count()
    }
}

impl<C: DeviceConnector> Orchestrator<C> {
    /// Create a new orchestrator
    pub fn new(targets: Vec<Target>, connector: C) -> Self {
        Self {
            targets,
            connector,
            show_progress: false,
        }
    }

    /// Enable or disable the progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the check workflow
    pub async fn run(&self) -> RunResult {
        let checked_at = Utc::now();
        let mut progress = Progress::new(self.show_progress);
        let mut reports = Vec::with_capacity(self.targets.len());

        for target in &self.targets {
            progress.spinner(&format!("Checking {}...", target.host));
            let report = self.check_target(target).await;
            progress.finish_and_clear();
            reports.push(report);
        }

        RunResult {
            checked_at,
            targets: reports,
        }
    }

    /// Check a single target; the session is released before returning
    async fn check_target(&self, target: &Target) -> TargetReport {
        let session = match self.connector.open(target).await {
            Ok(session) => session,
            Err(e) => {
                log::warn!("{}: {}", target.host, e);
                return TargetReport::failed(&target.host, e);
            }
        };

        let engines = match session.routing_engines().await {
            Ok(engines) => engines,
            Err(e) => {
                log::warn!("{}: {}", target.host, e);
                return TargetReport::failed(&target.host, e);
            }
        };
        drop(session);

        log::info!("{} has {} routing-engines", target.host, engines.len());

        let reports: Vec<EngineReport> = engines
            .into_iter()
            .enumerate()
            .map(|(index, engine)| {
                let report = EngineReport::assess(index, engine);
                log::debug!("{} RE{}: {:?}", target.host, index, report.assessment);
                report
            })
            .collect();

        TargetReport::checked(&target.host, reports)
    }
}
