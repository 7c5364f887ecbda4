//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of check results
//! - Structured target-by-target, engine-by-engine verdicts

use crate::compat::Classification;
use crate::domain::{Assessment, EngineReport, TargetReport};
use crate::orchestrator::RunResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    /// RFC 3339 timestamp of the run
    checked_at: String,
    /// Per-target results
    targets: Vec<JsonTarget>,
}

/// JSON representation of a target
#[derive(Serialize)]
struct JsonTarget {
    host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    routing_engines: Vec<JsonEngine>,
}

/// JSON representation of one routing engine
#[derive(Serialize)]
struct JsonEngine {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    model: String,
    version: String,
    /// One of `limited`, `not_covered`, `unsupported_model`, `invalid_version`
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    release_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limitation_set: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    services: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl JsonFormatter {
    /// Convert an engine report to its JSON representation
    fn engine_to_json(&self, report: &EngineReport) -> JsonEngine {
        let mut engine = JsonEngine {
            index: report.index,
            name: report.engine.name.clone(),
            model: report.engine.model.clone(),
            version: report.engine.version.clone(),
            status: "unsupported_model",
            release: None,
            release_label: report.release_label(),
            limitation_set: None,
            notice: None,
            services: None,
            error: None,
        };

        match &report.assessment {
            Assessment::UnsupportedModel => {}
            Assessment::InvalidVersion { error } => {
                engine.status = "invalid_version";
                engine.error = Some(error.to_string());
            }
            Assessment::Classified {
                version,
                classification,
            } => {
                engine.release = Some(version.release.to_string());
                match classification {
                    Classification::NotCovered => engine.status = "not_covered",
                    Classification::Limited(set) => {
                        engine.status = "limited";
                        engine.limitation_set = Some(set.name());
                        engine.notice = set.notice();
                        if set.notice().is_none() || self.verbosity == Verbosity::Verbose {
                            engine.services = Some(set.services().to_vec());
                        }
                    }
                }
            }
        }

        engine
    }

    fn target_to_json(&self, target: &TargetReport) -> JsonTarget {
        JsonTarget {
            host: target.host.clone(),
            error: target.error.clone(),
            routing_engines: target
                .engines
                .iter()
                .map(|e| self.engine_to_json(e))
                .collect(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &RunResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            checked_at: result.checked_at.to_rfc3339(),
            targets: result
                .targets
                .iter()
                .map(|t| self.target_to_json(t))
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
