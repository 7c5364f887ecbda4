//! Per-device report types

use super::ParsedVersion;
use crate::compat::{classify, Classification};
use crate::error::VersionError;
use serde::Serialize;

/// Platform data reported by one routing engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingEngine {
    /// Cluster node name (e.g. `node0`), absent on standalone devices
    pub name: Option<String>,
    /// Product model (e.g. `srx240h`)
    pub model: String,
    /// Raw Junos version string
    pub version: String,
}

impl RoutingEngine {
    /// Creates a new RoutingEngine without a node name
    pub fn new(model: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: None,
            model: model.into(),
            version: version.into(),
        }
    }

    /// Sets the cluster node name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns true if the model looks like an SRX
    pub fn is_srx(&self) -> bool {
        self.model.to_ascii_uppercase().contains("SRX")
    }
}

/// What we concluded about one routing engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assessment {
    /// Version parsed and run through the compatibility table
    Classified {
        version: ParsedVersion,
        classification: Classification,
    },
    /// The device is not an SRX; nothing was classified
    UnsupportedModel,
    /// The version string could not be parsed
    InvalidVersion {
        #[serde(serialize_with = "serialize_display")]
        error: VersionError,
    },
}

impl Assessment {
    /// Returns true if this assessment should be flagged to the operator as a problem
    pub fn is_problem(&self) -> bool {
        !matches!(self, Assessment::Classified { .. })
    }
}

fn serialize_display<S: serde::Serializer>(
    error: &VersionError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Report for one routing engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineReport {
    /// Position of the routing engine in the device reply
    pub index: usize,
    /// Platform data as reported
    pub engine: RoutingEngine,
    /// Outcome
    pub assessment: Assessment,
}

impl EngineReport {
    /// Assess a routing engine: model check, then version parse, then classification
    pub fn assess(index: usize, engine: RoutingEngine) -> Self {
        let assessment = if !engine.is_srx() {
            Assessment::UnsupportedModel
        } else {
            match ParsedVersion::parse(&engine.version) {
                Ok(version) => Assessment::Classified {
                    version,
                    classification: classify(&version),
                },
                Err(error) => Assessment::InvalidVersion { error },
            }
        };

        Self {
            index,
            engine,
            assessment,
        }
    }

    /// Returns the release track description, if the version parsed
    pub fn release_label(&self) -> Option<&'static str> {
        match &self.assessment {
            Assessment::Classified { version, .. } => Some(version.release.label()),
            _ => None,
        }
    }
}

/// Report for one target device
#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    /// Host name or address used to reach the device
    pub host: String,
    /// One entry per routing engine
    pub engines: Vec<EngineReport>,
    /// Connection or fetch failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TargetReport {
    /// Creates a successful report
    pub fn checked(host: impl Into<String>, engines: Vec<EngineReport>) -> Self {
        Self {
            host: host.into(),
            engines,
            error: None,
        }
    }

    /// Creates a report for a target that could not be checked
    pub fn failed(host: impl Into<String>, error: impl ToString) -> Self {
        Self {
            host: host.into(),
            engines: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// Returns true if the target or any of its routing engines needs attention
    pub fn has_problems(&self) -> bool {
        self.error.is_some() || self.engines.iter().any(|e| e.assessment.is_problem())
    }
}
