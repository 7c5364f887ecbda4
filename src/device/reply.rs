//! Decoding of `get-software-information` replies
//!
//! Junos renders RPC replies as JSON where every element is an array of
//! objects and leaf values sit under a `data` key:
//!
//! ```json
//! {"software-information": [{
//!     "product-model": [{"data": "srx240h"}],
//!     "junos-version": [{"data": "12.1X44-D10.4"}]
//! }]}
//! ```
//!
//! Chassis clusters wrap one `software-information` per node in
//! `multi-routing-engine-results`.

use crate::domain::RoutingEngine;
use crate::error::DeviceError;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Release string inside a package comment, e.g. `JUNOS Software Release [10.4R3.4]`
static PACKAGE_RELEASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());

#[derive(Debug, Deserialize)]
struct Leaf {
    #[serde(default)]
    data: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SoftwareInformationReply {
    #[serde(rename = "software-information", default)]
    software_information: Vec<SoftwareInformation>,
    #[serde(rename = "multi-routing-engine-results", default)]
    multi_routing_engine_results: Vec<MultiRoutingEngineResults>,
}

#[derive(Debug, Deserialize)]
struct MultiRoutingEngineResults {
    #[serde(rename = "multi-routing-engine-item", default)]
    items: Vec<MultiRoutingEngineItem>,
}

#[derive(Debug, Deserialize)]
struct MultiRoutingEngineItem {
    #[serde(rename = "re-name", default)]
    re_name: Vec<Leaf>,
    #[serde(rename = "software-information", default)]
    software_information: Vec<SoftwareInformation>,
}

#[derive(Debug, Deserialize)]
struct SoftwareInformation {
    #[serde(rename = "product-model", default)]
    product_model: Vec<Leaf>,
    #[serde(rename = "junos-version", default)]
    junos_version: Vec<Leaf>,
    #[serde(rename = "package-information", default)]
    package_information: Vec<PackageInformation>,
}

#[derive(Debug, Deserialize)]
struct PackageInformation {
    #[serde(default)]
    name: Vec<Leaf>,
    #[serde(default)]
    comment: Vec<Leaf>,
}

fn first(leaves: &[Leaf]) -> Option<&str> {
    leaves
        .first()
        .map(|l| l.data.trim())
        .filter(|s| !s.is_empty())
}

impl SoftwareInformation {
    /// Version from `junos-version`, or from the `junos` package comment on older releases
    fn version(&self) -> Option<String> {
        if let Some(v) = first(&self.junos_version) {
            return Some(v.to_string());
        }
        self.package_information
            .iter()
            .filter(|p| first(&p.name) == Some("junos"))
            .find_map(|p| first(&p.comment))
            .and_then(|comment| PACKAGE_RELEASE_RE.captures(comment))
            .map(|caps| caps[1].to_string())
    }

    fn into_engine(self, host: &str, name: Option<&str>) -> Result<RoutingEngine, DeviceError> {
        let model = first(&self.product_model)
            .ok_or_else(|| DeviceError::invalid_reply(host, "missing product-model"))?
            .to_string();
        let version = self
            .version()
            .ok_or_else(|| DeviceError::invalid_reply(host, "missing junos-version"))?;

        let engine = RoutingEngine::new(model, version);
        Ok(match name {
            Some(name) => engine.with_name(name),
            None => engine,
        })
    }
}

impl SoftwareInformationReply {
    /// Flatten the reply into routing engines, in the order the device listed them
    pub(crate) fn into_engines(self, host: &str) -> Result<Vec<RoutingEngine>, DeviceError> {
        let mut engines = Vec::new();

        for info in self.software_information {
            engines.push(info.into_engine(host, None)?);
        }

        for results in self.multi_routing_engine_results {
            for item in results.items {
                let name = first(&item.re_name).map(str::to_string);
                for info in item.software_information {
                    engines.push(info.into_engine(host, name.as_deref())?);
                }
            }
        }

        if engines.is_empty() {
            return Err(DeviceError::NoRoutingEngines {
                host: host.to_string(),
            });
        }

        Ok(engines)
    }
}

/// Decode a reply body into routing engines
pub fn parse_software_information(host: &str, body: &str) -> Result<Vec<RoutingEngine>, DeviceError> {
    let reply: SoftwareInformationReply = serde_json::from_str(body)
        .map_err(|e| DeviceError::invalid_reply(host, format!("failed to parse JSON: {}", e)))?;
    reply.into_engines(host)
}
