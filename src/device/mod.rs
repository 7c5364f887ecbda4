//! Device access for fetching platform and version data
//!
//! This module provides:
//! - Connector/session traits so the workflow never depends on a live device
//! - HTTP client shared foundation
//! - Junos REST API session (`/rpc/get-software-information`)
//! - Decoding of single-RE and chassis-cluster replies

mod client;
mod junos;
mod reply;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use junos::{JunosRestConnector, JunosRestSession};
pub use reply::parse_software_information;

use crate::domain::{RoutingEngine, Target};
use crate::error::DeviceError;
use async_trait::async_trait;

/// An open session to one device
///
/// Dropping the session releases it.
#[async_trait]
pub trait DeviceSession: Send + Sync {
    /// Fetch model and version data for every routing engine
    async fn routing_engines(&self) -> Result<Vec<RoutingEngine>, DeviceError>;
}

/// Opens sessions to devices
#[async_trait]
pub trait DeviceConnector: Send + Sync {
    /// Open a session; connection and authentication failures surface here
    async fn open(&self, target: &Target) -> Result<Box<dyn DeviceSession>, DeviceError>;
}
