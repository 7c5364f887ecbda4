//! Junos REST API session
//!
//! Fetches routing-engine information from the device's REST service.
//! API endpoint: {scheme}://{host}:{port}/rpc/get-software-information
//!
//! Note: the REST service must be enabled on the device
//! (`set system services rest http` or `... rest https`).

use super::reply::SoftwareInformationReply;
use super::{DeviceConnector, DeviceSession, HttpClient};
use crate::domain::{RoutingEngine, Target};
use crate::error::DeviceError;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

/// RPC that returns model and version per routing engine
const SOFTWARE_INFORMATION_RPC: &str = "get-software-information";

/// Connector for the Junos REST API
pub struct JunosRestConnector {
    client: HttpClient,
}

impl JunosRestConnector {
    /// Create a new connector sharing one HTTP client across targets
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeviceConnector for JunosRestConnector {
    async fn open(&self, target: &Target) -> Result<Box<dyn DeviceSession>, DeviceError> {
        log::debug!("opening REST session to {}", target.base_url());
        let session = JunosRestSession::new(self.client.clone(), target.clone());
        session.probe().await?;
        Ok(Box::new(session))
    }
}

/// Session bound to one target
///
/// REST calls are stateless, so the first reply fetched while probing is kept
/// and handed out by the first `routing_engines` call.
pub struct JunosRestSession {
    client: HttpClient,
    target: Target,
    cached: Mutex<Option<Vec<RoutingEngine>>>,
}

impl JunosRestSession {
    /// Create a new session; no request is sent until `probe` or `routing_engines`
    pub fn new(client: HttpClient, target: Target) -> Self {
        Self {
            client,
            target,
            cached: Mutex::new(None),
        }
    }

    /// Build the RPC URL for this target
    fn rpc_url(&self, rpc: &str) -> String {
        format!("{}/rpc/{}", self.target.base_url(), rpc)
    }

    async fn fetch(&self) -> Result<Vec<RoutingEngine>, DeviceError> {
        let url = self.rpc_url(SOFTWARE_INFORMATION_RPC);
        let reply: SoftwareInformationReply = self
            .client
            .get_json(&url, &self.target.host, &self.target.user, &self.target.password)
            .await?;
        reply.into_engines(&self.target.host)
    }

    /// Verify reachability and credentials
    async fn probe(&self) -> Result<(), DeviceError> {
        let engines = self.fetch().await?;
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) = Some(engines);
        Ok(())
    }
}

#[async_trait]
impl DeviceSession for JunosRestSession {
    async fn routing_engines(&self) -> Result<Vec<RoutingEngine>, DeviceError> {
        let cached = self
            .cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match cached {
            Some(engines) => Ok(engines),
            None => self.fetch().await,
        }
    }
}

impl Drop for JunosRestSession {
    fn drop(&mut self) {
        log::debug!("closing session to {}", self.target.host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::test_support::{serve_once, SRX240_REPLY};
    use crate::domain::Scheme;
    use std::time::Duration;

    fn local_target(base_url: &str) -> Target {
        let port = base_url
            .rsplit(':')
            .next()
            .and_then(|p| p.parse().ok())
            .unwrap();
        Target::new("127.0.0.1", Scheme::Http)
            .with_port(port)
            .with_credentials("admin", "pw")
    }

    #[test]
    fn test_rpc_url() {
        let target = Target::new("srx240-1", Scheme::Https);
        let session = JunosRestSession::new(HttpClient::new().unwrap(), target);
        assert_eq!(
            session.rpc_url(SOFTWARE_INFORMATION_RPC),
            "https://srx240-1:3443/rpc/get-software-information"
        );
    }

    #[tokio::test]
    async fn test_open_unreachable_target_fails() {
        let client = HttpClient::with_config(Duration::from_secs(2), false).unwrap();
        let connector = JunosRestConnector::new(client);
        let target = Target::new("127.0.0.1", Scheme::Http).with_port(9);
        let result = connector.open(&target).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_open_then_fetch_reuses_first_reply() {
        // Only one request is answered, so routing_engines must reuse the reply fetched at open
        let target = local_target(&serve_once("200 OK", SRX240_REPLY));
        let client = HttpClient::with_config(Duration::from_secs(5), false).unwrap();
        let connector = JunosRestConnector::new(client);

        let session = connector.open(&target).await.unwrap();
        let engines = session.routing_engines().await.unwrap();

        assert_eq!(engines, vec![RoutingEngine::new("srx240h", "12.1X44-D10.4")]);
    }

    #[tokio::test]
    async fn test_open_with_bad_credentials_fails() {
        let target = local_target(&serve_once("401 Unauthorized", ""));
        let connector = JunosRestConnector::new(HttpClient::new().unwrap());
        let result = connector.open(&target).await;
        assert!(matches!(result, Err(DeviceError::Authentication { .. })));
    }

    #[tokio::test]
    async fn test_cached_reply_survives_poisoned_lock() {
        let target = Target::new("127.0.0.1", Scheme::Http).with_port(9);
        let session = JunosRestSession::new(HttpClient::new().unwrap(), target);
        *session.cached.lock().unwrap() = Some(vec![RoutingEngine::new("srx240h", "11.4R5")]);

        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = session.cached.lock().unwrap();
                panic!("poison the cache lock");
            })
            .join()
        });
        assert!(session.cached.is_poisoned());

        let engines = session.routing_engines().await.unwrap();
        assert_eq!(engines[0].version, "11.4R5");
    }
}
