//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: Issues parsing a Junos version string
//! - DeviceError: Issues talking to a device or decoding its reply
//! - ConfigError: Issues with CLI flags or the inventory file

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing a version string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The string does not contain a `<major>.<minor><letter><build>` version
    #[error("unrecognized version string '{version}'")]
    Unrecognized { version: String },

    /// A numeric component could not be represented
    #[error("invalid {field} '{value}' in version '{version}'")]
    InvalidNumber {
        version: String,
        field: &'static str,
        value: String,
    },

    /// The release letter is not one of R, B, I, S or X
    #[error("unknown release letter '{letter}'")]
    UnknownReleaseLetter { letter: char },
}

/// Errors related to device sessions
#[derive(Error, Debug)]
pub enum DeviceError {
    /// Could not reach the device
    #[error("failed to connect to {host}: {message}")]
    Connection { host: String, message: String },

    /// Device rejected the credentials
    #[error("authentication failed for {user}@{host}")]
    Authentication { host: String, user: String },

    /// Request timed out
    #[error("timeout while talking to {host}")]
    Timeout { host: String },

    /// Device answered with a non-success status
    #[error("{host} answered HTTP {status}")]
    Http { host: String, status: u16 },

    /// Reply body could not be decoded
    #[error("invalid reply from {host}: {message}")]
    InvalidReply { host: String, message: String },

    /// Reply contained no routing engine information
    #[error("{host} reported no routing engines")]
    NoRoutingEngines { host: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the inventory file
    #[error("failed to read inventory file {path}: {source}")]
    InventoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Inventory file is not valid TOML or has the wrong shape
    #[error("failed to parse inventory file {path}: {message}")]
    InventoryParse { path: PathBuf, message: String },

    /// Nothing to check
    #[error("no target devices given: use --srx or --inventory")]
    NoTargets,

    /// Inventory entry without a host
    #[error("inventory entry #{index} has an empty host")]
    EmptyHost { index: usize },
}

impl VersionError {
    /// Creates a new Unrecognized error
    pub fn unrecognized(version: impl Into<String>) -> Self {
        VersionError::Unrecognized {
            version: version.into(),
        }
    }

    /// Creates a new InvalidNumber error
    pub fn invalid_number(
        version: impl Into<String>,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        VersionError::InvalidNumber {
            version: version.into(),
            field,
            value: value.into(),
        }
    }
}

impl DeviceError {
    /// Creates a new Connection error
    pub fn connection(host: impl Into<String>, message: impl Into<String>) -> Self {
        DeviceError::Connection {
            host: host.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidReply error
    pub fn invalid_reply(host: impl Into<String>, message: impl Into<String>) -> Self {
        DeviceError::InvalidReply {
            host: host.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(host: impl Into<String>) -> Self {
        DeviceError::Timeout { host: host.into() }
    }
}

impl ConfigError {
    /// Creates a new InventoryParse error
    pub fn inventory_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::InventoryParse {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_error_unrecognized() {
        let err = VersionError::unrecognized("junk");
        let msg = format!("{}", err);
        assert!(msg.contains("unrecognized version string"));
        assert!(msg.contains("junk"));
    }

    #[test]
    fn test_version_error_invalid_number() {
        let err = VersionError::invalid_number("99999999999.1R1", "major", "99999999999");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid major"));
        assert!(msg.contains("99999999999.1R1"));
    }

    #[test]
    fn test_version_error_unknown_letter() {
        let err = VersionError::UnknownReleaseLetter { letter: 'Q' };
        assert_eq!(format!("{}", err), "unknown release letter 'Q'");
    }

    #[test]
    fn test_device_error_connection() {
        let err = DeviceError::connection("srx240-1", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to connect to srx240-1"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_device_error_authentication() {
        let err = DeviceError::Authentication {
            host: "srx240-1".to_string(),
            user: "admin".to_string(),
        };
        assert_eq!(format!("{}", err), "authentication failed for admin@srx240-1");
    }

    #[test]
    fn test_device_error_http() {
        let err = DeviceError::Http {
            host: "srx".to_string(),
            status: 500,
        };
        assert!(format!("{}", err).contains("HTTP 500"));
    }

    #[test]
    fn test_device_error_timeout() {
        let err = DeviceError::timeout("srx1400-2");
        assert!(format!("{}", err).contains("timeout"));
    }

    #[test]
    fn test_config_error_no_targets() {
        let msg = format!("{}", ConfigError::NoTargets);
        assert!(msg.contains("--srx"));
    }

    #[test]
    fn test_config_error_inventory_parse() {
        let err = ConfigError::inventory_parse("/etc/srx.toml", "expected `=`");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse inventory file"));
        assert!(msg.contains("expected `=`"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = VersionError::unrecognized("x");
        let debug = format!("{:?}", err);
        assert!(debug.contains("Unrecognized"));
    }
}
