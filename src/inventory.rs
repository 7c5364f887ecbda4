//! Target inventory: TOML file plus CLI flags
//!
//! Precedence, highest first: per-device inventory entry, CLI flag,
//! inventory top-level default, built-in default.

use crate::cli::CliArgs;
use crate::domain::{Scheme, Target};
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parsed inventory file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Inventory {
    pub user: Option<String>,
    pub password: Option<String>,
    pub port: Option<u16>,
    #[serde(default)]
    pub https: bool,
    #[serde(default, rename = "device")]
    pub devices: Vec<DeviceEntry>,
}

/// One `[[device]]` table
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceEntry {
    pub host: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub port: Option<u16>,
    pub https: Option<bool>,
}

impl Inventory {
    /// Load an inventory file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::InventoryRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parse inventory TOML; `path` is only used in error messages
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let inventory: Inventory = toml::from_str(content)
            .map_err(|e| ConfigError::inventory_parse(path, e.message()))?;

        if let Some(index) = inventory
            .devices
            .iter()
            .position(|d| d.host.trim().is_empty())
        {
            return Err(ConfigError::EmptyHost { index });
        }

        Ok(inventory)
    }
}

/// Build the ordered list of targets: inventory devices first, then `--srx` hosts
pub fn resolve_targets(
    args: &CliArgs,
    inventory: Option<&Inventory>,
) -> Result<Vec<Target>, ConfigError> {
    let empty = Inventory::default();
    let defaults = inventory.unwrap_or(&empty);

    let user = args
        .user
        .clone()
        .or_else(|| defaults.user.clone())
        .unwrap_or_default();
    let password = args
        .password
        .clone()
        .or_else(|| defaults.password.clone())
        .unwrap_or_default();
    let https = args.https_override().unwrap_or(defaults.https);
    let port = args.port.or(defaults.port);

    let build = |host: &str,
                 entry_https: Option<bool>,
                 entry_port: Option<u16>,
                 entry_user: Option<&String>,
                 entry_password: Option<&String>| {
        let scheme = if entry_https.unwrap_or(https) {
            Scheme::Https
        } else {
            Scheme::Http
        };
        let target = Target::new(host.trim(), scheme).with_credentials(
            entry_user.unwrap_or(&user).as_str(),
            entry_password.unwrap_or(&password).as_str(),
        );
        match entry_port.or(port) {
            Some(p) => target.with_port(p),
            None => target,
        }
    };

    let mut targets: Vec<Target> = defaults
        .devices
        .iter()
        .map(|d| {
            build(
                &d.host,
                d.https,
                d.port,
                d.user.as_ref(),
                d.password.as_ref(),
            )
        })
        .collect();

    for host in args.srx_hosts() {
        targets.push(build(&host, None, None, None, None));
    }

    if targets.is_empty() {
        return Err(ConfigError::NoTargets);
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn args(argv: &[&str]) -> CliArgs {
        let mut full = vec!["issucheck"];
        full.extend_from_slice(argv);
        CliArgs::try_parse_from(full).unwrap()
    }

    fn inventory(content: &str) -> Inventory {
        Inventory::parse(Path::new("inventory.toml"), content).unwrap()
    }

    #[test]
    fn test_targets_from_cli_only() {
        let targets = resolve_targets(
            &args(&["--srx", "srx240-1 srx1400-2", "--user", "admin", "--password", "pw"]),
            None,
        )
        .unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].host, "srx240-1");
        assert_eq!(targets[0].port, 3000);
        assert_eq!(targets[0].scheme, Scheme::Http);
        assert_eq!(targets[1].user, "admin");
        assert_eq!(targets[1].password, "pw");
    }

    #[test]
    fn test_https_default_port() {
        let targets = resolve_targets(&args(&["--srx", "srx", "--https"]), None).unwrap();
        assert_eq!(targets[0].port, 3443);
        assert_eq!(targets[0].base_url(), "https://srx:3443");
    }

    #[test]
    fn test_no_targets() {
        let err = resolve_targets(&args(&["--srx", ""]), None).unwrap_err();
        assert!(matches!(err, ConfigError::NoTargets));
    }

    #[test]
    fn test_inventory_precedence() {
        let inv = inventory(
            r#"
user = "inventory-user"
password = "inventory-pw"
https = true

[[device]]
host = "srx-a"

[[device]]
host = "srx-b"
port = 8443
user = "b-user"
https = false
"#,
        );
        let targets = resolve_targets(&args(&["--srx", "srx-c", "--user", "cli-user"]), Some(&inv))
            .unwrap();

        assert_eq!(targets.len(), 3);

        assert_eq!(targets[0].host, "srx-a");
        assert_eq!(targets[0].scheme, Scheme::Https);
        assert_eq!(targets[0].port, 3443);
        assert_eq!(targets[0].user, "cli-user");
        assert_eq!(targets[0].password, "inventory-pw");

        assert_eq!(targets[1].host, "srx-b");
        assert_eq!(targets[1].scheme, Scheme::Http);
        assert_eq!(targets[1].port, 8443);
        assert_eq!(targets[1].user, "b-user");

        assert_eq!(targets[2].host, "srx-c");
        assert_eq!(targets[2].scheme, Scheme::Https);
    }

    #[test]
    fn test_cli_no_https_overrides_inventory_default() {
        let inv = inventory(
            r#"
https = true

[[device]]
host = "srx-a"

[[device]]
host = "srx-b"
https = true
"#,
        );
        let targets =
            resolve_targets(&args(&["--srx", "srx-c", "--no-https"]), Some(&inv)).unwrap();

        assert_eq!(targets[0].scheme, Scheme::Http);
        assert_eq!(targets[0].port, 3000);
        assert_eq!(targets[1].scheme, Scheme::Https);
        assert_eq!(targets[2].scheme, Scheme::Http);
    }

    #[test]
    fn test_inventory_unknown_field() {
        let err = Inventory::parse(Path::new("bad.toml"), "hosts = []").unwrap_err();
        assert!(matches!(err, ConfigError::InventoryParse { .. }));
    }

    #[test]
    fn test_inventory_empty_host() {
        let err = Inventory::parse(
            Path::new("bad.toml"),
            "[[device]]\nhost = \"srx\"\n\n[[device]]\nhost = \" \"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyHost { index: 1 }));
    }

    #[test]
    fn test_inventory_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[device]]\nhost = \"srx650\"").unwrap();
        let inv = Inventory::load(file.path()).unwrap();
        assert_eq!(inv.devices.len(), 1);
        assert_eq!(inv.devices[0].host, "srx650");
    }

    #[test]
    fn test_inventory_load_missing_file() {
        let err = Inventory::load(Path::new("/nonexistent/issucheck.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::InventoryRead { .. }));
    }
}
