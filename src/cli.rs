//! CLI argument parsing module for issucheck

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parse a timeout given in whole seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

/// Check if an SRX cluster is ready for ISSU (KB17946)
#[derive(Parser, Debug, Clone)]
#[command(
    name = "issucheck",
    version,
    about = "Check if an SRX cluster is ready for ISSU (KB17946)"
)]
pub struct CliArgs {
    /// SRX to run the check against. If specifying multiple, enclose in quotes, i.e. "srx240-1 srx1400-2"
    #[arg(long, env = "SRX_TARGETS", default_value = "")]
    pub srx: String,

    /// Username to connect as
    #[arg(long, env = "ISSUCHECK_USER")]
    pub user: Option<String>,

    /// Password for authentication
    #[arg(long, env = "ISSUCHECK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// TOML inventory file listing devices and connection defaults
    #[arg(long, short = 'i')]
    pub inventory: Option<PathBuf>,

    // Connection options
    /// REST API port (default: 3000, or 3443 with --https)
    #[arg(long)]
    pub port: Option<u16>,

    /// Talk to the REST API over HTTPS
    #[arg(long, overrides_with = "no_https")]
    pub https: bool,

    /// Talk to the REST API over plain HTTP, even if the inventory sets `https = true`
    #[arg(long, overrides_with = "https")]
    pub no_https: bool,

    /// Accept self-signed device certificates
    #[arg(long)]
    pub insecure: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_parser = parse_timeout, default_value = "30")]
    pub timeout: Duration,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Hosts given with --srx, split on whitespace
    pub fn srx_hosts(&self) -> Vec<String> {
        self.srx.split_whitespace().map(str::to_string).collect()
    }

    /// Scheme forced on the command line; the last of --https / --no-https wins
    pub fn https_override(&self) -> Option<bool> {
        if self.https {
            Some(true)
        } else if self.no_https {
            Some(false)
        } else {
            None
        }
    }

    /// Whether to show the connection spinner
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> CliArgs {
        let mut argv = vec!["issucheck"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_args() {
        let args = parse(&[]);
        assert!(args.inventory.is_none());
        assert!(args.port.is_none());
        assert!(!args.https);
        assert!(!args.insecure);
        assert_eq!(args.timeout, Duration::from_secs(30));
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.no_color);
    }

    #[test]
    fn test_srx_hosts_split() {
        let args = parse(&["--srx", "srx240-1  srx1400-2", "--user", "admin"]);
        assert_eq!(args.srx_hosts(), vec!["srx240-1", "srx1400-2"]);
        assert_eq!(args.user.as_deref(), Some("admin"));
    }

    #[test]
    fn test_srx_hosts_empty() {
        let args = parse(&["--srx", "   "]);
        assert!(args.srx_hosts().is_empty());
    }

    #[test]
    fn test_password_flag() {
        let args = parse(&["--password", "secret"]);
        assert_eq!(args.password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_connection_flags() {
        let args = parse(&["--https", "--insecure", "--port", "8443", "--timeout", "5"]);
        assert!(args.https);
        assert!(args.insecure);
        assert_eq!(args.port, Some(8443));
        assert_eq!(args.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_https_override() {
        assert_eq!(parse(&[]).https_override(), None);
        assert_eq!(parse(&["--https"]).https_override(), Some(true));
        assert_eq!(parse(&["--no-https"]).https_override(), Some(false));
        assert_eq!(parse(&["--https", "--no-https"]).https_override(), Some(false));
        assert_eq!(parse(&["--no-https", "--https"]).https_override(), Some(true));
    }

    #[test]
    fn test_inventory_short_flag() {
        let args = parse(&["-i", "devices.toml"]);
        assert_eq!(args.inventory, Some(PathBuf::from("devices.toml")));
    }

    #[test]
    fn test_quiet_flags() {
        assert!(parse(&["-q"]).quiet);
        assert!(parse(&["--quiet"]).quiet);
    }

    #[test]
    fn test_show_progress() {
        assert!(parse(&[]).show_progress());
        assert!(!parse(&["--json"]).show_progress());
        assert!(!parse(&["-q"]).show_progress());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("10").unwrap(), Duration::from_secs(10));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("abc").is_err());
        assert!(parse_timeout("").is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(CliArgs::try_parse_from(["issucheck", "--port", "70000"]).is_err());
    }
}
