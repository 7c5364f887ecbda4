//! Services that are not supported during ISSU/ICU, per release train (KB17946)

use serde::Serialize;
use std::fmt;

const V10_4R4_PLUS: &[&str] = &[
    "NAT",
    "SIP",
    "SUNRPC",
    "SQL",
    "FTP",
    "DNS",
    "MSRPC",
    "RSH",
    "TALK",
    "PPTP",
    "RTSP",
    "TFTP",
    "H.323",
    "Low Latency Firewall",
    "MGCP",
    "SCCP",
    "VPN",
    "Logging",
    "IDP",
    "AppSecure",
    "NTP",
    "PCAP",
    "Port Mirroring",
    "GRE/IPIP",
    "Multicast",
    "SNMP",
    "Interface Monitoring",
    "LACP",
    "LAG",
    "JFLOW",
    "GPRS/GTP/SCTP",
];

const V11_1: &[&str] = &[
    "SIP",
    "SUNRPC",
    "SQL",
    "FTP",
    "DNS",
    "MSRPC",
    "RSH",
    "TALK",
    "PPTP",
    "RTSP",
    "TFTP",
    "H.323",
    "Low Latency Firewall",
    "MGCP",
    "SCCP",
    "VPN",
    "Logging",
    "IDP",
    "AppSecure",
    "NTP",
    "PCAP",
    "Port Mirroring",
    "GRE/IPIP",
    "Multicast",
    "SNMP",
    "Interface Monitoring",
    "LACP",
    "LAG",
    "JFLOW",
    "GPRS/GTP/SCTP",
];

const V11_2: &[&str] = &[
    "SUNRPC",
    "SQL",
    "FTP",
    "DNS",
    "MSRPC",
    "RSH",
    "TALK",
    "PPTP",
    "RTSP",
    "TFTP",
    "H.323",
    "Low Latency Firewall",
    "MGCP",
    "SCCP",
    "VPN",
    "Logging",
    "IDP",
    "AppSecure",
    "NTP",
    "PCAP",
    "Port Mirroring",
    "GRE/IPIP",
    "Multicast",
    "SNMP",
    "Interface Monitoring",
    "LACP",
    "LAG",
    "JFLOW",
    "GPRS/GTP/SCTP",
];

const V11_4R1_TO_4: &[&str] = &[
    "MGCP",
    "SCCP",
    "VPN",
    "Logging",
    "IDP",
    "AppSecure",
    "NTP",
    "PCAP",
    "Port Mirroring",
    "GRE/IPIP",
    "Multicast",
    "SNMP",
    "Interface Monitoring",
    "LACP",
    "LAG",
    "JFLOW",
    "GPRS/GTP/SCTP",
];

const V11_4R5_PLUS: &[&str] = &["VPN", "GRE/IPIP", "Multicast", "JFLOW", "GPRS/GTP/SCTP"];
const V12_1_PLUS: &[&str] = &["VPN", "GRE/IPIP", "Multicast", "JFLOW", "GPRS/GTP/SCTP"];
const V12_1X44: &[&str] = &["JFLOW", "GPRS/GTP"];
const V12_1X45: &[&str] = &["GPRS/GTP"];

/// A named set of ISSU/ICU limitations for one release range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitationSet {
    /// 10.4R3 and older: ISSU must not be used at all
    V10_4R3,
    /// 10.4R4 and later 10.4 builds
    V10_4R4Plus,
    /// 11.1
    V11_1,
    /// 11.2
    V11_2,
    /// 11.4R1 through 11.4R4
    V11_4R1To4,
    /// 11.4R5 and later
    V11_4R5Plus,
    /// 12.1 and later, non-X releases
    V12_1Plus,
    /// 12.1X44
    V12_1X44,
    /// 12.1X45
    V12_1X45,
    /// 12.1X46 and later
    V12_1X46Plus,
}

impl LimitationSet {
    /// All limitation sets in table order
    pub const ALL: [LimitationSet; 10] = [
        LimitationSet::V10_4R3,
        LimitationSet::V10_4R4Plus,
        LimitationSet::V11_1,
        LimitationSet::V11_2,
        LimitationSet::V11_4R1To4,
        LimitationSet::V11_4R5Plus,
        LimitationSet::V12_1Plus,
        LimitationSet::V12_1X44,
        LimitationSet::V12_1X45,
        LimitationSet::V12_1X46Plus,
    ];

    /// Returns the display name of the release range
    pub fn name(&self) -> &'static str {
        match self {
            LimitationSet::V10_4R3 => "10.4R3",
            LimitationSet::V10_4R4Plus => "10.4R4+",
            LimitationSet::V11_1 => "11.1",
            LimitationSet::V11_2 => "11.2",
            LimitationSet::V11_4R1To4 => "11.4 R1-4",
            LimitationSet::V11_4R5Plus => "11.4 R5+",
            LimitationSet::V12_1Plus => "12.1+",
            LimitationSet::V12_1X44 => "12.1X44",
            LimitationSet::V12_1X45 => "12.1X45",
            LimitationSet::V12_1X46Plus => "12.1X46+",
        }
    }

    /// Services that will be disrupted during the upgrade
    ///
    /// Empty for the two sets that carry a [`notice`](Self::notice) instead.
    pub fn services(&self) -> &'static [&'static str] {
        match self {
            LimitationSet::V10_4R3 | LimitationSet::V12_1X46Plus => &[],
            LimitationSet::V10_4R4Plus => V10_4R4_PLUS,
            LimitationSet::V11_1 => V11_1,
            LimitationSet::V11_2 => V11_2,
            LimitationSet::V11_4R1To4 => V11_4R1_TO_4,
            LimitationSet::V11_4R5Plus => V11_4R5_PLUS,
            LimitationSet::V12_1Plus => V12_1_PLUS,
            LimitationSet::V12_1X44 => V12_1X44,
            LimitationSet::V12_1X45 => V12_1X45,
        }
    }

    /// A single advisory line used instead of a service list
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            LimitationSet::V10_4R3 => Some("Do not use ISSU"),
            LimitationSet::V12_1X46Plus => Some("No limitations"),
            _ => None,
        }
    }

    /// True when ISSU must not be attempted on this release
    pub fn forbids_issu(&self) -> bool {
        matches!(self, LimitationSet::V10_4R3)
    }
}

impl fmt::Display for LimitationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
