//! Junos version string parsing
//!
//! Handles version strings like:
//! - `10.4R3.4` (maintenance release with spin)
//! - `11.4R5` (no spin)
//! - `12.1X44-D10.4` (exception release; the `-D10.4` service suffix is ignored)

use super::ReleaseLetter;
use crate::error::VersionError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Regex for `<major>.<minor><letter><build>[.<spin>]`, searched anywhere in the string
static JUNOS_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)([RBISX])(\d+)(\.(\d+))?").unwrap());

/// Components of a Junos version string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedVersion {
    pub major: u32,
    pub minor: u32,
    pub release: ReleaseLetter,
    pub build: u32,
    pub spin: Option<u32>,
}

impl ParsedVersion {
    /// Parse a raw version string as reported by the device
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let caps = JUNOS_VERSION_RE
            .captures(raw)
            .ok_or_else(|| VersionError::unrecognized(raw))?;

        let number = |idx: usize, field: &'static str| -> Result<u32, VersionError> {
            let value = &caps[idx];
            value
                .parse::<u32>()
                .map_err(|_| VersionError::invalid_number(raw, field, value))
        };

        let letter = caps[3]
            .chars()
            .next()
            .ok_or_else(|| VersionError::unrecognized(raw))?;

        let spin = match caps.get(6) {
            Some(m) => Some(
                m.as_str()
                    .parse::<u32>()
                    .map_err(|_| VersionError::invalid_number(raw, "spin", m.as_str()))?,
            ),
            None => None,
        };

        Ok(Self {
            major: number(1, "major")?,
            minor: number(2, "minor")?,
            release: ReleaseLetter::try_from(letter)?,
            build: number(4, "build")?,
            spin,
        })
    }

    /// Returns `(major, minor)` for train comparisons
    pub fn train(&self) -> (u32, u32) {
        (self.major, self.minor)
    }
}

impl FromStr for ParsedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}{}{}",
            self.major, self.minor, self.release, self.build
        )?;
        if let Some(spin) = self.spin {
            write!(f, ".{}", spin)?;
        }
        Ok(())
    }
}
