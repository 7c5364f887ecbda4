//! Junos release track letters

use crate::error::VersionError;
use serde::Serialize;
use std::fmt;

/// Release track code found between the minor version and the build number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReleaseLetter {
    /// FRS or maintenance release
    R,
    /// Beta release
    B,
    /// Internal release
    I,
    /// Service release
    S,
    /// Special (exception) release
    X,
}

impl ReleaseLetter {
    /// All known release letters
    pub const ALL: [ReleaseLetter; 5] = [
        ReleaseLetter::R,
        ReleaseLetter::B,
        ReleaseLetter::I,
        ReleaseLetter::S,
        ReleaseLetter::X,
    ];

    /// Returns the single character code
    pub fn as_char(&self) -> char {
        match self {
            ReleaseLetter::R => 'R',
            ReleaseLetter::B => 'B',
            ReleaseLetter::I => 'I',
            ReleaseLetter::S => 'S',
            ReleaseLetter::X => 'X',
        }
    }

    /// Returns the human-readable description of the release track
    pub fn label(&self) -> &'static str {
        match self {
            ReleaseLetter::R => "FRS/Maintenance release software",
            ReleaseLetter::B => "Beta release software",
            ReleaseLetter::I => {
                "Internal release software: Private software release for verifying fixes"
            }
            ReleaseLetter::S => {
                "Service release software: Released to customers to solve a specific problem"
            }
            ReleaseLetter::X => {
                "Special (eXception) release software: Released to customers to solve an immediate problem"
            }
        }
    }
}

impl TryFrom<char> for ReleaseLetter {
    type Error = VersionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'R' => Ok(ReleaseLetter::R),
            'B' => Ok(ReleaseLetter::B),
            'I' => Ok(ReleaseLetter::I),
            'S' => Ok(ReleaseLetter::S),
            'X' => Ok(ReleaseLetter::X),
            other => Err(VersionError::UnknownReleaseLetter { letter: other }),
        }
    }
}

impl fmt::Display for ReleaseLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
