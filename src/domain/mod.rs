//! Core domain models for issucheck
//!
//! This module contains the fundamental types used throughout the application:
//! - Release track letters and their descriptions
//! - Parsed Junos versions
//! - ISSU limitation sets per release range
//! - Connection targets
//! - Per-device report structures

mod limitation;
mod release;
mod report;
mod target;
mod version;

pub use limitation::LimitationSet;
pub use release::ReleaseLetter;
pub use report::{Assessment, EngineReport, RoutingEngine, TargetReport};
pub use target::{Scheme, Target};
pub use version::ParsedVersion;
