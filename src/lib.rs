//! issucheck - SRX ISSU readiness checker library
//!
//! This library provides the core functionality for checking whether the
//! Junos release installed on an SRX (cluster) supports In-Service Software
//! Upgrade, and which services an upgrade would disrupt (KB17946):
//! - Junos version parsing
//! - Release-range classification against the ISSU limitation table
//! - Device access over the Junos REST API
//! - Text and JSON reporting

pub mod cli;
pub mod compat;
pub mod device;
pub mod domain;
pub mod error;
pub mod inventory;
pub mod orchestrator;
pub mod output;
pub mod progress;
