//! ISSU compatibility classification
//!
//! This module provides:
//! - The ordered rule table mapping Junos release ranges to limitation sets
//! - First-match-wins classification of a parsed version

use crate::domain::{LimitationSet, ParsedVersion, ReleaseLetter};
use serde::Serialize;

/// Outcome of classifying a version against the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "set", rename_all = "snake_case")]
pub enum Classification {
    /// The version falls in a documented release range
    Limited(LimitationSet),
    /// No rule covers the version
    NotCovered,
}

impl Classification {
    /// Returns the matched limitation set, if any
    pub fn limitation_set(&self) -> Option<LimitationSet> {
        match self {
            Classification::Limited(set) => Some(*set),
            Classification::NotCovered => None,
        }
    }
}

/// A single row of the compatibility table
struct Rule {
    applies: fn(&ParsedVersion) -> bool,
    set: LimitationSet,
}

/// Rules in priority order
static RULES: [Rule; 10] = [
    Rule {
        applies: |v| v.major <= 10 && v.minor <= 4 && v.build <= 3,
        set: LimitationSet::V10_4R3,
    },
    Rule {
        applies: |v| v.train() == (10, 4) && v.build >= 4,
        set: LimitationSet::V10_4R4Plus,
    },
    Rule {
        applies: |v| v.train() == (11, 1),
        set: LimitationSet::V11_1,
    },
    Rule {
        applies: |v| v.train() == (11, 2),
        set: LimitationSet::V11_2,
    },
    Rule {
        applies: |v| v.train() == (11, 4) && v.build <= 4,
        set: LimitationSet::V11_4R1To4,
    },
    Rule {
        applies: |v| v.train() == (11, 4) && v.build >= 5,
        set: LimitationSet::V11_4R5Plus,
    },
    Rule {
        applies: |v| v.major == 12 && v.minor >= 1 && v.release != ReleaseLetter::X,
        set: LimitationSet::V12_1Plus,
    },
    Rule {
        applies: |v| is_12_1x(v) && v.build == 44,
        set: LimitationSet::V12_1X44,
    },
    Rule {
        applies: |v| is_12_1x(v) && v.build == 45,
        set: LimitationSet::V12_1X45,
    },
    Rule {
        applies: |v| is_12_1x(v) && v.build >= 46,
        set: LimitationSet::V12_1X46Plus,
    },
];

fn is_12_1x(v: &ParsedVersion) -> bool {
    v.train() == (12, 1) && v.release == ReleaseLetter::X
}

/// Classify a version; the first matching rule wins
pub fn classify(version: &ParsedVersion) -> Classification {
    RULES
        .iter()
        .find(|rule| (rule.applies)(version))
        .map(|rule| Classification::Limited(rule.set))
        .unwrap_or(Classification::NotCovered)
}

/// All limitation sets a version matches, in table order
///
/// Used to check that the table stays free of overlapping rows.
pub fn matching_sets(version: &ParsedVersion) -> Vec<LimitationSet> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(version))
        .map(|rule| rule.set)
        .collect()
}
