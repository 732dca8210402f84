//! Read-only reports handed to the presentation layer.
//!
//! Nothing here has a lifecycle of its own: every report is recomputed from
//! the contact snapshot on each call. Numeric fields are raw `f64`; rounding
//! and percentage formatting are presentation concerns.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Contact, ContactId, NetworkEdge, NetworkNode, Strength, Tier};

/// Histogram of recorded connection strengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthDistribution {
    pub strong: usize,
    pub medium: usize,
    pub weak: usize,
}

impl StrengthDistribution {
    pub fn record(&mut self, strength: Strength) {
        match strength {
            Strength::Strong => self.strong += 1,
            Strength::Medium => self.medium += 1,
            Strength::Weak => self.weak += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.strong + self.medium + self.weak
    }
}

/// Network-wide scalar metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStatistics {
    pub total_contacts: usize,
    /// One-sided connection records, dangling ones included.
    pub total_connections: usize,
    pub average_connections: f64,
    /// First contact (input order) with the highest raw connection count.
    pub most_connected: Option<Contact>,
    /// Tallied over raw records, so a relationship recorded on both sides
    /// counts twice.
    pub strength_distribution: StrengthDistribution,
    /// Deduplicated edges.
    pub unique_edges: usize,
    pub bidirectional_edges: usize,
    pub density: f64,
}

/// Why two unconnected contacts might want to meet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SuggestionReason {
    CommonInterests(Vec<String>),
    SameLocation(String),
    SameTier(Tier),
}

impl fmt::Display for SuggestionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionReason::CommonInterests(interests) => {
                write!(f, "Common interests: {}", interests.join(", "))
            }
            SuggestionReason::SameLocation(location) => write!(f, "Same location: {location}"),
            SuggestionReason::SameTier(tier) => write!(f, "Same tier: {tier}"),
        }
    }
}

/// A pair of contacts with no direct edge but at least one shared attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedConnection {
    pub contact1: Contact,
    pub contact2: Contact,
    /// Matching clauses joined with `"; "`.
    pub reason: String,
    pub reasons: SmallVec<[SuggestionReason; 3]>,
}

/// Composed insight report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInsights {
    pub hubs: Vec<NetworkNode>,
    pub isolated_contacts: Vec<Contact>,
    pub strongest_connections: Vec<NetworkEdge>,
    pub suggested_connections: Vec<SuggestedConnection>,
    pub statistics: NetworkStatistics,
}

/// A chain of intermediaries who could introduce `source` to `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntroductionPath {
    pub source: ContactId,
    pub target: ContactId,
    /// Path contacts with both endpoints removed.
    pub introducers: Vec<Contact>,
    /// One `"Step N: ..."` note per introducer.
    pub notes: Vec<String>,
    pub steps: usize,
    pub total_strength: u32,
}
