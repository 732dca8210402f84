//! Analytics configuration.
//!
//! Every field has a default matching the engine's baseline behavior, so an
//! empty JSON object (`{}`) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Hop limit used by `all_paths` and introduction chains when none is given.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Tunables for hub detection, search depth, and report sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// A node is a hub iff `degree > average_degree * hub_multiplier`.
    pub hub_multiplier: f64,
    /// Maximum hop count for path enumeration.
    pub max_path_depth: usize,
    pub max_hubs: usize,
    pub max_strongest: usize,
    pub max_suggestions: usize,
    /// Cap on DFS node expansions per `all_paths` call. `None` = unlimited.
    pub path_visit_budget: Option<usize>,
    /// Cap on contact pairs examined by the suggestion scan. `None` = unlimited.
    pub suggestion_pair_budget: Option<usize>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            hub_multiplier: 1.5,
            max_path_depth: DEFAULT_MAX_DEPTH,
            max_hubs: 5,
            max_strongest: 10,
            max_suggestions: 10,
            path_visit_budget: None,
            suggestion_pair_budget: None,
        }
    }
}

impl AnalyticsConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.hub_multiplier.is_finite() || self.hub_multiplier <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "hub_multiplier must be a positive finite number, got {}",
                self.hub_multiplier,
            )));
        }
        Ok(())
    }

    pub fn with_max_path_depth(mut self, depth: usize) -> Self {
        self.max_path_depth = depth;
        self
    }

    pub fn with_path_visit_budget(mut self, budget: usize) -> Self {
        self.path_visit_budget = Some(budget);
        self
    }

    pub fn with_suggestion_pair_budget(mut self, budget: usize) -> Self {
        self.suggestion_pair_budget = Some(budget);
        self
    }
}
