//! JSON export: hand the presentation layer one composed document.
//!
//! ```text
//! &[Contact] → NetworkReport::build() → { graph, insights }
//!   → to_json_string() / write_json() → UI, report renderer, file
//! ```
//!
//! The engine persists nothing itself; where the JSON goes is up to the caller.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::AnalyticsConfig;
use crate::graph::{build_graph_with, NetworkGraph};
use crate::insights::insights_in;
use crate::model::*;
use crate::Result;

/// Graph structure plus the insight report for one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkReport {
    pub generated_at: DateTime<Utc>,
    pub graph: NetworkGraph,
    pub insights: NetworkInsights,
}

impl NetworkReport {
    /// Build the graph once and derive every report from it.
    pub fn build(contacts: &[Contact], config: &AnalyticsConfig) -> Result<Self> {
        let graph = build_graph_with(contacts, config)?;
        let insights = insights_in(&graph, config);
        Ok(Self { generated_at: Utc::now(), graph, insights })
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}
