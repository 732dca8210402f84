//! # Statistics Aggregator
//!
//! Network-wide scalar metrics. Totals, averages, the most-connected
//! contact and the strength histogram read the raw one-sided records;
//! edge counts and density read the deduplicated graph.

use crate::config::AnalyticsConfig;
use crate::graph::{build_graph_with, NetworkGraph};
use crate::model::*;
use crate::Result;

/// Ratio of actual edges to all possible unordered pairs. 0 for fewer than
/// two nodes.
pub fn network_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    let possible = node_count as f64 * (node_count as f64 - 1.0) / 2.0;
    edge_count as f64 / possible
}

/// Compute statistics for a contact snapshot.
pub fn statistics(contacts: &[Contact]) -> Result<NetworkStatistics> {
    let graph = build_graph_with(contacts, &AnalyticsConfig::default())?;
    Ok(statistics_in(&graph))
}

/// Compute statistics over an already-built graph.
pub fn statistics_in(graph: &NetworkGraph) -> NetworkStatistics {
    let total_contacts = graph.node_count();
    let mut total_connections = 0usize;
    let mut strength_distribution = StrengthDistribution::default();
    let mut most_connected: Option<&NetworkNode> = None;

    for node in &graph.nodes {
        total_connections += node.degree;
        for conn in &node.contact.connections {
            strength_distribution.record(conn.strength);
        }
        // strict `>` keeps the first contact on ties
        if most_connected.is_none_or(|best| node.degree > best.degree) {
            most_connected = Some(node);
        }
    }

    let average_connections = if total_contacts == 0 {
        0.0
    } else {
        total_connections as f64 / total_contacts as f64
    };

    NetworkStatistics {
        total_contacts,
        total_connections,
        average_connections,
        most_connected: most_connected.map(|n| n.contact.clone()),
        strength_distribution,
        unique_edges: graph.edge_count(),
        bidirectional_edges: graph.edges.iter().filter(|e| e.bidirectional).count(),
        density: network_density(total_contacts, graph.edge_count()),
    }
}
