//! # Graph Builder
//!
//! Converts a flat contact snapshot into nodes and deduplicated edges.
//!
//! Two views of "connected" coexist here and are kept apart on purpose:
//!
//! | Metric | View |
//! |--------|------|
//! | `degree`, hubs, isolation | directed: raw outgoing records per contact |
//! | edges, adjacency, density | undirected: one edge per unordered pair |
//!
//! Every downstream component builds its own `NetworkGraph` per call; nothing
//! is cached between calls and the input slice is never mutated.

use hashbrown::{HashMap, HashSet};
use serde::Serialize;
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::model::*;
use crate::{Error, Result};

// ============================================================================
// NetworkGraph
// ============================================================================

/// Nodes and edges derived from one contact snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkGraph {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
    pub average_degree: f64,
    #[serde(skip)]
    node_index: HashMap<ContactId, usize>,
    #[serde(skip)]
    edge_index: HashMap<EdgeKey, usize>,
    /// contact id → neighbor ids, in edge-emission order
    #[serde(skip)]
    adjacency: HashMap<ContactId, Vec<ContactId>>,
}

impl NetworkGraph {
    pub fn node(&self, id: &ContactId) -> Option<&NetworkNode> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn edge_between(&self, a: &ContactId, b: &ContactId) -> Option<&NetworkEdge> {
        self.edge_index.get(&EdgeKey::new(a, b)).map(|&i| &self.edges[i])
    }

    pub fn has_edge(&self, a: &ContactId, b: &ContactId) -> bool {
        self.edge_index.contains_key(&EdgeKey::new(a, b))
    }

    /// Undirected neighbors of a contact. Empty for unknown ids.
    pub fn neighbors(&self, id: &ContactId) -> &[ContactId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn hubs(&self) -> impl Iterator<Item = &NetworkNode> {
        self.nodes.iter().filter(|n| n.is_hub)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Build the graph with the default hub multiplier (1.5).
pub fn build_graph(contacts: &[Contact]) -> Result<NetworkGraph> {
    build_graph_with(contacts, &AnalyticsConfig::default())
}

/// Build the graph using `config.hub_multiplier` for hub classification.
///
/// Fails only on malformed input: a contact without an id, or two contacts
/// sharing one. Dangling connection targets are dropped from the edge set
/// but still count toward the owner's degree. Self-connections never
/// become edges.
pub fn build_graph_with(contacts: &[Contact], config: &AnalyticsConfig) -> Result<NetworkGraph> {
    config.validate()?;

    // Phase 1: nodes
    let mut node_index: HashMap<ContactId, usize> = HashMap::with_capacity(contacts.len());
    let mut nodes = Vec::with_capacity(contacts.len());
    for (index, contact) in contacts.iter().enumerate() {
        if contact.id.is_blank() {
            return Err(Error::MissingContactId { index });
        }
        if node_index.insert(contact.id.clone(), index).is_some() {
            return Err(Error::DuplicateContactId(contact.id.clone()));
        }
        nodes.push(NetworkNode::new(contact.clone()));
    }

    // Phase 2: edges, first-seen direction wins
    let mut edges: Vec<NetworkEdge> = Vec::new();
    let mut edge_index: HashMap<EdgeKey, usize> = HashMap::new();
    let mut recorded: HashSet<(&ContactId, &ContactId)> = HashSet::new();
    let mut dangling = 0usize;

    for contact in contacts {
        for conn in &contact.connections {
            let target = &conn.contact_id;
            if !node_index.contains_key(target) {
                dangling += 1;
                debug!(source = %contact.id, target = %target, "dropping connection to unknown contact");
                continue;
            }
            if *target == contact.id {
                continue;
            }
            recorded.insert((&contact.id, target));

            let key = EdgeKey::new(&contact.id, target);
            if !edge_index.contains_key(&key) {
                edge_index.insert(key, edges.len());
                edges.push(NetworkEdge::new(
                    contact.id.clone(),
                    target.clone(),
                    conn.strength,
                    conn.connection_type,
                ));
            }
        }
    }

    // Phase 3: bidirectional flag on the already-emitted edge
    for edge in &mut edges {
        if recorded.contains(&(&edge.target, &edge.source)) {
            edge.bidirectional = true;
        }
    }

    // Phase 4: hubs, relative to this snapshot
    let average_degree = if nodes.is_empty() {
        0.0
    } else {
        nodes.iter().map(|n| n.degree).sum::<usize>() as f64 / nodes.len() as f64
    };
    if average_degree > 0.0 {
        let threshold = average_degree * config.hub_multiplier;
        for node in &mut nodes {
            node.is_hub = node.degree as f64 > threshold;
        }
    }

    // Phase 5: undirected adjacency
    let mut adjacency: HashMap<ContactId, Vec<ContactId>> = nodes
        .iter()
        .map(|n| (n.id.clone(), Vec::new()))
        .collect();
    for edge in &edges {
        if let Some(list) = adjacency.get_mut(&edge.source) {
            list.push(edge.target.clone());
        }
        if let Some(list) = adjacency.get_mut(&edge.target) {
            list.push(edge.source.clone());
        }
    }

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        dangling,
        average_degree,
        "built contact graph"
    );

    Ok(NetworkGraph { nodes, edges, average_degree, node_index, edge_index, adjacency })
}

// ============================================================================
// Tests
// ============================================================================
