//! # Path Finder
//!
//! Unweighted shortest path (BFS) and bounded-depth simple-path enumeration
//! (DFS) between two contacts, over the undirected adjacency of the graph.
//! A connection recorded only as A→B still lets a search walk B→A.
//!
//! A missing path is an ordinary outcome, never an error: unknown ids and
//! unreachable targets yield `None` / an empty vec. The only errors are the
//! malformed-input failures raised while building the graph.
//!
//! Identical endpoints yield a trivial zero-hop path, from both entry points.

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use tracing::{trace, warn};

use crate::config::{AnalyticsConfig, DEFAULT_MAX_DEPTH};
use crate::graph::{build_graph_with, NetworkGraph};
use crate::model::*;
use crate::Result;

// ============================================================================
// Scoring
// ============================================================================

/// Sum of edge weights (strong=3, medium=2, weak=1) between consecutive
/// contacts. Each hop is looked up as an unordered pair, so a relationship
/// recorded on both sides still counts once.
pub fn path_strength(graph: &NetworkGraph, ids: &[ContactId]) -> u32 {
    ids.windows(2)
        .filter_map(|pair| graph.edge_between(&pair[0], &pair[1]))
        .map(|edge| edge.strength.weight())
        .sum()
}

fn resolve(graph: &NetworkGraph, ids: &[ContactId]) -> Option<NetworkPath> {
    let contacts = ids
        .iter()
        .map(|id| graph.node(id).map(|n| n.contact.clone()))
        .collect::<Option<Vec<_>>>()?;
    Some(NetworkPath::new(contacts, path_strength(graph, ids)))
}

// ============================================================================
// Shortest path (BFS)
// ============================================================================

/// Minimum-hop path between two contacts, rebuilt from the snapshot.
pub fn shortest_path(
    contacts: &[Contact],
    source: &ContactId,
    target: &ContactId,
) -> Result<Option<NetworkPath>> {
    let graph = build_graph_with(contacts, &AnalyticsConfig::default())?;
    Ok(shortest_path_in(&graph, source, target))
}

/// BFS over an already-built graph. Ties between equal-length paths go to
/// whichever neighbor appears first in the adjacency lists.
pub fn shortest_path_in(
    graph: &NetworkGraph,
    source: &ContactId,
    target: &ContactId,
) -> Option<NetworkPath> {
    if !graph.contains(source) || !graph.contains(target) {
        return None;
    }
    if source == target {
        return graph.node(source).map(|n| NetworkPath::single(n.contact.clone()));
    }

    let mut parents: HashMap<&ContactId, &ContactId> = HashMap::new();
    let mut visited: HashSet<&ContactId> = HashSet::new();
    let mut queue: VecDeque<&ContactId> = VecDeque::new();
    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbors(current) {
            if !visited.insert(next) {
                continue;
            }
            parents.insert(next, current);
            if next == target {
                let mut ids = vec![next.clone()];
                let mut cursor = next;
                while let Some(&parent) = parents.get(cursor) {
                    ids.push(parent.clone());
                    cursor = parent;
                }
                ids.reverse();
                trace!(%source, %target, steps = ids.len() - 1, "shortest path found");
                return resolve(graph, &ids);
            }
            queue.push_back(next);
        }
    }

    trace!(%source, %target, visited = visited.len(), "target unreachable");
    None
}

// ============================================================================
// All simple paths (DFS)
// ============================================================================

/// Every simple path of at most `max_depth` hops, fewest hops first, then
/// strongest first.
pub fn all_paths(
    contacts: &[Contact],
    source: &ContactId,
    target: &ContactId,
    max_depth: usize,
) -> Result<Vec<NetworkPath>> {
    let config = AnalyticsConfig::default().with_max_path_depth(max_depth);
    all_paths_with(contacts, source, target, &config)
}

/// [`all_paths`] with the default depth of 3 hops.
pub fn all_paths_default(
    contacts: &[Contact],
    source: &ContactId,
    target: &ContactId,
) -> Result<Vec<NetworkPath>> {
    all_paths(contacts, source, target, DEFAULT_MAX_DEPTH)
}

/// [`all_paths`] driven by `config.max_path_depth` and `config.path_visit_budget`.
pub fn all_paths_with(
    contacts: &[Contact],
    source: &ContactId,
    target: &ContactId,
    config: &AnalyticsConfig,
) -> Result<Vec<NetworkPath>> {
    let graph = build_graph_with(contacts, config)?;
    Ok(all_paths_in(&graph, source, target, config.max_path_depth, config.path_visit_budget))
}

/// DFS over an already-built graph.
///
/// `visit_budget` caps the number of nodes expanded; once spent, the search
/// stops and the paths found so far are returned, still sorted.
pub fn all_paths_in(
    graph: &NetworkGraph,
    source: &ContactId,
    target: &ContactId,
    max_depth: usize,
    visit_budget: Option<usize>,
) -> Vec<NetworkPath> {
    if !graph.contains(source) || !graph.contains(target) {
        return Vec::new();
    }

    let mut search = PathSearch {
        graph,
        target,
        max_depth,
        visit_budget,
        expansions: 0,
        exhausted: false,
        stack: Vec::with_capacity(max_depth + 1),
        on_path: HashSet::new(),
        found: Vec::new(),
    };
    search.visit(source);

    if search.exhausted {
        warn!(
            %source,
            %target,
            budget = visit_budget.unwrap_or_default(),
            found = search.found.len(),
            "path visit budget exhausted, returning partial results"
        );
    }

    let mut paths: Vec<NetworkPath> = search
        .found
        .iter()
        .filter_map(|ids| resolve(graph, ids))
        .collect();
    paths.sort_by(|a, b| {
        a.steps
            .cmp(&b.steps)
            .then_with(|| b.total_strength.cmp(&a.total_strength))
    });
    paths
}

struct PathSearch<'g> {
    graph: &'g NetworkGraph,
    target: &'g ContactId,
    max_depth: usize,
    visit_budget: Option<usize>,
    expansions: usize,
    exhausted: bool,
    stack: Vec<&'g ContactId>,
    on_path: HashSet<&'g ContactId>,
    found: Vec<Vec<ContactId>>,
}

impl<'g> PathSearch<'g> {
    fn visit(&mut self, current: &'g ContactId) {
        if self.exhausted {
            return;
        }
        if self.visit_budget.is_some_and(|budget| self.expansions >= budget) {
            self.exhausted = true;
            return;
        }
        self.expansions += 1;

        self.stack.push(current);
        self.on_path.insert(current);

        if current == self.target {
            self.found.push(self.stack.iter().map(|&id| id.clone()).collect());
        } else if self.stack.len() - 1 < self.max_depth {
            let graph = self.graph;
            for next in graph.neighbors(current) {
                if !self.on_path.contains(next) {
                    self.visit(next);
                }
            }
        }

        self.on_path.remove(current);
        self.stack.pop();
    }
}

// ============================================================================
// Tests
// ============================================================================
