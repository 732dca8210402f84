//! # Introduction-Path Composer
//!
//! Turns enumerated paths into introduction chains: the intermediaries
//! between two contacts, each with a step note such as
//! `"Step 1: Bob (Tier 2) - strong professional connection"`.
//!
//! The label describes the edge leading *into* the introducer from the
//! previous contact on the path.

use crate::config::AnalyticsConfig;
use crate::graph::{build_graph_with, NetworkGraph};
use crate::model::*;
use crate::paths::all_paths_in;
use crate::Result;

/// Introduction chains from `source` to `target`, up to 3 hops, in
/// `all_paths` order. Callers usually present only the first few.
pub fn introduction_paths(
    contacts: &[Contact],
    source: &ContactId,
    target: &ContactId,
) -> Result<Vec<IntroductionPath>> {
    introduction_paths_with(contacts, source, target, &AnalyticsConfig::default())
}

/// Same as [`introduction_paths`], with depth and visit budget from `config`.
pub fn introduction_paths_with(
    contacts: &[Contact],
    source: &ContactId,
    target: &ContactId,
    config: &AnalyticsConfig,
) -> Result<Vec<IntroductionPath>> {
    let graph = build_graph_with(contacts, config)?;
    Ok(introduction_paths_in(&graph, source, target, config))
}

pub fn introduction_paths_in(
    graph: &NetworkGraph,
    source: &ContactId,
    target: &ContactId,
    config: &AnalyticsConfig,
) -> Vec<IntroductionPath> {
    all_paths_in(graph, source, target, config.max_path_depth, config.path_visit_budget)
        .into_iter()
        .map(|path| compose(graph, source, target, path))
        .collect()
}

fn compose(
    graph: &NetworkGraph,
    source: &ContactId,
    target: &ContactId,
    path: NetworkPath,
) -> IntroductionPath {
    let introducers = path.intermediaries().to_vec();
    let notes = introducers
        .iter()
        .enumerate()
        .map(|(i, introducer)| {
            // contact_ids[i] precedes introducers[i] on the path
            let label = graph
                .edge_between(&path.contact_ids[i], &introducer.id)
                .map(NetworkEdge::label)
                .unwrap_or_else(|| "connection".to_string());
            format!("Step {}: {} ({}) - {}", i + 1, introducer.name, introducer.tier, label)
        })
        .collect();

    IntroductionPath {
        source: source.clone(),
        target: target.clone(),
        introducers,
        notes,
        steps: path.steps,
        total_strength: path.total_strength,
    }
}
