//! # Insights Generator
//!
//! Composes the graph and its statistics into a ranked report: hubs,
//! isolated contacts, strongest edges, and suggested new connections.
//!
//! Suggestions come from a full pairwise scan, O(n²) in the number of
//! contacts. That is fine for contact lists in the low thousands; beyond
//! that, set `AnalyticsConfig::suggestion_pair_budget`.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::config::AnalyticsConfig;
use crate::graph::{build_graph_with, NetworkGraph};
use crate::model::*;
use crate::stats::statistics_in;
use crate::Result;

// ============================================================================
// Suggestion rules
// ============================================================================

/// A predicate over an unconnected pair, contributing one labelled clause.
type SuggestionRule = fn(&Contact, &Contact) -> Option<SuggestionReason>;

/// Evaluated in order; the order fixes the clause order in `reason`.
const SUGGESTION_RULES: &[SuggestionRule] = &[common_interests, same_location, same_tier];

const REASON_SEPARATOR: &str = "; ";

fn common_interests(a: &Contact, b: &Contact) -> Option<SuggestionReason> {
    let mut shared: Vec<String> = Vec::new();
    for interest in &a.interests {
        if b.interests.contains(interest) && !shared.contains(interest) {
            shared.push(interest.clone());
        }
    }
    (!shared.is_empty()).then_some(SuggestionReason::CommonInterests(shared))
}

fn same_location(a: &Contact, b: &Contact) -> Option<SuggestionReason> {
    match (a.known_location(), b.known_location()) {
        (Some(x), Some(y)) if x == y => Some(SuggestionReason::SameLocation(x.to_string())),
        _ => None,
    }
}

fn same_tier(a: &Contact, b: &Contact) -> Option<SuggestionReason> {
    (a.tier == b.tier).then_some(SuggestionReason::SameTier(a.tier))
}

/// Evaluate every rule for a pair. `None` when nothing matches.
pub fn suggestion_for(a: &Contact, b: &Contact) -> Option<SuggestedConnection> {
    let reasons: SmallVec<[SuggestionReason; 3]> =
        SUGGESTION_RULES.iter().filter_map(|rule| rule(a, b)).collect();
    if reasons.is_empty() {
        return None;
    }
    let reason = reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(REASON_SEPARATOR);
    Some(SuggestedConnection {
        contact1: a.clone(),
        contact2: b.clone(),
        reason,
        reasons,
    })
}

/// Scan unordered pairs `(i < j)` in input order and collect suggestions for
/// pairs without a direct edge, up to `config.max_suggestions`.
pub fn suggest_connections(graph: &NetworkGraph, config: &AnalyticsConfig) -> Vec<SuggestedConnection> {
    let mut suggestions = Vec::new();
    let mut examined = 0usize;

    'scan: for (i, first) in graph.nodes.iter().enumerate() {
        for second in &graph.nodes[i + 1..] {
            if suggestions.len() >= config.max_suggestions {
                break 'scan;
            }
            if config.suggestion_pair_budget.is_some_and(|budget| examined >= budget) {
                warn!(
                    examined,
                    found = suggestions.len(),
                    "suggestion pair budget exhausted, returning partial results"
                );
                break 'scan;
            }
            examined += 1;

            if graph.has_edge(&first.id, &second.id) {
                continue;
            }
            if let Some(suggestion) = suggestion_for(&first.contact, &second.contact) {
                suggestions.push(suggestion);
            }
        }
    }

    debug!(examined, suggestions = suggestions.len(), "suggestion scan complete");
    suggestions
}

// ============================================================================
// Report
// ============================================================================

/// Insights with default limits (5 hubs, 10 strongest edges, 10 suggestions).
pub fn insights(contacts: &[Contact]) -> Result<NetworkInsights> {
    insights_with(contacts, &AnalyticsConfig::default())
}

pub fn insights_with(contacts: &[Contact], config: &AnalyticsConfig) -> Result<NetworkInsights> {
    let graph = build_graph_with(contacts, config)?;
    Ok(insights_in(&graph, config))
}

/// Compose the report from an already-built graph.
pub fn insights_in(graph: &NetworkGraph, config: &AnalyticsConfig) -> NetworkInsights {
    let mut hubs: Vec<NetworkNode> = graph.hubs().cloned().collect();
    hubs.sort_by(|a, b| b.degree.cmp(&a.degree));
    hubs.truncate(config.max_hubs);

    // Raw records: a contact only pointed at by others is still isolated.
    let isolated_contacts: Vec<Contact> = graph
        .nodes
        .iter()
        .filter(|n| n.contact.is_isolated())
        .map(|n| n.contact.clone())
        .collect();

    let mut strongest_connections: Vec<NetworkEdge> = graph
        .edges
        .iter()
        .filter(|e| e.strength == Strength::Strong)
        .cloned()
        .collect();
    strongest_connections.sort_by(|a, b| b.strength.weight().cmp(&a.strength.weight()));
    strongest_connections.truncate(config.max_strongest);

    NetworkInsights {
        hubs,
        isolated_contacts,
        strongest_connections,
        suggested_connections: suggest_connections(graph, config),
        statistics: statistics_in(graph),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contact(id: &str, tier: Tier) -> Contact {
        Contact::new(id, id.to_uppercase(), tier)
    }

    #[test]
    fn test_reason_clauses_in_rule_order() {
        let a = contact("a", Tier::Tier1)
            .with_location("Porto")
            .with_interests(["golf", "wine", "golf"]);
        let b = contact("b", Tier::Tier1)
            .with_location("Porto")
            .with_interests(["wine", "golf"]);

        let suggestion = suggestion_for(&a, &b).unwrap();
        assert_eq!(
            suggestion.reason,
            "Common interests: golf, wine; Same location: Porto; Same tier: Tier 1",
        );
        assert_eq!(suggestion.reasons.len(), 3);
    }

    #[test]
    fn test_no_shared_attribute_no_suggestion() {
        let a = contact("a", Tier::Tier1).with_location("Porto").with_interests(["chess"]);
        let b = contact("b", Tier::Tier2).with_location("Lisbon").with_interests(["surf"]);
        assert!(suggestion_for(&a, &b).is_none());
    }

    #[test]
    fn test_blank_locations_do_not_match() {
        let a = contact("a", Tier::Tier1).with_location("");
        let b = contact("b", Tier::Tier2).with_location("");
        assert!(suggestion_for(&a, &b).is_none());
    }

    #[test]
    fn test_connected_pairs_are_not_suggested() {
        let contacts = vec![
            contact("a", Tier::Tier3).connect("b", Strength::Weak),
            contact("b", Tier::Tier3),
            contact("c", Tier::Tier3),
        ];
        let report = insights(&contacts).unwrap();
        let pairs: Vec<(&str, &str)> = report
            .suggested_connections
            .iter()
            .map(|s| (s.contact1.id.as_str(), s.contact2.id.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "c"), ("b", "c")]);
    }

    #[test]
    fn test_suggestions_truncated_in_scan_order() {
        let contacts: Vec<Contact> = (0..8).map(|i| contact(&format!("c{i}"), Tier::Tier2)).collect();
        let config = AnalyticsConfig { max_suggestions: 4, ..AnalyticsConfig::default() };
        let report = insights_with(&contacts, &config).unwrap();

        let pairs: Vec<(&str, &str)> = report
            .suggested_connections
            .iter()
            .map(|s| (s.contact1.id.as_str(), s.contact2.id.as_str()))
            .collect();
        assert_eq!(pairs, vec![("c0", "c1"), ("c0", "c2"), ("c0", "c3"), ("c0", "c4")]);
    }

    #[test]
    fn test_pair_budget_limits_scan() {
        let contacts: Vec<Contact> = (0..6).map(|i| contact(&format!("c{i}"), Tier::Tier2)).collect();
        let graph = crate::graph::build_graph(&contacts).unwrap();
        let config = AnalyticsConfig::default().with_suggestion_pair_budget(2);
        assert_eq!(suggest_connections(&graph, &config).len(), 2);
    }

    #[test]
    fn test_hubs_sorted_and_capped() {
        // six spokes on each of two centres keeps both above 1.5x the average
        let mut contacts = vec![contact("hub1", Tier::Tier1), contact("hub2", Tier::Tier1)];
        for i in 0..6 {
            let id = format!("s{i}");
            contacts[0] = contacts[0].clone().connect(id.as_str(), Strength::Strong);
            if i < 4 {
                contacts[1] = contacts[1].clone().connect(id.as_str(), Strength::Medium);
            }
            contacts.push(contact(&id, Tier::Tier3));
        }
        let report = insights(&contacts).unwrap();

        let hubs: Vec<(&str, usize)> = report.hubs.iter().map(|n| (n.id.as_str(), n.degree)).collect();
        assert_eq!(hubs, vec![("hub1", 6), ("hub2", 4)]);

        let capped = AnalyticsConfig { max_hubs: 1, ..AnalyticsConfig::default() };
        assert_eq!(insights_with(&contacts, &capped).unwrap().hubs.len(), 1);
    }

    #[test]
    fn test_strongest_connections_only_strong() {
        let contacts = vec![
            contact("a", Tier::Tier1)
                .connect("b", Strength::Strong)
                .connect("c", Strength::Medium)
                .connect("d", Strength::Strong),
            contact("b", Tier::Tier1),
            contact("c", Tier::Tier1),
            contact("d", Tier::Tier1).connect("a", Strength::Weak),
        ];
        let report = insights(&contacts).unwrap();

        let edges: Vec<(&str, &str)> = report
            .strongest_connections
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(edges, vec![("a", "b"), ("a", "d")]);
        assert!(report.strongest_connections[1].bidirectional);
    }

    fn star(spokes: usize, strength: Strength) -> Vec<Contact> {
        let mut centre = contact("centre", Tier::Tier1);
        let mut contacts = Vec::with_capacity(spokes + 1);
        for i in 0..spokes {
            let id = format!("s{i:02}");
            centre = centre.connect(id.as_str(), strength);
            contacts.push(contact(&id, Tier::Tier2));
        }
        contacts.insert(0, centre);
        contacts
    }

    #[test]
    fn test_strongest_connections_capped_in_emission_order() {
        let report = insights(&star(12, Strength::Strong)).unwrap();

        let targets: Vec<&str> = report
            .strongest_connections
            .iter()
            .map(|e| e.target.as_str())
            .collect();
        let expected: Vec<String> = (0..10).map(|i| format!("s{i:02}")).collect();
        assert_eq!(targets, expected.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(report.statistics.unique_edges, 12);
    }

    #[test]
    fn test_strongest_connections_custom_cap() {
        let config = AnalyticsConfig { max_strongest: 3, ..AnalyticsConfig::default() };
        let report = insights_with(&star(12, Strength::Strong), &config).unwrap();
        assert_eq!(report.strongest_connections.len(), 3);
        assert_eq!(report.strongest_connections[2].target, ContactId::from("s02"));

        let weak = insights_with(&star(12, Strength::Weak), &config).unwrap();
        assert!(weak.strongest_connections.is_empty());
    }

    #[test]
    fn test_isolated_uses_raw_records() {
        let contacts = vec![
            contact("a", Tier::Tier1).connect("b", Strength::Strong),
            contact("b", Tier::Tier2),
        ];
        let report = insights(&contacts).unwrap();
        let isolated: Vec<&str> = report.isolated_contacts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(isolated, vec!["b"]);
        assert_eq!(report.statistics.total_connections, 1);
    }
}
