//! Property tests over randomly generated contact snapshots.
//!
//! Covers degree consistency, edge deduplication, density bounds, the hub
//! threshold on regular graphs, and agreement between BFS and DFS.

use std::collections::HashSet;

use contact_network::{
    all_paths, build_graph, network_density, shortest_path, Contact, ContactId, Strength, Tier,
};
use proptest::prelude::*;

fn strength() -> impl Strategy<Value = Strength> {
    prop_oneof![Just(Strength::Strong), Just(Strength::Medium), Just(Strength::Weak)]
}

/// Up to 8 contacts `c0..cN`; each connection target may point past the end
/// of the list to exercise dangling references.
fn snapshot() -> impl Strategy<Value = Vec<Contact>> {
    (1usize..8).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec((0..n + 2, strength()), 0..5), n).prop_map(
            |lists| {
                lists
                    .into_iter()
                    .enumerate()
                    .map(|(i, conns)| {
                        conns.into_iter().fold(
                            Contact::new(format!("c{i}"), format!("Contact {i}"), Tier::Tier2),
                            |contact, (target, strength)| contact.connect(format!("c{target}"), strength),
                        )
                    })
                    .collect()
            },
        )
    })
}

proptest! {
    #[test]
    fn degree_matches_raw_connection_count(contacts in snapshot()) {
        let graph = build_graph(&contacts).unwrap();
        for (node, contact) in graph.nodes.iter().zip(&contacts) {
            prop_assert_eq!(node.degree, contact.connections.len());
        }
    }

    #[test]
    fn one_edge_per_unordered_pair(contacts in snapshot()) {
        let graph = build_graph(&contacts).unwrap();
        let mut seen = HashSet::new();
        for edge in &graph.edges {
            prop_assert!(seen.insert(edge.key()), "duplicate edge {:?}", edge);
        }
    }

    #[test]
    fn bidirectional_iff_both_sides_recorded(contacts in snapshot()) {
        let graph = build_graph(&contacts).unwrap();
        let records: HashSet<(&ContactId, &ContactId)> = contacts
            .iter()
            .flat_map(|c| c.connections.iter().map(move |conn| (&c.id, &conn.contact_id)))
            .collect();
        for edge in &graph.edges {
            let both = records.contains(&(&edge.source, &edge.target))
                && records.contains(&(&edge.target, &edge.source));
            prop_assert_eq!(edge.bidirectional, both);
        }
    }

    #[test]
    fn density_within_bounds(contacts in snapshot()) {
        let graph = build_graph(&contacts).unwrap();
        let density = network_density(graph.node_count(), graph.edge_count());
        prop_assert!((0.0..=1.0).contains(&density));
        if graph.node_count() < 2 {
            prop_assert_eq!(density, 0.0);
        }
    }

    #[test]
    fn shortest_never_longer_than_enumerated(contacts in snapshot(), s in 0usize..8, t in 0usize..8) {
        let source = ContactId::from(format!("c{s}"));
        let target = ContactId::from(format!("c{t}"));
        let shortest = shortest_path(&contacts, &source, &target).unwrap();
        let enumerated = all_paths(&contacts, &source, &target, 4).unwrap();

        match shortest {
            Some(path) => {
                for other in &enumerated {
                    prop_assert!(path.steps <= other.steps);
                }
            }
            None => prop_assert!(enumerated.is_empty()),
        }
    }

    #[test]
    fn repeated_calls_agree(contacts in snapshot(), s in 0usize..8, t in 0usize..8) {
        let source = ContactId::from(format!("c{s}"));
        let target = ContactId::from(format!("c{t}"));
        let first = shortest_path(&contacts, &source, &target).unwrap().map(|p| p.contact_ids);
        let second = shortest_path(&contacts, &source, &target).unwrap().map(|p| p.contact_ids);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn regular_graph_has_no_hubs(n in 3usize..12) {
        // ring: every contact records exactly one connection
        let contacts: Vec<Contact> = (0..n)
            .map(|i| {
                Contact::new(format!("r{i}"), format!("Ring {i}"), Tier::Tier1)
                    .connect(format!("r{}", (i + 1) % n), Strength::Medium)
            })
            .collect();
        let graph = build_graph(&contacts).unwrap();
        prop_assert_eq!(graph.hubs().count(), 0);
    }
}

#[test]
fn test_density_of_complete_graphs() {
    for n in 2..10usize {
        assert_eq!(network_density(n, n * (n - 1) / 2), 1.0);
    }
}
