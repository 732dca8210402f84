//! # contact-network: Contact Graph Analytics
//!
//! Treats contacts and their one-sided connection records as a graph and
//! computes structural properties of it: degree, hubs, isolated contacts,
//! shortest and alternative paths, strength distributions, and suggestions
//! for new connections.
//!
//! ## Design Principles
//!
//! 1. **Stateless**: every entry point takes a `&[Contact]` snapshot and
//!    rebuilds its derived state. Nothing is cached between calls.
//! 2. **Clean DTOs**: `Contact`, `NetworkNode`, `NetworkEdge`, `NetworkPath`
//!    and the reports are plain serializable data.
//! 3. **Absence is not failure**: unknown ids, unreachable targets and empty
//!    networks yield `None`, empty vecs or zeros. Only malformed input errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use contact_network::{Contact, Strength, Tier, shortest_path, insights};
//!
//! # fn example() -> contact_network::Result<()> {
//! let contacts = vec![
//!     Contact::new("a", "Ada", Tier::Tier1).connect("b", Strength::Strong),
//!     Contact::new("b", "Bo", Tier::Tier2),
//!     Contact::new("c", "Cy", Tier::Tier2),
//! ];
//!
//! let path = shortest_path(&contacts, &"a".into(), &"b".into())?;
//! assert_eq!(path.map(|p| p.steps), Some(1));
//!
//! let report = insights(&contacts)?;
//! assert_eq!(report.isolated_contacts.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Components
//!
//! | Component | Module | Depends on |
//! |-----------|--------|------------|
//! | Graph Builder | `graph` | |
//! | Path Finder | `paths` | `graph` |
//! | Statistics Aggregator | `stats` | `graph` |
//! | Insights Generator | `insights` | `graph`, `stats` |
//! | Introduction-Path Composer | `introduction` | `paths` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod config;
pub mod graph;
pub mod paths;
pub mod stats;
pub mod insights;
pub mod introduction;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Contact, ContactId, Connection, ConnectionType, Strength, Tier,
    NetworkNode, NetworkEdge, EdgeKey, NetworkPath,
    NetworkStatistics, StrengthDistribution, NetworkInsights,
    SuggestedConnection, SuggestionReason, IntroductionPath,
};

// ============================================================================
// Re-exports: Engine
// ============================================================================

pub use config::{AnalyticsConfig, DEFAULT_MAX_DEPTH};
pub use graph::{build_graph, build_graph_with, NetworkGraph};
pub use paths::{all_paths, all_paths_default, all_paths_with, path_strength, shortest_path};
pub use stats::{network_density, statistics};
pub use insights::{insights, insights_with};
pub use introduction::{introduction_paths, introduction_paths_with};
pub use export::NetworkReport;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Contact at index {index} has no id")]
    MissingContactId { index: usize },

    #[error("Duplicate contact id: {0}")]
    DuplicateContactId(ContactId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
