//! # Contact Network Model
//!
//! Clean DTOs that define the contact graph and every report derived from it.
//! These types cross every boundary: contact store ↔ engine ↔ presentation.
//!
//! Design rule: this module is pure data. No I/O, no state, no traversal.

pub mod contact;
pub mod node;
pub mod edge;
pub mod path;
pub mod report;

pub use contact::{Contact, ContactId, Connection, ConnectionType, Strength, Tier};
pub use node::NetworkNode;
pub use edge::{EdgeKey, NetworkEdge};
pub use path::NetworkPath;
pub use report::{
    IntroductionPath, NetworkInsights, NetworkStatistics, StrengthDistribution,
    SuggestedConnection, SuggestionReason,
};
