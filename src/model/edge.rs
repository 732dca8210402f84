//! Deduplicated, undirected edge between two contacts.

use serde::{Deserialize, Serialize};
use super::{ConnectionType, ContactId, Strength};

/// Unordered pair of endpoints. `EdgeKey::new(a, b) == EdgeKey::new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey(ContactId, ContactId);

impl EdgeKey {
    pub fn new(a: &ContactId, b: &ContactId) -> Self {
        if a <= b {
            Self(a.clone(), b.clone())
        } else {
            Self(b.clone(), a.clone())
        }
    }
}

/// One logical relationship between two contacts.
///
/// `source`/`target` follow the first direction seen while building; a later
/// record in the opposite direction only sets `bidirectional`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub source: ContactId,
    pub target: ContactId,
    pub strength: Strength,
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
    pub bidirectional: bool,
}

impl NetworkEdge {
    pub fn new(
        source: ContactId,
        target: ContactId,
        strength: Strength,
        connection_type: ConnectionType,
    ) -> Self {
        Self { source, target, strength, connection_type, bidirectional: false }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.source, &self.target)
    }

    /// The other end of the edge from the given contact.
    pub fn other_end(&self, from: &ContactId) -> Option<&ContactId> {
        if *from == self.source { Some(&self.target) }
        else if *from == self.target { Some(&self.source) }
        else { None }
    }

    pub fn connects(&self, a: &ContactId, b: &ContactId) -> bool {
        self.other_end(a) == Some(b)
    }

    /// Human-readable relationship label, e.g. `"strong professional connection"`.
    pub fn label(&self) -> String {
        format!("{} {} connection", self.strength, self.connection_type)
    }
}
