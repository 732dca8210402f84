//! Contacts and the one-sided connection records they own.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque contact identifier, as issued by the contact store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An id that carries no identity at all (empty or whitespace only).
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContactId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Relationship tier of a contact. Ordinal: `Tier1` is the closest circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Tier1,
    Tier2,
    Tier3,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Tier1 => f.write_str("Tier 1"),
            Tier::Tier2 => f.write_str("Tier 2"),
            Tier::Tier3 => f.write_str("Tier 3"),
        }
    }
}

/// Recorded quality of a connection.
///
/// Variants are declared weakest first so the derived `Ord` follows
/// [`Strength::weight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Numeric weight used for path scoring: strong=3, medium=2, weak=1.
    pub fn weight(self) -> u32 {
        match self {
            Strength::Strong => 3,
            Strength::Medium => 2,
            Strength::Weak => 1,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Strong => f.write_str("strong"),
            Strength::Medium => f.write_str("medium"),
            Strength::Weak => f.write_str("weak"),
        }
    }
}

/// Categorical label of a connection. Passed through, never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Professional,
    Personal,
    Family,
    Mentor,
    Introduction,
    #[serde(other)]
    Other,
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConnectionType::Professional => "professional",
            ConnectionType::Personal => "personal",
            ConnectionType::Family => "family",
            ConnectionType::Mentor => "mentor",
            ConnectionType::Introduction => "introduction",
            ConnectionType::Other => "other",
        };
        f.write_str(label)
    }
}

/// A one-sided connection record owned by a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// The contact this record points at.
    pub contact_id: ContactId,
    pub strength: Strength,
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Connection {
    pub fn new(
        contact_id: impl Into<ContactId>,
        strength: Strength,
        connection_type: ConnectionType,
    ) -> Self {
        Self {
            contact_id: contact_id.into(),
            strength,
            connection_type,
            note: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A contact as supplied by the contact store. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub tier: Tier,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interests: Vec<String>,
    /// Absent and `null` are both accepted as "no connections".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub connections: Vec<Connection>,
}

impl Contact {
    pub fn new(id: impl Into<ContactId>, name: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier,
            location: None,
            interests: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_interests(mut self, interests: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.connections.push(connection);
        self
    }

    /// Shorthand for a professional connection with the given strength.
    pub fn connect(self, target: impl Into<ContactId>, strength: Strength) -> Self {
        self.with_connection(Connection::new(target, strength, ConnectionType::Professional))
    }

    /// Raw count of outgoing connection records, dangling ones included.
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    pub fn is_isolated(&self) -> bool {
        self.connections.is_empty()
    }

    /// Location if it carries any text.
    pub fn known_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.trim().is_empty())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
