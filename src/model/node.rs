//! Node in the contact network.

use serde::{Deserialize, Serialize};
use super::{Contact, ContactId};

/// A contact as seen by the graph: identity, raw degree, hub flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: ContactId,
    pub contact: Contact,
    /// Count of outgoing connection records on the contact.
    pub degree: usize,
    /// True iff `degree` exceeds the snapshot's hub threshold.
    pub is_hub: bool,
}

impl NetworkNode {
    pub fn new(contact: Contact) -> Self {
        Self {
            id: contact.id.clone(),
            degree: contact.degree(),
            contact,
            is_hub: false,
        }
    }
}
