//! Path: an ordered chain of contacts joined by edges.

use serde::{Deserialize, Serialize};
use super::{Contact, ContactId};

/// A path through the contact network: contact -[edge]- contact -[edge]- ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkPath {
    /// Ids along the path, source first.
    pub contact_ids: Vec<ContactId>,
    /// Resolved contacts, parallel to `contact_ids`.
    pub contacts: Vec<Contact>,
    /// Sum of edge weights along the path.
    pub total_strength: u32,
    /// Hop count: `contact_ids.len() - 1`.
    pub steps: usize,
}

impl NetworkPath {
    pub fn new(contacts: Vec<Contact>, total_strength: u32) -> Self {
        let contact_ids: Vec<ContactId> = contacts.iter().map(|c| c.id.clone()).collect();
        let steps = contact_ids.len().saturating_sub(1);
        Self { contact_ids, contacts, total_strength, steps }
    }

    /// Zero-hop path consisting of a single contact.
    pub fn single(contact: Contact) -> Self {
        Self::new(vec![contact], 0)
    }

    pub fn start(&self) -> Option<&Contact> {
        self.contacts.first()
    }

    pub fn end(&self) -> Option<&Contact> {
        self.contacts.last()
    }

    /// Contacts strictly between the endpoints.
    pub fn intermediaries(&self) -> &[Contact] {
        match self.contacts.len() {
            0..=2 => &[],
            n => &self.contacts[1..n - 1],
        }
    }
}
