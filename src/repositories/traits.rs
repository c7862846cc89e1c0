use crate::domain::{Contact, ContactId, Page};
use crate::error::StoreResult;

/// One page of contacts plus whether the next page would be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    pub contacts: Vec<Contact>,
    pub more: bool,
}

impl PageResult {
    pub fn new(contacts: Vec<Contact>, more: bool) -> Self {
        Self { contacts, more }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval so the HTTP layer
/// can be driven by the in-memory store or by a test double. Every operation
/// is synchronous and atomic with respect to the others.
pub trait ContactRepository: Send + Sync {
    /// Retrieve a single contact by ID.
    fn find_by_id(&self, id: &ContactId) -> Option<Contact>;

    /// Id of the first contact whose email equals `email` exactly.
    fn find_id_by_email(&self, email: &str) -> Option<ContactId>;

    /// Remove the contact with this id, if any.
    fn delete(&self, id: &ContactId);

    /// Insert or replace (in place) the contact with `contact.id`.
    ///
    /// Fails without writing anything when the email is already assigned to a
    /// different contact.
    fn store(&self, contact: Contact) -> StoreResult<()>;

    /// One page of all contacts, in store order.
    fn find_all(&self, page: Page) -> PageResult;

    /// One page of the contacts having `term` in any field, in store order.
    fn find_by_search_term(&self, term: &str, page: Page) -> PageResult;
}
