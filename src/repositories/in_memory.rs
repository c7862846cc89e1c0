use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Contact, ContactId, Page};
use crate::error::{StoreError, StoreResult};
use crate::repositories::fixtures::sample_contacts;
use crate::repositories::traits::{ContactRepository, PageResult};

/// Contact repository kept entirely in memory.
///
/// Contacts live in a single vector guarded by one `RwLock`, which keeps the
/// insertion order that listing and search rely on. Each operation holds the
/// lock for its whole duration, so the email check and the upsert in
/// [`ContactRepository::store`] cannot interleave with another writer.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `contacts` in the given order.
    ///
    /// The contacts are taken as-is; id and email uniqueness are only
    /// enforced for later writes.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }

    /// Create a repository seeded with the sample contacts.
    pub fn populated() -> Self {
        Self::with_contacts(sample_contacts())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Contacts are plain values replaced wholesale, so a writer that panicked
    // cannot have left a record half-updated.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Contact>> {
        self.contacts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Contact>> {
        self.contacts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn id_by_email(contacts: &[Contact], email: &str) -> Option<ContactId> {
    contacts
        .iter()
        .find(|c| c.email == email)
        .map(|c| c.id.clone())
}

impl ContactRepository for InMemoryContactRepository {
    fn find_by_id(&self, id: &ContactId) -> Option<Contact> {
        self.read().iter().find(|c| c.has_id(id)).cloned()
    }

    fn find_id_by_email(&self, email: &str) -> Option<ContactId> {
        id_by_email(&self.read(), email)
    }

    fn delete(&self, id: &ContactId) {
        let mut contacts = self.write();
        if let Some(idx) = contacts.iter().position(|c| c.has_id(id)) {
            contacts.remove(idx);
            tracing::debug!(contact_id = %id, "Contact deleted");
        }
    }

    fn store(&self, contact: Contact) -> StoreResult<()> {
        let mut contacts = self.write();

        if !contact.email.is_empty() {
            if let Some(existing) = id_by_email(&contacts, &contact.email) {
                if existing != contact.id {
                    return Err(StoreError::EmailConflict {
                        email: contact.email,
                        existing,
                    });
                }
            }
        }

        match contacts.iter().position(|c| c.id == contact.id) {
            Some(idx) => contacts[idx] = contact,
            None => contacts.push(contact),
        }
        Ok(())
    }

    fn find_all(&self, page: Page) -> PageResult {
        let contacts = self.read();
        let start = page.start_offset();
        if start >= contacts.len() {
            return PageResult::default();
        }

        let end = page.end_offset();
        let more = end < contacts.len();
        let end = end.min(contacts.len());
        PageResult::new(contacts[start..end].to_vec(), more)
    }

    fn find_by_search_term(&self, term: &str, page: Page) -> PageResult {
        let contacts = self.read();

        // One extra match tells us whether a next page exists without
        // counting every match.
        let mut matches: Vec<Contact> = contacts
            .iter()
            .filter(|c| c.any_field_contains(term))
            .skip(page.start_offset())
            .take(page.size.saturating_add(1))
            .cloned()
            .collect();

        let more = matches.len() > page.size;
        matches.truncate(page.size);
        PageResult::new(matches, more)
    }
}
