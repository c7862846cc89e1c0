use contacts_web::domain::{Contact, ContactId, Page};
use contacts_web::error::StoreResult;
use contacts_web::repositories::{ContactRepository, InMemoryContactRepository, PageResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Delegates storage to an `InMemoryContactRepository` and records every call
/// (with its arguments) so tests can check which operation a handler chose.
#[derive(Clone, Default)]
pub struct MockContactRepository {
    inner: Arc<InMemoryContactRepository>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    search_terms: Arc<Mutex<Vec<String>>>,
    pages: Arc<Mutex<Vec<Page>>>,
}

impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock pre-loaded with `contacts`, in order.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            inner: Arc::new(InMemoryContactRepository::with_contacts(contacts)),
            ..Self::default()
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Search terms passed to `find_by_search_term`, oldest first.
    pub fn search_terms(&self) -> Vec<String> {
        self.search_terms.lock().unwrap().clone()
    }

    /// Pages passed to `find_all` or `find_by_search_term`, oldest first.
    pub fn pages(&self) -> Vec<Page> {
        self.pages.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn find_by_id(&self, id: &ContactId) -> Option<Contact> {
        self.track_call("find_by_id");
        self.inner.find_by_id(id)
    }

    fn find_id_by_email(&self, email: &str) -> Option<ContactId> {
        self.track_call("find_id_by_email");
        self.inner.find_id_by_email(email)
    }

    fn delete(&self, id: &ContactId) {
        self.track_call("delete");
        self.inner.delete(id)
    }

    fn store(&self, contact: Contact) -> StoreResult<()> {
        self.track_call("store");
        self.inner.store(contact)
    }

    fn find_all(&self, page: Page) -> PageResult {
        self.track_call("find_all");
        self.pages.lock().unwrap().push(page);
        self.inner.find_all(page)
    }

    fn find_by_search_term(&self, term: &str, page: Page) -> PageResult {
        self.track_call("find_by_search_term");
        self.search_terms.lock().unwrap().push(term.to_string());
        self.pages.lock().unwrap().push(page);
        self.inner.find_by_search_term(term, page)
    }
}
