//! Contact record.

use super::contact_id::ContactId;
use serde::{Deserialize, Serialize};

/// A contact in the address book.
///
/// The store enforces id uniqueness (by upserting) and, advisorily, email
/// uniqueness. Blankness of the text fields is a form concern, not a store one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: ContactId,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: String,
}

impl Contact {
    /// Create a contact with a fresh id and empty fields.
    pub fn new() -> Self {
        Self::with_id(ContactId::new())
    }

    /// Create a contact with the given id and empty fields.
    pub fn with_id(id: ContactId) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }

    /// Whether `term` is a (case-sensitive) substring of any descriptive field.
    pub fn any_field_contains(&self, term: &str) -> bool {
        [&self.first_name, &self.last_name, &self.phone, &self.email]
            .iter()
            .any(|field| field.contains(term))
    }

    /// First and last name joined by a space, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn has_id(&self, id: &ContactId) -> bool {
        &self.id == id
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joe() -> Contact {
        Contact {
            first_name: "Joe".to_string(),
            last_name: "Bloggs".to_string(),
            phone: "+44(0)751123456".to_string(),
            email: "joebloggs@example.com".to_string(),
            ..Contact::new()
        }
    }

    #[test]
    fn test_any_field_contains_each_field() {
        let c = joe();
        assert!(c.any_field_contains("Joe"));
        assert!(c.any_field_contains("Blog"));
        assert!(c.any_field_contains("(0)75"));
        assert!(c.any_field_contains("example.com"));
        assert!(!c.any_field_contains("Jane"));
    }

    #[test]
    fn test_any_field_contains_is_case_sensitive() {
        let c = joe();
        assert!(!c.any_field_contains("joe@"));
        assert!(c.any_field_contains("joe"));
        assert!(!c.any_field_contains("JOE"));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(Contact::new().any_field_contains(""));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(joe().full_name(), "Joe Bloggs");
        assert_eq!(Contact::new().full_name(), "");
    }

    #[test]
    fn test_contact_serialization_uses_form_field_names() {
        let json = serde_json::to_value(joe()).unwrap();
        assert_eq!(json["FirstName"], "Joe");
        assert_eq!(json["Email"], "joebloggs@example.com");
        assert!(json["Id"].is_string());
    }
}
