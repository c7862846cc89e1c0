//! Request parameter parsing.
//!
//! Turns query strings and url-encoded bodies into domain values, collecting
//! per-field errors so a rejected form can be shown again with its messages.

use crate::domain::{Contact, ContactId, Page, ValidationError};
use crate::server::paths::CONTACT_ID;
use axum::async_trait;
use axum::extract::{FromRequest, Query, Request};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::Form;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z_]+(?:[- '][0-9A-Za-z_]+)*$").expect("Failed to compile name regex")
});

/// Query string and url-encoded body parameters of a request, merged.
///
/// When a name repeats, the first value wins, and body values come before
/// query values. Values are stored untrimmed; use [`FormValues::trimmed`].
#[derive(Debug, Clone, Default)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    pub fn has(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The value with surrounding whitespace removed, or "" when absent.
    pub fn trimmed(&self, name: &str) -> &str {
        self.0.get(name).map(|v| v.trim()).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = HashMap::new();
        for (k, v) in iter {
            values.entry(k.into()).or_insert_with(|| v.into());
        }
        Self(values)
    }
}

fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

type Pairs = Vec<(String, String)>;

#[async_trait]
impl<S> FromRequest<S> for FormValues
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<Pairs>::try_from_uri(req.uri())
            .map_err(|_| (StatusCode::BAD_REQUEST, "failed to parse query"))?;

        let body = if *req.method() != Method::GET && is_form_encoded(req.headers()) {
            let Form(body) = Form::<Pairs>::from_request(req, state)
                .await
                .map_err(|_| (StatusCode::BAD_REQUEST, "failed to parse form"))?;
            body
        } else {
            Vec::new()
        };

        Ok(body.into_iter().chain(query).collect())
    }
}

/// Parameters of the contact list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search_term: String,
    pub page_offset: String,
    pub page_size: String,
}

impl From<&FormValues> for ListQuery {
    fn from(values: &FormValues) -> Self {
        Self {
            search_term: values.trimmed("SearchTerm").to_string(),
            page_offset: values.trimmed("pageOffset").to_string(),
            page_size: values.trimmed("pageSize").to_string(),
        }
    }
}

impl ListQuery {
    pub fn term(&self) -> &str {
        self.search_term.trim()
    }

    /// The requested page, clamped to `[min_size, max_size]`. Blank numbers
    /// count as 0.
    pub fn page(&self, min_size: usize, max_size: usize) -> Result<Page, ValidationError> {
        let offset = parse_int("pageOffset", &self.page_offset)?;
        let size = parse_int("pageSize", &self.page_size)?;
        Ok(Page::clamped(offset, size, min_size, max_size))
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// A contact form as submitted, with per-field error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    /// Error message keyed by form field name
    pub errors: BTreeMap<&'static str, String>,
}

impl ContactForm {
    /// An empty form for a contact that does not exist yet.
    pub fn blank(id: &ContactId) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn set_error(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

impl From<&Contact> for ContactForm {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            errors: BTreeMap::new(),
        }
    }
}

fn required(form: &FormValues, field: &'static str) -> Result<String, ValidationError> {
    match form.trimmed(field) {
        "" => Err(ValidationError::BlankField(field)),
        value => Ok(value.to_string()),
    }
}

/// Parse a submitted contact form.
///
/// A blank `Id` means a new contact and gets a fresh id. On failure the
/// returned form echoes the submitted values along with an error per field.
pub fn parse_contact(values: &FormValues) -> Result<Contact, ContactForm> {
    let mut form = ContactForm {
        id: values.trimmed(CONTACT_ID).to_string(),
        first_name: values.trimmed("FirstName").to_string(),
        last_name: values.trimmed("LastName").to_string(),
        phone: values.trimmed("Phone").to_string(),
        email: values.trimmed("Email").to_string(),
        errors: BTreeMap::new(),
    };

    let id = if form.id.is_empty() {
        let id = ContactId::new();
        tracing::info!(contact_id = %id, "Blank contact id, assigning a new one");
        form.id = id.to_string();
        Some(id)
    } else {
        match ContactId::parse(&form.id) {
            Ok(id) => Some(id),
            Err(e) => {
                form.set_error(CONTACT_ID, e.to_string());
                None
            }
        }
    };

    match required(values, "FirstName") {
        Ok(name) if !NAME_REGEX.is_match(&name) => {
            form.set_error("FirstName", ValidationError::InvalidName(name).to_string())
        }
        Ok(_) => {}
        Err(e) => form.set_error("FirstName", e.to_string()),
    }
    if let Err(e) = required(values, "LastName") {
        form.set_error("LastName", e.to_string());
    }
    if let Err(e) = required(values, "Email") {
        form.set_error("Email", e.to_string());
    }

    match id {
        Some(id) if !form.has_errors() => Ok(Contact {
            id,
            first_name: form.first_name,
            last_name: form.last_name,
            phone: form.phone,
            email: form.email,
        }),
        _ => Err(form),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "0b7d2a52-3c4e-4f6a-9d1b-8e2f3a4b5c6d";

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_name_regex() {
        assert!(NAME_REGEX.is_match("Joe"));
        assert!(NAME_REGEX.is_match("Mary-Jane"));
        assert!(NAME_REGEX.is_match("D'Arcy"));
        assert!(NAME_REGEX.is_match("Jean Luc"));
        assert!(!NAME_REGEX.is_match("Joe!"));
        assert!(!NAME_REGEX.is_match("Joe--Bob"));
        // ASCII word characters only
        assert!(!NAME_REGEX.is_match("José"));
        assert!(!NAME_REGEX.is_match("Zoë"));
        assert!(!NAME_REGEX.is_match("Δημήτρης"));
    }

    #[test]
    fn test_parse_contact_valid() {
        let form = values(&[
            ("Id", ID),
            ("FirstName", " Joe "),
            ("LastName", "Bloggs"),
            ("Phone", ""),
            ("Email", "joe@example.com"),
        ]);
        let contact = parse_contact(&form).unwrap();
        assert_eq!(contact.id.as_str(), ID);
        assert_eq!(contact.first_name, "Joe");
        assert_eq!(contact.phone, "");
    }

    #[test]
    fn test_parse_contact_blank_id_gets_fresh_id() {
        let form = values(&[
            ("FirstName", "Joe"),
            ("LastName", "Bloggs"),
            ("Email", "joe@example.com"),
        ]);
        let contact = parse_contact(&form).unwrap();
        assert!(ContactId::parse(contact.id.as_str()).is_ok());
    }

    #[test]
    fn test_parse_contact_collects_errors() {
        let form = values(&[("Id", "nope"), ("FirstName", "Joe!"), ("LastName", " ")]);
        let rejected = parse_contact(&form).unwrap_err();

        assert_eq!(rejected.id, "nope");
        assert_eq!(rejected.first_name, "Joe!");
        assert!(rejected.error("Id").is_some());
        assert!(rejected.error("FirstName").unwrap().contains("Invalid name"));
        assert_eq!(rejected.error("LastName"), Some("LastName is blank"));
        assert_eq!(rejected.error("Email"), Some("Email is blank"));
        assert_eq!(rejected.error("Phone"), None);
    }

    #[test]
    fn test_list_query_defaults_and_clamps() {
        let query = ListQuery::default();
        assert_eq!(query.page(10, 50).unwrap(), Page::new(0, 10));

        let query = ListQuery {
            search_term: "  joe ".to_string(),
            page_offset: "-2".to_string(),
            page_size: "500".to_string(),
        };
        assert_eq!(query.term(), "joe");
        assert_eq!(query.page(10, 50).unwrap(), Page::new(0, 50));
    }

    #[test]
    fn test_repeated_values_keep_the_first() {
        let form = values(&[("SearchTerm", "Jan"), ("SearchTerm", "Joe"), ("pageSize", " 20 ")]);
        let query = ListQuery::from(&form);
        assert_eq!(query.term(), "Jan");
        assert_eq!(query.page(10, 50).unwrap(), Page::new(0, 20));
    }

    #[test]
    fn test_list_query_rejects_garbage() {
        let query = ListQuery {
            page_offset: "two".to_string(),
            ..ListQuery::default()
        };
        assert_eq!(
            query.page(10, 50),
            Err(ValidationError::InvalidNumber {
                field: "pageOffset",
                value: "two".to_string()
            })
        );
    }

    #[test]
    fn test_form_from_contact() {
        let contact = Contact {
            first_name: "Joe".to_string(),
            ..Contact::new()
        };
        let form = ContactForm::from(&contact);
        assert_eq!(form.id, contact.id.to_string());
        assert_eq!(form.first_name, "Joe");
        assert!(!form.has_errors());
    }
}
