//! Resource paths and URL building.

use crate::domain::Page;
use crate::error::PathsError;
use std::collections::HashSet;
use std::fmt;

/// Query/form parameter carrying a contact id.
pub const CONTACT_ID: &str = "Id";

/// A path, possibly with query parameters already appended.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath(String);

impl ResourcePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a URL-encoded `param=value` pair.
    pub fn with_param(&self, param: &str, value: &str) -> Self {
        let separator = if self.0.contains('?') { '&' } else { '?' };
        Self(format!(
            "{}{}{}={}",
            self.0,
            separator,
            urlencoding::encode(param),
            urlencoding::encode(value)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where each contact resource is mounted.
#[derive(Debug, Clone)]
pub struct ResourcePaths {
    /// Single contact page; also accepts DELETE
    pub root: ResourcePath,
    /// Create/edit form
    pub form: ResourcePath,
    /// Paginated list and search
    pub list: ResourcePath,
    /// Email availability check
    pub email: ResourcePath,
}

/// Resource paths known to be pairwise distinct.
#[derive(Debug, Clone)]
pub struct ValidatedPaths {
    pub root: ResourcePath,
    pub form: ResourcePath,
    pub list: ResourcePath,
    pub email: ResourcePath,
}

impl ResourcePaths {
    /// Reject the set if any two resources share a path, or a path is relative.
    pub fn validated(self) -> Result<ValidatedPaths, PathsError> {
        let mut seen = HashSet::new();
        for path in [&self.root, &self.form, &self.list, &self.email] {
            if !path.as_str().starts_with('/') {
                return Err(PathsError::NotAbsolute {
                    path: path.to_string(),
                });
            }
            if !seen.insert(path.as_str()) {
                return Err(PathsError::Duplicate {
                    path: path.to_string(),
                });
            }
        }

        Ok(ValidatedPaths {
            root: self.root,
            form: self.form,
            list: self.list,
            email: self.email,
        })
    }
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            root: ResourcePath::new("/contact/"),
            form: ResourcePath::new("/contact/form"),
            list: ResourcePath::new("/contact/list"),
            email: ResourcePath::new("/contact/email"),
        }
    }
}

/// Link to `page` of the list, carrying the search term when there is one.
pub fn search_page_url(page: Page, search_term: &str, list_path: &ResourcePath) -> String {
    let mut url = list_path.clone();
    if !search_term.is_empty() {
        url = url.with_param("SearchTerm", search_term);
    }
    url.with_param("pageOffset", &page.offset.to_string())
        .with_param("pageSize", &page.size.to_string())
        .0
}
