//! HTTP handlers for the contact resources.
//!
//! Handlers parse the request, call the repository and render a page. None of
//! them hold state between requests.

use crate::domain::ContactId;
use crate::error::StoreError;
use crate::server::form::{parse_contact, ContactForm, FormValues, ListQuery};
use crate::server::pages::{self, ContactFormPageUrls, ContactPageUrls, SearchPage};
use crate::server::paths::{search_page_url, ResourcePath, CONTACT_ID};
use crate::server::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::{debug, info, warn};

/// Message returned when an email belongs to another contact.
pub const EMAIL_IN_USE: &str = "email address already in use";

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, message).into_response()
}

/// 302 Found, as browsers expect after a successful form post.
fn found(location: &ResourcePath) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// The contact id named by the request, or the 400 response to send instead.
fn required_id(values: &FormValues) -> Result<ContactId, Response> {
    if !values.has(CONTACT_ID) {
        return Err(bad_request(format!("Missing {:?} parameter", CONTACT_ID)));
    }
    let raw = values.trimmed(CONTACT_ID);
    ContactId::parse(raw).map_err(|e| {
        warn!("Failed to parse id {:?}: {}", raw, e);
        bad_request(format!("Failed to parse id {:?}: {}", raw, e))
    })
}

fn form_urls(state: &AppState, id: &str, existing: bool) -> ContactFormPageUrls {
    let paths = &state.paths;
    ContactFormPageUrls {
        contact_list: paths.list.to_string(),
        contact_form: paths.form.with_param(CONTACT_ID, id).to_string(),
        delete_contact: existing.then(|| paths.root.with_param(CONTACT_ID, id).to_string()),
        patch_contact_email: paths.email.with_param(CONTACT_ID, id).to_string(),
    }
}

/// `GET root?Id=`: a single contact.
pub async fn get_contact(State(state): State<AppState>, values: FormValues) -> Response {
    let id = match required_id(&values) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.repo.find_by_id(&id) {
        Some(contact) => {
            let urls = ContactPageUrls {
                contact_list: state.paths.list.to_string(),
                contact_form: state.paths.form.with_param(CONTACT_ID, id.as_str()).to_string(),
            };
            Html(pages::contact_page(&contact, &urls)).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// `DELETE root` with `Id`: remove a contact and go back to the list.
pub async fn delete_contact(State(state): State<AppState>, values: FormValues) -> Response {
    let id = match required_id(&values) {
        Ok(id) => id,
        Err(response) => return response,
    };

    state.repo.delete(&id);
    info!(contact_id = %id, "Deleted contact");
    Redirect::to(state.paths.list.as_str()).into_response()
}

/// `GET form`: blank form for a new contact, or `GET form?Id=` to edit one.
pub async fn get_form(State(state): State<AppState>, values: FormValues) -> Response {
    if !values.has(CONTACT_ID) {
        let form = ContactForm::blank(&ContactId::new());
        let urls = form_urls(&state, &form.id, false);
        return Html(pages::contact_form_page(&form, &urls)).into_response();
    }

    let id = match required_id(&values) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.repo.find_by_id(&id) {
        Some(contact) => {
            let urls = form_urls(&state, id.as_str(), true);
            Html(pages::contact_form_page(&ContactForm::from(&contact), &urls)).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// `POST form`: create or update a contact.
///
/// Invalid input and email conflicts re-render the form with the submitted
/// values; nothing is stored in either case.
pub async fn post_form(State(state): State<AppState>, values: FormValues) -> Response {
    let contact = match parse_contact(&values) {
        Ok(contact) => contact,
        Err(form) => {
            info!("Error parsing contact form: {:?}", form.errors);
            return render_form(&state, &form);
        }
    };

    let id = contact.id.clone();
    match state.repo.store(contact.clone()) {
        Ok(()) => {
            info!(contact_id = %id, "Stored contact");
            found(&state.paths.list)
        }
        Err(StoreError::EmailConflict { email, existing: owner }) => {
            info!(contact_id = %id, owner = %owner, "Email {:?} already assigned", email);
            let mut form = ContactForm::from(&contact);
            form.set_error("Email", EMAIL_IN_USE);
            render_form(&state, &form)
        }
    }
}

fn render_form(state: &AppState, form: &ContactForm) -> Response {
    let existing = ContactId::parse(&form.id)
        .map(|id| state.repo.find_by_id(&id).is_some())
        .unwrap_or(false);
    let urls = form_urls(state, &form.id, existing);
    Html(pages::contact_form_page(form, &urls)).into_response()
}

/// `GET list`: paginated listing, filtered when `SearchTerm` is present.
pub async fn get_list(State(state): State<AppState>, values: FormValues) -> Response {
    let query = ListQuery::from(&values);
    let page = match query.page(state.page_size_min, state.page_size_max) {
        Ok(page) => page,
        Err(e) => return bad_request(e.to_string()),
    };

    let term = query.term();
    let result = if term.is_empty() {
        debug!(offset = page.offset, size = page.size, "Listing all contacts");
        state.repo.find_all(page)
    } else {
        debug!(offset = page.offset, size = page.size, "Listing contacts containing {:?}", term);
        state.repo.find_by_search_term(term, page)
    };

    let next_page = result
        .more
        .then(|| search_page_url(page.next(), term, &state.paths.list));

    let html = pages::contact_list_page(&SearchPage {
        search_term: term,
        contacts: &result.contacts,
        list_path: &state.paths.list,
        form_path: &state.paths.form,
        contact_path: &state.paths.root,
        next_page,
    });
    Html(html).into_response()
}

/// `PATCH email` with `Id` and `Email`: check whether the email is free for
/// this contact. Nothing is modified.
pub async fn patch_email(State(state): State<AppState>, values: FormValues) -> Response {
    let id = ContactId::parse(values.trimmed(CONTACT_ID)).ok();
    let email = values.trimmed("Email");
    debug!("Validating email {:?} for contact {:?}", email, id);

    if email.is_empty() {
        return StatusCode::OK.into_response();
    }

    match state.repo.find_id_by_email(email) {
        Some(owner) if Some(&owner) != id.as_ref() => {
            (StatusCode::BAD_REQUEST, EMAIL_IN_USE).into_response()
        }
        _ => StatusCode::OK.into_response(),
    }
}

/// `GET /healthcheck`: build revision and current time.
pub async fn healthcheck() -> String {
    let commit = std::env::var("GITHUB_SHA").unwrap_or_else(|_| "unknown".to_string());
    let now = chrono::Utc::now().to_rfc2822();
    debug!("Health check reported");
    format!("Commit: {}\nTime: {}\n", commit, now)
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], pages::STYLESHEET)
}

/// `GET /`: the list is the home page.
pub async fn home(State(state): State<AppState>) -> Response {
    found(&state.paths.list)
}
