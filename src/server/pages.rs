//! Server-rendered HTML pages.
//!
//! Every piece of dynamic text goes through [`escape`] before it reaches the
//! markup, including URLs placed in attributes.

use crate::domain::Contact;
use crate::server::form::ContactForm;
use crate::server::paths::{ResourcePath, CONTACT_ID};
use std::fmt::Write;

/// Stylesheet served under the public assets path.
pub const STYLESHEET: &str = r#"body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 48rem; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.25rem 0.5rem; border-bottom: 1px solid #ddd; }
label { display: block; margin-top: 0.75rem; }
.error { color: #b00020; font-size: 0.9em; }
nav a { margin-right: 1rem; }
"#;

/// Path the stylesheet is served from.
pub const STYLESHEET_PATH: &str = "/public/style.css";

/// Links shown on a single contact page.
#[derive(Debug, Clone)]
pub struct ContactPageUrls {
    pub contact_list: String,
    pub contact_form: String,
}

/// Links shown on the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactFormPageUrls {
    pub contact_list: String,
    pub contact_form: String,
    /// Only set for contacts that already exist
    pub delete_contact: Option<String>,
    pub patch_contact_email: String,
}

/// The list page: one page of results plus an optional link to the next.
#[derive(Debug, Clone)]
pub struct SearchPage<'a> {
    pub search_term: &'a str,
    pub contacts: &'a [Contact],
    pub list_path: &'a ResourcePath,
    pub form_path: &'a ResourcePath,
    /// Single contact page, linked with the contact id appended
    pub contact_path: &'a ResourcePath,
    pub next_page: Option<String>,
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="{css}">
<script src="https://unpkg.com/htmx.org@1.9.12"></script>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        css = STYLESHEET_PATH,
        body = body,
    )
}

pub fn contact_page(contact: &Contact, urls: &ContactPageUrls) -> String {
    let body = format!(
        r#"<h1>{name}</h1>
<dl>
<dt>First name</dt><dd>{first}</dd>
<dt>Last name</dt><dd>{last}</dd>
<dt>Phone</dt><dd>{phone}</dd>
<dt>Email</dt><dd>{email}</dd>
</dl>
<nav><a href="{form}">Edit</a><a href="{list}">Back</a></nav>"#,
        name = escape(&contact.full_name()),
        first = escape(&contact.first_name),
        last = escape(&contact.last_name),
        phone = escape(&contact.phone),
        email = escape(&contact.email),
        form = escape(&urls.contact_form),
        list = escape(&urls.contact_list),
    );
    layout(&contact.full_name(), &body)
}

fn field(
    out: &mut String,
    form: &ContactForm,
    name: &'static str,
    label: &str,
    kind: &str,
    value: &str,
    extra: &str,
) {
    let _ = write!(
        out,
        r#"<label>{label} <input type="{kind}" name="{name}" value="{value}"{extra}></label>"#,
        label = escape(label),
        kind = kind,
        name = name,
        value = escape(value),
        extra = extra,
    );
    let _ = write!(out, r#"<span class="error" id="{}-error">"#, name);
    if let Some(error) = form.error(name) {
        out.push_str(&escape(error));
    }
    out.push_str("</span>\n");
}

pub fn contact_form_page(form: &ContactForm, urls: &ContactFormPageUrls) -> String {
    let mut body = String::new();
    let title = if urls.delete_contact.is_some() {
        "Edit contact"
    } else {
        "New contact"
    };
    let _ = writeln!(body, "<h1>{}</h1>", title);
    let _ = writeln!(
        body,
        r#"<form method="post" action="{}">"#,
        escape(&urls.contact_form)
    );
    let _ = write!(
        body,
        r#"<input type="hidden" name="{}" value="{}">"#,
        CONTACT_ID,
        escape(&form.id)
    );
    if let Some(error) = form.error(CONTACT_ID) {
        let _ = write!(body, r#"<span class="error">{}</span>"#, escape(error));
    }
    body.push('\n');

    field(&mut body, form, "FirstName", "First name", "text", &form.first_name, "");
    field(&mut body, form, "LastName", "Last name", "text", &form.last_name, "");
    field(&mut body, form, "Phone", "Phone", "tel", &form.phone, "");
    let email_check = format!(
        r##" hx-patch="{}" hx-include="[name='{}']" hx-trigger="change, keyup delay:300ms" hx-target="#Email-error""##,
        escape(&urls.patch_contact_email),
        CONTACT_ID
    );
    field(&mut body, form, "Email", "Email", "email", &form.email, &email_check);

    body.push_str("<button type=\"submit\">Save</button>\n</form>\n<nav>");
    if let Some(delete) = &urls.delete_contact {
        let _ = write!(
            body,
            r#"<button hx-delete="{}" hx-confirm="Delete this contact?" hx-target="body" hx-push-url="true">Delete</button>"#,
            escape(delete)
        );
    }
    let _ = write!(body, r#"<a href="{}">Back</a></nav>"#, escape(&urls.contact_list));

    layout(title, &body)
}

pub fn contact_list_page(page: &SearchPage<'_>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Contacts</h1>\n");
    let _ = writeln!(
        body,
        r#"<form method="get" action="{}"><input type="search" name="SearchTerm" value="{}"><button type="submit">Search</button></form>"#,
        escape(page.list_path.as_str()),
        escape(page.search_term)
    );
    let _ = writeln!(
        body,
        r#"<nav><a href="{}">Add contact</a></nav>"#,
        escape(page.form_path.as_str())
    );

    if page.contacts.is_empty() {
        body.push_str("<p>No contacts found.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>First name</th><th>Last name</th><th>Phone</th><th>Email</th></tr>\n");
        for contact in page.contacts {
            let _ = writeln!(
                body,
                r#"<tr><td><a href="{}">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
                escape(page.contact_path.with_param(CONTACT_ID, contact.id.as_str()).as_str()),
                escape(&contact.first_name),
                escape(&contact.last_name),
                escape(&contact.phone),
                escape(&contact.email)
            );
        }
        body.push_str("</table>\n");
    }

    if let Some(next) = &page.next_page {
        let _ = writeln!(
            body,
            r#"<nav><a href="{}" rel="next">Next page</a></nav>"#,
            escape(next)
        );
    }

    layout("Contacts", &body)
}
