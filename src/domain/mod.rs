//! Domain value objects and types.
//!
//! This module contains the contact record itself, its type-safe identifier
//! and the pagination cursor used to slice ordered result sets.

pub mod contact;
pub mod contact_id;
pub mod errors;
pub mod page;

pub use contact::Contact;
pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use page::Page;
