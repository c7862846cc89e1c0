//! Contacts Web - a server-rendered contact list manager.
//!
//! Contacts can be created, viewed, edited, deleted, searched and paged through
//! from plain HTML pages. All records live in an in-memory store owned by the
//! process.
//!
//! # Architecture
//!
//! - **domain**: Contact, its UUID-based id and the pagination cursor
//! - **repositories**: The contact store trait and its in-memory implementation
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **server**: Routes, request parsing and HTML rendering on axum

pub mod config;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod server;

pub use config::Config;
pub use domain::{Contact, ContactId, Page, ValidationError};
pub use error::{ConfigError, PathsError, StoreError};
pub use repositories::{ContactRepository, InMemoryContactRepository, PageResult};
pub use server::{AppState, ResourcePath, ResourcePaths};
