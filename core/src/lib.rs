//! Record model and external collaborator seams for the vault viewer.
//!
//! The vault service itself (authentication, item CRUD, field reveal) lives
//! outside this workspace. This crate only describes what the search engine
//! consumes: immutable [`types::Record`] summaries, the [`provider::VaultProvider`]
//! that lists them, and the persisted [`types::AppConfig`].

pub mod error;
pub mod provider;
pub mod types;

pub use error::{Error, ProviderError, Result, ValidationError};
