//! Client library for the LEDAT ("Libro del Edificio") building-documentation
//! REST API.
//!
//! The crate bundles the two pieces of local infrastructure every call path
//! crosses — the [`i18n::TranslationStore`] and the persisted key-value
//! [`storage::Storage`] — together with a shared [`client::ApiClient`] and one
//! thin service module per API area (authentication, buildings, documents,
//! users, email, notifications).
//!
//! Every remote endpoint answers with the uniform [`envelope::ApiResponse`]
//! shape. Expected business failures (validation errors, rule rejections)
//! arrive as `status == false` envelopes and are passed through to callers
//! unchanged; only transport-level failures become [`error::Error`] values.

pub mod auth;
pub mod buildings;
pub mod client;
pub mod config;
pub mod documents;
pub mod email;
pub mod envelope;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod storage;
pub mod users;

pub use client::ApiClient;
pub use config::Config;
pub use envelope::{Acknowledgement, ApiResponse};
pub use error::Error;
