//! Internationalization (i18n) module.
//!
//! This module owns everything language-related: the set of supported
//! languages, the compile-time-bundled dictionaries, and the process-wide
//! translation store the UI layer reads labels from.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for supported languages and their metadata
//! - `language`: type-safe Language type validated against the registry
//! - `dictionary`: bundled per-language JSON trees and dotted-path resolution
//! - `store`: the TranslationStore (initialize / lookup / set_language)
//!
//! # Example
//!
//! ```rust,ignore
//! use ledat_client::i18n::{Language, TranslationStore};
//!
//! let store = TranslationStore::new(storage, Language::default_language(), false);
//! store.initialize().await;
//! let label = store.lookup("loginButton", "auth");
//! ```

mod dictionary;
mod language;
mod registry;
mod store;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use store::{StoreState, TranslationStore};
