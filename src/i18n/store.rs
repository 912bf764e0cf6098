//! The process-wide translation store.
//!
//! Holds the active language and resolves dotted keys against the bundled
//! dictionaries. Lookups are synchronous so any component (including the
//! HTTP client at dispatch time) can read labels and the locale code without
//! awaiting; only `initialize` and `set_language` touch device storage.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use super::{dictionary, Language};
use crate::storage::{keys, Storage};

/// Lifecycle state of the translation store.
///
/// `Loading` is entered once at construction and left unconditionally by
/// `initialize`, whether or not the storage read succeeded. There is no
/// retry state and no way back into `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Loading,
    Ready,
}

pub struct TranslationStore {
    storage: Arc<Storage>,
    current: RwLock<Language>,
    ready: AtomicBool,
    debug_misses: bool,
}

impl TranslationStore {
    /// Create a store in the `Loading` state with `default_language` active.
    ///
    /// `debug_misses` turns missing-key lookups into logged warnings;
    /// production builds keep it off and fall back silently.
    pub fn new(storage: Arc<Storage>, default_language: Language, debug_misses: bool) -> Self {
        Self {
            storage,
            current: RwLock::new(default_language),
            ready: AtomicBool::new(false),
            debug_misses,
        }
    }

    /// Read the persisted language slot and settle the active language.
    ///
    /// Absent, unsupported, or unreadable values keep the default. The
    /// store is `Ready` when this returns, whatever happened.
    pub async fn initialize(&self) {
        if let Some(code) = self.storage.get(keys::APP_LANGUAGE).await {
            match Language::from_code(&code) {
                Ok(language) => self.set_current(language),
                Err(_) => debug!("Ignoring unsupported persisted language '{}'", code),
            }
        }
        self.ready.store(true, Ordering::Release);
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StoreState {
        if self.ready.load(Ordering::Acquire) {
            StoreState::Ready
        } else {
            StoreState::Loading
        }
    }

    /// The active language. Readable at any time; while `Loading` this is
    /// the configured default.
    pub fn current(&self) -> Language {
        match self.current.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Resolve `key` within `namespace` for the active language.
    ///
    /// Total function: a missing key comes back verbatim so the UI renders
    /// the key itself instead of crashing over a missing label.
    pub fn lookup(&self, key: &str, namespace: &str) -> String {
        let language = self.current();
        match dictionary::resolve(dictionary::tree(language), namespace, key) {
            Some(text) => text.to_string(),
            None => {
                if self.debug_misses {
                    warn!(
                        "Missing translation '{}' in namespace '{}' for '{}'",
                        key,
                        namespace,
                        language.code()
                    );
                }
                key.to_string()
            }
        }
    }

    /// `lookup` in the default "common" namespace.
    pub fn translate(&self, key: &str) -> String {
        self.lookup(key, "common")
    }

    /// Switch the active language and persist the choice.
    ///
    /// Codes outside the supported set are ignored. A failed persist
    /// degrades to an in-memory-only switch (handled inside `Storage`).
    pub async fn set_language(&self, code: &str) {
        match Language::from_code(code) {
            Ok(language) => {
                self.set_current(language);
                self.storage.set(keys::APP_LANGUAGE, language.code()).await;
            }
            Err(_) => debug!("Ignoring unsupported language code '{}'", code),
        }
    }

    fn set_current(&self, language: Language) {
        match self.current.write() {
            Ok(mut guard) => *guard = language,
            Err(poisoned) => *poisoned.into_inner() = language,
        }
    }
}
