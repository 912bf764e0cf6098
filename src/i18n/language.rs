//! Language type: validated language representation.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// Only supported, enabled languages can be constructed, so a `Language`
/// value is always safe to index the bundled dictionaries with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "es", "ca")
    code: &'static str,
}

impl Language {
    /// Spanish, the default language.
    pub const SPANISH: Language = Language { code: "es" };

    /// Catalan.
    pub const CATALAN: Language = Language { code: "ca" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is supported and enabled
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The configured fallback language, used whenever no valid preference
    /// is persisted.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// The ISO 639-1 language code (e.g., "es", "ca").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry; unreachable for values
    /// constructed via `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// The English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// The native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this is the fallback language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
