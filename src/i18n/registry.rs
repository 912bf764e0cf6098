//! Language registry: single source of truth for all supported languages.
//!
//! Uses a singleton with `OnceLock` for thread-safe initialization; the
//! registry is immutable after first access.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "es", "ca")
    pub code: &'static str,

    /// English name of the language (e.g., "Spanish", "Catalan")
    pub name: &'static str,

    /// Native name of the language (e.g., "Español", "Català")
    pub native_name: &'static str,

    /// Whether this is the fallback language selected when no valid
    /// preference is persisted (exactly one should be true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// The default (fallback) language configuration.
    ///
    /// # Panics
    /// Panics if zero or multiple default languages are defined; that is a
    /// configuration error caught by the tests below.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The supported language set: Spanish (default) and Catalan.
fn supported_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "ca",
            name: "Catalan",
            native_name: "Català",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_spanish() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("es").expect("es should exist");

        assert_eq!(config.code, "es");
        assert_eq!(config.name, "Spanish");
        assert_eq!(config.native_name, "Español");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_catalan() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("ca").expect("ca should exist");

        assert_eq!(config.code, "ca");
        assert_eq!(config.name, "Catalan");
        assert_eq!(config.native_name, "Català");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_enabled() {
        let registry = LanguageRegistry::get();
        let enabled = registry.list_enabled();

        assert_eq!(enabled.len(), 2);
        assert!(enabled.iter().any(|lang| lang.code == "es"));
        assert!(enabled.iter().any(|lang| lang.code == "ca"));
    }

    #[test]
    fn test_default_language_is_spanish() {
        let registry = LanguageRegistry::get();
        let default = registry.default_language();

        assert_eq!(default.code, "es");
        assert!(default.is_default);
    }

    #[test]
    fn test_is_enabled() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("es"));
        assert!(registry.is_enabled("ca"));
        assert!(!registry.is_enabled("en"));
        assert!(!registry.is_enabled(""));
    }
}
