//! Runtime configuration from environment variables.

use std::path::PathBuf;

use thiserror::Error;

use sabores_catalog::{Catalog, Category};
use sabores_checkout::MessageSettings;
use sabores_core::DomainError;

pub const ENV_WHATSAPP_NUMBER: &str = "SABORES_WHATSAPP_NUMBER";
pub const ENV_RESTAURANT_NAME: &str = "SABORES_RESTAURANT_NAME";
pub const ENV_CURRENCY: &str = "SABORES_CURRENCY";
pub const ENV_DEFAULT_CATEGORY: &str = "SABORES_DEFAULT_CATEGORY";
pub const ENV_CATALOG_PATH: &str = "SABORES_CATALOG_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be digits only (country code included), got {value:?}")]
    InvalidWhatsappNumber { var: &'static str, value: String },

    #[error("{var} must not be blank")]
    Blank { var: &'static str },

    #[error("{var}: {source}")]
    UnknownCategory {
        var: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] DomainError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub message: MessageSettings,
    pub default_category: Category,
    /// JSON catalog to load instead of the built-in menu.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let destination = match lookup(ENV_WHATSAPP_NUMBER) {
            Some(value) => {
                let value = value.trim().trim_start_matches('+').to_string();
                if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
                    return Err(ConfigError::InvalidWhatsappNumber {
                        var: ENV_WHATSAPP_NUMBER,
                        value,
                    });
                }
                value
            }
            None => {
                tracing::warn!(
                    "{ENV_WHATSAPP_NUMBER} not set; using default {}",
                    defaults.message.destination
                );
                defaults.message.destination
            }
        };

        let restaurant_name = non_blank(&lookup, ENV_RESTAURANT_NAME)?
            .unwrap_or(defaults.message.restaurant_name);
        let currency_code =
            non_blank(&lookup, ENV_CURRENCY)?.unwrap_or(defaults.message.currency_code);

        let default_category = match lookup(ENV_DEFAULT_CATEGORY) {
            Some(value) => {
                value
                    .trim()
                    .parse::<Category>()
                    .map_err(|source| ConfigError::UnknownCategory {
                        var: ENV_DEFAULT_CATEGORY,
                        source,
                    })?
            }
            None => defaults.default_category,
        };

        let catalog_path = lookup(ENV_CATALOG_PATH)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            message: MessageSettings {
                restaurant_name,
                currency_code,
                destination,
            },
            default_category,
            catalog_path,
        })
    }

    /// The configured catalog file, or the built-in menu.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => {
                let json =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
                        path: path.clone(),
                        source,
                    })?;
                let catalog = Catalog::from_json(&json)?;
                tracing::info!(
                    path = %path.display(),
                    version = catalog.version(),
                    products = catalog.len(),
                    "catalog loaded from file"
                );
                Ok(catalog)
            }
            None => Ok(Catalog::builtin()?),
        }
    }
}

fn non_blank(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<String>, ConfigError> {
    match lookup(var) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Blank { var }),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.message.destination, "529614045971");
        assert_eq!(config.default_category, Category::Hamburguesas);
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_WHATSAPP_NUMBER, "+15550001111"),
            (ENV_RESTAURANT_NAME, " La Esquina "),
            (ENV_CURRENCY, "USD"),
            (ENV_DEFAULT_CATEGORY, "bebidas"),
            (ENV_CATALOG_PATH, "/tmp/menu.json"),
        ]))
        .unwrap();

        assert_eq!(config.message.destination, "15550001111");
        assert_eq!(config.message.restaurant_name, "La Esquina");
        assert_eq!(config.message.currency_code, "USD");
        assert_eq!(config.default_category, Category::Bebidas);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/menu.json")));
    }

    #[test]
    fn rejects_non_numeric_destination() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_WHATSAPP_NUMBER, "55-1234")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWhatsappNumber { .. }));
    }

    #[test]
    fn rejects_unknown_category_and_blank_name() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(ENV_DEFAULT_CATEGORY, "postres")])),
            Err(ConfigError::UnknownCategory { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(ENV_RESTAURANT_NAME, "  ")])),
            Err(ConfigError::Blank { .. })
        ));
    }

    #[test]
    fn missing_catalog_file_is_reported() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/sabores/menu.json")),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.load_catalog(),
            Err(ConfigError::CatalogRead { .. })
        ));
    }

    #[test]
    fn builtin_catalog_is_default() {
        let catalog = AppConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 14);
    }
}
