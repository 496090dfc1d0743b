// src/config/mod.rs
use crate::utils::error::ConfigError;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// Categories searched against the whole document instead of only the
/// area of interest. These also match with exact case, so country names
/// like "Chad" don't collide with common lowercase words.
pub const GLOBAL_CATEGORIES: &[&str] = &["Country"];

pub fn is_global(category: &str) -> bool {
    GLOBAL_CATEGORIES.contains(&category)
}

/// One keyword category as configured: a name and its ordered keyword list.
#[derive(Debug, Clone)]
pub struct KeywordCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// The keyword configuration, loaded once at startup and immutable for a run.
///
/// Category order and keyword order follow the configuration file; match
/// results and report columns are emitted in that same order.
#[derive(Debug, Clone, Default)]
pub struct KeywordConfig {
    categories: Vec<KeywordCategory>,
}

impl KeywordConfig {
    pub fn new(categories: Vec<KeywordCategory>) -> Self {
        Self { categories }
    }

    /// Reads the configuration from a JSON file shaped as
    /// `{ "Category": ["keyword", ...], ... }`. Any failure here is fatal,
    /// before a single document is touched.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: KeywordConfig = serde_json::from_str(&raw)?;
        tracing::debug!(
            "Loaded {} keyword categories from {}",
            config.categories.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeywordCategory> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// serde_json's default map type would sort categories alphabetically; visiting
// the map entries directly keeps the file's own ordering.
impl<'de> Deserialize<'de> for KeywordConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = KeywordConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category name to keyword list")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = Vec::new();
                while let Some((name, keywords)) = map.next_entry::<String, Vec<String>>()? {
                    categories.push(KeywordCategory { name, keywords });
                }
                Ok(KeywordConfig { categories })
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_preserved() {
        let json = r#"{
            "Drug": ["aspirin", "ibuprofen"],
            "Condition": ["asthma"],
            "Country": ["France", "Chad"]
        }"#;

        let config: KeywordConfig = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = config.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Drug", "Condition", "Country"]);
        assert_eq!(config.iter().next().unwrap().keywords, vec!["aspirin", "ibuprofen"]);
    }

    #[test]
    fn test_global_category_set() {
        assert!(is_global("Country"));
        assert!(!is_global("Drug"));
        assert!(!is_global("country"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = KeywordConfig::load(Path::new("/nonexistent/keywords.json"));
        assert!(matches!(err, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = serde_json::from_str::<KeywordConfig>(r#"["not", "a", "map"]"#);
        assert!(err.is_err());
    }
}
