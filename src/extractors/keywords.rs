// src/extractors/keywords.rs

// --- Imports ---
use crate::config::{self, KeywordConfig};
use crate::utils::error::ConfigError;
use regex::Regex;

// --- Data Structures ---
struct KeywordPattern {
    keyword: String,
    pattern: Regex,
}

struct CategoryPatterns {
    name: String,
    global: bool,
    keywords: Vec<KeywordPattern>,
}

/// Whole-word keyword search over a document.
///
/// One regex per configured keyword, compiled once at construction. Global
/// categories (country names) search the full document text with exact case;
/// every other category searches only the area of interest, ignoring case.
pub struct KeywordMatcher {
    categories: Vec<CategoryPatterns>,
}

impl KeywordMatcher {
    pub fn new(config: &KeywordConfig) -> Result<Self, ConfigError> {
        let mut categories = Vec::with_capacity(config.len());
        for category in config.iter() {
            let global = config::is_global(&category.name);
            let mut keywords = Vec::with_capacity(category.keywords.len());
            for keyword in &category.keywords {
                let flags = if global { "" } else { "(?i)" };
                let pattern = format!(r"{flags}\b{}\b", regex::escape(keyword));
                let pattern =
                    Regex::new(&pattern).map_err(|source| ConfigError::Pattern {
                        keyword: keyword.clone(),
                        source,
                    })?;
                keywords.push(KeywordPattern {
                    keyword: keyword.clone(),
                    pattern,
                });
            }
            categories.push(CategoryPatterns {
                name: category.name.clone(),
                global,
                keywords,
            });
        }
        Ok(Self { categories })
    }

    /// Returns, per category in configuration order, the ordered subset of
    /// its keywords found in the relevant text.
    pub fn matches(&self, full_text: &str, section_text: &str) -> Vec<(String, Vec<String>)> {
        self.categories
            .iter()
            .map(|category| {
                let haystack = if category.global { full_text } else { section_text };
                let hits = category
                    .keywords
                    .iter()
                    .filter(|k| k.pattern.is_match(haystack))
                    .map(|k| k.keyword.clone())
                    .collect();
                (category.name.clone(), hits)
            })
            .collect()
    }
}
