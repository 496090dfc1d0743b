// src/pipeline/models.rs
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Everything extracted from one document. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Annotated patient count ("120\n(...context...)"), empty when the
    /// heuristic found nothing.
    pub patients: String,
    /// Study period as a year pair, (0, 0) when none was found.
    pub year_range: (u16, u16),
    /// Annotated study-period match, empty when none was found.
    pub period: String,
    /// Per category, in configuration order, the keywords that matched.
    pub keyword_matches: Vec<(String, Vec<String>)>,
    /// Whether both section boundaries were found, or sentinels were used.
    pub area_of_interest_matched: bool,
}

// Serialized as the report object consumers see: fixed columns first, then
// one key per configured category, then the match flag.
impl Serialize for ExtractionResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3 + self.keyword_matches.len()))?;
        map.serialize_entry("#Patients", &self.patients)?;
        map.serialize_entry("Period Of Study", &self.period)?;
        for (category, matched) in &self.keyword_matches {
            map.serialize_entry(category, matched)?;
        }
        map.serialize_entry("AreaOfInterestMatched", &self.area_of_interest_matched)?;
        map.end()
    }
}

/// Results for a whole run, keyed by document filename.
///
/// Insertion order is filesystem discovery order and is preserved through
/// serialization, which is why this is not a HashMap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(String, ExtractionResult)>,
}

impl ResultSet {
    pub fn insert(&mut self, filename: String, result: ExtractionResult) {
        self.entries.push((filename, result));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, ExtractionResult)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResultSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (filename, result) in &self.entries {
            map.serialize_entry(filename, result)?;
        }
        map.end()
    }
}
