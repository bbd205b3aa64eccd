use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Rating shown when the catalog omits one (or sends `null`)
pub const DEFAULT_RATING: f64 = 4.5;

/// Comic identifier as sent by the catalog.
///
/// Backends disagree on whether ids are integers or strings, so both are
/// accepted and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComicId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ComicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComicId::Number(n) => write!(f, "{}", n),
            ComicId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ComicId {
    fn from(n: i64) -> Self {
        ComicId::Number(n)
    }
}

impl From<&str> for ComicId {
    fn from(s: &str) -> Self {
        ComicId::Text(s.to_string())
    }
}

impl ComicId {
    /// Loose comparison against user input (`42` matches both `42` and `"42"`)
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ComicId::Number(n) => raw.trim().parse::<i64>().is_ok_and(|r| r == *n),
            ComicId::Text(s) => s == raw.trim(),
        }
    }
}

/// One record of the catalog. Read-only from the UI's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comic {
    pub id: ComicId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_rating", deserialize_with = "rating_or_default")]
    pub rating: f64,
    #[serde(default)]
    pub cover_url: String,
}

fn default_rating() -> f64 {
    DEFAULT_RATING
}

fn rating_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_RATING))
}

impl Comic {
    /// Rating with exactly one decimal place, e.g. `4.5`
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rating_defaults() {
        let comic: Comic = serde_json::from_str(
            r#"{"id": 1, "title": "Saga", "author": "BKV", "description": "", "genre": "Sci-Fi", "tags": [], "cover_url": ""}"#,
        )
        .unwrap();
        assert_eq!(comic.rating, DEFAULT_RATING);
        assert_eq!(comic.rating_label(), "4.5");
    }

    #[test]
    fn test_null_rating_defaults() {
        let comic: Comic = serde_json::from_str(r#"{"id": 1, "rating": null}"#).unwrap();
        assert_eq!(comic.rating_label(), "4.5");
    }

    #[test]
    fn test_rating_label_rounds_to_one_decimal() {
        let comic: Comic = serde_json::from_str(r#"{"id": 1, "rating": 4}"#).unwrap();
        assert_eq!(comic.rating_label(), "4.0");

        let comic: Comic = serde_json::from_str(r#"{"id": 1, "rating": 3.86}"#).unwrap();
        assert_eq!(comic.rating_label(), "3.9");
    }

    #[test]
    fn test_id_accepts_number_and_string() {
        let numeric: Comic = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(numeric.id, ComicId::Number(7));
        assert!(numeric.id.matches("7"));

        let text: Comic = serde_json::from_str(r#"{"id": "watchmen-1986"}"#).unwrap();
        assert_eq!(text.id.to_string(), "watchmen-1986");
        assert!(text.id.matches("watchmen-1986"));
        assert!(!text.id.matches("7"));
    }

    #[test]
    fn test_tags_keep_order() {
        let comic: Comic =
            serde_json::from_str(r#"{"id": 1, "tags": ["noir", "crime", "classic"]}"#).unwrap();
        assert_eq!(comic.tags, vec!["noir", "crime", "classic"]);
    }
}
