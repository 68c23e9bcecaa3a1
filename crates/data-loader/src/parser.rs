//! Parser for the movie dataset payload.
//!
//! The payload is a JSON array of objects:
//!
//! ```text
//! [
//!   {
//!     "title": "Iron Man",
//!     "release_date": "2008-05-02",
//!     "chronological_order": 3,
//!     "phase": "Phase 1",
//!     "main_character": "Iron Man",
//!     "poster_url": "https://..."
//!   }
//! ]
//! ```
//!
//! Only the outer shape is enforced. Field values are read leniently: a
//! field with the wrong JSON type is treated as absent instead of failing
//! the whole dataset.

use crate::error::{FetchError, Result};
use crate::types::{MovieRecord, ReleaseDate};
use serde_json::{Map, Value};

/// Parse a dataset payload into records, preserving source order
pub fn parse_movies(bytes: &[u8], source_name: &str) -> Result<Vec<MovieRecord>> {
    let payload: Value = serde_json::from_slice(bytes).map_err(|e| FetchError::Malformed {
        source_name: source_name.to_string(),
        reason: format!("Invalid JSON: {}", e),
    })?;

    let entries = match payload {
        Value::Array(entries) => entries,
        other => {
            return Err(FetchError::Malformed {
                source_name: source_name.to_string(),
                reason: format!("Expected an array of movies, found {}", json_kind(&other)),
            });
        }
    };

    let mut movies = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.into_iter().enumerate() {
        match entry {
            Value::Object(fields) => movies.push(parse_movie(&fields)),
            other => {
                return Err(FetchError::Malformed {
                    source_name: source_name.to_string(),
                    reason: format!(
                        "Entry {} should be an object, found {}",
                        idx,
                        json_kind(&other)
                    ),
                });
            }
        }
    }

    Ok(movies)
}

/// Build one record from its JSON fields
fn parse_movie(fields: &Map<String, Value>) -> MovieRecord {
    let release_date = match fields.get("release_date") {
        Some(Value::String(raw)) => ReleaseDate::parse(raw),
        _ => ReleaseDate::missing(),
    };

    MovieRecord {
        title: text_field(fields, "title").unwrap_or_default(),
        release_date,
        chronological_order: integer_field(fields, "chronological_order"),
        phase: text_field(fields, "phase"),
        main_character: text_field(fields, "main_character"),
        poster_url: text_field(fields, "poster_url"),
    }
}

/// A non-empty string field. Empty strings, `null` and non-strings are `None`.
fn text_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// An integer field, also accepting integral floats (`3.0`) and numeric
/// strings (`"3"`).
fn integer_field(fields: &Map<String, Value>, name: &str) -> Option<i64> {
    match fields.get(name)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_complete_record() {
        let payload = br#"[{
            "title": "Iron Man",
            "release_date": "2008-05-02",
            "chronological_order": 3,
            "phase": "Phase 1",
            "main_character": "Iron Man",
            "poster_url": "https://example.com/iron-man.jpg"
        }]"#;

        let movies = parse_movies(payload, "movies.json").unwrap();
        assert_eq!(movies.len(), 1);

        let movie = &movies[0];
        assert_eq!(movie.title, "Iron Man");
        assert_eq!(movie.release_date.date(), NaiveDate::from_ymd_opt(2008, 5, 2));
        assert_eq!(movie.chronological_order, Some(3));
        assert_eq!(movie.phase.as_deref(), Some("Phase 1"));
        assert_eq!(movie.main_character.as_deref(), Some("Iron Man"));
        assert_eq!(
            movie.poster_url.as_deref(),
            Some("https://example.com/iron-man.jpg")
        );
    }

    #[test]
    fn test_missing_optional_fields_degrade() {
        let payload = br#"[{
            "title": "Captain America: The First Avenger",
            "release_date": "2011-07-22",
            "chronological_order": "1",
            "phase": "",
            "main_character": null,
            "poster_url": 42
        }]"#;

        let movies = parse_movies(payload, "movies.json").unwrap();
        let movie = &movies[0];
        assert_eq!(movie.chronological_order, Some(1));
        assert_eq!(movie.phase, None);
        assert_eq!(movie.main_character, None);
        assert_eq!(movie.poster_url, None);
    }

    #[test]
    fn test_malformed_required_fields_do_not_fail() {
        let payload = br#"[{ "release_date": "someday", "chronological_order": "first" }]"#;

        let movies = parse_movies(payload, "movies.json").unwrap();
        assert_eq!(movies[0].title, "");
        assert!(!movies[0].release_date.is_valid());
        assert_eq!(movies[0].chronological_order, None);
    }

    #[test]
    fn test_integral_float_order() {
        let payload = br#"[{ "title": "Thor", "release_date": "2011-05-06", "chronological_order": 4.0 }]"#;
        let movies = parse_movies(payload, "movies.json").unwrap();
        assert_eq!(movies[0].chronological_order, Some(4));
    }

    #[test]
    fn test_empty_array() {
        let movies = parse_movies(b"[]", "movies.json").unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn test_rejects_non_array_payload() {
        let err = parse_movies(br#"{"movies": []}"#, "movies.json").unwrap_err();
        assert!(matches!(err, FetchError::Malformed { .. }));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_rejects_non_object_entry() {
        let err = parse_movies(br#"[{"title": "Thor"}, "Loki"]"#, "movies.json").unwrap_err();
        assert!(err.to_string().contains("Entry 1"));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = parse_movies(b"[{", "movies.json").unwrap_err();
        assert!(matches!(err, FetchError::Malformed { .. }));
    }
}
