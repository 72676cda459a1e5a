//! Suggestion vocabulary bootstrap.
//!
//! The two endpoints are fetched concurrently once per session. Failures
//! and malformed payloads degrade to empty corpora: the widget stays
//! usable with zero suggestions and never surfaces a startup error.

use serde_json::Value;

use crate::state::SuggestionSource;

/// What: Fetch a JSON endpoint expected to contain an array of strings.
///
/// Inputs:
/// - `url`: Full endpoint URL.
///
/// Output:
/// - The array's string entries in order; empty on any failure.
///
/// Details:
/// - Non-array payloads and non-string entries are coerced away rather
///   than treated as errors; problems are logged at warn level.
async fn fetch_string_array(url: &str) -> Vec<String> {
    let resp = match reqwest::get(url).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(url, error = %e, "suggestion fetch failed");
            return Vec::new();
        }
    };
    match resp.json::<Value>().await {
        Ok(v) => {
            if !v.is_array() {
                tracing::warn!(url, "suggestion endpoint returned a non-array payload");
            }
            corpus_from_value(&v)
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "suggestion payload was not valid JSON");
            Vec::new()
        }
    }
}

/// What: Fetch both vocabularies concurrently.
///
/// Inputs:
/// - `backend_url`: Base URL of the provider backend.
///
/// Output:
/// - [`SuggestionSource`] snapshot; either list may be empty.
pub async fn fetch_suggestions(backend_url: &str) -> SuggestionSource {
    let base = backend_url.trim_end_matches('/');
    let specialties_url = format!("{base}/api/specialties");
    let locations_url = format!("{base}/api/locations");
    let (specialties, locations) = tokio::join!(
        fetch_string_array(&specialties_url),
        fetch_string_array(&locations_url),
    );
    tracing::info!(
        specialties = specialties.len(),
        locations = locations.len(),
        "suggestion corpora loaded"
    );
    SuggestionSource {
        specialties,
        locations,
    }
}

/// What: Coerce a decoded JSON value into a string corpus.
///
/// Inputs:
/// - `v`: Decoded payload.
///
/// Output:
/// - String entries of an array payload; empty for anything else.
///
/// Details:
/// - Split out from the fetch path so the lenient-decoding rules are
///   testable without a server.
#[must_use]
pub fn corpus_from_value(v: &Value) -> Vec<String> {
    match v {
        Value::Array(items) => items
            .iter()
            .filter_map(|it| it.as_str().map(ToOwned::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Lenient decoding of suggestion payloads
    ///
    /// - Input: Array with mixed types, object, string, null
    /// - Output: Strings kept in order for arrays; empty otherwise
    fn sources_corpus_from_value_lenient() {
        let mixed = serde_json::json!(["Dentist", 42, "Cardiologist", null]);
        assert_eq!(corpus_from_value(&mixed), vec!["Dentist", "Cardiologist"]);
        assert_eq!(
            corpus_from_value(&serde_json::json!({"items": ["x"]})),
            Vec::<String>::new()
        );
        assert_eq!(corpus_from_value(&serde_json::json!("oops")), Vec::<String>::new());
        assert_eq!(corpus_from_value(&serde_json::json!(null)), Vec::<String>::new());
    }
}
