//! Pure suggestion filtering for the typeahead fields.
//!
//! Everything here is a total function of its arguments: no channels, no
//! clocks, no state. The debounce workers call into this module and the
//! tests exercise it directly.

/// Items shown when the query is empty (the "default suggestions" policy).
pub const DEFAULT_SUGGESTION_COUNT: usize = 6;

/// Maximum visible rows in either dropdown.
pub const SUGGESTION_CAP: usize = 8;

/// Candidate pool gathered for a non-empty search-field query before
/// deduplication.
pub const SEARCH_POOL_CAP: usize = 6;

/// What: Filter a corpus by case-insensitive substring match with a cap.
///
/// Inputs:
/// - `query`: Raw user input; matching ignores case and surrounding whitespace.
/// - `corpus`: Full candidate list, order preserved in the output.
/// - `cap`: Maximum number of items returned.
///
/// Output:
/// - Matching items in corpus order, truncated to `cap`.
///
/// Details:
/// - An empty (or whitespace-only) query returns the first
///   `min(cap, DEFAULT_SUGGESTION_COUNT)` corpus items instead of matching.
/// - Matching is locale-naive: lowercased substring containment.
#[must_use]
pub fn filter_suggestions(query: &str, corpus: &[String], cap: usize) -> Vec<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return corpus
            .iter()
            .take(cap.min(DEFAULT_SUGGESTION_COUNT))
            .cloned()
            .collect();
    }
    corpus
        .iter()
        .filter(|item| item.to_lowercase().contains(&q))
        .take(cap)
        .cloned()
        .collect()
}

/// What: Filter specialties for the search field, deduplicating before the
/// final truncation.
///
/// Inputs:
/// - `query`: Raw search input.
/// - `corpus`: Specialty vocabulary.
///
/// Output:
/// - Up to [`SUGGESTION_CAP`] unique suggestions in corpus order.
///
/// Details:
/// - Non-empty queries gather at most [`SEARCH_POOL_CAP`] substring matches
///   first; duplicates that differ only by case collapse to the earliest
///   spelling before the cap is applied.
#[must_use]
pub fn filter_search_suggestions(query: &str, corpus: &[String]) -> Vec<String> {
    let pool = filter_suggestions(query, corpus, SEARCH_POOL_CAP);
    let mut seen = std::collections::HashSet::new();
    let mut unique: Vec<String> = Vec::with_capacity(pool.len());
    for item in pool {
        if seen.insert(item.to_lowercase()) {
            unique.push(item);
        }
    }
    unique.truncate(SUGGESTION_CAP);
    unique
}
