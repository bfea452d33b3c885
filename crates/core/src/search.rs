//! Multi-term title search with relevance ranking.
//!
//! A query is split on whitespace into terms. A title matches when it
//! contains at least one term as a case-insensitive substring; its score is
//! the number of terms it contains. Case is folded one character at a time
//! with the simple lower-case mapping, the same way `ILIKE` compares, so
//! every candidate the database selects scores at least one. Results are ordered by score (highest
//! first), then by title as stored, and truncated to the requested limit.

use crate::error::CoreError;

/// Default number of search results.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Maximum number of search results.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    terms: Vec<String>,
    limit: i64,
}

impl SearchQuery {
    /// Validate the query text and result cap.
    ///
    /// The text must contain at least one non-whitespace character and the
    /// cap must be within `1..=MAX_SEARCH_LIMIT`.
    pub fn new(q: &str, limit: Option<i64>) -> Result<Self, CoreError> {
        let terms: Vec<String> = q.split_whitespace().map(fold_case).collect();
        if terms.is_empty() {
            return Err(CoreError::Validation(
                "q must contain at least one non-whitespace character".to_string(),
            ));
        }

        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
            return Err(CoreError::Validation(format!(
                "limit must be between 1 and {MAX_SEARCH_LIMIT}, got {limit}"
            )));
        }

        Ok(Self {
            raw: q.trim().to_string(),
            terms,
            limit,
        })
    }

    /// Lower-cased search terms, in query order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// `ILIKE` patterns selecting candidate rows: `%term%` per term, with
    /// wildcard characters in the term escaped.
    pub fn like_patterns(&self) -> Vec<String> {
        self.terms
            .iter()
            .map(|t| format!("%{}%", escape_like(t)))
            .collect()
    }

    /// Score a title against this query.
    pub fn score(&self, title: &str) -> u32 {
        relevance(title, &self.terms)
    }

    /// Rank candidate rows and cut the result to the limit.
    ///
    /// Candidates scoring zero are dropped. Returns
    /// [`CoreError::NoResults`] when nothing is left.
    pub fn rank<T, F>(&self, candidates: Vec<T>, title_of: F) -> Result<Vec<Ranked<T>>, CoreError>
    where
        F: Fn(&T) -> &str,
    {
        let mut ranked: Vec<Ranked<T>> = candidates
            .into_iter()
            .filter_map(|item| {
                let score = self.score(title_of(&item));
                (score > 0).then_some(Ranked { item, score })
            })
            .collect();

        if ranked.is_empty() {
            return Err(CoreError::NoResults(format!(
                "No films match '{}'",
                self.raw
            )));
        }

        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| title_of(&a.item).cmp(title_of(&b.item)))
        });
        ranked.truncate(self.limit as usize);

        Ok(ranked)
    }
}

/// A candidate paired with its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub score: u32,
}

/// Number of `terms` that occur in `title`, ignoring case.
///
/// `terms` are expected to be folded with [`fold_case`] already.
pub fn relevance(title: &str, terms: &[String]) -> u32 {
    let title = fold_case(title);
    terms.iter().filter(|t| title.contains(t.as_str())).count() as u32
}

/// Lower-case `text` character by character.
///
/// Each character maps to exactly one character and independently of its
/// neighbours: a word-final `Σ` becomes `σ`, not `ς`, and `İ` becomes a
/// plain `i`.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|ch| ch.to_lowercase().next().unwrap_or(ch))
        .collect()
}

/// Escape `\`, `%` and `_` so a term matches literally inside `LIKE`.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
