//! Film listing filters.
//!
//! Raw query criteria (`releaseYear`, `languages`, `rentalRate`, `rating`)
//! are parsed into [`FilmCriteria`], then turned into a [`FilmFilter`]: a
//! conjunction of independent [`FilmPredicate`]s. Absent criteria contribute
//! no predicate. The storage layer renders the predicates as SQL; nothing in
//! this module reads or mutates entity state.

use crate::error::CoreError;
use crate::types::DbId;

/// A single constraint on the film entity.
#[derive(Debug, Clone, PartialEq)]
pub enum FilmPredicate {
    /// `release_year <= value`. Films with no release year never match.
    ReleaseYearAtMost(i32),
    /// `language_id` is one of the given ids. An empty set matches nothing.
    LanguageIn(Vec<DbId>),
    /// `rental_rate <= value`.
    RentalRateAtMost(f64),
    /// `rating` equals one of the given values exactly.
    RatingIn(Vec<String>),
}

/// Logical AND of zero or more predicates.
///
/// Predicates are independent of each other, so the order in which they are
/// added has no effect on the rows a filter selects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilmFilter {
    predicates: Vec<FilmPredicate>,
}

impl FilmFilter {
    /// A filter that imposes no constraint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate to the conjunction.
    pub fn and(mut self, predicate: FilmPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[FilmPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// Parsed listing criteria, before language names are resolved to ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilmCriteria {
    pub max_release_year: Option<i32>,
    pub language_names: Option<Vec<String>>,
    pub max_rental_rate: Option<f64>,
    pub ratings: Option<Vec<String>>,
}

impl FilmCriteria {
    /// Build criteria from raw query parameters.
    ///
    /// Comma-separated parameters are split and trimmed; a parameter that
    /// yields no items is treated as absent. A non-finite rental rate is
    /// rejected.
    pub fn from_query(
        release_year: Option<i32>,
        languages: Option<&str>,
        rental_rate: Option<f64>,
        rating: Option<&str>,
    ) -> Result<Self, CoreError> {
        if let Some(rate) = rental_rate {
            if !rate.is_finite() {
                return Err(CoreError::Validation(
                    "rentalRate must be a finite number".to_string(),
                ));
            }
        }

        Ok(Self {
            max_release_year: release_year,
            language_names: languages.map(parse_csv).filter(|v| !v.is_empty()),
            max_rental_rate: rental_rate,
            ratings: rating.map(parse_csv).filter(|v| !v.is_empty()),
        })
    }

    /// Language names that must be resolved before [`FilmCriteria::into_filter`].
    pub fn language_names(&self) -> Option<&[String]> {
        self.language_names.as_deref()
    }

    /// Build the filter, given the ids the language names resolved to.
    ///
    /// When language names were supplied, `language_ids` carries whatever the
    /// lookup found; names that did not resolve simply contribute no id, and
    /// if none resolved the filter matches no rows.
    pub fn into_filter(self, language_ids: Option<Vec<DbId>>) -> FilmFilter {
        let mut filter = FilmFilter::new();

        if let Some(year) = self.max_release_year {
            filter = filter.and(FilmPredicate::ReleaseYearAtMost(year));
        }
        if self.language_names.is_some() {
            filter = filter.and(FilmPredicate::LanguageIn(
                language_ids.unwrap_or_default(),
            ));
        }
        if let Some(rate) = self.max_rental_rate {
            filter = filter.and(FilmPredicate::RentalRateAtMost(rate));
        }
        if let Some(ratings) = self.ratings {
            filter = filter.and(FilmPredicate::RatingIn(ratings));
        }

        filter
    }
}

/// Split a comma-separated parameter into trimmed, non-empty items.
pub fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
