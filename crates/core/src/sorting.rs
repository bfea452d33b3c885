//! Sort-token resolution for the film listing.
//!
//! A token has the shape `{camelCaseField}_{asc|desc}`, e.g.
//! `releaseYear_desc`. The field part is converted to snake case and looked
//! up in a fixed allow-list of film columns; nothing outside [`SortField`]
//! can ever reach an `ORDER BY` clause.

use crate::error::CoreError;

/// Film attributes a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    FilmId,
    Title,
    ReleaseYear,
    LanguageId,
    RentalDuration,
    RentalRate,
    Length,
    ReplacementCost,
    Rating,
    LastUpdate,
}

impl SortField {
    pub const ALL: [SortField; 10] = [
        SortField::FilmId,
        SortField::Title,
        SortField::ReleaseYear,
        SortField::LanguageId,
        SortField::RentalDuration,
        SortField::RentalRate,
        SortField::Length,
        SortField::ReplacementCost,
        SortField::Rating,
        SortField::LastUpdate,
    ];

    /// The `film` table column this field orders by.
    pub fn column(self) -> &'static str {
        match self {
            SortField::FilmId => "film_id",
            SortField::Title => "title",
            SortField::ReleaseYear => "release_year",
            SortField::LanguageId => "language_id",
            SortField::RentalDuration => "rental_duration",
            SortField::RentalRate => "rental_rate",
            SortField::Length => "length",
            SortField::ReplacementCost => "replacement_cost",
            SortField::Rating => "rating",
            SortField::LastUpdate => "last_update",
        }
    }

    /// Look up a snake-case column name in the allow-list.
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.column() == column)
    }

    /// Resolve an external camel-case field name.
    pub fn resolve(external: &str) -> Result<Self, CoreError> {
        Self::from_column(&camel_to_snake(external))
            .ok_or_else(|| CoreError::InvalidSortField(external.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(token: &str) -> Result<Self, CoreError> {
        match token {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(CoreError::InvalidSortDirection(other.to_string())),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A resolved ordering: one allow-listed field and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// Listing order when no `sort` parameter is given.
    fn default() -> Self {
        Self {
            field: SortField::FilmId,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Parse a `{field}_{direction}` token.
    ///
    /// The token is split at its last underscore. Without an underscore the
    /// whole token is the field and the direction defaults to ascending.
    /// The field is resolved before the direction, so a token that is wrong
    /// in both parts reports [`CoreError::InvalidSortField`].
    pub fn parse(token: &str) -> Result<Self, CoreError> {
        let (field, direction) = match token.rsplit_once('_') {
            Some((field, direction)) => (field, Some(direction)),
            None => (token, None),
        };

        let field = SortField::resolve(field)?;
        let direction = match direction {
            Some(d) => SortDirection::parse(d)?,
            None => SortDirection::default(),
        };

        Ok(Self { field, direction })
    }

    /// Resolve an optional token, falling back to [`SortSpec::default`].
    pub fn from_param(token: Option<&str>) -> Result<Self, CoreError> {
        token.map_or_else(|| Ok(Self::default()), Self::parse)
    }
}

/// Convert `camelCase` (or `PascalCase`) to `snake_case`.
///
/// An underscore is inserted before every uppercase letter that is not the
/// first character, then the whole string is lower-cased.
pub fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(ch.to_lowercase());
    }
    out
}
