//! Input for adding a movie, and its validation.
//!
//! Every field is optional at the wire level so that a missing field turns
//! into a [`Error::Validation`] naming it, rather than a deserialization
//! failure. Numeric fields accept JSON numbers or numeric strings, which is
//! what HTML form inputs submit.
//!
//! "Missing" means absent, `null`, or blank text. Zero is a real value.

use movienight_common::{Error, Result};
use serde::Deserialize;
use utoipa::ToSchema;

/// A number sent either as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl From<f64> for NumberInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for NumberInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Request to add a movie to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct AddMovieRequest {
    /// Movie title
    #[serde(default)]
    pub title: Option<String>,
    /// Genre label
    #[serde(default)]
    pub genre: Option<String>,
    /// Rating, as a number or numeric string
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub rating: Option<NumberInput>,
    /// Release year, as a whole number or numeric string
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub year: Option<NumberInput>,
}

impl AddMovieRequest {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: impl Into<NumberInput>,
        year: impl Into<NumberInput>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            genre: Some(genre.into()),
            rating: Some(rating.into()),
            year: Some(year.into()),
        }
    }

    /// Check that all four fields are present and well-formed.
    ///
    /// Fields are checked in the order title, genre, rating, year; the first
    /// problem is reported.
    pub fn validate(&self) -> Result<ValidMovie> {
        let title = required_text(self.title.as_deref(), "title")?;
        let genre = required_text(self.genre.as_deref(), "genre")?;
        let rating = required_number(self.rating.as_ref(), "rating")?;
        let year = required_number(self.year.as_ref(), "year")?;

        if year.fract() != 0.0 || year < i32::MIN as f64 || year > i32::MAX as f64 {
            return Err(Error::validation("year must be a whole number"));
        }

        Ok(ValidMovie {
            title,
            genre,
            rating,
            year: year as i32,
        })
    }
}

/// Fields that passed validation, before poster enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidMovie {
    pub title: String,
    pub genre: String,
    pub rating: f64,
    pub year: i32,
}

fn required_text(value: Option<&str>, field: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Error::validation(format!("{field} is required"))),
    }
}

fn required_number(value: Option<&NumberInput>, field: &str) -> Result<f64> {
    let number = match value {
        None => return Err(Error::validation(format!("{field} is required"))),
        Some(NumberInput::Number(n)) => *n,
        Some(NumberInput::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(Error::validation(format!("{field} is required")));
            }
            s.parse::<f64>()
                .map_err(|_| Error::validation(format!("{field} must be a number")))?
        }
    };

    if !number.is_finite() {
        return Err(Error::validation(format!("{field} must be a number")));
    }

    Ok(number)
}
