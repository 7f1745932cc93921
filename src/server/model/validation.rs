//! Field validation for request bodies.
//!
//! Each input shape implements [`Validate`], returning every failed rule keyed by the
//! JSON field name. Validation runs once at the request boundary, before any service call.

use std::{collections::BTreeMap, fmt};

use rust_decimal::Decimal;

use crate::{
    model::game::{CreateGameDto, UpdateGameDto},
    server::model::game::max_price,
};

pub const NAME_MAX_LENGTH: usize = 200;
pub const GENRE_MAX_LENGTH: usize = 100;
pub const AGE_RATING_MAX_LENGTH: usize = 10;
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;
pub const AUTHOR_MAX_LENGTH: usize = 200;

/// Collected field failures, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Records a failure message against a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for one field, empty if it passed.
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    /// Fails when any rule was violated.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().flatten().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Input shapes that carry declarative field constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for CreateGameDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        GameFields {
            name: &self.name,
            genre: &self.genre,
            age_rating: &self.age_rating,
            price: self.price,
            description: &self.description,
            author: &self.author,
        }
        .validate()
    }
}

impl Validate for UpdateGameDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        GameFields {
            name: &self.name,
            genre: &self.genre,
            age_rating: &self.age_rating,
            price: self.price,
            description: &self.description,
            author: &self.author,
        }
        .validate()
    }
}

/// Borrowed view of the writable game fields shared by the create and update bodies.
struct GameFields<'a> {
    name: &'a str,
    genre: &'a str,
    age_rating: &'a str,
    price: Decimal,
    description: &'a str,
    author: &'a str,
}

impl GameFields<'_> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        max_length(&mut errors, "name", "Name", self.name, NAME_MAX_LENGTH);
        max_length(&mut errors, "genre", "Genre", self.genre, GENRE_MAX_LENGTH);
        max_length(
            &mut errors,
            "ageRating",
            "AgeRating",
            self.age_rating,
            AGE_RATING_MAX_LENGTH,
        );
        if self.price < Decimal::ZERO {
            errors.add("price", "Price must be a positive value");
        } else if self.price > max_price() {
            errors.add("price", format!("Price cannot exceed {}", max_price()));
        }
        max_length(
            &mut errors,
            "description",
            "Description",
            self.description,
            DESCRIPTION_MAX_LENGTH,
        );
        max_length(&mut errors, "author", "Author", self.author, AUTHOR_MAX_LENGTH);

        errors.into_result()
    }
}

fn max_length(errors: &mut ValidationErrors, field: &str, label: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(field, format!("{} cannot exceed {} characters", label, max));
    }
}
