use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Seed testimonials shipped with the site.
const SEED_TESTIMONIALS: &str = include_str!("../../data/testimonials.json");

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("{0} is required")]
    MissingField(ReviewField),
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
    #[error("malformed testimonial data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Text fields of a review that must be filled in before it can be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    Name,
    Location,
    Text,
}

impl fmt::Display for ReviewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReviewField::Name => "name",
            ReviewField::Location => "location",
            ReviewField::Text => "review text",
        };
        f.write_str(label)
    }
}

/// Star rating, always within 1..=5.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// All selectable ratings, lowest first.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating(Self::MAX)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(ReviewError::InvalidRating(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: String,       // Assigned by whoever owns the list
    pub name: String,     // Reviewer's display name
    pub location: String, // Town or neighbourhood
    pub text: String,     // Free-text body
    pub rating: Rating,
}

impl Testimonial {
    /// Promotes a submitted draft into a list entry with the given identifier.
    pub fn from_draft(id: impl Into<String>, draft: DraftReview) -> Self {
        Testimonial {
            id: id.into(),
            name: draft.name,
            location: draft.location,
            text: draft.text,
            rating: draft.rating,
        }
    }

    /// First character of the name, shown in the avatar bubble.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// A review being written in the form; a testimonial without an identifier.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftReview {
    pub name: String,
    pub location: String,
    pub text: String,
    pub rating: Rating,
}

impl DraftReview {
    /// Checks the required text fields in form order.
    pub fn validate(&self) -> Result<(), ReviewError> {
        let required = [
            (ReviewField::Name, &self.name),
            (ReviewField::Location, &self.location),
            (ReviewField::Text, &self.text),
        ];
        match required.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ReviewError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

/// Parses a JSON array of testimonials.
pub fn load_testimonials(json: &str) -> Result<Vec<Testimonial>, ReviewError> {
    Ok(serde_json::from_str(json)?)
}

pub fn seed_testimonials() -> Result<Vec<Testimonial>, ReviewError> {
    load_testimonials(SEED_TESTIMONIALS)
}
