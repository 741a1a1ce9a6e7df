use crate::error::{FieldError, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An opaque record identifier.
///
/// Depending on the generator policy this is either a slug derived from
/// breed and name or a bare random token. Uniqueness is guaranteed by the
/// generator's random suffix; the store enforces it as a hard invariant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuppyId(String);

impl PuppyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PuppyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored puppy record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puppy {
    /// Unique identity of the record; the persistent backend indexes this.
    pub id: PuppyId,
    pub breed: String,
    pub name: String,
    /// Birth date as a `YYYY-MM-DD` string.
    pub birth_date: String,
    /// Optional free-form image reference.
    pub image: Option<String>,
    /// Optional free-form notes; cleared by an explicit empty string on update.
    pub info: Option<String>,
}

/// A raw field map as submitted by a caller.
///
/// Every field is optional so the same type serves both create (validated
/// in strict mode, where required fields must be present) and update
/// (validated in partial mode, where absence means "unchanged").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PuppyPayload {
    pub breed: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub image: Option<String>,
    pub info: Option<String>,
}

impl PuppyPayload {
    /// Builds a complete record from a strict-validated payload.
    ///
    /// Returns the missing required fields as [`ValidationErrors`] if the
    /// payload was never strict-validated.
    pub fn into_record(self, id: PuppyId) -> Result<Puppy, ValidationErrors> {
        let mut missing = Vec::new();
        if self.breed.is_none() {
            missing.push(FieldError::new("breed", "is required"));
        }
        if self.name.is_none() {
            missing.push(FieldError::new("name", "is required"));
        }
        if self.birth_date.is_none() {
            missing.push(FieldError::new("birthDate", "is required"));
        }
        if !missing.is_empty() {
            return Err(ValidationErrors(missing));
        }

        let (Some(breed), Some(name), Some(birth_date)) = (self.breed, self.name, self.birth_date)
        else {
            // Checked above.
            return Err(ValidationErrors(vec![FieldError::new(
                "payload",
                "is incomplete",
            )]));
        };

        Ok(Puppy {
            id,
            breed,
            name,
            birth_date,
            // An empty optional on create is stored as absent.
            image: self.image.filter(|s| !s.is_empty()),
            info: self.info.filter(|s| !s.is_empty()),
        })
    }

    /// Merges this payload over an existing record, field by field.
    ///
    /// Provided non-empty values replace the stored ones; absent or empty
    /// values leave the stored value in place. `info` is the one exception:
    /// a present-but-empty `info` clears the stored value, while an absent
    /// `info` retains it.
    pub fn merge_into(self, existing: Puppy) -> Puppy {
        Puppy {
            id: existing.id,
            breed: self
                .breed
                .filter(|s| !s.is_empty())
                .unwrap_or(existing.breed),
            name: self.name.filter(|s| !s.is_empty()).unwrap_or(existing.name),
            birth_date: self
                .birth_date
                .filter(|s| !s.is_empty())
                .unwrap_or(existing.birth_date),
            image: self.image.filter(|s| !s.is_empty()).or(existing.image),
            info: match self.info {
                Some(s) if s.is_empty() => None,
                Some(s) => Some(s),
                None => existing.info,
            },
        }
    }
}
