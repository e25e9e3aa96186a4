//! Strongly-typed value objects used by the lead aggregate.
//!
//! Text fields are stored exactly as submitted; the wrappers only enforce
//! that a required value is present and non-empty.
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string was empty.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided identifier is not a UUID.
    #[error("invalid lead id")]
    InvalidUuid,
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a non-empty value without altering it.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(value))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(LeadName, "Lead name wrapper enforcing non-empty values.");

non_empty_string_newtype!(
    LeadEmail,
    "Lead email. Uniqueness is decided by the store on the value as given."
);

non_empty_string_newtype!(
    LeadPhone,
    "Lead phone wrapper enforcing non-empty values. The format is free-form."
);

/// Public identifier of a lead, exposed as `_id` in the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(Uuid);

impl LeadId {
    /// Generate a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse from raw bytes (DB boundary)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeConstraintError> {
        Ok(Self(
            Uuid::from_slice(bytes).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }

    /// Convert to raw bytes (DB boundary)
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Display for LeadId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeadId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            Uuid::parse_str(s.trim()).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }
}

impl Default for LeadId {
    fn default() -> Self {
        Self::new()
    }
}
