//! Validated field value objects
//!
//! Every field is an immutable newtype over the exact string the user supplied.
//! Construction validates against the field's rule; serde goes through the same
//! constructor so a record file can never smuggle in an invalid value.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which field a constraint error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum FieldKind {
    #[strum(to_string = "name")]
    Name,
    #[strum(to_string = "phone")]
    Phone,
    #[strum(to_string = "email")]
    Email,
    #[strum(to_string = "address")]
    Address,
    #[strum(to_string = "NRIC")]
    Nric,
    #[strum(to_string = "tag")]
    Tag,
    #[strum(to_string = "appointment type")]
    AppointmentType,
    #[strum(to_string = "procedure")]
    Procedure,
    #[strum(to_string = "date and time")]
    DateTime,
    #[strum(to_string = "doctor")]
    Doctor,
}

/// A raw value that failed its field's validation rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: FieldKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldKind, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").expect("valid name pattern"));
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,15}$").expect("valid phone pattern"));
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w!#$%&'*+/=?`{|}~^.-]+@[^\W_]+(?:[.-][^\W_]+)*$").expect("valid email pattern")
});
static NON_BLANK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S.*$").expect("valid non-blank pattern"));
static NRIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[STFG][0-9]{7}[A-Z]$").expect("valid nric pattern"));
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}]+$").expect("valid tag pattern"));

macro_rules! validated_field {
    ( $(#[$meta:meta])* $name:ident, $kind:expr, $pattern:ident, $message:expr ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const MESSAGE_CONSTRAINTS: &'static str = $message;

            pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
                let value = value.into();
                if Self::is_valid(&value) {
                    Ok(Self(value))
                } else {
                    Err(FieldError::new($kind, Self::MESSAGE_CONSTRAINTS))
                }
            }

            pub fn is_valid(value: &str) -> bool {
                $pattern.is_match(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

validated_field!(
    /// A person's full name
    Name,
    FieldKind::Name,
    NAME_PATTERN,
    "Person names should only contain alphanumeric characters and spaces, and it should not be blank"
);

validated_field!(
    /// A contact number, digits only
    Phone,
    FieldKind::Phone,
    PHONE_PATTERN,
    "Phone numbers can only contain numbers, and should be between 3 and 15 digits long"
);

validated_field!(
    Email,
    FieldKind::Email,
    EMAIL_PATTERN,
    "Person emails should be of the format local-part@domain and adhere to the following constraints:\n\
     1. The local-part should only contain alphanumeric characters and these special characters, \
     excluding the parentheses, (!#$%&'*+/=?`{|}~^.-).\n\
     2. The domain name should start and end with alphanumeric characters and consist of \
     alphanumeric characters separated by periods or hyphens."
);

validated_field!(
    Address,
    FieldKind::Address,
    NON_BLANK_PATTERN,
    "Person addresses can take any values, and it should not be blank"
);

validated_field!(
    /// National registration identity card number, the patient's unique key
    Nric,
    FieldKind::Nric,
    NRIC_PATTERN,
    "NRIC should start with S, T, F or G, followed by 7 digits and end with an uppercase letter"
);

validated_field!(
    Tag,
    FieldKind::Tag,
    TAG_PATTERN,
    "Tags names should be alphanumeric"
);

validated_field!(
    /// Free-text description of the procedure an appointment is for
    Procedure,
    FieldKind::Procedure,
    NON_BLANK_PATTERN,
    "Procedures can take any values, and it should not be blank"
);

validated_field!(
    /// Name of the attending doctor
    Doctor,
    FieldKind::Doctor,
    NAME_PATTERN,
    "Doctor names should only contain alphanumeric characters and spaces, and it should not be blank"
);
