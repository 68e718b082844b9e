//! Status and category enumerations shared by the record types.
//!
//! Status values travel as free text on the wire, so each status enum keeps
//! unrecognised values in an `Other` variant instead of failing the decode.
//! Matching is case-insensitive; the canonical wire spelling is preserved on
//! the way back out.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Human label for a wire status: underscores become spaces and each word is
/// capitalised (`In_Progress` -> `In Progress`).
#[must_use]
pub fn humanize_status(raw: &str) -> String {
    raw.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value not known to this client, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Every known variant, in display order.
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// Canonical wire spelling.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(raw) => raw,
                }
            }

            /// Display label.
            #[must_use]
            pub fn label(&self) -> String {
                humanize_status(self.as_str())
            }

            /// Whether this is one of the recognised variants.
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }

            /// Case-insensitive comparison against a wire value.
            #[must_use]
            pub fn matches(&self, raw: &str) -> bool {
                self.as_str().eq_ignore_ascii_case(raw.trim())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                let trimmed = raw.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($wire) {
                        return Self::$variant;
                    }
                )+
                Self::Other(trimmed.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s.to_string()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

status_enum! {
    /// Enrolment status of a student.
    StudentStatus, default = Active {
        /// Currently enrolled.
        Active => "Active",
        /// Enrolment suspended.
        Inactive => "Inactive",
        /// Completed the course.
        Graduated => "Graduated",
    }
}

status_enum! {
    /// Payment status of a fee.
    FeeStatus, default = Pending {
        /// Fully paid.
        Paid => "Paid",
        /// Awaiting payment.
        Pending => "Pending",
        /// Past its due date.
        Overdue => "Overdue",
    }
}

status_enum! {
    /// Handling status of an inquiry ticket.
    InquiryStatus, default = Open {
        /// Newly submitted.
        Open => "Open",
        /// Being worked on.
        InProgress => "In_Progress",
        /// Answered.
        Resolved => "Resolved",
        /// Archived.
        Closed => "Closed",
    }
}

/// Student gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ModelError::UnknownValue {
                kind: "gender",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.as_str().to_string()
    }
}

/// Category of a dashboard activity entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    Admission,
    Payment,
    Inquiry,
    #[default]
    Other,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admission => "admission",
            Self::Payment => "payment",
            Self::Inquiry => "inquiry",
            Self::Other => "other",
        }
    }
}

impl From<String> for ActivityKind {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "admission" => Self::Admission,
            "payment" => Self::Payment,
            "inquiry" => Self::Inquiry,
            _ => Self::Other,
        }
    }
}

impl From<ActivityKind> for String {
    fn from(value: ActivityKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
