//! Shared newtypes and utilities used across all domain modules.
//!
//! Identifier newtypes are serialization-transparent: they serialize exactly
//! like the bare numbers the backend sends, so they can sit directly in wire
//! types and path templates.

pub mod response;
pub mod serde_util;

pub use response::{ApiResponse, EmptyResponse, SUCCESS_CODE};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }
    };
}

id_newtype!(
    /// Class summary record identifier.
    SummaryId
);
id_newtype!(
    /// Course identifier.
    CourseId
);
id_newtype!(
    /// Teacher (user) identifier.
    TeacherId
);
id_newtype!(
    /// Student (user) identifier.
    StudentId
);
id_newtype!(
    /// Question bank identifier.
    QuestionId
);
id_newtype!(
    /// Generated training session identifier.
    TrainingId
);
