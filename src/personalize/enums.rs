use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::PersonalizeError;

// --- Status ---

/// Lifecycle state reported for datasets, solutions, campaigns and the
/// other long-running resources.
///
/// Values the service introduces later are kept verbatim in `Unknown`
/// instead of failing the whole response. Equality and hashing go by the
/// wire string, so `Unknown("ACTIVE")` is the same status as `Active`.
#[derive(Debug, Clone)]
pub enum Status {
    CreatePending,
    CreateInProgress,
    Active,
    CreateFailed,
    DeletePending,
    DeleteInProgress,
    UpdatePending,
    UpdateInProgress,
    UpdateFailed,
    Unknown(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::CreatePending => "CREATE PENDING",
            Status::CreateInProgress => "CREATE IN_PROGRESS",
            Status::Active => "ACTIVE",
            Status::CreateFailed => "CREATE FAILED",
            Status::DeletePending => "DELETE PENDING",
            Status::DeleteInProgress => "DELETE IN_PROGRESS",
            Status::UpdatePending => "UPDATE PENDING",
            Status::UpdateInProgress => "UPDATE IN_PROGRESS",
            Status::UpdateFailed => "UPDATE FAILED",
            Status::Unknown(s) => s,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Status::CreateFailed | Status::UpdateFailed)
    }

    /// No further transition happens without a new request.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Active) || self.is_failed()
    }
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Status {}

impl Hash for Status {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        match value {
            "CREATE PENDING" => Status::CreatePending,
            "CREATE IN_PROGRESS" => Status::CreateInProgress,
            "ACTIVE" => Status::Active,
            "CREATE FAILED" => Status::CreateFailed,
            "DELETE PENDING" => Status::DeletePending,
            "DELETE IN_PROGRESS" => Status::DeleteInProgress,
            "UPDATE PENDING" => Status::UpdatePending,
            "UPDATE IN_PROGRESS" => Status::UpdateInProgress,
            "UPDATE FAILED" => Status::UpdateFailed,
            other => Status::Unknown(other.to_string()),
        }
    }
}

impl FromStr for Status {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Status::from(s))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Status::from(s.as_str()))
    }
}

// --- Closed request-side enums ---

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $wire:tt),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = PersonalizeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(PersonalizeError::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

wire_enum! {
    /// `FULL` retrains from scratch; `UPDATE` only folds in new items.
    TrainingMode, "trainingMode" {
        Full => "FULL",
        Update => "UPDATE",
    }
}

wire_enum! {
    RecipeProvider, "recipeProvider" {
        Service => "SERVICE",
    }
}
