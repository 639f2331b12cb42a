use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Catalog entity IDs - assigned externally (TMDB), carried as opaque strings
define_id!(MovieId);
define_id!(PersonId);

// Account IDs
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner_string() {
        let id = MovieId::from("769");
        assert_eq!(id.to_string(), "769");
        assert_eq!(id.as_str(), "769");
    }

    #[test]
    fn serde_is_transparent() {
        let id = UserId::from("9f965bf6-7e32-4afb-893f-756f502b2c2a");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"9f965bf6-7e32-4afb-893f-756f502b2c2a\"");

        let back: UserId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn round_trips_through_string() {
        let id = PersonId::new("1032");
        let raw: String = id.clone().into();
        assert_eq!(PersonId::from(raw), id);
    }
}
