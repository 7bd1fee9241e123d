//! ID types for Draft Sport entities.
//!
//! Identifiers are 64-bit on the backend. Large ones reach us as JSON
//! strings (see [`crate::api::guard`]), small ones may still arrive as bare
//! numbers, so every id is string-backed and accepts either form.

use crate::error::{DraftSportError, Result};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deserialize a JSON string or integer into its decimal string form.
pub fn de_string_or_integer<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrInteger;

    impl de::Visitor<'_> for StringOrInteger {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or an integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(StringOrInteger)
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(#[serde(deserialize_with = "de_string_or_integer")] pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = DraftSportError;

            fn from_str(s: &str) -> Result<Self> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(DraftSportError::invalid_argument(concat!(
                        $label,
                        " must not be empty"
                    )));
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

string_id!(
    /// Type-safe wrapper for league IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use draft_sport::LeagueId;
    ///
    /// let league_id: LeagueId = "12345678901234567890".parse().unwrap();
    /// assert_eq!(league_id.as_str(), "12345678901234567890");
    /// ```
    LeagueId,
    "League ID"
);

string_id!(
    /// Type-safe wrapper for manager (agent) IDs
    ManagerId,
    "Manager ID"
);

string_id!(PlayerId, "Player ID");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_accept_strings_and_integers() {
        let from_str: LeagueId = serde_json::from_value(json!("98765432109876543210")).unwrap();
        let from_int: LeagueId = serde_json::from_value(json!(42)).unwrap();
        let negative: ManagerId = serde_json::from_value(json!(-7)).unwrap();

        assert_eq!(from_str.as_str(), "98765432109876543210");
        assert_eq!(from_int.as_str(), "42");
        assert_eq!(negative.as_str(), "-7");
    }

    #[test]
    fn test_ids_reject_other_types() {
        assert!(serde_json::from_value::<PlayerId>(json!(1.5)).is_err());
        assert!(serde_json::from_value::<PlayerId>(json!(null)).is_err());
    }

    #[test]
    fn test_id_parse_and_display() {
        let id: ManagerId = " 77 ".parse().unwrap();
        assert_eq!(id.to_string(), "77");
        assert!("".parse::<ManagerId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = LeagueId::new("5");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("5"));
    }
}
