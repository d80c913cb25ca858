use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(ObjectId);

        impl $name {
            /// Generates a fresh id: timestamp, per-process random value and
            /// an atomic counter, so no coordination is needed.
            pub fn new() -> Self {
                Self(ObjectId::new())
            }

            /// Lowercase 24-character hex form used on the wire and in storage.
            pub fn to_hex(self) -> String {
                self.0.to_hex()
            }

            pub fn parse(value: &str) -> Result<Self, DomainError> {
                ObjectId::parse_str(value)
                    .map(Self)
                    .map_err(|e| DomainError::invalid_id(format!("{value:?}: {e}")))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_hex()
            }
        }
    };
}

define_id!(ScreenId);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn hex_form_is_24_lowercase_chars() {
        let hex = ScreenId::new().to_hex();
        assert_eq!(hex.len(), 24);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn fresh_ids_are_distinct() {
        let ids: HashSet<ScreenId> = (0..1000).map(|_| ScreenId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn parses_its_own_display_form() {
        let id = ScreenId::new();
        let parsed: ScreenId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_non_hex_and_wrong_length() {
        assert!(ScreenId::parse("not-an-object-id").is_err());
        assert!(ScreenId::parse("abc123").is_err());
        assert!(matches!(
            ScreenId::parse("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn surrounding_whitespace_is_not_part_of_an_id() {
        assert!(ScreenId::parse(" 65f1a2b3c4d5e6f708192a3b").is_err());
        assert!(ScreenId::parse("65f1a2b3c4d5e6f708192a3b\n").is_err());
    }

    #[test]
    fn serializes_as_plain_hex_string() {
        let id = ScreenId::parse("65f1a2b3c4d5e6f708192a3b").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"65f1a2b3c4d5e6f708192a3b\"");

        let back: ScreenId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
