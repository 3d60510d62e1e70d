//! Widget families and the errors raised when a family has no variant.
//!
//! A family groups concrete products that are mutually compatible. Every
//! product created by one factory or creator instance carries the same tag.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Family tag
// ---------------------------------------------------------------------------

/// The platform family a concrete product or creator belongs to.
///
/// Deserialized through `FromStr`, so config values are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Family {
    Windows,
    Mac,
    Web,
}

impl Family {
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Windows => "Windows",
            Family::Mac => "Mac",
            Family::Web => "Web",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(Family::Windows),
            "mac" => Ok(Family::Mac),
            "web" => Ok(Family::Web),
            _ => Err(FactoryError::UnknownFamily(s.to_string())),
        }
    }
}

impl TryFrom<String> for Family {
    type Error = FactoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while selecting a factory variant.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FactoryError {
    #[error("{pattern} has no {family} variant")]
    Unsupported {
        pattern: &'static str,
        family: Family,
    },
    #[error("unknown family: {0:?}")]
    UnknownFamily(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Windows".parse::<Family>(), Ok(Family::Windows));
        assert_eq!("MAC".parse::<Family>(), Ok(Family::Mac));
        assert_eq!("web".parse::<Family>(), Ok(Family::Web));
    }

    #[test]
    fn unknown_family_is_rejected() {
        assert_eq!(
            "linux".parse::<Family>(),
            Err(FactoryError::UnknownFamily("linux".into()))
        );
    }

    #[test]
    fn display_matches_tag_name() {
        assert_eq!(Family::Windows.to_string(), "Windows");
        assert_eq!(Family::Mac.to_string(), "Mac");
        assert_eq!(Family::Web.to_string(), "Web");
    }

    #[test]
    fn unsupported_error_names_pattern_and_family() {
        let err = FactoryError::Unsupported {
            pattern: "abstract factory",
            family: Family::Web,
        };
        assert_eq!(err.to_string(), "abstract factory has no Web variant");
    }
}
