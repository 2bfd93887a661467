//! Airport code type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Longest code we accept (ICAO codes are 4 characters).
const MAX_LEN: usize = 4;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A well-formed airport code.
///
/// Codes are 1 to 4 uppercase ASCII letters or digits. IATA codes such as
/// `DEL` are the usual case. Any `AirportCode` value is valid by
/// construction; whether it names an airport in a catalog is a separate
/// question.
///
/// # Examples
///
/// ```
/// use route_server::domain::AirportCode;
///
/// let del = AirportCode::parse("DEL").unwrap();
/// assert_eq!(del.as_str(), "DEL");
///
/// // Lowercase is rejected by the exact parser...
/// assert!(AirportCode::parse("del").is_err());
///
/// // ...but accepted by the normalizing one.
/// assert_eq!(AirportCode::parse_normalized(" del ").unwrap(), del);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode {
    bytes: [u8; MAX_LEN],
    len: u8,
}

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be 1 to 4 uppercase ASCII letters or digits. No
    /// normalization is performed.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let input = s.as_bytes();

        if input.is_empty() || input.len() > MAX_LEN {
            return Err(InvalidAirportCode {
                reason: "must be 1 to 4 characters",
            });
        }

        if !input
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidAirportCode {
                reason: "must be uppercase ASCII letters A-Z or digits",
            });
        }

        let mut bytes = [0u8; MAX_LEN];
        bytes[..input.len()].copy_from_slice(input);

        Ok(Self {
            bytes,
            len: input.len() as u8,
        })
    }

    /// Parse user input, trimming whitespace and uppercasing first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidAirportCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AirportCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z0-9]{1,4}") {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Lowercase input is rejected exactly but accepted after normalization
        #[test]
        fn lowercase_needs_normalizing(s in "[a-z]{3}") {
            prop_assert!(AirportCode::parse(&s).is_err());
            let normalized = AirportCode::parse_normalized(&s).unwrap();
            prop_assert_eq!(normalized.as_str(), s.to_ascii_uppercase());
        }

        /// Too-long strings are always rejected
        #[test]
        fn too_long_rejected(s in "[A-Z]{5,10}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }
    }
}
