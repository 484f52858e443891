//! Core types for country, currency, and phone code handling.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// CountryCode
// =============================================================================

/// Two-letter country code (ISO 3166-1 alpha-2 style, e.g. "US", "CZ").
///
/// This is a thin wrapper over the raw string: lookup results produced by this
/// crate always carry uppercase two-letter codes, but the wrapper itself does
/// not reject other content, since a handful of real-world codes (e.g. the
/// withdrawn "AN" for the Netherlands Antilles) fall outside the current ISO
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a new CountryCode from a string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Emoji flag for this country code.
    ///
    /// # Example
    ///
    /// ```rust
    /// use country_flags::CountryCode;
    ///
    /// let cz = CountryCode::new("CZ");
    /// assert_eq!(cz.flag_emoji(), "\u{1F1E8}\u{1F1FF}");
    /// ```
    pub fn flag_emoji(&self) -> String {
        crate::resolver::flag_from_country_code(&self.0)
    }
}

impl Display for CountryCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for CountryCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

// =============================================================================
// PhoneCode
// =============================================================================

/// Error when parsing a phone code.
#[derive(Debug, Clone, Error)]
pub enum PhoneCodeError {
    /// Phone code contains non-digit characters.
    #[error("phone code must contain only digits")]
    NonDigit,
    /// Phone code is empty.
    #[error("phone code cannot be empty")]
    Empty,
}

/// Country dialing code (e.g. "1" for the USA, "420" for Czechia).
///
/// Dialing codes are stored without the leading '+' sign.
///
/// # Example
///
/// ```rust
/// use country_flags::PhoneCode;
///
/// let pc = PhoneCode::new("+420").unwrap();
/// assert_eq!(pc.to_string(), "420");
///
/// let pc = PhoneCode::new("1").unwrap();
/// assert_eq!(pc.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneCode(String);

impl PhoneCode {
    /// Create a new PhoneCode from a string.
    ///
    /// The input can include a leading '+' which will be stripped.
    pub fn new(s: impl AsRef<str>) -> Result<Self, PhoneCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+');
        if n.is_empty() {
            return Err(PhoneCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneCodeError::NonDigit);
        }
        Ok(Self(n.to_string()))
    }

    /// Get the phone code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical country for this dialing code, if one is mapped.
    pub fn country(&self) -> Option<CountryCode> {
        crate::resolver::country_from_phone_code(&self.0)
    }

    /// Emoji flag for the canonical country of this dialing code.
    ///
    /// Falls back to the placeholder glyph when the code is unmapped.
    pub fn flag_emoji(&self) -> String {
        crate::resolver::flag_from_phone_code(&self.0)
    }
}

impl FromStr for PhoneCode {
    type Err = PhoneCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for PhoneCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for PhoneCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        PhoneCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for PhoneCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// CurrencyCode
// =============================================================================

/// Error when parsing a currency code.
#[derive(Debug, Clone, Error)]
pub enum CurrencyCodeError {
    /// Currency code is not exactly three characters.
    #[error("currency code must be exactly three letters")]
    InvalidLength,
    /// Currency code contains non-letter characters.
    #[error("currency code must contain only letters")]
    NonAlphabetic,
}

/// Three-letter currency code (ISO 4217 style, e.g. "USD", "GBP").
///
/// Codes are normalized to uppercase on construction.
///
/// # Example
///
/// ```rust
/// use country_flags::CurrencyCode;
///
/// let usd = CurrencyCode::new("usd").unwrap();
/// assert_eq!(usd.as_str(), "USD");
/// assert_eq!(usd.country().unwrap().as_str(), "US");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Create a new CurrencyCode from a string.
    pub fn new(s: impl AsRef<str>) -> Result<Self, CurrencyCodeError> {
        let s = s.as_ref().trim();
        if s.chars().count() != 3 {
            return Err(CurrencyCodeError::InvalidLength);
        }
        if !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyCodeError::NonAlphabetic);
        }
        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Get the currency code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Country this currency belongs to, if one can be derived.
    ///
    /// Returns `None` for currencies shared by several countries (e.g. "XOF").
    pub fn country(&self) -> Option<CountryCode> {
        crate::resolver::country_from_currency_code(&self.0)
    }

    /// Emoji flag derived from this currency code.
    ///
    /// Uses the plain drop-the-last-letter heuristic; see
    /// [`flag_from_currency_code`](crate::resolver::flag_from_currency_code).
    pub fn flag_emoji(&self) -> String {
        crate::resolver::flag_from_currency_code(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        CurrencyCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}
