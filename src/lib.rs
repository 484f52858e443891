//! # Country Flags
//!
//! Lookup tables and pure functions mapping telephone dialing codes and
//! currency codes to ISO 3166-1 alpha-2 country codes, and deriving emoji
//! flag glyphs from country, currency, or phone codes.
//!
//! All tables are embedded at compile time and built once on first access;
//! every operation is a pure function over them, safe to call from any
//! number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use country_flags::{
//!     NO_FLAG, country_from_currency_code, country_from_phone_code,
//!     flag_from_country_code, flag_from_phone_code,
//! };
//!
//! // Dialing code to country, with or without the leading '+'
//! let country = country_from_phone_code("+420").unwrap();
//! assert_eq!(country.as_str(), "CZ");
//!
//! // Currency code to country
//! let country = country_from_currency_code("usd").unwrap();
//! assert_eq!(country.as_str(), "US");
//!
//! // Emoji flags
//! assert_eq!(flag_from_country_code("CZ"), "\u{1F1E8}\u{1F1FF}");
//! assert_eq!(flag_from_phone_code("999999"), NO_FLAG);
//! ```
//!
//! ## Resolution rules
//!
//! - Dialing codes are matched exactly against the embedded table; codes
//!   shared by several territories ("1", "44", ...) resolve to one canonical
//!   country, and [`countries_from_phone_code`] exposes the full list.
//! - Currency codes go through an exception table ("RMB" is "CN"), then an
//!   ambiguity check (no country for "XOF" and friends), then the
//!   drop-the-last-letter heuristic.
//! - Flag derivation never fails: unresolvable input falls back to the
//!   [`NO_FLAG`] placeholder.
//!
//! ## Features
//!
//! - `tracing` - instrument lookup misses with `tracing` (enabled by
//!   default)

pub mod resolver;
pub mod types;

mod tables;

// Re-export commonly used items at the crate root
pub use resolver::{
    NO_FLAG, countries_from_phone_code, country_from_currency_code, country_from_phone_code,
    flag_from_country_code, flag_from_currency_code, flag_from_phone_code,
};
pub use types::{CountryCode, CurrencyCode, CurrencyCodeError, PhoneCode, PhoneCodeError};
