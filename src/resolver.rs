//! Pure lookup and derivation functions over the static tables.
//!
//! Every function here is a deterministic, side-effect-free function of its
//! input. Unresolvable codes come back as `None`; flag derivation never
//! fails and falls back to [`NO_FLAG`] instead.

use crate::tables;
use crate::types::CountryCode;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Placeholder glyph returned when no flag can be derived (white flag emoji).
pub const NO_FLAG: &str = "\u{1F3F3}\u{FE0F}";

/// Offset turning an ASCII uppercase letter into its Regional Indicator
/// Symbol code point ('A' becomes U+1F1E6).
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// Canonical country for a dialing code.
///
/// A leading '+' is stripped before lookup; the remainder must exactly equal
/// a known dialing code, no prefix matching is performed. Dialing codes
/// shared by several territories ("1", "44", ...) resolve to one canonical
/// country; use [`countries_from_phone_code`] for the full list.
///
/// # Example
///
/// ```rust
/// use country_flags::country_from_phone_code;
///
/// let country = country_from_phone_code("+420").unwrap();
/// assert_eq!(country.as_str(), "CZ");
/// assert_eq!(country_from_phone_code("999999"), None);
/// ```
pub fn country_from_phone_code(phone_code: impl AsRef<str>) -> Option<CountryCode> {
    let digits = phone_code.as_ref().trim().trim_start_matches('+');
    match tables::phone_canonical(digits) {
        Some(country) => Some(country.clone()),
        None => {
            #[cfg(feature = "tracing")]
            debug!(phone_code = digits, "no country mapped for dialing code");
            None
        }
    }
}

/// Every territory sharing a dialing code, in canonical-first order.
///
/// Most dialing codes map to a single territory; the North American
/// Numbering Plan code "1" maps to twenty.
///
/// # Example
///
/// ```rust
/// use country_flags::countries_from_phone_code;
///
/// let nanp = countries_from_phone_code("+1").unwrap();
/// assert_eq!(nanp.len(), 20);
///
/// let cz = countries_from_phone_code("420").unwrap();
/// assert_eq!(cz.len(), 1);
/// ```
pub fn countries_from_phone_code(phone_code: impl AsRef<str>) -> Option<&'static [CountryCode]> {
    let digits = phone_code.as_ref().trim().trim_start_matches('+');
    tables::phone_candidates(digits)
}

/// Country a currency code belongs to.
///
/// The code is uppercased, then resolved in three steps: the exception table
/// (currencies whose first two letters are not a country code, e.g.
/// "RMB" is "CN"), then the ambiguity check (currencies shared by several
/// countries, e.g. "XOF", resolve to `None`), and otherwise the last letter
/// is dropped and the remainder is returned, since most ISO 4217 codes are
/// a country prefix plus one currency letter.
///
/// # Example
///
/// ```rust
/// use country_flags::country_from_currency_code;
///
/// assert_eq!(country_from_currency_code("usd").unwrap().as_str(), "US");
/// assert_eq!(country_from_currency_code("RMB").unwrap().as_str(), "CN");
/// assert_eq!(country_from_currency_code("XCD"), None);
/// ```
pub fn country_from_currency_code(currency_code: impl AsRef<str>) -> Option<CountryCode> {
    let code = currency_code.as_ref().to_uppercase();
    if let Some(country) = tables::currency_exception(&code) {
        return Some(country.clone());
    }
    if !tables::is_ambiguous_currency(&code) {
        let mut prefix = code.chars();
        prefix.next_back();
        return Some(CountryCode::new(prefix.as_str()));
    }
    #[cfg(feature = "tracing")]
    debug!(
        currency_code = %code,
        "currency is shared by several countries"
    );
    None
}

/// Emoji flag for a two-letter country code.
///
/// Each letter is shifted into the Regional Indicator Symbol range and the
/// resulting code points are concatenated; an empty input produces
/// [`NO_FLAG`]. Input that is not a two-letter alphabetic code goes through
/// the same arithmetic and yields a string that will not render as a flag.
///
/// # Example
///
/// ```rust
/// use country_flags::{NO_FLAG, flag_from_country_code};
///
/// assert_eq!(flag_from_country_code("US"), "\u{1F1FA}\u{1F1F8}");
/// assert_eq!(flag_from_country_code(""), NO_FLAG);
/// ```
pub fn flag_from_country_code(country_code: impl AsRef<str>) -> String {
    let code = country_code.as_ref().to_uppercase();
    if code.is_empty() {
        return NO_FLAG.to_string();
    }
    let mut flag = String::with_capacity(code.len() * 4);
    for ch in code.chars() {
        if let Some(indicator) = char::from_u32(ch as u32 + REGIONAL_INDICATOR_OFFSET) {
            flag.push(indicator);
        }
    }
    flag
}

/// Emoji flag derived from a currency code.
///
/// Uppercases the code, drops the last letter, and derives the flag from the
/// remainder. This path deliberately skips the exception table and the
/// ambiguity check that [`country_from_currency_code`] applies, so "RMB"
/// yields the (non-rendering) "RM" pair rather than the CN flag.
///
/// # Example
///
/// ```rust
/// use country_flags::{flag_from_country_code, flag_from_currency_code};
///
/// assert_eq!(flag_from_currency_code("USD"), flag_from_country_code("US"));
/// ```
pub fn flag_from_currency_code(currency_code: impl AsRef<str>) -> String {
    let code = currency_code.as_ref().to_uppercase();
    let mut prefix = code.chars();
    prefix.next_back();
    flag_from_country_code(prefix.as_str())
}

/// Emoji flag for the canonical country of a dialing code.
///
/// Falls back to [`NO_FLAG`] when the dialing code is unmapped.
///
/// # Example
///
/// ```rust
/// use country_flags::{NO_FLAG, flag_from_phone_code};
///
/// assert_eq!(flag_from_phone_code("+420"), "\u{1F1E8}\u{1F1FF}");
/// assert_eq!(flag_from_phone_code("999999"), NO_FLAG);
/// ```
pub fn flag_from_phone_code(phone_code: impl AsRef<str>) -> String {
    match country_from_phone_code(phone_code) {
        Some(country) => flag_from_country_code(country.as_str()),
        None => NO_FLAG.to_string(),
    }
}
