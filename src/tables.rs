//! Static lookup tables backing the resolver.
//!
//! All tables are built once on first access and never mutated afterwards,
//! so concurrent reads need no synchronization.

use crate::types::CountryCode;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Raw JSON entry for dialing code data.
#[derive(Debug, serde::Deserialize)]
struct DialCodeEntry {
    dial_code: String,
    country: String,
    /// Every territory sharing this dialing code, in canonical-first order.
    /// Absent for codes that belong to a single territory.
    #[serde(default)]
    shared_with: Vec<String>,
}

/// Dialing codes JSON embedded at compile time.
static DIAL_CODES_JSON: &str = include_str!("../assets/dial_codes.json");

struct PhoneTables {
    /// Canonical country for each dialing code.
    canonical: HashMap<String, CountryCode>,
    /// All candidate territories for each dialing code.
    candidates: HashMap<String, Vec<CountryCode>>,
}

static PHONE_TABLES: Lazy<PhoneTables> = Lazy::new(|| {
    let entries: Vec<DialCodeEntry> =
        serde_json::from_str(DIAL_CODES_JSON).expect("dial_codes.json is invalid");

    let mut canonical = HashMap::with_capacity(entries.len());
    let mut candidates = HashMap::with_capacity(entries.len());
    for entry in entries {
        let code = entry.dial_code.trim_start_matches('+').to_string();
        let country = CountryCode::new(entry.country);
        let territories = if entry.shared_with.is_empty() {
            vec![country.clone()]
        } else {
            entry.shared_with.into_iter().map(CountryCode::new).collect()
        };
        canonical.insert(code.clone(), country);
        candidates.insert(code, territories);
    }
    PhoneTables {
        canonical,
        candidates,
    }
});

/// Canonical country for a dialing code (exact match, no '+').
pub(crate) fn phone_canonical(code: &str) -> Option<&'static CountryCode> {
    Lazy::force(&PHONE_TABLES).canonical.get(code)
}

/// Every territory reachable through a dialing code (exact match, no '+').
pub(crate) fn phone_candidates(code: &str) -> Option<&'static [CountryCode]> {
    Lazy::force(&PHONE_TABLES)
        .candidates
        .get(code)
        .map(Vec::as_slice)
}

/// Currency codes whose first two letters do not match a real country code.
static CURRENCY_EXCEPTIONS: Lazy<HashMap<&'static str, CountryCode>> = Lazy::new(|| {
    HashMap::from([
        ("RMB", CountryCode::new("CN")),
        ("CU", CountryCode::new("CU")),
        ("NID", CountryCode::new("IQ")),
    ])
});

/// Currency codes shared by several countries, for which no single
/// country can be derived.
static AMBIGUOUS_CURRENCIES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["ANG", "XPF", "XAF", "XOF", "XCD"]));

/// Exception-table lookup for an uppercase currency code.
pub(crate) fn currency_exception(code: &str) -> Option<&'static CountryCode> {
    Lazy::force(&CURRENCY_EXCEPTIONS).get(code)
}

/// Whether an uppercase currency code is shared by several countries.
pub(crate) fn is_ambiguous_currency(code: &str) -> bool {
    AMBIGUOUS_CURRENCIES.contains(code)
}
