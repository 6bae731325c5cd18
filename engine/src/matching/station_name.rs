//! Fuzzy KNMI station name matching
//!
//! Purely textual; deliberately not folded into the geospatial matcher.
//! Matching works on the first whitespace-delimited token of the normalized
//! names: exact first-token equality wins outright, otherwise the best
//! Levenshtein candidate is accepted only within a small edit budget, and
//! everything else falls back to a configured default station.

use strsim::levenshtein;
use zwemwater_shared::models::WeatherStation;

/// Maximum first-token edit distance still accepted as a match
const MAX_EDIT_DISTANCE: usize = 3;

/// Normalize a station or location name for comparison
///
/// Lowercase, strip `.` `-` `_` `/`, collapse whitespace, trim.
pub fn normalize_name(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '.' | '-' | '_' | '/' => ' ',
            c => c,
        })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_token(raw: &str) -> String {
    normalize_name(raw)
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Resolve a location name to a KNMI station
///
/// Exact first-token match is tried across all stations before any fuzzy
/// comparison; `"Hoek van Holland"` therefore resolves to a station named
/// `"Hoek"` even when another station is closer by edit distance.
pub fn match_station<'a>(
    name: &str,
    stations: &'a [WeatherStation],
    default: &'a WeatherStation,
) -> &'a WeatherStation {
    let query = first_token(name);
    if query.is_empty() {
        return default;
    }

    if let Some(exact) = stations.iter().find(|s| first_token(&s.name) == query) {
        return exact;
    }

    let best = stations
        .iter()
        .map(|s| (levenshtein(&query, &first_token(&s.name)), s))
        .min_by_key(|(distance, _)| *distance);

    match best {
        Some((distance, station)) if distance <= MAX_EDIT_DISTANCE => station,
        _ => default,
    }
}
