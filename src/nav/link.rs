//! Deep links.
//!
//! Accepted prefixes are `countryexplorer://` and
//! `https://countryexplorer.com`. Paths: `home` and `country/:countryCode`.
//! Codes are uppercased when parsed and lowercased when stringified.

use super::route::Route;

pub const LINK_PREFIXES: [&str; 2] = ["countryexplorer://", "https://countryexplorer.com"];

/// Resolve a deep link into a route. Returns `None` for foreign URLs or
/// unknown paths.
pub fn parse_link(url: &str) -> Option<Route> {
    let url = url.trim();
    let rest = LINK_PREFIXES
        .iter()
        .find_map(|prefix| url.strip_prefix(prefix))?;

    // Drop query string and fragment.
    let path = rest.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] | ["home"] => Some(Route::Home),
        ["country", code] => Some(Route::Profile {
            country_code: Some(code.to_uppercase()),
        }),
        _ => None,
    }
}

/// Build the canonical `countryexplorer://` link for a route.
pub fn to_link(route: &Route) -> String {
    match route {
        Route::Home => format!("{}home", LINK_PREFIXES[0]),
        Route::Profile {
            country_code: Some(code),
        } => format!("{}country/{}", LINK_PREFIXES[0], code.trim().to_lowercase()),
        Route::Profile { country_code: None } => format!("{}country", LINK_PREFIXES[0]),
    }
}
