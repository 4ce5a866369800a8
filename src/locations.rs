//! Static city coordinate table and lookup
//!
//! The dashboard only places map markers for cities in this table; anything
//! else degrades to a text-only display. Extend by adding entries.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::Location;

static CITY_COORDINATES: LazyLock<HashMap<&'static str, Location>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    let mut add = |name: &'static str, lat: f64, lon: f64| {
        m.insert(name, Location::new(lat, lon, name.to_string()));
    };
    add("Delhi", 28.6139, 77.2090);
    add("Mumbai", 19.0760, 72.8777);
    add("Kolkata", 22.5726, 88.3639);
    add("Chennai", 13.0827, 80.2707);
    add("Bengaluru", 12.9716, 77.5946);
    add("Hyderabad", 17.3850, 78.4867);
    add("Pune", 18.5204, 73.8567);
    add("Ahmedabad", 23.0225, 72.5714);
    add("Jaipur", 26.9124, 75.7873);
    add("Lucknow", 26.8467, 80.9462);
    add("Kanpur", 26.4499, 80.3319);
    add("Nagpur", 21.1458, 79.0882);
    add("Patna", 25.5941, 85.1376);
    add("Indore", 22.7196, 75.8577);
    m
});

/// Normalize a city name for table lookup: lowercase everything, then
/// uppercase the leading letter only.
///
/// This is a lookup heuristic, not place-name normalization. Multi-word names
/// ("new delhi") and names cased differently in the table will not match.
#[must_use]
pub fn normalize_city_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lowered,
    }
}

/// Resolve a city name to its fixed map coordinate.
///
/// Tries an exact table match first, then retries with
/// [`normalize_city_name`]. Returns `None` when the city is not in the table;
/// callers degrade to a text-only display.
#[must_use]
pub fn resolve(city: &str) -> Option<Location> {
    if let Some(location) = CITY_COORDINATES.get(city) {
        return Some(location.clone());
    }
    CITY_COORDINATES.get(normalize_city_name(city).as_str()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_match() {
        let location = resolve("Delhi").expect("Delhi is in the table");
        assert_eq!(location.name, "Delhi");
        assert_eq!(location.latitude, 28.6139);
        assert_eq!(location.longitude, 77.2090);
    }

    #[test]
    fn test_resolve_via_normalization_fallback() {
        let exact = resolve("Delhi").unwrap();
        assert_eq!(resolve("delhi").unwrap(), exact);
        assert_eq!(resolve("DELHI").unwrap(), exact);
        assert_eq!(resolve("  delhi  ").unwrap(), exact);
    }

    #[test]
    fn test_resolve_unknown_city_is_absent() {
        assert!(resolve("Unknown City").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn test_normalize_city_name() {
        assert_eq!(normalize_city_name("delhi"), "Delhi");
        assert_eq!(normalize_city_name("MUMBAI"), "Mumbai");
        assert_eq!(normalize_city_name(" kolkata "), "Kolkata");
        assert_eq!(normalize_city_name(""), "");
    }

    #[test]
    fn test_normalization_limits_are_visible() {
        // The fallback only fixes leading-letter casing; it is not a
        // general-purpose place-name normalizer.
        assert_eq!(normalize_city_name("new delhi"), "New delhi");
        assert!(resolve("new delhi").is_none());
    }
}
