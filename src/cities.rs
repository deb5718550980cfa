//! Static registry of monitored Indian cities

use std::sync::LazyLock;

use crate::models::City;

static CITIES: LazyLock<Vec<City>> = LazyLock::new(|| {
    vec![
        City::new("Delhi", 168),
        City::new("Mumbai", 95),
        City::new("Kolkata", 142),
        City::new("Chennai", 78),
        City::new("Bangalore", 85),
        City::new("Hyderabad", 92),
        City::new("Pune", 88),
        City::new("Ahmedabad", 125),
        City::new("Jaipur", 135),
        City::new("Lucknow", 158),
        City::new("Kanpur", 172),
        City::new("Nagpur", 98),
        City::new("Indore", 105),
        City::new("Bhopal", 112),
        City::new("Visakhapatnam", 82),
    ]
});

/// All monitored cities, most polluted metros first
#[must_use]
pub fn registry() -> &'static [City] {
    &CITIES
}

/// Case-insensitive lookup; unknown cities fall back to the first entry
#[must_use]
pub fn lookup(name: &str) -> &'static City {
    CITIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
        .unwrap_or(&CITIES[0])
}
