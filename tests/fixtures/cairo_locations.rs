//! Real Cairo / Giza locations for realistic test fixtures.

use route_optimizer::Location;

/// A named point with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn location(&self, id: &str) -> Location {
        Location::new(id, self.lat, self.lng).with_name(self.name)
    }
}

/// Collector homes (route start points).
pub const HOMES: &[Place] = &[
    Place::new("Tahrir Square", 30.0444, 31.2357),
    Place::new("Dokki", 30.0385, 31.2118),
];

/// Company offices (route end points).
pub const OFFICES: &[Place] = &[
    Place::new("Ramses Station", 30.0626, 31.2497),
];

/// Customer stops.
pub const CUSTOMERS: &[Place] = &[
    Place::new("Garden City", 30.0131, 31.2089),
    Place::new("Cairo Tower", 30.0459, 31.2243),
    Place::new("Egyptian Museum", 30.0478, 31.2336),
    Place::new("Khan el-Khalili", 30.0477, 31.2623),
    Place::new("Citadel", 30.0287, 31.2599),
    Place::new("Giza Pyramids", 29.9792, 31.1342),
];

/// Home first, office second, then every customer.
pub fn day_route() -> Vec<Location> {
    let mut locations = vec![HOMES[0].location("home"), OFFICES[0].location("office")];
    locations.extend(
        CUSTOMERS
            .iter()
            .enumerate()
            .map(|(i, place)| place.location(&format!("customer-{}", i + 1))),
    );
    locations
}
