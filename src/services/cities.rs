use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

pub const DEFAULT_CITY: &str = "La Paz";

pub const SUPPORTED: [City; 9] = [
    City { name: "La Paz", lat: -16.5000, lon: -68.1500 },
    City { name: "Santa Cruz", lat: -17.7833, lon: -63.1821 },
    City { name: "Cochabamba", lat: -17.3895, lon: -66.1568 },
    City { name: "Sucre", lat: -19.0333, lon: -65.2627 },
    City { name: "Oruro", lat: -17.9667, lon: -67.1167 },
    City { name: "Tarija", lat: -21.5355, lon: -64.7296 },
    City { name: "Potosí", lat: -19.5836, lon: -65.7531 },
    City { name: "Trinidad", lat: -14.8333, lon: -64.9000 },
    City { name: "Cobija", lat: -11.0267, lon: -68.7692 },
];

pub fn is_supported(name: &str) -> bool {
    SUPPORTED.iter().any(|c| c.name == name)
}

/// Closest supported city by plain lat/lon distance. Falls back to
/// La Paz when the coordinates are not usable.
pub fn nearest_city(lat: f64, lon: f64) -> &'static str {
    if !lat.is_finite() || !lon.is_finite() {
        return DEFAULT_CITY;
    }

    let mut best = DEFAULT_CITY;
    let mut min = f64::INFINITY;

    for c in SUPPORTED.iter() {
        let d = ((lat - c.lat).powi(2) + (lon - c.lon).powi(2)).sqrt();
        if d < min {
            min = d;
            best = c.name;
        }
    }

    best
}
