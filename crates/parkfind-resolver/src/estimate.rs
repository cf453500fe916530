//! Hourly price estimate from the distance to the city center.

/// `(max distance in km, rubles per hour)`, nearest bracket first.
const PRICE_BRACKETS: &[(f64, u32)] = &[
    (0.30, 800),
    (1.00, 400),
    (3.00, 250),
    (8.00, 150),
    (20.0, 100),
];

/// Rate beyond the last bracket.
const OUTSKIRTS_PRICE: u32 = 70;

/// Rubles per hour for a parking `distance_km` from the center.
///
/// Bracket bounds are inclusive.
#[must_use]
pub fn estimate_hourly_price(distance_km: f64) -> u32 {
    PRICE_BRACKETS
        .iter()
        .find(|(bound, _)| distance_km <= *bound)
        .map_or(OUTSKIRTS_PRICE, |(_, price)| *price)
}
