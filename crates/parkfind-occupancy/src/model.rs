//! The occupancy formula and its labels.

use serde::{Serialize, Serializer};

const BASE_DEMAND: f64 = 0.85;
/// Time factor used when the hour is unknown.
const UNKNOWN_HOUR_FACTOR: f64 = 0.65;
const MIN_PROBABILITY: f64 = 0.05;
const MAX_PROBABILITY: f64 = 0.95;

/// Probability in `[0.05, 0.95]` that a parking is occupied, rounded to 3
/// decimals.
///
/// `cost` is rubles per hour, `distance_km` the distance to the center,
/// `spots` the number of places and `hour` the local hour (0..=23).
#[must_use]
pub fn estimate_occupancy(cost: f64, distance_km: f64, spots: i64, hour: Option<u32>) -> f64 {
    let distance_factor = (-distance_km / 2.0).exp();
    let price_factor = 1.0 / (1.0 + ((cost - 100.0) / 50.0).exp());
    #[allow(clippy::cast_precision_loss)]
    let spots_factor = 1.0 / (1.0 + (1.0 + spots as f64).ln() / 3.0);
    let time_factor = hour.map_or(UNKNOWN_HOUR_FACTOR, |h| {
        // Demand peaks around midday, shifted one hour.
        let shifted = f64::from((h + 1) % 24);
        0.3 + 0.7 * (-(shifted - 13.0).powi(2) / 8.0).exp()
    });

    let mut probability = BASE_DEMAND * 0.4
        + distance_factor * 0.25
        + price_factor * 0.15
        + spots_factor * 0.05
        + time_factor * 0.15;

    // Free parking near the center fills up regardless of the rest.
    if cost == 0.0 && distance_km <= 1.0 {
        probability = probability.max(0.9 - distance_km * 0.2);
    }
    if cost > 500.0 {
        probability = probability.min(0.3 * (1.0 - cost / 2000.0));
    }

    let clamped = probability.clamp(MIN_PROBABILITY, MAX_PROBABILITY);
    (clamped * 1000.0).round() / 1000.0
}

/// Coarse bucket of an occupancy probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl OccupancyLevel {
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.2 {
            Self::VeryLow
        } else if probability < 0.4 {
            Self::Low
        } else if probability < 0.6 {
            Self::Medium
        } else if probability < 0.8 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "очень низкая",
            Self::Low => "низкая",
            Self::Medium => "средняя",
            Self::High => "высокая",
            Self::VeryHigh => "очень высокая",
        }
    }
}

impl Serialize for OccupancyLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Day-part description for a local hour.
#[must_use]
pub fn time_context(hour: u32) -> &'static str {
    match hour {
        0..=5 => "ночь (минимум загруженности)",
        6..=9 => "утро (растущая загруженность)",
        10..=13 => "обеденное время (пик загруженности)",
        14..=17 => "день (высокая загруженность)",
        18..=21 => "вечер (спадающая загруженность)",
        _ => "поздний вечер (низкая загруженность)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_bounds() {
        for cost in [0.0, 50.0, 100.0, 300.0, 800.0, 1999.0, 5000.0] {
            for distance in [0.0, 0.5, 2.0, 10.0, 50.0] {
                for spots in [1, 10, 500] {
                    for hour in [None, Some(0), Some(12), Some(23)] {
                        let p = estimate_occupancy(cost, distance, spots, hour);
                        assert!((0.05..=0.95).contains(&p), "{cost} {distance} {spots} {hour:?}: {p}");
                    }
                }
            }
        }
    }

    #[test]
    fn matches_reference_value() {
        // 0.34 + e^-1 * 0.25 + 0.5 * 0.15 + 1/(1+ln(11)/3) * 0.05 + 1.0 * 0.15
        let p = estimate_occupancy(100.0, 2.0, 10, Some(12));
        assert!((p - 0.685).abs() < 1e-9, "got {p}");
    }

    #[test]
    fn free_central_parking_is_busy() {
        let p = estimate_occupancy(0.0, 0.5, 100, Some(3));
        assert!(p >= 0.8, "got {p}");
    }

    #[test]
    fn expensive_parking_is_capped() {
        let p = estimate_occupancy(1000.0, 0.0, 10, Some(12));
        assert!((p - 0.15).abs() < 1e-9, "got {p}");
        let floor = estimate_occupancy(3000.0, 0.0, 10, Some(12));
        assert!((floor - 0.05).abs() < 1e-9, "got {floor}");
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(OccupancyLevel::from_probability(0.05), OccupancyLevel::VeryLow);
        assert_eq!(OccupancyLevel::from_probability(0.2), OccupancyLevel::Low);
        assert_eq!(OccupancyLevel::from_probability(0.59), OccupancyLevel::Medium);
        assert_eq!(OccupancyLevel::from_probability(0.6), OccupancyLevel::High);
        assert_eq!(OccupancyLevel::from_probability(0.8), OccupancyLevel::VeryHigh);
        assert_eq!(OccupancyLevel::VeryHigh.label(), "очень высокая");
    }

    #[test]
    fn day_parts() {
        assert_eq!(time_context(0), "ночь (минимум загруженности)");
        assert_eq!(time_context(9), "утро (растущая загруженность)");
        assert_eq!(time_context(13), "обеденное время (пик загруженности)");
        assert_eq!(time_context(14), "день (высокая загруженность)");
        assert_eq!(time_context(21), "вечер (спадающая загруженность)");
        assert_eq!(time_context(22), "поздний вечер (низкая загруженность)");
    }
}
