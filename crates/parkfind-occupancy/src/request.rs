use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::error::OccupancyError;
use crate::model::{estimate_occupancy, time_context, OccupancyLevel};

/// Caller-supplied occupancy parameters, from a query string or JSON body.
#[derive(Debug, Clone, Deserialize)]
pub struct OccupancyRequest {
    /// Rubles per hour.
    pub cost: f64,
    /// Kilometers to the center.
    pub distance: f64,
    pub spots: i64,
    /// Local hour; the current hour when absent.
    #[serde(default)]
    pub hour: Option<i64>,
}

/// Parameters echoed back in the report, with the hour resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyParameters {
    pub cost: f64,
    pub distance: f64,
    pub spots: i64,
    pub hour: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OccupancyReport {
    pub occupancy_probability: f64,
    pub occupancy_percentage: f64,
    pub parameters: OccupancyParameters,
    pub occupancy_level: OccupancyLevel,
    pub time_context: &'static str,
}

impl OccupancyRequest {
    /// Checks ranges and fills in the hour from `current_hour` when missing.
    ///
    /// # Errors
    ///
    /// - [`OccupancyError::HourOutOfRange`] if `hour` is outside `0..=23`.
    /// - [`OccupancyError::Negative`] if `cost` or `distance` is below zero.
    /// - [`OccupancyError::NoSpots`] if `spots` is zero or negative.
    pub fn validate(&self, current_hour: u32) -> Result<OccupancyParameters, OccupancyError> {
        let hour = match self.hour {
            Some(h) => u32::try_from(h)
                .ok()
                .filter(|h| *h <= 23)
                .ok_or(OccupancyError::HourOutOfRange(h))?,
            None => current_hour,
        };
        if self.cost.is_nan() || self.cost < 0.0 {
            return Err(OccupancyError::Negative { name: "cost" });
        }
        if self.distance.is_nan() || self.distance < 0.0 {
            return Err(OccupancyError::Negative { name: "distance" });
        }
        if self.spots <= 0 {
            return Err(OccupancyError::NoSpots(self.spots));
        }

        Ok(OccupancyParameters {
            cost: self.cost,
            distance: self.distance,
            spots: self.spots,
            hour,
        })
    }

    /// Validates against the local clock and computes the report.
    ///
    /// # Errors
    ///
    /// See [`OccupancyRequest::validate`].
    pub fn assess(&self) -> Result<OccupancyReport, OccupancyError> {
        self.assess_at(chrono::Local::now().hour())
    }

    /// Like [`OccupancyRequest::assess`] with an explicit current hour.
    ///
    /// # Errors
    ///
    /// See [`OccupancyRequest::validate`].
    pub fn assess_at(&self, current_hour: u32) -> Result<OccupancyReport, OccupancyError> {
        let parameters = self.validate(current_hour)?;
        let probability = estimate_occupancy(
            parameters.cost,
            parameters.distance,
            parameters.spots,
            Some(parameters.hour),
        );

        Ok(OccupancyReport {
            occupancy_probability: probability,
            occupancy_percentage: (probability * 1000.0).round() / 10.0,
            occupancy_level: OccupancyLevel::from_probability(probability),
            time_context: time_context(parameters.hour),
            parameters,
        })
    }
}
