//! Straight-line route estimates.
//!
//! There is no routing service behind this: distance is the planar distance
//! between the two points in degrees, scaled by 111 km per degree.

use genie_core::entities::LatLng;
use genie_core::enums::VehicleMode;
use serde::{Deserialize, Serialize};

/// Kilometres per degree used for the planar approximation.
const KM_PER_DEGREE: f64 = 111.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEstimate {
    /// Rounded to one decimal.
    pub distance_km: f64,
    pub minutes: u32,
    pub vehicle: VehicleMode,
}

#[must_use]
pub fn estimate_route(from: LatLng, to: LatLng, vehicle: VehicleMode) -> RouteEstimate {
    let distance = (to.lat - from.lat).hypot(to.lng - from.lng) * KM_PER_DEGREE;
    // Bounded by the coordinate ranges, far below u32::MAX.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minutes = (distance / vehicle.speed_kmh() * 60.0).round() as u32;
    RouteEstimate {
        distance_km: (distance * 10.0).round() / 10.0,
        minutes,
        vehicle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DELHI: LatLng = LatLng {
        lat: 28.6139,
        lng: 77.2090,
    };

    #[test]
    fn same_point_is_zero() {
        let est = estimate_route(DELHI, DELHI, VehicleMode::Car);
        assert!(est.distance_km.abs() < f64::EPSILON);
        assert_eq!(est.minutes, 0);
    }

    #[rstest]
    #[case(VehicleMode::Car, 133)]
    #[case(VehicleMode::Bike, 266)]
    #[case(VehicleMode::Walk, 1332)]
    fn one_degree_north(#[case] vehicle: VehicleMode, #[case] minutes: u32) {
        let to = LatLng {
            lat: DELHI.lat + 1.0,
            lng: DELHI.lng,
        };
        let est = estimate_route(DELHI, to, vehicle);
        assert!((est.distance_km - 111.0).abs() < 1e-9);
        assert_eq!(est.minutes, minutes);
        assert_eq!(est.vehicle, vehicle);
    }

    #[test]
    fn distance_rounds_to_one_decimal() {
        let to = LatLng {
            lat: DELHI.lat + 0.003,
            lng: DELHI.lng + 0.004,
        };
        // 0.005 degrees * 111 = 0.555 km
        let est = estimate_route(DELHI, to, VehicleMode::Walk);
        assert!((est.distance_km - 0.6).abs() < 1e-9);
        assert_eq!(est.minutes, 7);
    }
}
