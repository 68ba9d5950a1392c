use crate::common::constants::{FOUR_PI, FOUR_THIRDS_PI};
use crate::domain::{NmrError, NmrResult};
use serde::Serialize;

/// Spherical pore metrics in base units (µm, µm², µm³, 1/µm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoreGeometry {
    pub radius: f64,
    pub surface_area: f64,
    pub volume: f64,
    pub surface_to_volume: f64,
}

impl PoreGeometry {
    /// A zero radius yields an all-zero geometry rather than an infinite S/V.
    ///
    /// S/V uses the closed form `3 / r`, so it stays exact when `r²` or `r³`
    /// leave the `f64` range. A positive radius too small for `3 / r` to be
    /// finite is rejected.
    pub fn compute(radius: f64) -> NmrResult<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(NmrError::InvalidGeometry { radius });
        }

        let surface_area = FOUR_PI * radius * radius;
        let volume = FOUR_THIRDS_PI * radius * radius * radius;
        let surface_to_volume = closed_form_surface_to_volume(radius);
        if !surface_to_volume.is_finite() {
            return Err(NmrError::InvalidGeometry { radius });
        }

        Ok(Self {
            radius,
            surface_area,
            volume,
            surface_to_volume,
        })
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius == 0.0
    }
}

/// S/V for a sphere without going through area and volume.
pub fn closed_form_surface_to_volume(radius: f64) -> f64 {
    if radius == 0.0 { 0.0 } else { 3.0 / radius }
}

#[cfg(test)]
mod tests {
    use super::{PoreGeometry, closed_form_surface_to_volume};
    use crate::domain::NmrError;
    use crate::numerics::within_tolerance;
    use std::f64::consts::PI;

    #[test]
    fn unit_sphere_metrics_match_textbook_values() {
        let geometry = PoreGeometry::compute(1.0).expect("unit sphere");
        assert!((geometry.surface_area - 4.0 * PI).abs() < 1.0e-12);
        assert!((geometry.volume - 4.0 / 3.0 * PI).abs() < 1.0e-12);
        assert!((geometry.surface_to_volume - 3.0).abs() < 1.0e-12);
        assert!(!geometry.is_degenerate());
    }

    #[test]
    fn surface_to_volume_matches_closed_form() {
        for radius in [0.01, 0.25, 0.5, 1.0, 3.3, 5.0, 250.0] {
            let geometry = PoreGeometry::compute(radius).expect("positive radius");
            assert!(within_tolerance(
                geometry.surface_to_volume,
                closed_form_surface_to_volume(radius),
                0.0,
                1.0e-12,
                1.0e-300,
            ));
        }
    }

    #[test]
    fn zero_radius_is_an_all_zero_geometry() {
        let geometry = PoreGeometry::compute(0.0).expect("zero radius is allowed");
        assert_eq!(geometry.surface_area, 0.0);
        assert_eq!(geometry.volume, 0.0);
        assert_eq!(geometry.surface_to_volume, 0.0);
        assert!(geometry.is_degenerate());
        assert_eq!(closed_form_surface_to_volume(0.0), 0.0);
    }

    #[test]
    fn extreme_radii_keep_the_inverse_radius_ratio() {
        for radius in [1.0e-120, 1.0e120, 1.0e200] {
            let geometry = PoreGeometry::compute(radius).expect("finite positive radius");
            assert!(!geometry.is_degenerate());
            assert!(geometry.surface_to_volume > 0.0);
            assert!(within_tolerance(
                geometry.surface_to_volume,
                3.0 / radius,
                0.0,
                1.0e-15,
                1.0e-300,
            ));
        }
    }

    #[test]
    fn negative_and_non_finite_radii_are_rejected() {
        for radius in [-0.1, f64::NAN, f64::INFINITY, 5.0e-324] {
            let error = PoreGeometry::compute(radius).expect_err("radius should be rejected");
            assert!(matches!(error, NmrError::InvalidGeometry { .. }));
            assert_eq!(error.placeholder(), "INPUT.INVALID_GEOMETRY");
        }
    }
}
