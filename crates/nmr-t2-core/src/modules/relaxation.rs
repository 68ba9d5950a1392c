use super::geometry::PoreGeometry;
use crate::domain::{Advised, Advisory, AdvisoryKind, NmrError, NmrResult};

/// Surface relaxivity (µm/ms) paired with a pore S/V ratio (1/µm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxationParameters {
    relaxivity: f64,
    surface_to_volume: f64,
}

impl RelaxationParameters {
    pub fn new(relaxivity: f64, surface_to_volume: f64) -> NmrResult<Self> {
        if !relaxivity.is_finite() || relaxivity <= 0.0 {
            return Err(NmrError::invalid_parameter(
                "relaxivity",
                relaxivity,
                "must be a finite positive rate in µm/ms",
            ));
        }
        if !surface_to_volume.is_finite() || surface_to_volume < 0.0 {
            return Err(NmrError::invalid_parameter(
                "surface-to-volume ratio",
                surface_to_volume,
                "must be finite and non-negative",
            ));
        }

        Ok(Self {
            relaxivity,
            surface_to_volume,
        })
    }

    pub fn for_geometry(relaxivity: f64, geometry: &PoreGeometry) -> NmrResult<Self> {
        Self::new(relaxivity, geometry.surface_to_volume)
    }

    pub fn relaxivity(&self) -> f64 {
        self.relaxivity
    }

    pub fn surface_to_volume(&self) -> f64 {
        self.surface_to_volume
    }

    /// T2 in ms. A pore with no relaxing surface reports zero plus an advisory.
    pub fn t2(&self) -> Advised<f64> {
        if self.surface_to_volume == 0.0 {
            return Advised::with_advisory(
                0.0,
                Advisory::new(AdvisoryKind::DegenerateGeometry, "surface-to-volume ratio is 0"),
            );
        }
        Advised::clean(1.0 / (self.relaxivity * self.surface_to_volume))
    }
}

pub fn derive_t2(relaxivity: f64, surface_to_volume: f64) -> NmrResult<Advised<f64>> {
    RelaxationParameters::new(relaxivity, surface_to_volume).map(|params| params.t2())
}
