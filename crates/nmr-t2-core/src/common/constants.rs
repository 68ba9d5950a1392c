//! Shared numeric constants and the default engine parameters.
//!
//! Defaults reproduce the reference petrophysics workbook so that a bare
//! invocation yields the familiar three-scenario comparison.

pub const PI: f64 = std::f64::consts::PI;
pub const FOUR_PI: f64 = 4.0 * PI;
pub const FOUR_THIRDS_PI: f64 = 4.0 / 3.0 * PI;

/// Default decay-time samples in milliseconds.
pub const DEFAULT_T2_GRID_MS: [f64; 12] = [
    0.5, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0, 1024.0,
];
pub const DEFAULT_T2_TEXT: &str = "0.5, 1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024";

/// Surface relaxivity in µm/ms.
pub const DEFAULT_RELAXIVITY: f64 = 0.003;
pub const RELAXIVITY_TYPICAL_RANGE: (f64, f64) = (0.001, 0.01);

/// Pore radius in µm for the variant-porosity comparison.
pub const DEFAULT_RADIUS: f64 = 1.0;
pub const DEFAULT_POROSITIES: [u8; 3] = [30, 20, 10];

pub const DEFAULT_SHARED_POROSITY: u8 = 50;
/// Pore radii in µm for the variant-geometry comparison.
pub const DEFAULT_RADII: [f64; 3] = [1.0, 0.5, 0.25];

pub const MAX_POROSITY_PERCENT: u8 = 100;
