pub mod config;
pub mod constants;
pub mod units;

pub use config::EngineConfig;
pub use units::{LengthUnit, TimeUnit, UnitSystem};
