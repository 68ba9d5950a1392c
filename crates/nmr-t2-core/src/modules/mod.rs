pub mod chart;
pub mod decay;
pub mod engine;
pub mod geometry;
pub mod relaxation;
pub mod scenario;
pub mod serialization;
pub mod session;
pub mod t2grid;
pub mod table;

mod traits;

pub use chart::{ChartData, PlotSeries};
pub use decay::DecayCurve;
pub use engine::{Engine, EngineOutput};
pub use geometry::PoreGeometry;
pub use relaxation::{RelaxationParameters, derive_t2};
pub use scenario::{GeometrySummary, Scenario, ScenarioPlan, ScenarioSet, SharedParameters};
pub use session::EngineSession;
pub use t2grid::T2Grid;
pub use table::{ResultTable, TableColumn, TableRow};
pub use traits::DecayEngine;
