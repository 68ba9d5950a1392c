use super::chart::ChartData;
use super::scenario::{GeometrySummary, ScenarioSet, SharedParameters};
use super::t2grid::T2Grid;
use super::table::ResultTable;
use super::traits::DecayEngine;
use crate::common::config::EngineConfig;
use crate::common::units::{LengthUnit, TimeUnit, UnitSystem};
use crate::domain::{Advisory, NmrResult, ScenarioMode};
use serde::Serialize;

/// Everything one pass produces for a display or export layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineOutput {
    pub mode: ScenarioMode,
    pub relaxivity: f64,
    pub length_unit: LengthUnit,
    pub time_unit: TimeUnit,
    /// Decay-time samples in ms.
    pub t2_grid: T2Grid,
    pub summaries: Vec<GeometrySummary>,
    pub table: ResultTable,
    pub chart: ChartData,
    pub advisories: Vec<Advisory>,
    #[serde(skip)]
    pub units: UnitSystem,
}

impl EngineOutput {
    pub fn scenario_count(&self) -> usize {
        self.table.column_count()
    }

    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for summary in &self.summaries {
            lines.push(format!("{}:", summary.label));
            lines.extend(summary.display_lines().into_iter().map(|line| format!("  {line}")));
        }
        lines
    }
}

/// Stateless computation pass over an [`EngineConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    units: UnitSystem,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DecayEngine for Engine {
    fn run(&self, config: &EngineConfig) -> NmrResult<EngineOutput> {
        let (grid, grid_advisory) =
            T2Grid::parse_with_units(&config.t2_values, config.time_unit, &self.units)
                .into_parts();

        let shared = SharedParameters {
            relaxivity: config.relaxivity,
            grid: &grid,
            units: &self.units,
            length_unit: config.length_unit,
        };
        let set = ScenarioSet::build(&config.plan(), &shared, &config.labels)?;
        let table = set.to_table()?;
        let chart = ChartData::from_table(config.mode, &table, &self.units, config.time_unit);
        let summaries = set.geometry_summaries(&self.units, config.length_unit, config.time_unit);

        let advisories = grid_advisory
            .into_iter()
            .chain(set.advisories().iter().cloned())
            .collect();

        Ok(EngineOutput {
            mode: config.mode,
            relaxivity: config.relaxivity,
            length_unit: config.length_unit,
            time_unit: config.time_unit,
            t2_grid: grid,
            summaries,
            table,
            chart,
            advisories,
            units: self.units,
        })
    }
}
