//! Plot-ready series for a rendering layer.
//!
//! The core draws nothing. It hands over the x/y values, per-series labels and
//! axis titles that a chart needs.

use super::table::ResultTable;
use crate::common::units::{TimeUnit, UnitSystem};
use crate::domain::ScenarioMode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<PlotSeries>,
}

impl ChartData {
    pub fn from_table(
        mode: ScenarioMode,
        table: &ResultTable,
        units: &UnitSystem,
        time_unit: TimeUnit,
    ) -> Self {
        let x = table.display_axis(units, time_unit);
        let series = table
            .columns()
            .iter()
            .map(|column| PlotSeries {
                label: column.label.clone(),
                x: x.clone(),
                y: column.values.clone(),
            })
            .collect();

        Self {
            title: mode.chart_title().to_string(),
            x_label: format!("T2 Distribution ({time_unit})"),
            y_label: "Porosity (%)".to_string(),
            series,
        }
    }
}
