use super::serialization::format_fixed_f64;
use super::t2grid::T2Grid;
use crate::common::units::{TimeUnit, UnitSystem};
use crate::domain::{NmrError, NmrResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableColumn {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub t2: f64,
    pub values: Vec<(String, f64)>,
}

impl TableRow {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(candidate, _)| candidate == label)
            .map(|(_, value)| *value)
    }
}

/// Scenario curves aligned on one shared T2 axis (stored in ms).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    t2_axis: Vec<f64>,
    columns: Vec<TableColumn>,
}

impl ResultTable {
    pub fn assemble<I, S>(grid: &T2Grid, columns: I) -> NmrResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let expected = grid.len();
        let mut assembled = Vec::new();
        for (label, values) in columns {
            let label = label.into();
            if values.len() != expected {
                return Err(NmrError::ShapeMismatch {
                    label,
                    expected,
                    actual: values.len(),
                });
            }
            assembled.push(TableColumn { label, values });
        }

        Ok(Self {
            t2_axis: grid.samples().to_vec(),
            columns: assembled,
        })
    }

    pub fn t2_axis(&self) -> &[f64] {
        &self.t2_axis
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.t2_axis.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn to_rows(&self) -> Vec<TableRow> {
        self.rows_with_axis(&self.t2_axis)
    }

    pub fn to_display_rows(&self, units: &UnitSystem, time_unit: TimeUnit) -> Vec<TableRow> {
        self.rows_with_axis(&self.display_axis(units, time_unit))
    }

    pub fn display_axis(&self, units: &UnitSystem, time_unit: TimeUnit) -> Vec<f64> {
        self.t2_axis
            .iter()
            .map(|t2| units.denormalize_time(*t2, time_unit))
            .collect()
    }

    /// `T2, Mt1, Mt2, ...` in column order.
    pub fn csv_header(&self) -> Vec<String> {
        std::iter::once("T2".to_string())
            .chain((1..=self.columns.len()).map(|index| format!("Mt{index}")))
            .collect()
    }

    pub fn to_csv(&self, units: &UnitSystem, time_unit: TimeUnit) -> String {
        let mut csv = self.csv_header().join(",");
        csv.push('\n');
        for row in self.to_display_rows(units, time_unit) {
            let mut fields = Vec::with_capacity(row.values.len() + 1);
            fields.push(row.t2.to_string());
            fields.extend(row.values.iter().map(|(_, value)| value.to_string()));
            csv.push_str(&fields.join(","));
            csv.push('\n');
        }
        csv
    }

    /// Fixed-width listing: T2 at one decimal (four for seconds), Mt at four.
    pub fn to_display_text(&self, units: &UnitSystem, time_unit: TimeUnit) -> String {
        let t2_precision = match time_unit {
            TimeUnit::Millisecond => 1,
            TimeUnit::Second => 4,
        };
        let header = self.csv_header();
        let mut text = format!("{:>12}", format!("{} ({})", header[0], time_unit));
        for name in &header[1..] {
            text.push_str(&format!("{name:>12}"));
        }
        text.push('\n');

        for row in self.to_display_rows(units, time_unit) {
            text.push_str(&format_fixed_f64(row.t2, 12, t2_precision));
            for (_, value) in &row.values {
                text.push_str(&format_fixed_f64(*value, 12, 4));
            }
            text.push('\n');
        }
        text
    }

    fn rows_with_axis(&self, axis: &[f64]) -> Vec<TableRow> {
        axis.iter()
            .enumerate()
            .map(|(index, t2)| TableRow {
                t2: *t2,
                values: self
                    .columns
                    .iter()
                    .map(|column| (column.label.clone(), column.values[index]))
                    .collect(),
            })
            .collect()
    }
}
