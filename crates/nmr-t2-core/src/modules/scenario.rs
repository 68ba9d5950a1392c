use super::decay::DecayCurve;
use super::geometry::PoreGeometry;
use super::relaxation::RelaxationParameters;
use super::t2grid::T2Grid;
use super::table::ResultTable;
use crate::common::constants::MAX_POROSITY_PERCENT;
use crate::common::units::{LengthUnit, TimeUnit, UnitSystem};
use crate::domain::{Advisory, NmrError, NmrResult, ScenarioMode};
use serde::Serialize;

/// Per-scenario inputs. The variant carries the fixed axis alongside the
/// varying one, so a plan always matches its mode.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioPlan {
    VariantPorosity { radius: f64, porosities: Vec<u8> },
    VariantGeometry { porosity: u8, radii: Vec<f64> },
}

impl ScenarioPlan {
    pub fn mode(&self) -> ScenarioMode {
        match self {
            Self::VariantPorosity { .. } => ScenarioMode::VariantPorosity,
            Self::VariantGeometry { .. } => ScenarioMode::VariantGeometry,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::VariantPorosity { porosities, .. } => porosities.len(),
            Self::VariantGeometry { radii, .. } => radii.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SharedParameters<'a> {
    pub relaxivity: f64,
    pub grid: &'a T2Grid,
    pub units: &'a UnitSystem,
    /// Unit used when rendering radii into default labels.
    pub length_unit: LengthUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub label: String,
    pub porosity: u8,
    pub geometry: PoreGeometry,
    pub t2: f64,
}

/// Calculated parameters for one distinct pore geometry, in display units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometrySummary {
    pub label: String,
    pub length_unit: LengthUnit,
    pub time_unit: TimeUnit,
    pub radius: f64,
    pub surface_area: f64,
    pub volume: f64,
    pub surface_to_volume: f64,
    pub t2: f64,
}

impl GeometrySummary {
    pub fn new(
        label: impl Into<String>,
        geometry: &PoreGeometry,
        t2: f64,
        units: &UnitSystem,
        length_unit: LengthUnit,
        time_unit: TimeUnit,
    ) -> Self {
        Self {
            label: label.into(),
            length_unit,
            time_unit,
            radius: units.denormalize_length(geometry.radius, length_unit),
            surface_area: units.area_to_display(geometry.surface_area, length_unit),
            volume: units.volume_to_display(geometry.volume, length_unit),
            surface_to_volume: units.inverse_length_to_display(
                geometry.surface_to_volume,
                length_unit,
            ),
            t2: units.denormalize_time(t2, time_unit),
        }
    }

    pub fn display_lines(&self) -> Vec<String> {
        let length = self.length_unit.symbol();
        vec![
            format!("Radius (r): {:.2} {length}", self.radius),
            format!("Surface Area (S): {:.4} {length}²", self.surface_area),
            format!("Volume (V): {:.4} {length}³", self.volume),
            format!(
                "Surface-to-Volume Ratio (S/V): {:.4} 1/{length}",
                self.surface_to_volume
            ),
            format!("T2: {:.4} {}", self.t2, self.time_unit.symbol()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSet {
    mode: ScenarioMode,
    grid: T2Grid,
    scenarios: Vec<Scenario>,
    curves: Vec<DecayCurve>,
    advisories: Vec<Advisory>,
}

impl ScenarioSet {
    /// Builds every scenario through geometry, T2 and decay. `labels` override
    /// the generated legend text by position; blank entries are ignored.
    pub fn build(
        plan: &ScenarioPlan,
        shared: &SharedParameters<'_>,
        labels: &[String],
    ) -> NmrResult<Self> {
        let mode = plan.mode();
        if plan.is_empty() {
            return Err(NmrError::EmptyScenarioSet {
                mode: mode.as_str(),
            });
        }

        let mut advisories = Vec::new();
        let mut scenarios = Vec::with_capacity(plan.len());

        match plan {
            ScenarioPlan::VariantPorosity { radius, porosities } => {
                let geometry = PoreGeometry::compute(*radius)?;
                let (t2, advisory) = RelaxationParameters::for_geometry(shared.relaxivity, &geometry)?
                    .t2()
                    .into_parts();
                advisories.extend(advisory);

                for (index, porosity) in porosities.iter().copied().enumerate() {
                    validate_porosity(porosity)?;
                    let label = scenario_label(labels, index, || {
                        format!("Porosity {} ({}%)", index + 1, porosity)
                    });
                    scenarios.push(Scenario {
                        label,
                        porosity,
                        geometry,
                        t2,
                    });
                }
            }
            ScenarioPlan::VariantGeometry { porosity, radii } => {
                validate_porosity(*porosity)?;
                for (index, radius) in radii.iter().copied().enumerate() {
                    let geometry = PoreGeometry::compute(radius)?;
                    let label = scenario_label(labels, index, || {
                        format!(
                            "Pore Size {} ({:.2} {})",
                            index + 1,
                            shared.units.denormalize_length(radius, shared.length_unit),
                            shared.length_unit
                        )
                    });
                    let (t2, advisory) =
                        RelaxationParameters::for_geometry(shared.relaxivity, &geometry)?
                            .t2()
                            .into_parts();
                    advisories.extend(advisory.map(|advisory| advisory.for_scenario(label.clone())));
                    scenarios.push(Scenario {
                        label,
                        porosity: *porosity,
                        geometry,
                        t2,
                    });
                }
            }
        }

        let mut curves = Vec::with_capacity(scenarios.len());
        for scenario in &scenarios {
            let (curve, advisory) = DecayCurve::evaluate(
                scenario.label.clone(),
                shared.grid,
                f64::from(scenario.porosity),
                scenario.t2,
            )
            .into_parts();
            advisories.extend(advisory);
            curves.push(curve);
        }

        Ok(Self {
            mode,
            grid: shared.grid.clone(),
            scenarios,
            curves,
            advisories,
        })
    }

    pub fn mode(&self) -> ScenarioMode {
        self.mode
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn curves(&self) -> &[DecayCurve] {
        &self.curves
    }

    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// One summary per distinct geometry: the shared pore in variant-porosity
    /// mode, one per scenario in variant-geometry mode.
    pub fn geometry_summaries(
        &self,
        units: &UnitSystem,
        length_unit: LengthUnit,
        time_unit: TimeUnit,
    ) -> Vec<GeometrySummary> {
        match self.mode {
            ScenarioMode::VariantPorosity => self
                .scenarios
                .first()
                .map(|scenario| {
                    GeometrySummary::new(
                        "Shared Pore",
                        &scenario.geometry,
                        scenario.t2,
                        units,
                        length_unit,
                        time_unit,
                    )
                })
                .into_iter()
                .collect(),
            ScenarioMode::VariantGeometry => self
                .scenarios
                .iter()
                .map(|scenario| {
                    GeometrySummary::new(
                        scenario.label.clone(),
                        &scenario.geometry,
                        scenario.t2,
                        units,
                        length_unit,
                        time_unit,
                    )
                })
                .collect(),
        }
    }

    pub fn to_table(&self) -> NmrResult<ResultTable> {
        ResultTable::assemble(
            &self.grid,
            self.curves
                .iter()
                .map(|curve| (curve.label.clone(), curve.mt.clone())),
        )
    }
}

fn validate_porosity(porosity: u8) -> NmrResult<()> {
    if porosity > MAX_POROSITY_PERCENT {
        return Err(NmrError::invalid_parameter(
            "porosity",
            f64::from(porosity),
            "must be a percentage between 0 and 100",
        ));
    }
    Ok(())
}

fn scenario_label(labels: &[String], index: usize, fallback: impl FnOnce() -> String) -> String {
    labels
        .get(index)
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .unwrap_or_else(fallback)
}

#[cfg(test)]
mod tests {
    use super::{ScenarioPlan, ScenarioSet, SharedParameters};
    use crate::common::units::{LengthUnit, TimeUnit, UnitSystem};
    use crate::domain::{AdvisoryKind, NmrError, ScenarioMode};
    use crate::modules::t2grid::T2Grid;

    fn shared<'a>(grid: &'a T2Grid, units: &'a UnitSystem) -> SharedParameters<'a> {
        SharedParameters {
            relaxivity: 0.003,
            grid,
            units,
            length_unit: LengthUnit::Micrometer,
        }
    }

    #[test]
    fn variant_porosity_shares_one_geometry_and_t2() {
        let grid = T2Grid::default();
        let units = UnitSystem::default();
        let plan = ScenarioPlan::VariantPorosity {
            radius: 1.0,
            porosities: vec![30, 20, 10],
        };
        let set = ScenarioSet::build(&plan, &shared(&grid, &units), &[]).expect("set");

        assert_eq!(set.mode(), ScenarioMode::VariantPorosity);
        assert_eq!(set.curves().len(), 3);
        let labels: Vec<&str> = set.scenarios().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Porosity 1 (30%)", "Porosity 2 (20%)", "Porosity 3 (10%)"]
        );
        let t2 = set.scenarios()[0].t2;
        assert!((t2 - 1.0 / 0.009).abs() < 1.0e-9);
        assert!(set.scenarios().iter().all(|scenario| scenario.t2 == t2));
        assert!(set.advisories().is_empty());

        let summaries = set.geometry_summaries(&units, LengthUnit::Micrometer, TimeUnit::Millisecond);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].label, "Shared Pore");
    }

    #[test]
    fn variant_geometry_follows_the_inverse_radius_law() {
        let grid = T2Grid::default();
        let units = UnitSystem::default();
        let plan = ScenarioPlan::VariantGeometry {
            porosity: 50,
            radii: vec![1.0, 0.5, 0.25],
        };
        let set = ScenarioSet::build(&plan, &shared(&grid, &units), &[]).expect("set");

        let t2: Vec<f64> = set.scenarios().iter().map(|scenario| scenario.t2).collect();
        assert!((t2[0] - 4.0 * t2[2]).abs() < 1.0e-9);
        assert!((t2[0] - 2.0 * t2[1]).abs() < 1.0e-9);
        assert_eq!(set.scenarios()[1].label, "Pore Size 2 (0.50 µm)");
        assert!(set.scenarios().iter().all(|scenario| scenario.porosity == 50));

        let summaries = set.geometry_summaries(&units, LengthUnit::Micrometer, TimeUnit::Millisecond);
        assert_eq!(summaries.len(), 3);
        assert!((summaries[2].surface_to_volume - 12.0).abs() < 1.0e-9);
    }

    #[test]
    fn labels_render_radii_in_the_selected_unit_and_accept_overrides() {
        let grid = T2Grid::default();
        let units = UnitSystem::default();
        let mut params = shared(&grid, &units);
        params.length_unit = LengthUnit::Nanometer;
        let plan = ScenarioPlan::VariantGeometry {
            porosity: 50,
            radii: vec![0.5, 0.25],
        };
        let labels = vec!["Macro".to_string(), "  ".to_string()];
        let set = ScenarioSet::build(&plan, &params, &labels).expect("set");

        assert_eq!(set.scenarios()[0].label, "Macro");
        assert_eq!(set.scenarios()[1].label, "Pore Size 2 (250.00 nm)");
    }

    #[test]
    fn zero_radius_scenario_completes_with_advisories() {
        let grid = T2Grid::default();
        let units = UnitSystem::default();
        let plan = ScenarioPlan::VariantGeometry {
            porosity: 50,
            radii: vec![1.0, 0.0],
        };
        let set = ScenarioSet::build(&plan, &shared(&grid, &units), &[]).expect("set");

        assert_eq!(set.curves()[1].mt, vec![0.0; 12]);
        let kinds: Vec<AdvisoryKind> = set.advisories().iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AdvisoryKind::DegenerateGeometry,
                AdvisoryKind::ZeroRelaxationTime
            ]
        );
        assert!(
            set.advisories()
                .iter()
                .all(|advisory| advisory.scenario.as_deref() == Some("Pore Size 2 (0.00 µm)"))
        );
    }

    #[test]
    fn empty_plans_are_rejected() {
        let grid = T2Grid::default();
        let units = UnitSystem::default();
        let plan = ScenarioPlan::VariantPorosity {
            radius: 1.0,
            porosities: Vec::new(),
        };
        let error = ScenarioSet::build(&plan, &shared(&grid, &units), &[]).expect_err("empty");
        assert!(matches!(
            error,
            NmrError::EmptyScenarioSet {
                mode: "variant-porosity"
            }
        ));
    }

    #[test]
    fn invalid_inputs_abort_the_build() {
        let grid = T2Grid::default();
        let units = UnitSystem::default();

        let over = ScenarioPlan::VariantPorosity {
            radius: 1.0,
            porosities: vec![30, 101],
        };
        assert!(matches!(
            ScenarioSet::build(&over, &shared(&grid, &units), &[]),
            Err(NmrError::InvalidParameter {
                name: "porosity",
                ..
            })
        ));

        let negative = ScenarioPlan::VariantGeometry {
            porosity: 50,
            radii: vec![1.0, -0.5],
        };
        assert!(matches!(
            ScenarioSet::build(&negative, &shared(&grid, &units), &[]),
            Err(NmrError::InvalidGeometry { .. })
        ));

        let mut bad_relaxivity = shared(&grid, &units);
        bad_relaxivity.relaxivity = 0.0;
        let plan = ScenarioPlan::VariantGeometry {
            porosity: 50,
            radii: vec![1.0],
        };
        assert!(ScenarioSet::build(&plan, &bad_relaxivity, &[]).is_err());
    }

    #[test]
    fn table_columns_follow_scenario_order() {
        let grid = T2Grid::default();
        let units = UnitSystem::default();
        let plan = ScenarioPlan::VariantPorosity {
            radius: 0.5,
            porosities: vec![30, 20],
        };
        let set = ScenarioSet::build(&plan, &shared(&grid, &units), &[]).expect("set");
        let table = set.to_table().expect("table");

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 12);
        assert_eq!(table.columns()[0].label, "Porosity 1 (30%)");
    }
}
