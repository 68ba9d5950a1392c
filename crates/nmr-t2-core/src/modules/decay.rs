use super::t2grid::T2Grid;
use crate::domain::{Advised, Advisory, AdvisoryKind};
use serde::Serialize;

/// Magnetization remaining at each grid sample for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecayCurve {
    pub label: String,
    pub porosity: f64,
    pub t2: f64,
    pub mt: Vec<f64>,
}

impl DecayCurve {
    pub fn evaluate(
        label: impl Into<String>,
        grid: &T2Grid,
        porosity: f64,
        t2: f64,
    ) -> Advised<Self> {
        let label = label.into();
        let (mt, advisory) = evaluate(grid, porosity, t2).into_parts();
        Advised {
            advisory: advisory.map(|advisory| advisory.for_scenario(label.clone())),
            value: Self {
                label,
                porosity,
                t2,
                mt,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.mt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mt.is_empty()
    }
}

/// `Mt[i] = porosity * exp(-t[i] / t2)`; a non-positive `t2` collapses the
/// curve to zeros.
pub fn evaluate(grid: &T2Grid, porosity: f64, t2: f64) -> Advised<Vec<f64>> {
    if !(t2.is_finite() && t2 > 0.0) {
        return Advised::with_advisory(
            vec![0.0; grid.len()],
            Advisory::new(AdvisoryKind::ZeroRelaxationTime, format!("T2 = {t2}")),
        );
    }

    let mt = grid
        .samples()
        .iter()
        .map(|time| porosity * (-time / t2).exp())
        .collect();
    Advised::clean(mt)
}

#[cfg(test)]
mod tests {
    use super::{DecayCurve, evaluate};
    use crate::domain::AdvisoryKind;
    use crate::modules::t2grid::T2Grid;
    use crate::numerics::is_strictly_decreasing;

    #[test]
    fn curve_follows_the_exact_exponential() {
        let grid = T2Grid::from_samples(vec![1.0, 10.0, 100.0]).expect("grid");
        let mt = evaluate(&grid, 30.0, 10.0);
        assert!(mt.advisory.is_none());
        assert!((mt.value[0] - 30.0 * (-0.1_f64).exp()).abs() < 1.0e-12);
        assert!((mt.value[1] - 30.0 * (-1.0_f64).exp()).abs() < 1.0e-12);
        assert!((mt.value[2] - 30.0 * (-10.0_f64).exp()).abs() < 1.0e-12);
    }

    #[test]
    fn default_grid_curve_is_strictly_decreasing_and_bounded() {
        let grid = T2Grid::default();
        let mt = evaluate(&grid, 30.0, 55.555_555_555_555_56).value;
        assert_eq!(mt.len(), grid.len());
        assert!(is_strictly_decreasing(&mt));
        assert!(mt.iter().all(|value| (0.0..=30.0).contains(value)));
    }

    #[test]
    fn non_positive_t2_collapses_to_zeros_with_advisory() {
        let grid = T2Grid::default();
        for t2 in [0.0, -5.0, f64::NAN] {
            let mt = evaluate(&grid, 30.0, t2);
            assert_eq!(mt.value, vec![0.0; 12]);
            let advisory = mt.advisory.expect("advisory should be attached");
            assert_eq!(advisory.kind, AdvisoryKind::ZeroRelaxationTime);
        }
    }

    #[test]
    fn scenario_curve_labels_its_advisory() {
        let grid = T2Grid::default();
        let curve = DecayCurve::evaluate("Pore Size 3 (0.00 µm)", &grid, 50.0, 0.0);
        assert_eq!(curve.value.len(), 12);
        assert_eq!(
            curve.advisory.and_then(|advisory| advisory.scenario).as_deref(),
            Some("Pore Size 3 (0.00 µm)")
        );
    }
}
