pub fn relative_difference(lhs: f64, rhs: f64, relative_floor: f64) -> f64 {
    let scale = lhs.abs().max(rhs.abs()).max(relative_floor);
    (lhs - rhs).abs() / scale
}

pub fn within_tolerance(
    lhs: f64,
    rhs: f64,
    abs_tol: f64,
    rel_tol: f64,
    relative_floor: f64,
) -> bool {
    let abs_diff = (lhs - rhs).abs();
    abs_diff <= abs_tol || relative_difference(lhs, rhs, relative_floor) <= rel_tol
}

pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|window| window[0] < window[1])
}

pub fn is_strictly_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|window| window[0] > window[1])
}
