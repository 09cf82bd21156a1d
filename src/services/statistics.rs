//! Small numeric helpers shared by the demand generator and the simulator.

/// Bessel-corrected sample standard deviation.
///
/// Fewer than two values would divide by zero; that degenerate case returns
/// `0.0` instead of propagating a non-finite value.
pub fn sample_std_deviation(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (n - 1) as f64;
    variance.sqrt()
}

/// Rounds with ties toward positive infinity, the convention all rounded
/// quantities in the engine follow (`round_half_up(2.5) == 3.0`,
/// `round_half_up(-2.5) == -2.0`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
