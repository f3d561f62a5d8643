//! Grid generation and cumulative trapezoidal accumulation.
//!
//! Both distance predictors integrate `1/E(z)` over a redshift grid: the
//! supernova reconstructor feeds the cumulative sums into a spline, the BAO
//! predictor only needs the final value on a per-redshift sub-grid. The
//! accumulation is shared here; the grid resolutions stay independent knobs.

/// Generate `n` evenly spaced points over `[start, stop]` (inclusive).
///
/// `n < 2` degenerates to the two endpoints.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start, stop];
    }
    let step = (stop - start) / (n as f64 - 1.0);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push(start + step * i as f64);
    }
    // Land exactly on the endpoint regardless of rounding in the steps.
    out[n - 1] = stop;
    out
}

/// Running trapezoidal integral of samples `y` over nodes `x`.
///
/// `out[i] = ∫_{x[0]}^{x[i]}`, so `out[0] == 0` and `out.last()` is the full
/// integral. Returns `None` if the arrays mismatch, are shorter than 2, or
/// contain non-finite values.
pub fn cumulative_trapezoid(x: &[f64], y: &[f64]) -> Option<Vec<f64>> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return None;
    }

    let mut out = Vec::with_capacity(x.len());
    out.push(0.0);
    let mut acc = 0.0;
    for i in 1..x.len() {
        acc += 0.5 * (x[i] - x[i - 1]) * (y[i] + y[i - 1]);
        out.push(acc);
    }
    Some(out)
}
