//! Natural cubic spline interpolation.
//!
//! The comoving-distance curve is sampled on a fixed grid and then queried at
//! arbitrary observed redshifts, so we need a smooth interpolant, not just
//! piecewise-linear lookups. A natural cubic spline (second derivative zero at
//! both ends) is enough: the curve it interpolates is itself an integral of a
//! smooth positive function.
//!
//! The second-derivative system is tridiagonal; we assemble it as a small
//! dense matrix and solve with nalgebra's LU, mirroring how the rest of the
//! project leans on nalgebra for small dense solves. Construction returns
//! `None` for non-monotone knots or a singular system rather than panicking.

use nalgebra::{DMatrix, DVector};

/// A natural cubic spline over strictly increasing knots.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Second derivatives at the knots.
    m: Vec<f64>,
}

impl CubicSpline {
    /// Build a spline through `(x, y)` pairs.
    ///
    /// Requirements: equal lengths, at least two knots, strictly increasing
    /// and finite `x`, finite `y`. Two knots degenerate to linear
    /// interpolation (all second derivatives zero).
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Option<Self> {
        let n = x.len();
        if n < 2 || y.len() != n {
            return None;
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return None;
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return None;
        }

        if n == 2 {
            return Some(Self {
                x,
                y,
                m: vec![0.0; 2],
            });
        }

        // Interior equations:
        //   h[i-1]·m[i-1] + 2(h[i-1]+h[i])·m[i] + h[i]·m[i+1] = 6·(d[i] - d[i-1])
        // with h[i] = x[i+1]-x[i], d[i] = (y[i+1]-y[i])/h[i], plus natural
        // boundary rows m[0] = m[n-1] = 0.
        let mut a = DMatrix::<f64>::zeros(n, n);
        let mut b = DVector::<f64>::zeros(n);

        a[(0, 0)] = 1.0;
        a[(n - 1, n - 1)] = 1.0;

        for i in 1..n - 1 {
            let h0 = x[i] - x[i - 1];
            let h1 = x[i + 1] - x[i];
            let d0 = (y[i] - y[i - 1]) / h0;
            let d1 = (y[i + 1] - y[i]) / h1;
            a[(i, i - 1)] = h0;
            a[(i, i)] = 2.0 * (h0 + h1);
            a[(i, i + 1)] = h1;
            b[i] = 6.0 * (d1 - d0);
        }

        let m = a.lu().solve(&b)?;
        if m.iter().any(|v| !v.is_finite()) {
            return None;
        }

        Some(Self {
            x,
            y,
            m: m.iter().copied().collect(),
        })
    }

    /// Evaluate the spline at `xq`.
    ///
    /// Queries outside the knot range return `None`; the caller treats that
    /// as a numerical failure of the candidate, not a crash.
    pub fn eval(&self, xq: f64) -> Option<f64> {
        if !xq.is_finite() {
            return None;
        }
        let n = self.x.len();
        if xq < self.x[0] || xq > self.x[n - 1] {
            return None;
        }

        // Index of the segment containing xq.
        let k = match self.x.partition_point(|&v| v <= xq) {
            0 => 0,
            p if p >= n => n - 2,
            p => p - 1,
        };

        let h = self.x[k + 1] - self.x[k];
        let t = (xq - self.x[k]) / h;
        let u = 1.0 - t;

        // Standard cubic segment form in terms of the second derivatives.
        let value = u * self.y[k]
            + t * self.y[k + 1]
            + h * h / 6.0 * ((u * u * u - u) * self.m[k] + (t * t * t - t) * self.m[k + 1]);
        value.is_finite().then_some(value)
    }
}
