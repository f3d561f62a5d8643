//! Numerical primitives: adaptive quadrature, grid accumulation, and cubic
//! spline interpolation.
//!
//! Everything here returns `Option` rather than panicking: a candidate
//! parameter vector that drives an integral or interpolant into trouble must
//! surface as "no value", which the objective maps to a penalty cost.

pub mod grid;
pub mod quad;
pub mod spline;

pub use grid::*;
pub use quad::*;
pub use spline::*;
