//! Physics model evaluation.
//!
//! The chain, leaves first:
//!
//! - `eos`: the Gaussian-dip equation of state w(z)
//! - `expansion`: the dimensionless expansion rate E(z), integrating w(z)
//!   through the continuity equation
//! - `distance`: comoving-distance reconstruction and distance moduli for
//!   the supernova term
//! - `bao`: transverse/radial BAO distance ratios at fixed redshifts
//!
//! Every evaluator is a pure function of the parameter vector and returns
//! `Option` so that a numerically hostile candidate degrades to "no value"
//! instead of aborting the search.

pub mod bao;
pub mod distance;
pub mod eos;
pub mod expansion;

pub use bao::*;
pub use distance::*;
pub use eos::*;
pub use expansion::*;

/// Speed of light in km/s.
pub const C_LIGHT_KM_S: f64 = 299_792.458;

/// Fiducial sound-horizon scale r_d in Mpc, used to normalize BAO distances.
pub const RD_FID_MPC: f64 = 147.09;

/// Redshift of the equation-of-state dip. Fixed, not fitted.
pub const Z_PEAK: f64 = 0.7;
