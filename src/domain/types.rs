//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON
//! - reloaded later for comparisons between runs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Number of free parameters in the joint fit.
pub const N_PARAMS: usize = 6;

/// The equation-of-state parameter vector.
///
/// Ordered as `(A, σ, w_off, Ωm, H0, ΔM)`:
///
/// - `amplitude`: depth of the Gaussian dip in w(z)
/// - `width`: dip width σ (the optimizer bounds keep it well away from 0)
/// - `w_offset`: asymptotic equation-of-state value far from the dip
/// - `omega_m`: present-day matter density fraction
/// - `h0`: Hubble constant in km/s/Mpc
/// - `mag_offset`: additive supernova absolute-magnitude offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub amplitude: f64,
    pub width: f64,
    pub w_offset: f64,
    pub omega_m: f64,
    pub h0: f64,
    pub mag_offset: f64,
}

impl Params {
    /// Flatten to the ordering used by the optimizer.
    pub fn to_array(self) -> [f64; N_PARAMS] {
        [
            self.amplitude,
            self.width,
            self.w_offset,
            self.omega_m,
            self.h0,
            self.mag_offset,
        ]
    }

    /// Rebuild from the optimizer's flat ordering.
    pub fn from_array(x: [f64; N_PARAMS]) -> Self {
        Self {
            amplitude: x[0],
            width: x[1],
            w_offset: x[2],
            omega_m: x[3],
            h0: x[4],
            mag_offset: x[5],
        }
    }

    /// Rebuild from a slice. Returns `None` unless exactly `N_PARAMS` long.
    pub fn from_slice(x: &[f64]) -> Option<Self> {
        let arr: [f64; N_PARAMS] = x.try_into().ok()?;
        Some(Self::from_array(arr))
    }
}

/// The bounded search box handed to the global optimizer.
///
/// Per-dimension `(lo, hi)` pairs in `Params` order. The defaults are the
/// production search box; note that the σ range excludes 0 so the
/// equation-of-state dip is always well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamBounds(pub [(f64, f64); N_PARAMS]);

impl Default for ParamBounds {
    fn default() -> Self {
        Self([
            (0.1, 0.6),    // amplitude
            (0.2, 0.6),    // width
            (-1.2, -0.8),  // w_offset
            (0.25, 0.35),  // omega_m
            (68.0, 76.0),  // h0
            (-0.05, 0.05), // mag_offset
        ])
    }
}

impl ParamBounds {
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.0
    }

    /// Validate the box: every pair finite with `hi > lo`.
    pub fn validate(&self) -> Result<(), AppError> {
        for (i, &(lo, hi)) in self.0.iter().enumerate() {
            if !(lo.is_finite() && hi.is_finite() && hi > lo) {
                return Err(AppError::new(
                    2,
                    format!("Invalid bounds for parameter {i}: ({lo}, {hi})."),
                ));
            }
        }
        Ok(())
    }
}

/// The supernova observation set: parallel arrays of redshift, distance
/// modulus, and modulus uncertainty, sorted by redshift ascending.
///
/// Read-only after load; the fit only ever borrows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnSample {
    pub z: Vec<f64>,
    pub mu: Vec<f64>,
    pub sigma: Vec<f64>,
}

impl SnSample {
    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Largest observed redshift (0 for an empty sample).
    pub fn z_max(&self) -> f64 {
        self.z.last().copied().unwrap_or(0.0)
    }

    /// Smallest observed redshift (0 for an empty sample).
    pub fn z_min(&self) -> f64 {
        self.z.first().copied().unwrap_or(0.0)
    }
}

/// One BAO measurement: transverse and radial distance ratios at a fixed
/// effective redshift, both normalized by the fiducial sound horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaoPoint {
    pub z: f64,
    /// Observed D_M / r_d.
    pub dm_rd: f64,
    pub dm_err: f64,
    /// Observed D_H / r_d.
    pub dh_rd: f64,
    pub dh_err: f64,
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitQuality {
    pub chi2: f64,
    /// chi2 / dof, with dof = n_sn + 2·n_bao − N_PARAMS.
    pub reduced_chi2: f64,
    pub dof: usize,
    pub n_sn: usize,
    pub n_bao: usize,
}

/// Final output of a fit run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResult {
    pub params: Params,
    pub quality: FitQuality,
    /// Generations actually executed by the optimizer.
    pub generations: usize,
    /// Whether the population energy spread met the convergence tolerance.
    pub converged: bool,
    /// Total objective evaluations across the run.
    pub n_evaluations: usize,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Path to the supernova distance table. `None` only with `synthetic`.
    pub data_path: Option<PathBuf>,
    /// Fit a seeded synthetic sample instead of reading a file.
    pub synthetic: bool,

    pub seed: u64,
    /// Population members per parameter dimension.
    pub popsize: usize,
    pub max_generations: usize,
    /// Relative population-spread convergence tolerance.
    pub tol: f64,

    /// Nodes in the supernova comoving-distance reconstruction grid.
    pub sn_grid_nodes: usize,
    /// Nodes in the per-redshift BAO transverse-distance sub-grid.
    ///
    /// Deliberately independent from `sn_grid_nodes`: the BAO table has few
    /// points at fixed redshifts, so a coarser grid trades accuracy for cost
    /// on that term only.
    pub bao_grid_nodes: usize,

    pub export: Option<PathBuf>,
}

impl FitConfig {
    pub const DEFAULT_SN_GRID_NODES: usize = 100;
    pub const DEFAULT_BAO_GRID_NODES: usize = 50;
}
