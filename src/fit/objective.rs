//! The joint supernova + BAO chi-square objective.
//!
//! One candidate, one scalar:
//!
//! `cost = Σ_SN (μ_obs − μ_th)²/(σ_obs² + σ_int²)
//!       + Σ_BAO [(DM_obs − DM_th)²/err² + (DH_obs − DH_th)²/err²]`
//!
//! Two non-success outcomes exist and both must steer the optimizer rather
//! than crash it, so evaluation returns an explicit [`Evaluation`] instead of
//! hiding failures behind a blanket catch:
//!
//! - `Rejected(DomainViolation)`: Ωm or H0 outside the physically admissible
//!   window; short-circuits before any physics runs
//! - `Rejected(NumericalFailure)`: quadrature, reconstruction, or
//!   interpolation produced no finite value for this candidate
//!
//! The optimizer-facing closure collapses both to one large penalty cost via
//! [`Evaluation::cost_or_penalty`], so a long search sees a uniformly bad
//! score and moves on.

use crate::domain::{BaoPoint, Params, SnSample};
use crate::models::{distance_moduli, predict_bao};

/// Penalty cost for rejected candidates. Large enough to dominate any real
/// chi-square while staying comfortably finite in f64.
pub const PENALTY: f64 = 1e18;

/// Intrinsic supernova magnitude scatter, added in quadrature to each
/// per-object modulus error.
pub const SIGMA_INT: f64 = 0.106;

/// Admissible matter-density window (exclusive).
pub const OMEGA_M_RANGE: (f64, f64) = (0.2, 0.4);

/// Admissible Hubble-constant window (exclusive), km/s/Mpc.
pub const H0_RANGE: (f64, f64) = (65.0, 80.0);

/// Why a candidate could not be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Ωm or H0 outside the admissible window; physics never ran.
    DomainViolation,
    /// Some numerical stage failed to produce a finite value.
    NumericalFailure,
}

/// Outcome of scoring one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Cost(f64),
    Rejected(RejectReason),
}

impl Evaluation {
    /// Collapse to the scalar the optimizer minimizes.
    pub fn cost_or_penalty(self) -> f64 {
        match self {
            Evaluation::Cost(c) => c,
            Evaluation::Rejected(_) => PENALTY,
        }
    }
}

/// The joint objective over borrowed, immutable observation sets.
///
/// Evaluation is pure and self-contained, so any number of candidates may be
/// scored concurrently against the same instance.
#[derive(Debug, Clone, Copy)]
pub struct JointObjective<'a> {
    sn: &'a SnSample,
    bao: &'a [BaoPoint],
    sn_grid_nodes: usize,
    bao_grid_nodes: usize,
}

impl<'a> JointObjective<'a> {
    pub fn new(
        sn: &'a SnSample,
        bao: &'a [BaoPoint],
        sn_grid_nodes: usize,
        bao_grid_nodes: usize,
    ) -> Self {
        Self {
            sn,
            bao,
            sn_grid_nodes,
            bao_grid_nodes,
        }
    }

    /// Score one candidate.
    pub fn evaluate(&self, p: &Params) -> Evaluation {
        if !in_domain(p) {
            return Evaluation::Rejected(RejectReason::DomainViolation);
        }

        let Some(mu_th) = distance_moduli(&self.sn.z, p, self.sn_grid_nodes) else {
            return Evaluation::Rejected(RejectReason::NumericalFailure);
        };

        let mut chi2 = 0.0;
        for i in 0..self.sn.len() {
            let r = self.sn.mu[i] - mu_th[i];
            let var = self.sn.sigma[i] * self.sn.sigma[i] + SIGMA_INT * SIGMA_INT;
            chi2 += r * r / var;
        }

        let Some(bao_th) = predict_bao(self.bao, p, self.bao_grid_nodes) else {
            return Evaluation::Rejected(RejectReason::NumericalFailure);
        };
        for (obs, th) in self.bao.iter().zip(bao_th.iter()) {
            let rm = obs.dm_rd - th.dm_rd;
            let rh = obs.dh_rd - th.dh_rd;
            chi2 += rm * rm / (obs.dm_err * obs.dm_err);
            chi2 += rh * rh / (obs.dh_err * obs.dh_err);
        }

        if !chi2.is_finite() {
            return Evaluation::Rejected(RejectReason::NumericalFailure);
        }
        Evaluation::Cost(chi2)
    }

    /// The scalar objective handed to the optimizer.
    pub fn penalized(&self, p: &Params) -> f64 {
        self.evaluate(p).cost_or_penalty()
    }
}

fn in_domain(p: &Params) -> bool {
    p.omega_m > OMEGA_M_RANGE.0
        && p.omega_m < OMEGA_M_RANGE.1
        && p.h0 > H0_RANGE.0
        && p.h0 < H0_RANGE.1
}
