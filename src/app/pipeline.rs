//! Shared "fit pipeline" logic.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load observations -> joint objective -> global search -> quality -> result
//!
//! The CLI front-end then focuses on presentation (printing and exports).

use crate::data::{SynthOptions, desi_dr2, load_sn_table, synthetic_sn};
use crate::domain::{
    BaoPoint, FitConfig, FitQuality, FitResult, N_PARAMS, ParamBounds, Params, SnSample,
};
use crate::error::AppError;
use crate::fit::{DeOptions, JointObjective, PENALTY, minimize};

/// Truth vector used to seed `--synthetic` demo runs: the published joint
/// best fit, with a flat magnitude offset.
const SYNTHETIC_TRUTH: Params = Params {
    amplitude: 0.557,
    width: 0.395,
    w_offset: -0.990,
    omega_m: 0.315,
    h0: 70.8,
    mag_offset: 0.0,
};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub sn: SnSample,
    pub bao: Vec<BaoPoint>,
    pub fit: FitResult,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    // 1) Observations: loaded once, immutable afterwards.
    let sn = if config.synthetic {
        synthetic_sn(
            &SYNTHETIC_TRUTH,
            config.sn_grid_nodes,
            &SynthOptions {
                seed: config.seed,
                ..SynthOptions::default()
            },
        )?
    } else {
        let path = config
            .data_path
            .as_ref()
            .ok_or_else(|| AppError::new(2, "No supernova table path configured."))?;
        load_sn_table(path)?.sample
    };
    let bao = desi_dr2();

    // 2) Fit.
    let fit = fit_joint(&sn, &bao, config)?;

    Ok(RunOutput { sn, bao, fit })
}

/// Run the global search against already-loaded observation sets.
pub fn fit_joint(
    sn: &SnSample,
    bao: &[BaoPoint],
    config: &FitConfig,
) -> Result<FitResult, AppError> {
    let n_obs = sn.len() + 2 * bao.len();
    if n_obs <= N_PARAMS {
        return Err(AppError::new(
            3,
            format!("Underdetermined fit: {n_obs} observations for {N_PARAMS} parameters."),
        ));
    }
    let dof = n_obs - N_PARAMS;

    let bounds = ParamBounds::default();
    bounds.validate()?;

    let objective = JointObjective::new(sn, bao, config.sn_grid_nodes, config.bao_grid_nodes);
    let opts = DeOptions {
        popsize: config.popsize,
        max_generations: config.max_generations,
        tol: config.tol,
        seed: config.seed,
        ..DeOptions::default()
    };

    let outcome = minimize(
        |x| match Params::from_slice(x) {
            Some(p) => objective.penalized(&p),
            None => PENALTY,
        },
        bounds.as_slice(),
        &opts,
    )?;

    if !outcome.cost.is_finite() || outcome.cost >= PENALTY {
        return Err(AppError::new(
            4,
            "The optimizer never found a valid candidate; inspect bounds and data.",
        ));
    }

    let params = Params::from_slice(&outcome.x)
        .ok_or_else(|| AppError::new(4, "Optimizer returned a malformed parameter vector."))?;

    let quality = FitQuality {
        chi2: outcome.cost,
        reduced_chi2: outcome.cost / dof as f64,
        dof,
        n_sn: sn.len(),
        n_bao: bao.len(),
    };

    Ok(FitResult {
        params,
        quality,
        generations: outcome.generations,
        converged: outcome.converged,
        n_evaluations: outcome.n_evaluations,
    })
}
