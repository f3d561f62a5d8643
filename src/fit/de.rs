//! Differential evolution (best/1/bin) over a bounded box.
//!
//! The joint chi-square landscape is noisy and multi-modal in the
//! equation-of-state directions, so the driver is a population-based,
//! derivative-free search:
//!
//! - maintain `popsize × dims` candidate vectors (at least 5)
//! - each generation, mutate around the current best with scaled differences
//!   of two other members, binomially recombine with the target, clip to the
//!   box, and keep the trial if it is not worse
//! - stop at the generation budget or when the population energy spread
//!   collapses (`std ≤ atol + tol·|mean|`)
//!
//! Trial construction runs on one thread off a seeded `StdRng`, so a run is
//! fully reproducible for a fixed seed; only the independent candidate
//! evaluations fan out across the rayon pool.

use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::error::AppError;

/// Absolute floor in the convergence test, so that populations collapsing
/// onto a near-zero cost still terminate.
const CONVERGENCE_ATOL: f64 = 1e-8;

/// Optimizer options.
#[derive(Debug, Clone)]
pub struct DeOptions {
    /// Population members per parameter dimension.
    pub popsize: usize,
    pub max_generations: usize,
    /// Mutation-factor dither range; one factor is drawn per generation.
    pub mutation: (f64, f64),
    /// Crossover probability.
    pub recombination: f64,
    /// Relative population-spread convergence tolerance.
    pub tol: f64,
    pub seed: u64,
}

impl Default for DeOptions {
    fn default() -> Self {
        Self {
            popsize: 15,
            max_generations: 200,
            mutation: (0.5, 1.0),
            recombination: 0.7,
            tol: 0.01,
            seed: 42,
        }
    }
}

/// Result of one optimization run.
#[derive(Debug, Clone)]
pub struct DeOutcome {
    pub x: Vec<f64>,
    pub cost: f64,
    pub generations: usize,
    pub converged: bool,
    pub n_evaluations: usize,
}

/// Minimize `f` over the box. `f` must be pure: candidates within a
/// generation are evaluated concurrently.
pub fn minimize<F>(f: F, bounds: &[(f64, f64)], opts: &DeOptions) -> Result<DeOutcome, AppError>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    let dims = bounds.len();
    if dims == 0 {
        return Err(AppError::new(2, "Empty parameter bounds."));
    }
    for (i, &(lo, hi)) in bounds.iter().enumerate() {
        if !(lo.is_finite() && hi.is_finite() && hi > lo) {
            return Err(AppError::new(
                2,
                format!("Invalid bounds for parameter {i}: ({lo}, {hi})."),
            ));
        }
    }
    if opts.popsize == 0 || opts.max_generations == 0 {
        return Err(AppError::new(2, "Population size and generations must be > 0."));
    }
    let (m_lo, m_hi) = opts.mutation;
    if !(m_lo.is_finite() && m_hi.is_finite() && 0.0 <= m_lo && m_lo < m_hi && m_hi <= 2.0) {
        return Err(AppError::new(2, "Mutation dither range must satisfy 0 <= lo < hi <= 2."));
    }
    if !(opts.recombination > 0.0 && opts.recombination <= 1.0) {
        return Err(AppError::new(2, "Recombination probability must be in (0, 1]."));
    }
    if !(opts.tol.is_finite() && opts.tol > 0.0) {
        return Err(AppError::new(2, "Convergence tolerance must be > 0."));
    }

    // A difference-vector strategy needs the target plus two distinct others.
    let np = (opts.popsize * dims).max(5);
    let mut rng = StdRng::seed_from_u64(opts.seed);

    let mut population: Vec<Vec<f64>> = (0..np)
        .map(|_| {
            bounds
                .iter()
                .map(|&(lo, hi)| rng.gen_range(lo..hi))
                .collect()
        })
        .collect();
    let mut energies: Vec<f64> = population.par_iter().map(|x| f(x)).collect();
    let mut n_evaluations = np;

    let mut best = argmin(&energies);
    let mut generations = 0;
    let mut converged = false;

    for _ in 0..opts.max_generations {
        generations += 1;
        let f_scale = rng.gen_range(m_lo..m_hi);

        let mut trials = Vec::with_capacity(np);
        for i in 0..np {
            let r1 = pick_distinct(&mut rng, np, &[i]);
            let r2 = pick_distinct(&mut rng, np, &[i, r1]);
            let j_forced = rng.gen_range(0..dims);

            let mut trial = population[i].clone();
            for j in 0..dims {
                if j == j_forced || rng.gen_range(0.0..1.0) < opts.recombination {
                    let v = population[best][j]
                        + f_scale * (population[r1][j] - population[r2][j]);
                    let (lo, hi) = bounds[j];
                    trial[j] = v.clamp(lo, hi);
                }
            }
            trials.push(trial);
        }

        let trial_energies: Vec<f64> = trials.par_iter().map(|x| f(x)).collect();
        n_evaluations += np;

        // Greedy selection: a trial replaces its target when not worse.
        for i in 0..np {
            if trial_energies[i] <= energies[i] {
                population[i] = std::mem::take(&mut trials[i]);
                energies[i] = trial_energies[i];
            }
        }
        best = argmin(&energies);

        if energy_spread_converged(&energies, opts.tol) {
            converged = true;
            break;
        }
    }

    Ok(DeOutcome {
        x: population[best].clone(),
        cost: energies[best],
        generations,
        converged,
        n_evaluations,
    })
}

fn argmin(energies: &[f64]) -> usize {
    let mut best = 0;
    for (i, &e) in energies.iter().enumerate() {
        if e < energies[best] {
            best = i;
        }
    }
    best
}

fn pick_distinct(rng: &mut StdRng, np: usize, exclude: &[usize]) -> usize {
    loop {
        let r = rng.gen_range(0..np);
        if !exclude.contains(&r) {
            return r;
        }
    }
}

fn energy_spread_converged(energies: &[f64], tol: f64) -> bool {
    let n = energies.len() as f64;
    let mean = energies.iter().sum::<f64>() / n;
    if !mean.is_finite() {
        return false;
    }
    let var = energies.iter().map(|e| (e - mean) * (e - mean)).sum::<f64>() / n;
    var.sqrt() <= CONVERGENCE_ATOL + tol * mean.abs()
}
