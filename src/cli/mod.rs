//! Command-line parsing for the joint SN+BAO fitter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! modeling/math code. There is a single command: run the fixed joint-fit
//! pipeline once and print the result. The physics constants, parameter
//! bounds, and domain gates are baked in; the flags only touch where the
//! data comes from and how hard the optimizer works.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::FitConfig;

/// Joint supernova + BAO fit of a Gaussian-dip dark-energy equation of state.
#[derive(Debug, Parser)]
#[command(name = "cosmofit", version, about = "Joint SN+BAO dark-energy equation-of-state fitter")]
pub struct Cli {
    /// Path to a whitespace-delimited supernova distance table
    /// (Pantheon+ release format). Required unless --synthetic is set.
    pub data: Option<PathBuf>,

    /// Fit a seeded synthetic supernova sample instead of reading a file.
    #[arg(long)]
    pub synthetic: bool,

    /// Random seed for the optimizer (and the synthetic sample).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Optimizer population members per parameter dimension.
    #[arg(long, default_value_t = 15)]
    pub popsize: usize,

    /// Maximum optimizer generations.
    #[arg(long = "max-gens", default_value_t = 200)]
    pub max_generations: usize,

    /// Relative population-spread convergence tolerance.
    #[arg(long, default_value_t = 0.01)]
    pub tol: f64,

    /// Export the fit result as JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl Cli {
    /// Resolve flags into the pipeline configuration.
    pub fn to_config(&self) -> FitConfig {
        FitConfig {
            data_path: self.data.clone(),
            synthetic: self.synthetic,
            seed: self.seed,
            popsize: self.popsize,
            max_generations: self.max_generations,
            tol: self.tol,
            sn_grid_nodes: FitConfig::DEFAULT_SN_GRID_NODES,
            bao_grid_nodes: FitConfig::DEFAULT_BAO_GRID_NODES,
            export: self.export.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve() {
        let cli = Cli::parse_from(["cosmofit", "--synthetic"]);
        let config = cli.to_config();
        assert!(config.synthetic);
        assert_eq!(config.seed, 42);
        assert_eq!(config.popsize, 15);
        assert_eq!(config.max_generations, 200);
        assert_eq!(config.sn_grid_nodes, 100);
        assert_eq!(config.bao_grid_nodes, 50);
    }

    #[test]
    fn data_path_and_overrides_parse() {
        let cli = Cli::parse_from([
            "cosmofit",
            "pantheon.dat",
            "--seed",
            "7",
            "--max-gens",
            "50",
        ]);
        let config = cli.to_config();
        assert_eq!(config.data_path.unwrap().to_str().unwrap(), "pantheon.dat");
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_generations, 50);
    }
}
