//! Write fit-result JSON files.
//!
//! The JSON file is the "portable" representation of a finished fit:
//! best-fit parameters, chi-square quality, and enough run metadata (seed,
//! optimizer budget) to reproduce it. The schema is defined by `FitFile`.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{FitConfig, FitResult};
use crate::error::AppError;

/// On-disk schema for an exported fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitFile {
    pub tool: String,
    pub seed: u64,
    pub popsize: usize,
    pub max_generations: usize,
    pub fit: FitResult,
}

/// Write the fit result as pretty JSON.
pub fn write_fit_json(path: &Path, fit: &FitResult, config: &FitConfig) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create fit JSON '{}': {e}", path.display()),
        )
    })?;

    let out = FitFile {
        tool: "cosmofit".to_string(),
        seed: config.seed,
        popsize: config.popsize,
        max_generations: config.max_generations,
        fit: fit.clone(),
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::new(2, format!("Failed to write fit JSON: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitQuality, Params};

    #[test]
    fn fit_file_round_trips_through_json() {
        let out = FitFile {
            tool: "cosmofit".to_string(),
            seed: 42,
            popsize: 15,
            max_generations: 200,
            fit: FitResult {
                params: Params {
                    amplitude: 0.557,
                    width: 0.395,
                    w_offset: -0.99,
                    omega_m: 0.315,
                    h0: 70.8,
                    mag_offset: 0.0,
                },
                quality: FitQuality {
                    chi2: 10.5,
                    reduced_chi2: 1.05,
                    dof: 10,
                    n_sn: 8,
                    n_bao: 4,
                },
                generations: 50,
                converged: true,
                n_evaluations: 4590,
            },
        };

        let text = serde_json::to_string(&out).unwrap();
        let back: FitFile = serde_json::from_str(&text).unwrap();
        assert_eq!(back.fit.params, out.fit.params);
        assert_eq!(back.fit.quality.dof, 10);
        assert_eq!(back.tool, "cosmofit");
    }
}
