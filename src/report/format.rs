//! Terminal summary for a fit run.

use crate::domain::{BaoPoint, FitConfig, FitResult, SnSample};

/// Format the full run summary (dataset stats + optimizer diagnostics +
/// best-fit parameters).
pub fn format_run_summary(
    sn: &SnSample,
    bao: &[BaoPoint],
    fit: &FitResult,
    config: &FitConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== cosmofit - Joint SN+BAO Equation-of-State Fit ===\n");
    out.push_str(&format!(
        "SN sample : n={} | z=[{:.5}, {:.3}]\n",
        sn.len(),
        sn.z_min(),
        sn.z_max()
    ));
    if let (Some(first), Some(last)) = (bao.first(), bao.last()) {
        out.push_str(&format!(
            "BAO table : n={} | z=[{:.3}, {:.3}]\n",
            bao.len(),
            first.z,
            last.z
        ));
    }
    out.push_str(&format!(
        "Optimizer : popsize={} | generations={}/{} | evals={} | converged={}\n",
        config.popsize,
        fit.generations,
        config.max_generations,
        fit.n_evaluations,
        fit.converged
    ));

    let p = &fit.params;
    let q = &fit.quality;
    out.push_str("\nBest fit:\n");
    out.push_str(&format!("- Joint chi2           : {:.2}\n", q.chi2));
    out.push_str(&format!("- Amplitude (A)        : {:.4}\n", p.amplitude));
    out.push_str(&format!("- Dip width (sigma)    : {:.4}\n", p.width));
    out.push_str(&format!("- EoS offset (w_off)   : {:.4}\n", p.w_offset));
    out.push_str(&format!("- Matter density (Om)  : {:.3}\n", p.omega_m));
    out.push_str(&format!("- Hubble constant (H0) : {:.2} km/s/Mpc\n", p.h0));
    out.push_str(&format!("- Mag offset (dM)      : {:+.4}\n", p.mag_offset));
    out.push_str(&format!(
        "- Reduced chi2         : {:.4} (dof={})\n",
        q.reduced_chi2, q.dof
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitQuality, Params};

    #[test]
    fn summary_contains_key_figures() {
        let sn = SnSample {
            z: vec![0.01, 0.5, 1.2],
            mu: vec![33.0, 42.0, 44.5],
            sigma: vec![0.1, 0.1, 0.1],
        };
        let bao = crate::data::desi_dr2();
        let fit = FitResult {
            params: Params {
                amplitude: 0.557,
                width: 0.395,
                w_offset: -0.99,
                omega_m: 0.315,
                h0: 70.8,
                mag_offset: 0.01,
            },
            quality: FitQuality {
                chi2: 1418.32,
                reduced_chi2: 0.9871,
                dof: 11,
                n_sn: 3,
                n_bao: 7,
            },
            generations: 123,
            converged: true,
            n_evaluations: 11160,
        };
        let config = FitConfig {
            data_path: None,
            synthetic: true,
            seed: 42,
            popsize: 15,
            max_generations: 200,
            tol: 0.01,
            sn_grid_nodes: 100,
            bao_grid_nodes: 50,
            export: None,
        };

        let s = format_run_summary(&sn, &bao, &fit, &config);
        assert!(s.contains("1418.32"));
        assert!(s.contains("0.5570"));
        assert!(s.contains("70.80 km/s/Mpc"));
        assert!(s.contains("0.315"));
        assert!(s.contains("0.9871"));
        assert!(s.contains("converged=true"));
    }
}
