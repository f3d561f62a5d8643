//! Dimensionless expansion rate E(z) = H(z)/H0.
//!
//! The dark-energy density is reconstructed from w(z) through the continuity
//! equation instead of being assumed constant:
//!
//! `E²(z) = Ωm(1+z)³ + (1−Ωm) · exp(3 ∫₀^z (1 + w(z'))/(1 + z') dz')`
//!
//! so any equation-of-state shape integrates consistently into the energy
//! density. The integral is evaluated by adaptive quadrature; a candidate for
//! which it fails to converge (or goes non-finite) yields `None` and is
//! penalized by the objective, never a panic.

use crate::math::integrate;
use crate::models::w_of_z;

/// Absolute quadrature tolerance for the continuity-equation integral.
///
/// The integral is O(1) over the observed redshift range, so this is well
/// inside the 1e-6 relative error the chi-square can tolerate.
pub const QUAD_TOL: f64 = 1e-9;

/// Evaluate E(z) for the given equation-of-state and density parameters.
pub fn e_of_z(z: f64, a: f64, sigma: f64, w_off: f64, omega_m: f64) -> Option<f64> {
    if !z.is_finite() || z < 0.0 {
        return None;
    }

    let integrand = |zp: f64| (1.0 + w_of_z(zp, a, sigma, w_off)) / (1.0 + zp);
    let integral = integrate(&integrand, 0.0, z, QUAD_TOL)?;

    let omega_de = 1.0 - omega_m;
    let zp1 = 1.0 + z;
    let e2 = omega_m * zp1 * zp1 * zp1 + omega_de * (3.0 * integral).exp();
    if !(e2.is_finite() && e2 > 0.0) {
        return None;
    }
    Some(e2.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand::rngs::StdRng;

    #[test]
    fn unity_at_zero_redshift() {
        let e0 = e_of_z(0.0, 0.557, 0.395, -0.99, 0.315).unwrap();
        assert!((e0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn matches_lcdm_for_constant_w_minus_one() {
        // A = 0 and w_off = −1 collapse the model to flat ΛCDM, where
        // E²(z) = Ωm(1+z)³ + (1−Ωm) in closed form.
        let om = 0.3;
        for z in [0.1, 0.5, 1.0, 2.0] {
            let e = e_of_z(z, 0.0, 0.4, -1.0, om).unwrap();
            let exact = (om * (1.0 + z).powi(3) + (1.0 - om)).sqrt();
            assert!((e - exact).abs() < 1e-8, "z={z}: {e} vs {exact}");
        }
    }

    #[test]
    fn positive_over_random_valid_parameters() {
        // Property: E(z) > 0 everywhere in the search box.
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let a = rng.gen_range(0.1..0.6);
            let sigma = rng.gen_range(0.2..0.6);
            let w_off = rng.gen_range(-1.2..-0.8);
            let om = rng.gen_range(0.25..0.35);
            let z = rng.gen_range(0.0..2.5);
            let e = e_of_z(z, a, sigma, w_off, om).unwrap();
            assert!(e > 0.0 && e.is_finite(), "E({z}) = {e}");
        }
    }

    #[test]
    fn monotone_when_dark_energy_does_not_dilute() {
        // With w(z) ≥ −1 everywhere (amplitude ≤ 1 + w_off) both terms of E²
        // are non-decreasing in z, so E must be too.
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let w_off: f64 = rng.gen_range(-1.0..-0.8);
            let a = rng.gen_range(0.0..(1.0 + w_off).max(1e-6));
            let sigma = rng.gen_range(0.2..0.6);
            let om = rng.gen_range(0.25..0.35);

            let mut prev = e_of_z(0.0, a, sigma, w_off, om).unwrap();
            for i in 1..=25 {
                let z = i as f64 * 0.1;
                let e = e_of_z(z, a, sigma, w_off, om).unwrap();
                assert!(e >= prev - 1e-10, "E not monotone at z={z}");
                prev = e;
            }
        }
    }

    #[test]
    fn negative_redshift_is_none() {
        assert!(e_of_z(-0.1, 0.5, 0.4, -1.0, 0.3).is_none());
    }

    #[test]
    fn non_finite_parameter_is_none_not_panic() {
        assert!(e_of_z(1.0, f64::NAN, 0.4, -1.0, 0.3).is_none());
        assert!(e_of_z(1.0, 0.5, 0.4, f64::INFINITY, 0.3).is_none());
    }
}
