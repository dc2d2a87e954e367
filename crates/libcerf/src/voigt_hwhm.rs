// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// libcerf: native Rust complex error functions, Dawson and Voigt profiles.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Half-width at half maximum of the Voigt profile, found by bracketed
//! root-search rather than by the closed-form estimate alone.

use libcerf_error::LibcerfError;

use crate::derived::voigt;
use crate::rootfinding::{Bisection, Rootfinder};

/// Returns the half-width at half maximum of `voigt(x, sigma, gamma)`: the
/// positive root `h` of `voigt(h, sigma, gamma) == voigt(0, sigma, gamma) / 2`.
///
/// The degenerate cases `gamma == 0` (pure Gaussian) and `sigma == 0` (pure
/// Lorentzian) have closed forms and are returned directly, without a
/// root-search. The general case starts from the Olivero-Longbothum
/// approximation and refines it by bisection.
pub fn voigt_hwhm(sigma: f64, gamma: f64) -> Result<f64, LibcerfError> {
    if !sigma.is_finite() || !gamma.is_finite() {
        return Err(LibcerfError::NonFiniteParameter);
    }

    let sig = sigma.abs();
    let gam = gamma.abs();

    if sig == 0.0 && gam == 0.0 {
        return Err(LibcerfError::DegenerateProfile);
    }
    if gam == 0.0 {
        // Pure Gaussian: half maximum at x = sigma * sqrt(2 ln 2).
        return Ok(sig * (2.0 * std::f64::consts::LN_2).sqrt());
    }
    if sig == 0.0 {
        // Pure Lorentzian: half maximum at x = |gamma|.
        return Ok(gam);
    }

    let peak = voigt(0.0, sig, gam);
    let target = 0.5 * peak;

    // Olivero & Longbothum (1977), a closed-form estimate accurate to ~0.02%.
    let h0 = 0.5
        * (1.06868 * gam + (0.86743 * gam * gam + 8.0 * std::f64::consts::LN_2 * sig * sig).sqrt());

    let accuracy = (1e-13 * peak).max(f64::MIN_POSITIVE);
    let mut solver = Bisection::new(|h: f64| voigt(h, sig, gam) - target, h0, accuracy);
    match solver.solve() {
        Some(h) => Ok(h.abs()),
        None => Err(LibcerfError::RootNotBracketed {
            iterations: solver.iterations(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relerr(got: f64, want: f64) -> f64 {
        if want == 0.0 {
            got.abs()
        } else {
            ((got - want) / want).abs()
        }
    }

    #[test]
    fn pure_gaussian_hwhm() {
        let h = voigt_hwhm(1.0, 0.0).unwrap();
        assert!(relerr(h, (2.0_f64 * std::f64::consts::LN_2).sqrt()) < 1e-9);
    }

    #[test]
    fn pure_lorentzian_hwhm() {
        let h = voigt_hwhm(0.0, 1.0).unwrap();
        assert!(relerr(h, 1.0) < 1e-12);
    }

    #[test]
    fn degenerate_profile_is_an_error() {
        assert_eq!(voigt_hwhm(0.0, 0.0), Err(LibcerfError::DegenerateProfile));
    }

    #[test]
    fn non_finite_parameter_is_an_error() {
        assert_eq!(
            voigt_hwhm(f64::NAN, 1.0),
            Err(LibcerfError::NonFiniteParameter)
        );
        assert_eq!(
            voigt_hwhm(1.0, f64::INFINITY),
            Err(LibcerfError::NonFiniteParameter)
        );
    }

    #[test]
    fn general_case_satisfies_half_maximum_definition() {
        let (sigma, gamma) = (0.5, 0.5);
        let h = voigt_hwhm(sigma, gamma).unwrap();
        let peak = voigt(0.0, sigma, gamma);
        let at_h = voigt(h, sigma, gamma);
        assert!(relerr(at_h, peak / 2.0) < 1e-9);
    }

    #[test]
    fn general_case_another_parameterization() {
        let (sigma, gamma) = (5.0, 0.2);
        let h = voigt_hwhm(sigma, gamma).unwrap();
        let peak = voigt(0.0, sigma, gamma);
        let at_h = voigt(h, sigma, gamma);
        assert!(relerr(at_h, peak / 2.0) < 1e-9);
    }
}
