//! Concrete-value and cross-function identity checks that exercise the
//! public surface as a whole, rather than a single module in isolation.

use libcerf::{cerf, cerfc, cerfcx, erfcx, voigt, voigt_hwhm, w_of_z};
use num_complex::Complex64;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol * scale,
        "expected {expected}, got {actual} (tol {tol})"
    );
}

fn assert_close_complex(actual: Complex64, expected: Complex64, tol: f64) {
    assert_close(actual.re, expected.re, tol);
    assert_close(actual.im, expected.im, tol);
}

#[test]
fn cerf_concrete_scenarios() {
    assert_close_complex(
        cerf(Complex64::new(1.0, 2.0)),
        Complex64::new(-0.53664356577857, -5.04914370344703),
        1e-11,
    );
    assert_close_complex(
        cerf(Complex64::new(0.0, 2.0)),
        Complex64::new(0.0, 18.5648024145756),
        1e-11,
    );
    assert_close_complex(
        cerf(Complex64::new(f64::INFINITY, 0.0)),
        Complex64::new(1.0, 0.0),
        1e-13,
    );
    assert_close_complex(
        cerf(Complex64::new(5.1e-3, 1e-8)),
        Complex64::new(5.75468385903e-3, 1.12834981833e-8),
        1e-10,
    );
}

#[test]
fn erfcx_concrete_scenarios() {
    assert_close(erfcx(20.0), 0.0281743487410513, 1e-13);
    assert_close(erfcx(-3.0), 16205.9888539996, 1e-12);
}

#[test]
fn voigt_concrete_scenarios() {
    assert_close(voigt(0.0, 0.5, 0.5), 0.41741856104074, 1e-10);
    assert_close(voigt(1.0, 5.0, 0.2), 0.07582140674553575, 1e-10);
}

#[test]
fn voigt_hwhm_concrete_scenarios() {
    assert_close(voigt_hwhm(1.0, 0.0).unwrap(), (2.0_f64 * 2.0_f64.ln()).sqrt(), 1e-8);
    assert_close(voigt_hwhm(0.0, 1.0).unwrap(), 1.0, 1e-8);
}

#[test]
fn cerfc_is_one_minus_cerf() {
    for z in [
        Complex64::new(0.3, 0.7),
        Complex64::new(-1.2, 2.5),
        Complex64::new(4.0, -0.1),
    ] {
        let sum = cerf(z) + cerfc(z);
        assert_close_complex(sum, Complex64::new(1.0, 0.0), 1e-12);
    }
}

#[test]
fn cerfcx_matches_cerfc_scaled_by_exp() {
    for z in [Complex64::new(0.5, 0.2), Complex64::new(2.0, 1.5)] {
        let lhs = cerfcx(z) * (-z * z).exp();
        let rhs = cerfc(z);
        assert_close_complex(lhs, rhs, 1e-10);
    }
}

#[test]
fn cerf_mirror_identities() {
    for z in [Complex64::new(0.9, -1.3), Complex64::new(-2.0, 0.4)] {
        assert_close_complex(cerf(-z), -cerf(z), 1e-12);
        assert_close_complex(cerf(z.conj()), cerf(z).conj(), 1e-12);
    }
}

#[test]
fn w_mirror_identity_across_negative_conjugate() {
    for z in [Complex64::new(1.5, 0.8), Complex64::new(-0.3, 2.2)] {
        let lhs = w_of_z(-z.conj());
        let rhs = w_of_z(z).conj();
        assert_close_complex(lhs, rhs, 1e-12);
    }
}

#[test]
fn voigt_reduces_to_gaussian_and_lorentzian() {
    let sigma = 0.7;
    let x = 0.4;
    let gaussian = (-x * x / 2.0 / (sigma * sigma)).exp()
        / (2.0 * std::f64::consts::PI).sqrt()
        / sigma;
    assert_close(voigt(x, sigma, 0.0), gaussian, 1e-12);

    let gamma = 1.3;
    let lorentzian = gamma / std::f64::consts::PI / (x * x + gamma * gamma);
    assert_close(voigt(x, 0.0, gamma), lorentzian, 1e-12);
}

#[test]
fn voigt_hwhm_satisfies_half_maximum_definition() {
    for (sigma, gamma) in [(1.0, 0.3), (2.0, 2.0), (0.1, 5.0)] {
        let h = voigt_hwhm(sigma, gamma).unwrap();
        let peak = voigt(0.0, sigma, gamma);
        let at_h = voigt(h, sigma, gamma);
        assert_close(at_h, peak / 2.0, 1e-10);
    }
}

#[test]
fn boundary_handoff_near_w_of_z_region_switch() {
    // x == 6.0 sits at the edge of the continued-fraction dispatch
    // condition; evaluate just inside and outside and expect agreement.
    let below = w_of_z(Complex64::new(5.999, 0.05));
    let above = w_of_z(Complex64::new(6.001, 0.05));
    assert_close(below.re, above.re, 1e-9);
    assert_close(below.im, above.im, 1e-9);
}
