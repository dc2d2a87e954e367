// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// libcerf: native Rust complex error functions, Dawson and Voigt profiles.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Faddeeva's scaled complex error function `w(z) = exp(-z^2) * erfc(-iz)`,
//! to near-machine precision across the whole complex plane, and the
//! error/Dawson/Voigt functions derived from it.
//!
//! The region dispatcher in [`w_of_z`] partitions the complex plane and
//! switches between a Maclaurin series, an asymptotic continued fraction,
//! Chebyshev interpolants on precomputed tables, and the series of Zaghloul
//! & Ali (ACM TOMS Algorithm 916), each accurate to double precision in its
//! own region. [`erfcx`] and [`im_w_of_x`] provide fast real-axis kernels
//! that the complex functions reuse on their axial fast paths. [`voigt`] and
//! [`voigt_hwhm`] build the spectroscopic line-shape profile and its
//! half-width on top of the same machinery.
//!
//! No function in this crate panics or allocates on its numerical hot path;
//! the sole fallible operation, [`voigt_hwhm`], reports failure through
//! [`libcerf_error::LibcerfError`] rather than through a sentinel value.

mod cheb_tables;
pub mod diagnostics;
mod erfcx;
mod expa2n2;
mod im_w_of_x;

mod derived;
mod rootfinding;
mod voigt_hwhm;
mod w_of_z;

pub use derived::{cdawson, cerf, cerfc, cerfcx, cerfi, dawson, erfi, voigt};
pub use erfcx::erfcx;
pub use im_w_of_x::im_w_of_x;
pub use voigt_hwhm::voigt_hwhm;
pub use w_of_z::w_of_z;

pub use libcerf_error::LibcerfError;

use num_complex::Complex64;

/// `Re w(x + iy)`, a flat-argument convenience accessor over [`w_of_z`] for
/// callers that would rather not construct a [`Complex64`] themselves.
#[must_use]
pub fn re_w_of_z(x: f64, y: f64) -> f64 {
    w_of_z(Complex64::new(x, y)).re
}

/// `Im w(x + iy)`, a flat-argument convenience accessor over [`w_of_z`].
#[must_use]
pub fn im_w_of_z(x: f64, y: f64) -> f64 {
    w_of_z(Complex64::new(x, y)).im
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_accessors_match_w_of_z() {
        let z = Complex64::new(0.7, 1.3);
        let w = w_of_z(z);
        assert_eq!(re_w_of_z(z.re, z.im), w.re);
        assert_eq!(im_w_of_z(z.re, z.im), w.im);
    }
}
