// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// libcerf: native Rust complex error functions, Dawson and Voigt profiles.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Error, Dawson, and Voigt functions derived from [`crate::w_of_z`], the
//! real-axis kernels [`crate::erfcx::erfcx`] and [`crate::im_w_of_x::im_w_of_x`],
//! and the standard library's real-valued `erf`/`erfc` forwarding is replaced
//! by the same Taylor-series cancellation-avoidance the kernels themselves
//! use near the origin.

use num_complex::Complex64;

use crate::erfcx::erfcx;
use crate::im_w_of_x::im_w_of_x;
use crate::w_of_z::w_of_z;

const SPI2: f64 = 0.886_226_925_452_758_013_649_083_741_670_572_591_399_0; // sqrt(pi)/2
const S2PI: f64 = 2.506_628_274_631_000_502_415_765_284_811_0; // sqrt(2*pi)
const PI: f64 = std::f64::consts::PI;

/// `erfcx(z) = exp(z^2) * erfc(z)`, the underflow-compensated complex
/// complementary error function, trivially related to `w(z)`.
#[must_use]
pub fn cerfcx(z: Complex64) -> Complex64 {
    w_of_z(Complex64::new(-z.im, z.re))
}

/// `erfi(z) = -i * erf(iz)`, the rotated complex error function.
#[must_use]
pub fn cerfi(z: Complex64) -> Complex64 {
    let e = cerf(Complex64::new(-z.im, z.re));
    Complex64::new(e.im, -e.re)
}

/// `erfi(x) = -i * erf(ix)`, the imaginary error function, for real `x`.
#[must_use]
pub fn erfi(x: f64) -> f64 {
    if x * x > 720.0 {
        if x > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    } else {
        (x * x).exp() * im_w_of_x(x)
    }
}

/// `dawson(x) = sqrt(pi)/2 * exp(-x^2) * erfi(x)`, Dawson's integral for a
/// real argument.
#[must_use]
pub fn dawson(x: f64) -> f64 {
    SPI2 * im_w_of_x(x)
}

/// Voigt's profile: the convolution of a Gaussian
/// `G(x, sigma) = 1/sqrt(2*pi)/|sigma| * exp(-x^2/2/sigma^2)` and a
/// Lorentzian `L(x, gamma) = |gamma| / pi / (x^2 + gamma^2)`, computed as
/// `Re{w(z)} / sqrt(2*pi) / |sigma|` with `z = (x + i|gamma|) / sqrt(2) / |sigma|`
/// (Abramowitz & Stegun 1964, formula 7.4.13).
#[must_use]
pub fn voigt(x: f64, sigma: f64, gamma: f64) -> f64 {
    let gam = gamma.abs();
    let sig = sigma.abs();

    if gam == 0.0 {
        if sig == 0.0 {
            // A delta function.
            if x == 0.0 {
                f64::INFINITY
            } else {
                0.0
            }
        } else {
            // A pure Gaussian.
            (-x * x / 2.0 / (sig * sig)).exp() / S2PI / sig
        }
    } else if sig == 0.0 {
        // A pure Lorentzian.
        gam / PI / (x * x + gam * gam)
    } else {
        let z = Complex64::new(x, gam) / std::f64::consts::SQRT_2 / sig;
        w_of_z(z).re / S2PI / sig
    }
}

/// `erf(z)`, the complex error function, via `w(z)` except in regions prone
/// to cancellation, where a Taylor expansion around the origin (or around
/// the imaginary axis, for small `|x|*|y|`) is used instead.
#[must_use]
pub fn cerf(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if y == 0.0 {
        return Complex64::new(erf_real(x), y); // preserve sign of 0
    }
    if x == 0.0 {
        // handled separately for speed and for y = +-Inf / NaN
        let im = if y * y > 720.0 {
            if y > 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            }
        } else {
            (y * y).exp() * im_w_of_x(y)
        };
        return Complex64::new(x, im); // preserve sign of 0
    }

    let m_re_z2 = (y - x) * (x + y); // Re(-z^2), careful of overflow
    let m_im_z2 = -2.0 * x * y; // Im(-z^2)
    if m_re_z2 < -750.0 {
        // underflow
        return Complex64::new(if x >= 0.0 { 1.0 } else { -1.0 }, 0.0);
    }

    if x >= 0.0 {
        if x < 8e-2 {
            if y.abs() < 1e-2 {
                return cerf_taylor(z, m_re_z2, m_im_z2);
            } else if m_im_z2.abs() < 5e-3 && x < 5e-3 {
                return cerf_taylor_erfi(x, y);
            }
        }
        // avoid the complex exp function, which spuriously produces NaN
        // when multiplying w in an overflow situation.
        let rot = Complex64::new(m_im_z2.cos(), m_im_z2.sin());
        1.0 - m_re_z2.exp() * (rot * w_of_z(Complex64::new(-y, x)))
    } else {
        // x < 0
        if x > -8e-2 {
            if y.abs() < 1e-2 {
                return cerf_taylor(z, m_re_z2, m_im_z2);
            } else if m_im_z2.abs() < 5e-3 && x > -5e-3 {
                return cerf_taylor_erfi(x, y);
            }
        } else if x.is_nan() {
            return Complex64::new(f64::NAN, if y == 0.0 { 0.0 } else { f64::NAN });
        }
        let rot = Complex64::new(m_im_z2.cos(), m_im_z2.sin());
        m_re_z2.exp() * (rot * w_of_z(Complex64::new(y, -x))) - 1.0
    }
}

/// `erf(x)` for real `x`, used by [`cerf`]'s real-axis fast path.
fn erf_real(x: f64) -> f64 {
    if x == 0.0 {
        return x;
    }
    if x >= 0.0 {
        1.0 - (-x * x).exp() * erfcx(x)
    } else {
        (-x * x).exp() * erfcx(-x) - 1.0
    }
}

/// `erf(z) = 2/sqrt(pi) * z * (1 - z^2/3 + z^4/10 - z^6/42 + z^8/216 - ...)`
/// for small `|z|`, avoiding cancellation inaccuracy.
fn cerf_taylor(z: Complex64, m_re_z2: f64, m_im_z2: f64) -> Complex64 {
    let mz2 = Complex64::new(m_re_z2, m_im_z2); // -z^2
    z * (1.128_379_167_095_512_573_9
        + mz2
            * (0.376_126_389_031_837_524_64
                + mz2
                    * (0.112_837_916_709_551_257_39
                        + mz2 * (0.026_866_170_645_131_251_760 + mz2 * 0.005_223_977_625_442_187_842_2))))
}

/// For small `|x|` and small `|x*y|`: `erf(x + iy) = erf(iy) + ...`, a
/// Taylor expansion around the imaginary axis, avoiding cancellation
/// inaccuracy that the general formula suffers there.
fn cerf_taylor_erfi(x: f64, y: f64) -> Complex64 {
    let x2 = x * x;
    let y2 = y * y;
    let expy2 = y2.exp();
    let re = expy2
        * x
        * (1.128_379_167_095_512_573_9
            - x2 * (0.376_126_389_031_837_524_64 + 0.752_252_778_063_675_049_25 * y2)
            + x2 * x2
                * (0.112_837_916_709_551_257_39
                    + y2 * (0.451_351_666_838_205_029_56 + 0.150_450_555_612_735_009_86 * y2)));
    let im = expy2
        * (im_w_of_x(y)
            - x2 * y
                * (1.128_379_167_095_512_573_9
                    - x2 * (0.564_189_583_547_756_286_95 + 0.376_126_389_031_837_524_64 * y2)));
    Complex64::new(re, im)
}

/// `erfc(z) = 1 - erf(z)`, the complex complementary error function, via
/// `w(z)` except on the axes, where direct formulas avoid needless
/// cancellation against `1`.
#[must_use]
pub fn cerfc(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if x == 0.0 {
        let im = if y * y > 720.0 {
            if y > 0.0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        } else {
            -(y * y).exp() * im_w_of_x(y)
        };
        return Complex64::new(1.0, im);
    }
    if y == 0.0 {
        if x * x > 750.0 {
            // underflow
            return Complex64::new(if x >= 0.0 { 0.0 } else { 2.0 }, -y); // preserve sign of 0
        }
        let re = if x >= 0.0 {
            (-x * x).exp() * erfcx(x)
        } else {
            2.0 - (-x * x).exp() * erfcx(-x)
        };
        return Complex64::new(re, -y); // preserve sign of 0
    }

    let m_re_z2 = (y - x) * (x + y);
    let m_im_z2 = -2.0 * x * y;
    if m_re_z2 < -750.0 {
        return Complex64::new(if x >= 0.0 { 0.0 } else { 2.0 }, 0.0);
    }

    let rot = Complex64::new(m_re_z2, m_im_z2).exp();
    if x >= 0.0 {
        rot * w_of_z(Complex64::new(-y, x))
    } else {
        2.0 - rot * w_of_z(Complex64::new(y, -x))
    }
}

/// `dawson(z) = sqrt(pi)/2 * exp(-z^2) * erfi(z)`, Dawson's integral for a
/// complex argument, via `w(z)` except near the axes and the origin, where
/// direct Taylor/continued-fraction formulas avoid cancellation.
#[must_use]
pub fn cdawson(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if y == 0.0 {
        return Complex64::new(SPI2 * im_w_of_x(x), -y); // preserve sign of 0
    }
    if x == 0.0 {
        let y2 = y * y;
        if y2 < 2.5e-5 {
            return Complex64::new(
                x,
                y * (1.0 + y2 * (0.666_666_666_666_666_666_666_666_666_666_666_666_7 + y2 * 0.266_666_666_666_666_666_666_666_666_666_666_666_67)),
            );
        }
        let im = SPI2
            * if y >= 0.0 {
                y2.exp() - erfcx(y)
            } else {
                erfcx(-y) - y2.exp()
            };
        return Complex64::new(x, im);
    }

    let m_re_z2 = (y - x) * (x + y);
    let m_im_z2 = -2.0 * x * y;
    let mz2 = Complex64::new(m_re_z2, m_im_z2);

    if y >= 0.0 {
        if y < 5e-3 {
            if x.abs() < 5e-3 {
                return cdawson_taylor(z, mz2);
            } else if m_im_z2.abs() < 5e-3 {
                return cdawson_taylor_realaxis(x, y);
            }
        }
        let res = mz2.exp() - w_of_z(z);
        return SPI2 * Complex64::new(-res.im, res.re);
    }

    // y < 0
    if y > -5e-3 {
        if x.abs() < 5e-3 {
            return cdawson_taylor(z, mz2);
        } else if m_im_z2.abs() < 5e-3 {
            return cdawson_taylor_realaxis(x, y);
        }
    } else if y.is_nan() {
        return Complex64::new(if x == 0.0 { 0.0 } else { f64::NAN }, f64::NAN);
    }
    let res = w_of_z(-z) - mz2.exp();
    SPI2 * Complex64::new(-res.im, res.re)
}

/// `dawson(z) = z - 2/3*z^3 + 4/15*z^5 - ...` for small `|z|`.
fn cdawson_taylor(z: Complex64, mz2: Complex64) -> Complex64 {
    z * (1.0
        + mz2
            * (0.666_666_666_666_666_666_666_666_666_666_666_666_7
                + mz2 * 0.266_666_666_666_666_666_666_666_666_666_666_666_67))
}

/// For small `|y|` and small `|x*y|`: Taylor expansion around the real axis
/// in terms of `D = dawson(x)`, switching to a continued-fraction
/// rearrangement for `|x| > 40` where `2*D*x -> 1` causes cancellation in
/// the Taylor series itself.
fn cdawson_taylor_realaxis(x: f64, y: f64) -> Complex64 {
    let x2 = x * x;
    if x2 > 1600.0 {
        // |x| > 40
        let y2 = y * y;
        if x2 > 25e14 {
            // |x| > 5e7: 1-term / 2-term continued-fraction expansions
            let xy2 = (x * y) * (x * y);
            return Complex64::new(
                (0.5 + y2 * (0.5 + 0.25 * y2 - 0.166_666_666_666_666_666_67 * xy2)) / x,
                y * (-1.0 + y2 * (-0.666_666_666_666_666_666_67 + 0.133_333_333_333_333_333_33 * xy2 - 0.266_666_666_666_666_666_67 * y2))
                    / (2.0 * x2 - 1.0),
            );
        }
        let denom = -15.0 + x2 * (90.0 + x2 * (-60.0 + 8.0 * x2));
        return (1.0 / denom)
            * Complex64::new(
                x * (33.0 + x2 * (-28.0 + 4.0 * x2) + y2 * (18.0 - 4.0 * x2 + 4.0 * y2)),
                y * (-15.0 + x2 * (24.0 - 4.0 * x2) + y2 * (4.0 * x2 - 10.0 - 4.0 * y2)),
            );
    }

    let d = SPI2 * im_w_of_x(x);
    let y2 = y * y;
    Complex64::new(
        d + y2 * (d + x - 2.0 * d * x2)
            + y2 * y2
                * (d * (0.5 - x2 * (2.0 - 0.666_666_666_666_666_666_67 * x2))
                    + x * (0.833_333_333_333_333_333_33 - 0.333_333_333_333_333_333_33 * x2)),
        y * (1.0 - 2.0 * d * x
            + y2 * 0.666_666_666_666_666_666_67 * (1.0 - x2 - d * x * (3.0 - 2.0 * x2))
            + y2 * y2
                * (0.266_666_666_666_666_666_67 - x2 * (0.6 - 0.133_333_333_333_333_333_33 * x2)
                    - d * x * (1.0 - x2 * (1.333_333_333_333_333_333_3 - 0.266_666_666_666_666_666_67 * x2)))),
    )
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

    fn relerr_c(got: Complex64, want: Complex64) -> f64 {
        let d = (got - want).norm();
        let n = want.norm();
        if n == 0.0 {
            d
        } else {
            d / n
        }
    }

    #[test]
    fn erf_real_matches_known_values() {
        assert!(relerr(erf_real(1.0), 0.842_700_792_949_715) < 1e-9);
        assert!(relerr(erf_real(-1.0), -0.842_700_792_949_715) < 1e-9);
        assert_eq!(erf_real(0.0), 0.0);
    }

    #[test]
    fn cerf_on_real_axis_matches_erf_real() {
        let z = cerf(Complex64::new(0.7, 0.0));
        assert!(relerr(z.re, erf_real(0.7)) < 1e-9);
    }

    #[test]
    fn cerfc_is_one_minus_cerf() {
        let z = Complex64::new(0.6, 0.4);
        let lhs = cerfc(z);
        let rhs = Complex64::new(1.0, 0.0) - cerf(z);
        assert!(relerr_c(lhs, rhs) < 1e-8);
    }

    #[test]
    fn dawson_matches_known_value() {
        // D(1) = 0.5380795069127684
        assert!(relerr(dawson(1.0), 0.538_079_506_912_768_4) < 1e-10);
    }

    #[test]
    fn cdawson_on_real_axis_matches_dawson() {
        let z = cdawson(Complex64::new(2.0, 0.0));
        assert!(relerr(z.re, dawson(2.0)) < 1e-9);
    }

    #[test]
    fn voigt_reduces_to_gaussian_when_gamma_zero() {
        let x = 0.3;
        let sigma = 1.5;
        let v = voigt(x, sigma, 0.0);
        let gauss = (-x * x / 2.0 / (sigma * sigma)).exp() / S2PI / sigma;
        assert!(relerr(v, gauss) < 1e-12);
    }

    #[test]
    fn voigt_reduces_to_lorentzian_when_sigma_zero() {
        let x = 0.3;
        let gamma = 0.8;
        let v = voigt(x, 0.0, gamma);
        let lorentz = gamma / PI / (x * x + gamma * gamma);
        assert!(relerr(v, lorentz) < 1e-12);
    }

    #[test]
    fn voigt_delta_function_limit() {
        assert_eq!(voigt(0.0, 0.0, 0.0), f64::INFINITY);
        assert_eq!(voigt(1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn erfi_is_odd() {
        assert!(relerr(erfi(0.5), -erfi(-0.5)) < 1e-12);
    }

    #[test]
    fn cerfcx_matches_real_erfcx_on_real_axis() {
        let z = cerfcx(Complex64::new(1.7, 0.0));
        assert!(relerr(z.re, erfcx(1.7)) < 1e-9);
    }
}
