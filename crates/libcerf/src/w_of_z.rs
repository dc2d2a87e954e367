// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// libcerf: native Rust complex error functions, Dawson and Voigt profiles.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! `w_of_z`, Faddeeva's scaled complex error function
//! `w(z) = exp(-z^2) * erfc(-iz)`, function (7.1.3) of Abramowitz & Stegun
//! (1964), also known as the plasma dispersion function.
//!
//! The region dispatcher combines several methods: axial fast paths, a
//! modified-Lentz continued fraction (Gautschi 1970, Poppe & Wijers 1990)
//! preferred for large `|z|`, and the Zaghloul-Ali ACM algorithm 916 series
//! for the remaining small-to-moderate region, which the continued fraction
//! handles poorly near `|x| ~ 6` with small `|y|`.

use num_complex::Complex64;

use crate::diagnostics;
use crate::erfcx::erfcx;
use crate::expa2n2::EXPA2N2;
use crate::im_w_of_x::im_w_of_x;

const ISPI: f64 = 0.564_189_583_547_756_286_948_079_451_56; // 1 / sqrt(pi)
const A: f64 = 0.518_321_480_430_085_929_872; // pi / sqrt(-log(eps*0.5))
const C: f64 = 0.329_973_702_884_629_072_537; // (2/pi) * a
const A2: f64 = 0.268_657_157_075_235_951_582; // a^2

#[inline]
fn sqr(x: f64) -> f64 {
    x * x
}

/// `sinc(x) = sin(x)/x` given both `x` and the already-computed `sin(x)`.
#[inline]
fn sinc(x: f64, sinx: f64) -> f64 {
    if x.abs() < 1e-4 {
        1.0 - (1.0 / 6.0) * x * x
    } else {
        sinx / x
    }
}

/// `sinh(x)` via Taylor series, accurate to machine precision for `|x| < 1e-2`.
#[inline]
fn sinh_taylor(x: f64) -> f64 {
    x * (1.0 + (x * x) * (1.0 / 6.0 + (1.0 / 120.0) * (x * x)))
}

/// Evaluates `w(z) = exp(-z^2) * erfc(-iz)` for any complex `z`, accurate to
/// double precision over the entire complex plane.
#[must_use]
pub fn w_of_z(z: Complex64) -> Complex64 {
    if z.re == 0.0 {
        diagnostics::record(400, 0);
        // Purely imaginary input, purely real output. Use z.re (not 0.0) so
        // the sign of zero in the imaginary part of w is preserved.
        return Complex64::new(erfcx(z.im), z.re);
    }
    if z.im == 0.0 {
        diagnostics::record(500, 0);
        // Purely real input, complex output. Avoid underflow for large |z|.
        let re = if z.re.abs() > 27.0 { 0.0 } else { (-sqr(z.re)).exp() };
        let im = im_w_of_x(z.re);
        return Complex64::new(re, im);
    }

    let relerr = f64::EPSILON;
    let x = z.re.abs();
    let y = z.im;
    let ya = y.abs();

    if ya > 7.0 || (x > 6.0 && (ya > 0.1 || (x > 8.0 && ya > 1e-10) || x > 28.0)) {
        return continued_fraction(z, x, y, ya);
    }

    if x < 10.0 {
        return acm916(z, x, y, relerr);
    }

    large_x_sum(z, x, y, relerr)
}

/// Continued-fraction expansion, preferred for large `|z|` because it is
/// fast. Zaghloul observed a large relative error in `Re w(z)` for `|x| ~ 6`
/// with small `|y|`; the caller excludes that region in favor of
/// [`acm916`].
fn continued_fraction(z: Complex64, x: f64, y: f64, ya: f64) -> Complex64 {
    diagnostics::record(100, 0);
    let xs = if y < 0.0 { -z.re } else { z.re }; // compute for -z if y < 0

    let ret = if x + ya > 4000.0 {
        // nu <= 2
        if x + ya > 1e7 {
            // nu == 1, w(z) = i/sqrt(pi) / z
            if x > ya {
                let yax = ya / xs;
                let denom = ISPI / (xs + yax * ya);
                Complex64::new(denom * yax, denom)
            } else if ya.is_infinite() {
                return if x.is_nan() || y < 0.0 {
                    Complex64::new(f64::NAN, f64::NAN)
                } else {
                    Complex64::new(0.0, 0.0)
                };
            } else {
                let xya = xs / ya;
                let denom = ISPI / (xya * xs + ya);
                Complex64::new(denom, denom * xya)
            }
        } else {
            // nu == 2, w(z) = i/sqrt(pi)*z / (z*z - 0.5)
            let dr = xs * xs - ya * ya - 0.5;
            let di = 2.0 * xs * ya;
            let denom = ISPI / (dr * dr + di * di);
            Complex64::new(denom * (xs * di - ya * dr), denom * (xs * dr + ya * di))
        }
    } else {
        // general continued fraction, estimating the starting truncation order nu
        let (c0, c1, c2, c3, c4) = (3.9, 11.398, 0.082_54, 0.1421, 0.2023);
        let nu0 = (c0 + c1 / (c2 * x + c3 * ya + c4)).floor();
        let mut wr = xs;
        let mut wi = ya;
        let mut nu = 0.5 * (nu0 - 1.0);
        while nu > 0.4 {
            // w <- z - nu/w
            let denom = nu / (wr * wr + wi * wi);
            wr = xs - wr * denom;
            wi = ya + wi * denom;
            nu -= 0.5;
        }
        // w(z) = i/sqrt(pi) / w
        let denom = ISPI / (wr * wr + wi * wi);
        Complex64::new(denom * wi, denom * wr)
    };

    if y < 0.0 {
        // w(z) = 2*exp(-z*z) - w(-z); careful of overflow in exp(-z*z).
        let arg = Complex64::new((ya - xs) * (xs + ya), 2.0 * xs * y);
        2.0 * arg.exp() - ret
    } else {
        ret
    }
}

/// ACM algorithm 916 by Zaghloul & Ali (2011), competitive at small `|z|`
/// and more accurate than the continued fraction near `z = 1 + i`.
fn acm916(z: Complex64, x: f64, y: f64, relerr: f64) -> Complex64 {
    if y.is_nan() {
        diagnostics::record(299, 0);
        return Complex64::new(y, y);
    }

    let mut prod2ax = 1.0;
    let mut prodm2ax = 1.0;
    let expx2;
    let mut sum1 = 0.0;
    let mut sum2 = 0.0;
    let mut sum3 = 0.0;
    let mut sum4 = 0.0;
    let mut sum5 = 0.0;

    if x < 5e-4 {
        // Compute sum4 and sum5 jointly as sum5-sum4, needed for accuracy.
        diagnostics::record(201, 0);
        let x2 = x * x;
        expx2 = 1.0 - x2 * (1.0 - 0.5 * x2); // exp(-x*x) via Taylor
        let ax2 = 1.036_642_960_860_171_859_744 * x; // 2*a*x
        let exp2ax = 1.0 + ax2 * (1.0 + ax2 * (0.5 + (1.0 / 6.0) * ax2));
        let expm2ax = 1.0 - ax2 * (1.0 - ax2 * (0.5 - (1.0 / 6.0) * ax2));
        let mut n = 1usize;
        loop {
            let coef = EXPA2N2[n - 1] * expx2 / (A2 * (n * n) as f64 + y * y);
            prod2ax *= exp2ax;
            prodm2ax *= expm2ax;
            sum1 += coef;
            sum2 += coef * prodm2ax;
            sum3 += coef * prod2ax;
            sum5 += coef * (2.0 * A) * n as f64 * sinh_taylor((2.0 * A) * n as f64 * x);
            if coef * prod2ax < relerr * sum3 || n >= EXPA2N2.len() {
                diagnostics::record(201, n as i32);
                break;
            }
            n += 1;
        }
    } else {
        diagnostics::record(202, 0);
        expx2 = (-x * x).exp();
        let exp2ax = ((2.0 * A) * x).exp();
        let expm2ax = 1.0 / exp2ax;
        let mut n = 1usize;
        loop {
            let coef = EXPA2N2[n - 1] * expx2 / (A2 * (n * n) as f64 + y * y);
            prod2ax *= exp2ax;
            prodm2ax *= expm2ax;
            sum1 += coef;
            sum2 += coef * prodm2ax;
            sum3 += coef * prod2ax;
            sum4 += (coef * prodm2ax) * (A * n as f64);
            sum5 += (coef * prod2ax) * (A * n as f64);
            if (coef * prod2ax) * (A * n as f64) < relerr * sum5 || n >= EXPA2N2.len() {
                diagnostics::record(202, n as i32);
                break;
            }
            n += 1;
        }
    }

    // The exact expression is expx2*erfcx(y); for large negative y we
    // approximate erfcx(y) by 2*exp(y^2) to avoid spurious overflow.
    let expx2erfcxy = if y < -6.0 {
        2.0 * (y * y - x * x).exp()
    } else {
        expx2 * erfcx(y)
    };

    let ret = if y > 5.0 {
        // imaginary terms cancel
        diagnostics::record(211, 0);
        let sinxy = (x * y).sin();
        let re = (expx2erfcxy - C * y * sum1) * (2.0 * x * y).cos()
            + (C * x * expx2) * sinxy * sinc(x * y, sinxy);
        Complex64::new(re, 0.0)
    } else {
        diagnostics::record(221, 0);
        let xs = z.re;
        let sinxy = (xs * y).sin();
        let sin2xy = (2.0 * xs * y).sin();
        let cos2xy = (2.0 * xs * y).cos();
        let coef1 = expx2erfcxy - C * y * sum1;
        let coef2 = C * xs * expx2;
        Complex64::new(
            coef1 * cos2xy + coef2 * sinxy * sinc(xs * y, sinxy),
            coef2 * sinc(2.0 * xs * y, sin2xy) - coef1 * sin2xy,
        )
    };

    // Correction term shared with the x >= 10 fallback: in that branch
    // sum2 and sum4 are identically zero, so this reduces to the simpler
    // expression used there.
    ret + Complex64::new(
        (C / 2.0) * y * (sum2 + sum3),
        (C / 2.0) * (sum5 - sum4).copysign(z.re),
    )
}

/// Modified ACM-916 for `x >= 10`, `|y| < 1e-10`: only `sum3` and `sum5`
/// contribute, summed outward from the index nearest `x/a`.
fn large_x_sum(z: Complex64, x: f64, y: f64, relerr: f64) -> Complex64 {
    diagnostics::record(300, 0);
    if x.is_nan() {
        return Complex64::new(x, x);
    }
    if y.is_nan() {
        return Complex64::new(y, y);
    }

    let ret = (-x * x).exp(); // |y| < 1e-10, only the exp(-x*x) term survives
    let n0 = (x / A + 0.5).floor();
    let dx = A * n0 - x;
    let mut sum3 = (-dx * dx).exp() / (A2 * (n0 * n0) + y * y);
    let mut sum5 = A * n0 * sum3;
    let exp1 = (4.0 * A * dx).exp();
    let mut exp1dn = 1.0;
    let mut dn = 1i64;
    loop {
        if !(n0 - dn as f64 > 0.0) {
            break;
        }
        let np = n0 + dn as f64;
        let nm = n0 - dn as f64;
        let tp0 = (-sqr(A * dn as f64 + dx)).exp();
        exp1dn *= exp1;
        let tm0 = tp0 * exp1dn;
        let tp = tp0 / (A2 * (np * np) + y * y);
        let tm = tm0 / (A2 * (nm * nm) + y * y);
        sum3 += tp + tm;
        sum5 += A * (np * tp + nm * tm);
        if A * (np * tp + nm * tm) < relerr * sum5 {
            return Complex64::new(
                ret + (C / 2.0) * y * sum3,
                (C / 2.0) * sum5.copysign(z.re),
            );
        }
        dn += 1;
    }
    loop {
        let np = n0 + dn as f64;
        dn += 1;
        let tp = (-sqr(A * dn as f64 + dx)).exp() / (A2 * (np * np) + y * y);
        sum3 += tp;
        sum5 += A * np * tp;
        if A * np * tp < relerr * sum5 {
            break;
        }
    }
    Complex64::new(ret + (C / 2.0) * y * sum3, (C / 2.0) * sum5.copysign(z.re))
}
