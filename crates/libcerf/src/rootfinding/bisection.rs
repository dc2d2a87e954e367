// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// libcerf: native Rust complex error functions, Dawson and Voigt profiles.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Bisection search for a root of a continuous, monotone-near-the-root
//! function, given an initial guess rather than a known bracket.

use super::rootfinder::{Rootfinder, RootfinderData};

/// Finds `x` such that `f(x) == 0`, starting from a guess and expanding
/// outward geometrically until the sign of `f` changes.
pub struct Bisection<F: Fn(f64) -> f64> {
    function: F,
    guess: f64,
    data: RootfinderData,
}

impl<F: Fn(f64) -> f64> Bisection<F> {
    #[must_use]
    pub fn new(function: F, guess: f64, accuracy: f64) -> Self {
        Self {
            function,
            guess,
            data: RootfinderData::new(guess, accuracy),
        }
    }

    /// Number of bracket-expansion and bisection steps taken so far.
    #[must_use]
    pub fn iterations(&self) -> i32 {
        self.data.iteration_count
    }
}

impl<F: Fn(f64) -> f64> Rootfinder<F> for Bisection<F> {
    fn value(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    fn solve_impl(&mut self) -> f64 {
        // Orient the search so that f(lo) < 0 < f(hi).
        let (lo, hi) = if self.data.y_min < 0.0 {
            (self.data.x_min, self.data.x_max)
        } else {
            (self.data.x_max, self.data.x_min)
        };

        let mut root = lo;
        let mut dx = hi - lo;
        while self.data.iteration_count < Self::MAX_ITERATIONS {
            self.data.increment_evaluation_count();
            dx *= 0.5;
            let mid = root + dx;
            let f_mid = self.value(mid);
            if f_mid <= 0.0 {
                root = mid;
            }
            if dx.abs() < self.data.accuracy || f_mid == 0.0 {
                break;
            }
        }
        root
    }

    fn solve(&mut self) -> Option<f64> {
        if self.data.accuracy <= 0.0 {
            return None;
        }

        let f_guess = self.value(self.guess);
        if f_guess == 0.0 {
            return Some(self.guess);
        }

        let growth_factor = 1.6;
        let mut x_min = self.guess;
        let mut x_max = self.guess;
        let mut y_min = f_guess;
        let mut y_max = f_guess;
        let mut dx = self.data.accuracy.max(self.guess.abs() * 1e-3);
        let mut flipflop = -1;

        for _ in 0..Self::MAX_ITERATIONS {
            if y_min * y_max < 0.0 {
                self.data.x_min = x_min;
                self.data.x_max = x_max;
                self.data.y_min = y_min;
                self.data.y_max = y_max;
                return Some(self.solve_impl());
            }
            self.data.increment_evaluation_count();
            if flipflop == -1 {
                x_min -= dx;
                y_min = self.value(x_min);
                flipflop = 1;
            } else {
                x_max += dx;
                y_max = self.value(x_max);
                flipflop = -1;
            }
            dx *= growth_factor;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_root_of_shifted_parabola() {
        let mut solver = Bisection::new(|x| x * x - 2.0, 1.0, 1e-12);
        let root = solver.solve().expect("bracket should be found");
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn finds_root_from_guess_on_wrong_side() {
        let mut solver = Bisection::new(|x| x - 3.0, -100.0, 1e-10);
        let root = solver.solve().expect("bracket should be found");
        assert!((root - 3.0).abs() < 1e-6);
    }
}
