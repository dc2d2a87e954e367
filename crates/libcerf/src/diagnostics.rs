// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// libcerf: native Rust complex error functions, Dawson and Voigt profiles.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Optional, purely observational record of which algorithm branch and term
//! count the most recent call on this thread took.
//!
//! Disabled by default. Enable the `diagnostics` Cargo feature to record a
//! `(algorithm_id, n_terms)` pair per call, readable via [`last_call`]. With
//! the feature off, [`record`] compiles to nothing and [`last_call`] always
//! returns `None`, so the numerical hot path carries zero overhead.

/// Which branch of a dispatcher executed, and how many series terms it used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmTrace {
    /// Opaque identifier for the branch taken (mirrors the upstream
    /// library's informal numbering, e.g. 500 for the `im_w_of_x` Taylor
    /// branch, 550 for its asymptotic branch).
    pub algorithm_id: i32,
    /// Number of series terms evaluated, or `0` where not applicable.
    pub n_terms: i32,
}

#[cfg(feature = "diagnostics")]
std::thread_local! {
    static LAST_CALL: std::cell::Cell<Option<AlgorithmTrace>> = const { std::cell::Cell::new(None) };
}

/// Records an algorithm trace for the current thread. No-op unless the
/// `diagnostics` feature is enabled.
#[inline]
pub fn record(algorithm_id: i32, n_terms: i32) {
    #[cfg(feature = "diagnostics")]
    {
        LAST_CALL.with(|cell| {
            cell.set(Some(AlgorithmTrace {
                algorithm_id,
                n_terms,
            }))
        });
    }
    #[cfg(not(feature = "diagnostics"))]
    {
        let _ = (algorithm_id, n_terms);
    }
}

/// Returns the algorithm trace recorded by the most recent call on this
/// thread, or `None` if the `diagnostics` feature is disabled or no call has
/// been made yet.
#[must_use]
pub fn last_call() -> Option<AlgorithmTrace> {
    #[cfg(feature = "diagnostics")]
    {
        LAST_CALL.with(|cell| cell.get())
    }
    #[cfg(not(feature = "diagnostics"))]
    {
        None
    }
}

#[cfg(all(test, feature = "diagnostics"))]
mod tests {
    use super::*;

    #[test]
    fn records_last_call() {
        record(123, 4);
        assert_eq!(
            last_call(),
            Some(AlgorithmTrace {
                algorithm_id: 123,
                n_terms: 4
            })
        );
    }
}
