// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// libcerf: native Rust complex error functions, Dawson and Voigt profiles.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Error types shared across the `libcerf` workspace.

use thiserror::Error;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// ENUMS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Errors that can arise outside the purely numerical core.
///
/// The scalar and complex special functions themselves (`w_of_z`, `erfcx`,
/// `cerf`, `voigt`, ...) are total over their floating-point domain and never
/// return this type: their only error-reporting channel is IEEE-754 `NaN`,
/// `±Inf`, and signed zero. This type is reserved for operations with a
/// genuine failure mode, namely the Voigt half-width-at-half-maximum solver.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LibcerfError {
    /// The Gaussian and Lorentzian widths passed to [`voigt_hwhm`] were both
    /// zero, so the profile degenerates to a delta function with no finite
    /// half-width.
    ///
    /// [`voigt_hwhm`]: ../libcerf/fn.voigt_hwhm.html
    #[error("voigt_hwhm: sigma and gamma are both zero, the profile has no finite half-width")]
    DegenerateProfile,

    /// A width parameter passed to the Voigt profile or its HWHM solver was
    /// `NaN` or infinite.
    #[error("voigt_hwhm: sigma or gamma is not a finite number")]
    NonFiniteParameter,

    /// The bracketing search inside the root-finder failed to locate a sign
    /// change within its iteration budget.
    #[error("voigt_hwhm: failed to bracket a root after {iterations} iterations")]
    RootNotBracketed {
        /// Number of bracket-expansion iterations attempted before giving up.
        iterations: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_non_empty() {
        assert!(!LibcerfError::DegenerateProfile.to_string().is_empty());
        assert!(!LibcerfError::NonFiniteParameter.to_string().is_empty());
        assert!(!LibcerfError::RootNotBracketed { iterations: 50 }
            .to_string()
            .is_empty());
    }
}
