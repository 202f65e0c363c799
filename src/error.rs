//! Boundary input-validation errors.
//!
//! The core's contract is total: for any well-typed, finite input it always
//! produces a result. Malformed geometry, out-of-range grid writes and
//! unresolvable relation members are recovered locally and never surface
//! here. The only caller-visible failure is input of the wrong shape,
//! rejected once at the ingestion boundary.

use thiserror::Error;

/// Error returned when input fails boundary validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A coordinate contained NaN or infinity.
    #[error("non-finite coordinate: lat={lat}, lon={lon}")]
    NonFiniteCoordinate {
        /// Offending latitude value
        lat: f64,
        /// Offending longitude value
        lon: f64,
    },

    /// A distance value contained NaN or infinity.
    #[error("non-finite distance: {meters} m")]
    NonFiniteDistance {
        /// Offending distance value
        meters: f64,
    },
}
