use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Time;

use crate::models::manufacturing::flow_line::core::DeliveryTimeError;

/// Errors that can occur while sizing a station against a delivery target.
#[derive(Debug, Error)]
pub enum SizingError {
    /// A delivery-time evaluation failed.
    #[error("delivery-time evaluation failed")]
    Line(#[from] DeliveryTimeError),

    /// The station index does not exist in the line.
    #[error("no station {station} in a line of {len} stations")]
    StationOutOfBounds { station: usize, len: usize },

    /// No positive process time at the sized station reaches the target.
    #[error("target delivery time is unreachable: floor={floor:?}")]
    Unreachable {
        /// Requested delivery time.
        target: Time,

        /// Delivery time in the limit of a zero process time at the sized
        /// station. Only targets strictly above this are sizable.
        floor: Time,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best delivery-time residual achieved.
        residual: Time,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
