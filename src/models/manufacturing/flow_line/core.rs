//! Expected delivery time of a sequential line of queued stations.
//!
//! The model is deterministic and closed-form: no stochastic arrivals, no
//! service-time variation, no finite-buffer blocking beyond the queue
//! multiplier. A unit's time to clear any station is gated by the slowest
//! station anywhere downstream of it, because downstream congestion backs
//! up through every upstream station once the line runs at steady state.

mod delivery;
mod error;
mod line;
mod report;
mod sizing;
mod station;

pub use error::DeliveryTimeError;
pub use line::FlowLine;
pub use report::{Bottleneck, DeliveryReport};
pub use sizing::{SizingConfig, SizingError};
pub use station::Station;
