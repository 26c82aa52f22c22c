use thiserror::Error;

/// Errors from delivery-time queries on a flow line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeliveryTimeError {
    /// The line has no stations, so its delivery time is undefined.
    #[error("flow line has no stations")]
    EmptyLine,
}
