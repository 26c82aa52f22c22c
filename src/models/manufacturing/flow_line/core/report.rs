//! Result types for delivery-time evaluation.

use uom::si::f64::Time;

/// Per-station clearing times and line metrics for one evaluation.
///
/// Station entries follow process order, from the entry station (0) to the
/// exit station (`len - 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReport {
    /// Effective time for a unit to clear each station: its own passthrough
    /// time or the largest passthrough anywhere downstream, whichever is
    /// greater.
    pub clear_times: Vec<Time>,

    /// Expected order-to-delivery time, the sum of the clearing times.
    pub total: Time,

    /// The station that constrains the line.
    pub bottleneck: Bottleneck,
}

/// The largest-passthrough station in a line and where it sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bottleneck {
    /// Passthrough time of the bottleneck station.
    pub passthrough: Time,

    /// Station index where the bottleneck occurs.
    ///
    /// Ties resolve to the station closest to the exit, since a downstream
    /// bottleneck reaches further back through the line.
    pub station: usize,
}
