use uom::si::f64::Time;

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{
    delivery,
    error::DeliveryTimeError,
    report::{Bottleneck, DeliveryReport},
    sizing::{self, SizingConfig, SizingError},
    station::Station,
};

/// An ordered production line, entry station first.
///
/// The order is semantically significant: a unit flows through station 0,
/// then station 1, and so on to the exit. Queries read the stations' current
/// field values each time, so mutating a station between queries is a
/// supported usage pattern.
///
/// # Example
///
/// ```
/// use flowline_models::models::manufacturing::flow_line::{FlowLine, Station};
/// use uom::si::{f64::Time, time::second};
///
/// let mut line = FlowLine::new();
/// line.push_station(Station::new(Time::new::<second>(10.0), 0).unwrap());
/// line.push_station(Station::new(Time::new::<second>(10.0), 0).unwrap());
///
/// let total = line.expected_delivery_time().unwrap();
/// assert_eq!(total.get::<second>(), 20.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowLine {
    stations: Vec<Station>,
}

impl FlowLine {
    /// Creates an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a line from stations already in process order.
    #[must_use]
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Appends a station at the exit end of the line.
    pub fn push_station(&mut self, station: Station) {
        self.stations.push(station);
    }

    /// Returns the stations in process order.
    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns the stations for in-place mutation between queries.
    pub fn stations_mut(&mut self) -> &mut [Station] {
        &mut self.stations
    }

    /// Returns the number of stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns `true` if the line has no stations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Evaluates the line, returning per-station clearing times, the
    /// expected delivery time, and the bottleneck station.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryTimeError::EmptyLine`] if the line has no stations.
    pub fn evaluate(&self) -> Result<DeliveryReport, DeliveryTimeError> {
        delivery::evaluate(&self.stations)
    }

    /// Expected order-to-delivery time with bottleneck propagation.
    ///
    /// A unit's time to clear each station is gated by the largest
    /// passthrough time at or downstream of it.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryTimeError::EmptyLine`] if the line has no stations.
    pub fn expected_delivery_time(&self) -> Result<Time, DeliveryTimeError> {
        self.evaluate().map(|report| report.total)
    }

    /// Delivery time under the free-flow approximation: the sum of each
    /// station's own passthrough time.
    ///
    /// Exact only when no station has a larger-passthrough station anywhere
    /// downstream of it; otherwise it underestimates
    /// [`expected_delivery_time`](Self::expected_delivery_time).
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryTimeError::EmptyLine`] if the line has no stations.
    pub fn free_flow_delivery_time(&self) -> Result<Time, DeliveryTimeError> {
        delivery::free_flow(&self.stations)
    }

    /// The largest-passthrough station in the line.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryTimeError::EmptyLine`] if the line has no stations.
    pub fn bottleneck(&self) -> Result<Bottleneck, DeliveryTimeError> {
        self.evaluate().map(|report| report.bottleneck)
    }

    /// Solves for the process time at `station` that makes the line's
    /// expected delivery time match `target`.
    ///
    /// Iterates with bisection; see [`SizingConfig`] for the solver knobs.
    ///
    /// # Errors
    ///
    /// Returns a [`SizingError`] if the line is empty, the station index is
    /// out of bounds, the target is unreachable, or the solver fails to
    /// converge.
    pub fn process_time_for_target(
        &self,
        station: usize,
        target: Constrained<Time, StrictlyPositive>,
        config: SizingConfig,
    ) -> Result<Time, SizingError> {
        sizing::process_time_for_target(self, station, target, config)
    }
}

impl FromIterator<Station> for FlowLine {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        Self {
            stations: iter.into_iter().collect(),
        }
    }
}
