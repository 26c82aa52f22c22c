//! Model adapters for flow lines.

use twine_core::Model;
use uom::si::f64::Time;

use super::core::{DeliveryTimeError, FlowLine};

/// Computes the expected order-to-delivery time of a flow line.
///
/// This is the thin [`Model`] adapter over the core evaluation: the input
/// is the line itself and the output is its expected delivery time, so the
/// model composes with anything that drives [`twine_core::Model`]s.
///
/// # Example
///
/// ```
/// use flowline_models::models::manufacturing::flow_line::{
///     ExpectedDeliveryTime, FlowLine, Station,
/// };
/// use twine_core::Model;
/// use uom::si::{f64::Time, time::second};
///
/// let line = FlowLine::from_stations(vec![
///     Station::new(Time::new::<second>(1.0), 0).unwrap(),
///     Station::new(Time::new::<second>(5.0), 0).unwrap(),
/// ]);
///
/// let total = ExpectedDeliveryTime.call(&line).unwrap();
/// assert_eq!(total.get::<second>(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedDeliveryTime;

impl Model for ExpectedDeliveryTime {
    type Input = FlowLine;
    type Output = Time;
    type Error = DeliveryTimeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.expected_delivery_time()
    }
}
