//! Iterative sizing of one station against a delivery-time target.
//!
//! This module answers the inverse question: given a committed
//! order-to-delivery time, how fast must a chosen station process each unit
//! for the line to meet it? The expected delivery time is continuous and
//! nondecreasing in any station's process time, so the answer is found by
//! bisection on that one variable.

mod config;
mod error;
mod problem;

pub use config::SizingConfig;
pub use error::SizingError;

use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{f64::Time, time::second},
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{delivery, error::DeliveryTimeError, line::FlowLine};

use problem::{SizingModel, SizingProblem};

/// Solves for the process time at `station` that meets `target`.
///
/// The search bracket is `[0, target / (queue_depth + 1)]`: at a zero
/// process time the line is at its floor below the target, and at the upper
/// end the sized station's passthrough alone reaches the target.
///
/// # Errors
///
/// Returns a [`SizingError`] if the line is empty, the station index is out
/// of bounds, the target is at or below the zero-process-time floor, or the
/// solver fails to converge.
pub(super) fn process_time_for_target(
    line: &FlowLine,
    station: usize,
    target: Constrained<Time, StrictlyPositive>,
    config: SizingConfig,
) -> Result<Time, SizingError> {
    let target = target.into_inner();

    if line.is_empty() {
        return Err(SizingError::Line(DeliveryTimeError::EmptyLine));
    }

    if station >= line.len() {
        return Err(SizingError::StationOutOfBounds {
            station,
            len: line.len(),
        });
    }

    let mut floored = line.clone();
    floored.stations_mut()[station].process_time = Time::ZERO;
    let floor = delivery::evaluate(floored.stations())?.total;

    if target <= floor {
        return Err(SizingError::Unreachable { target, floor });
    }

    let queue_multiplier = line.stations()[station].queue_depth as f64 + 1.0;
    let upper = target / queue_multiplier;

    let model = SizingModel::new(line, station);
    let problem = SizingProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, upper.get::<second>()],
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(SizingError::MaxIters {
            residual: Time::new::<second>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.process_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::manufacturing::flow_line::core::Station;

    fn station(process_time: f64, queue_depth: usize) -> Station {
        Station::new(Time::new::<second>(process_time), queue_depth).unwrap()
    }

    fn target(seconds: f64) -> Constrained<Time, StrictlyPositive> {
        StrictlyPositive::new(Time::new::<second>(seconds)).unwrap()
    }

    #[test]
    fn roundtrip() {
        // Passthroughs 2, 10, 3: the middle station is the strict bottleneck,
        // so the delivery time pins its process time down uniquely.
        let line = FlowLine::from_stations(vec![
            station(2.0, 0),
            station(5.0, 1),
            station(3.0, 0),
        ]);
        let total = line.expected_delivery_time().unwrap();
        assert_relative_eq!(total.get::<second>(), 23.0);

        let solved = process_time_for_target(
            &line,
            1,
            StrictlyPositive::new(total).unwrap(),
            SizingConfig::default(),
        )
        .expect("sizing solve should succeed");

        assert_relative_eq!(solved.get::<second>(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn sizes_a_queued_entry_station() {
        let line = FlowLine::from_stations(vec![station(1.0, 10), station(10.0, 0)]);

        let solved = process_time_for_target(&line, 0, target(120.0), SizingConfig::default())
            .expect("sizing solve should succeed");

        // 11 slots at 10 s each ahead of a 10 s exit station totals 120 s.
        assert_relative_eq!(solved.get::<second>(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_targets_at_or_below_the_floor() {
        // With the entry station's process time driven to zero, the exit
        // station's 5 s passthrough still gates both stations: floor = 10 s.
        let line = FlowLine::from_stations(vec![station(1.0, 0), station(5.0, 0)]);

        let err = process_time_for_target(&line, 0, target(10.0), SizingConfig::default())
            .expect_err("floor targets are not sizable");

        match err {
            SizingError::Unreachable { floor, .. } => {
                assert_relative_eq!(floor.get::<second>(), 10.0);
            }
            other => panic!("expected Unreachable, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_bounds_stations() {
        let line = FlowLine::from_stations(vec![station(1.0, 0), station(2.0, 0)]);

        let err = process_time_for_target(&line, 2, target(30.0), SizingConfig::default())
            .expect_err("index past the exit station");

        assert!(matches!(
            err,
            SizingError::StationOutOfBounds { station: 2, len: 2 }
        ));
    }

    #[test]
    fn rejects_an_empty_line() {
        let line = FlowLine::new();

        let err = process_time_for_target(&line, 0, target(1.0), SizingConfig::default())
            .expect_err("nothing to size");

        assert!(matches!(
            err,
            SizingError::Line(DeliveryTimeError::EmptyLine)
        ));
    }
}
