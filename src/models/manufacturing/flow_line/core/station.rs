use uom::si::f64::Time;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// A single processing point in a flow line.
///
/// Both fields are public and may be changed between queries; every query
/// recomputes from the current field values. [`Station::new`] validates the
/// process time at construction, and callers that mutate fields afterward
/// are responsible for keeping it strictly positive.
///
/// # Example
///
/// ```
/// use flowline_models::models::manufacturing::flow_line::Station;
/// use uom::si::{f64::Time, time::second};
///
/// let station = Station::new(Time::new::<second>(2.0), 3).unwrap();
/// assert_eq!(station.passthrough_time().get::<second>(), 8.0);
///
/// assert!(Station::new(Time::new::<second>(0.0), 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    /// Expected time to process one flow unit once it begins service.
    ///
    /// Must be strictly positive.
    pub process_time: Time,

    /// Number of flow-unit slots occupied ahead of the service point.
    pub queue_depth: usize,
}

impl Station {
    /// Constructs a validated station.
    ///
    /// # Errors
    ///
    /// Returns an error if the process time is zero, negative, or `NaN`.
    pub fn new(process_time: Time, queue_depth: usize) -> ConstraintResult<Self> {
        let process_time = Constrained::<Time, StrictlyPositive>::new(process_time)?;
        Ok(Self::from_constrained(process_time, queue_depth))
    }

    /// Constructs a station from a pre-validated process time.
    #[must_use]
    pub fn from_constrained(
        process_time: Constrained<Time, StrictlyPositive>,
        queue_depth: usize,
    ) -> Self {
        Self {
            process_time: process_time.into_inner(),
            queue_depth,
        }
    }

    /// Constructs a station without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the process time is strictly positive.
    /// Violating this invariant makes delivery-time queries meaningless.
    #[must_use]
    pub fn new_unchecked(process_time: Time, queue_depth: usize) -> Self {
        Self {
            process_time,
            queue_depth,
        }
    }

    /// Time a unit spends at this station when nothing downstream blocks it:
    /// waiting behind the `queue_depth` units already in line, then its own
    /// service.
    #[must_use]
    pub fn passthrough_time(&self) -> Time {
        self.process_time * (self.queue_depth as f64 + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::{minute, second};

    use crate::support::constraint::ConstraintError;

    #[test]
    fn validates_process_time_at_construction() {
        assert!(Station::new(Time::new::<second>(1.5), 0).is_ok());

        assert_eq!(
            Station::new(Time::new::<second>(0.0), 0),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            Station::new(Time::new::<second>(-1.0), 4),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            Station::new(Time::new::<second>(f64::NAN), 0),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn passthrough_scales_with_queue_depth() {
        let station = Station::new(Time::new::<minute>(3.0), 2).unwrap();
        assert_relative_eq!(station.passthrough_time().get::<minute>(), 9.0);
    }

    #[test]
    fn queueing_and_slow_processing_are_interchangeable() {
        let slow = Station::new(Time::new::<second>(5.0), 0).unwrap();
        let queued = Station::new(Time::new::<second>(1.0), 4).unwrap();

        assert_relative_eq!(
            slow.passthrough_time().get::<second>(),
            queued.passthrough_time().get::<second>()
        );
    }

    #[test]
    fn new_unchecked_skips_validation() {
        let station = Station::new_unchecked(Time::new::<second>(0.0), 1);
        assert_eq!(station.passthrough_time().get::<second>(), 0.0);
    }
}
