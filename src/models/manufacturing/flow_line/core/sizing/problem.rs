//! Problem formulation for delivery-target sizing.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::Time, time::second};

use crate::models::manufacturing::flow_line::core::{DeliveryTimeError, FlowLine};

use super::super::delivery;

/// Model adapter for delivery-target sizing.
///
/// Wraps the base delivery-time evaluation and exposes the sized station's
/// process time as the sole input variable to the model.
pub(super) struct SizingModel<'a> {
    line: &'a FlowLine,
    station: usize,
}

impl<'a> SizingModel<'a> {
    pub(super) fn new(line: &'a FlowLine, station: usize) -> Self {
        Self { line, station }
    }
}

impl Model for SizingModel<'_> {
    type Input = Time;
    type Output = Candidate;
    type Error = DeliveryTimeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mut candidate = self.line.clone();
        // The lower bracket probes the zero-process-time limit. The formula
        // is well defined there even though a validated station never is.
        candidate.stations_mut()[self.station].process_time = *input;

        let report = delivery::evaluate(candidate.stations())?;
        Ok(Candidate {
            process_time: *input,
            delivery_time: report.total,
        })
    }
}

/// A candidate process time and the delivery time it produces.
///
/// Carrying the input alongside the output lets the solver's final snapshot
/// report the sized process time directly.
#[derive(Debug, Clone, Copy)]
pub(super) struct Candidate {
    pub(super) process_time: Time,
    pub(super) delivery_time: Time,
}

/// Equation problem definition for delivery-target sizing.
///
/// Computes the residual as `achieved - target`.
pub(super) struct SizingProblem {
    target: Time,
}

impl SizingProblem {
    pub(super) fn new(target: Time) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for SizingProblem {
    type Input = Time;
    type Output = Candidate;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Time::new::<second>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(output.delivery_time - self.target).get::<second>()])
    }
}
