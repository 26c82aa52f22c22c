//! Expected order-to-delivery time for a station sequence.

use uom::{ConstZero, si::f64::Time};

use super::{
    error::DeliveryTimeError,
    report::{Bottleneck, DeliveryReport},
    station::Station,
};

/// Evaluates a station sequence with bottleneck propagation.
///
/// The scan runs from the exit station back to the entry station, carrying
/// the largest passthrough time seen so far. Each station clears no faster
/// than that running bottleneck: once the line reaches steady state,
/// congestion at a slow downstream station backs up through every station
/// ahead of it.
///
/// # Errors
///
/// Returns [`DeliveryTimeError::EmptyLine`] if the sequence is empty.
pub(super) fn evaluate(stations: &[Station]) -> Result<DeliveryReport, DeliveryTimeError> {
    let Some(last) = stations.last() else {
        return Err(DeliveryTimeError::EmptyLine);
    };

    let mut bottleneck = last.passthrough_time();
    let mut bottleneck_station = stations.len() - 1;
    let mut total = Time::ZERO;
    let mut clear_times = vec![Time::ZERO; stations.len()];

    for (index, station) in stations.iter().enumerate().rev() {
        let passthrough = station.passthrough_time();
        if passthrough > bottleneck {
            bottleneck = passthrough;
            bottleneck_station = index;
        }
        total += bottleneck;
        clear_times[index] = bottleneck;
    }

    Ok(DeliveryReport {
        clear_times,
        total,
        bottleneck: Bottleneck {
            passthrough: bottleneck,
            station: bottleneck_station,
        },
    })
}

/// Sums each station's own passthrough time, ignoring downstream congestion.
///
/// This is the free-flow approximation: exact only when no station has a
/// larger-passthrough station anywhere downstream of it, and an
/// underestimate otherwise.
///
/// # Errors
///
/// Returns [`DeliveryTimeError::EmptyLine`] if the sequence is empty.
pub(super) fn free_flow(stations: &[Station]) -> Result<Time, DeliveryTimeError> {
    if stations.is_empty() {
        return Err(DeliveryTimeError::EmptyLine);
    }

    Ok(stations.iter().map(Station::passthrough_time).sum())
}
