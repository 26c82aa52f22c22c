//! Sequential flow line delivery-time model.
//!
//! A [`FlowLine`] is an ordered chain of [`Station`]s, entry first. The
//! model reduces the line to its expected order-to-delivery time, either
//! with bottleneck propagation ([`FlowLine::expected_delivery_time`]) or
//! as the free-flow approximation ([`FlowLine::free_flow_delivery_time`]).
//! The computational core is in the internal [`core`] module; the
//! [`twine_core::Model`] surface is the thin [`ExpectedDeliveryTime`]
//! adapter.

pub(crate) mod core;
mod model;

pub use self::core::{
    Bottleneck, DeliveryReport, DeliveryTimeError, FlowLine, SizingConfig, SizingError, Station,
};
pub use self::model::ExpectedDeliveryTime;
