//! # Flowline Models
//!
//! Deterministic delivery-time models for sequential production and
//! service lines, in the "flow efficiency" sense of lean manufacturing:
//! a line is an ordered chain of queued processing stations, and the
//! quantity of interest is the expected time from order to delivery.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific model implementations. Start with
//!   [`models::manufacturing::flow_line`].
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Utility code starts inside a model's
//! internal `core` module and is promoted to [`support`] once more than one
//! model reaches for it; only [`support`] is public API.

pub mod models;
pub mod support;
