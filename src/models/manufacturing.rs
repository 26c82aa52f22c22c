//! Manufacturing and service flow models.
//!
//! This module contains models for sequential production lines and the
//! order-to-delivery latencies they induce.

pub mod flow_line;
