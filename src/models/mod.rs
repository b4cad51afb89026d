//! Domain models for range overlap checks.
//!
//! This module contains the core data structures:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus block arithmetic
//! - [`Range`] and [`RangeSet`] - Inclusive ranges over any ordered bound
//! - [`RangeInput`] - The accepted input shapes

mod input;
mod ipv4;
mod range;

// Re-export public types
pub use input::RangeInput;
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, mask_to_prefix, octet_bounds, Ipv4, MAX_LENGTH,
};
pub use range::{Range, RangeSet};
