//! Geometry module - stateless angle primitives
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod tolerance;

pub use angles::{angle_between, round_degrees};
pub use tolerance::{is_within_range, worse_side, AngleTarget, Side};
