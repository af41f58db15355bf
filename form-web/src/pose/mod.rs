//! Pose module - landmark types, index table and frame decoding
//!
//! Re-exports only. All logic in submodules.

mod frame;
mod landmarks;

#[cfg(test)]
pub(crate) mod fixtures;

pub use frame::{PoseFrame, VALUES_PER_LANDMARK, VALUES_PER_LANDMARK_WITH_VISIBILITY};
pub use landmarks::*;
