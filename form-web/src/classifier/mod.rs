//! Classifier module - per-exercise form checks
//!
//! Each classifier is a pure function of one frame's landmarks to a
//! `FormVerdict`. Nothing is carried between frames.

mod anchors;
mod exercise;
mod feedback;
mod targets;
mod verdict;

pub mod lateral_raise;
pub mod lunge;
pub mod push_up;
pub mod side_plank;
pub mod sit_up;
pub mod squat;

pub use anchors::anchor_landmark;
pub use exercise::{classify_by_name, Exercise, EXERCISES};
pub use sit_up::SitUpPhase;
pub use targets::{
    FormTargets, LateralRaiseTargets, LungeTargets, PushUpTargets, SidePlankTargets,
    SitUpTargets, SquatTargets, ASYMMETRY_LIMIT,
};
pub use verdict::{AngleReadings, FormVerdict};
