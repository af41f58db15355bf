//! Sit-up form check
//!
//! The phase is re-derived from every frame on its own: an average
//! shoulder-hip-knee angle under 100° is the up phase (target 60°),
//! anything else the down phase (target 150°, hips extended).

use super::feedback::Feedback;
use super::targets::SitUpTargets;
use super::verdict::{AngleReadings, FormVerdict};
use crate::geometry::{angle_between, round_degrees, AngleTarget};
use crate::pose::{
    PoseFrame, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, NOSE, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER,
};

pub const LABEL: &str = "Sit-up";

/// Instantaneous sit-up phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SitUpPhase {
    Up,
    Down,
}

impl SitUpPhase {
    /// Phase for an average body angle under the given targets
    pub fn detect(average_body_angle: f32, targets: &SitUpTargets) -> Self {
        if average_body_angle < targets.up_phase_below {
            SitUpPhase::Up
        } else {
            SitUpPhase::Down
        }
    }

    pub fn target(self, targets: &SitUpTargets) -> AngleTarget {
        match self {
            SitUpPhase::Up => targets.up,
            SitUpPhase::Down => targets.down,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SitUpPhase::Up => "up",
            SitUpPhase::Down => "down",
        }
    }
}

pub fn classify(frame: Option<&PoseFrame>, targets: &SitUpTargets) -> Option<FormVerdict> {
    let frame = frame?;

    let left_shoulder = frame.point(LEFT_SHOULDER);
    let left_hip = frame.point(LEFT_HIP);

    let left_body = angle_between(left_shoulder, left_hip, frame.point(LEFT_KNEE));
    let right_body = angle_between(
        frame.point(RIGHT_SHOULDER),
        frame.point(RIGHT_HIP),
        frame.point(RIGHT_KNEE),
    );
    let twist = angle_between(frame.point(NOSE), left_shoulder, frame.point(RIGHT_SHOULDER));
    let hip = angle_between(left_shoulder, left_hip, frame.point(RIGHT_HIP));

    let average_body = (left_body + right_body) / 2.0;
    let phase = SitUpPhase::detect(average_body, targets);
    let target = phase.target(targets);

    let is_correct = target.contains(left_body)
        && target.contains(right_body)
        && targets.torso.contains(twist)
        && (phase == SitUpPhase::Up || targets.hip.contains(hip));

    let feedback = if is_correct {
        format!("Good {} position!", phase.as_str())
    } else {
        let mut fb = Feedback::new();

        match phase {
            SitUpPhase::Up => {
                if left_body > target.upper() || right_body > target.upper() {
                    fb.and("Come up higher until your torso is about 60° from the floor");
                } else if left_body < target.lower() || right_body < target.lower() {
                    fb.and(
                        "You're coming up too far. Stop when your torso is about 60° from the floor",
                    );
                }
            }
            SitUpPhase::Down => {
                if left_body < target.lower() || right_body < target.lower() {
                    fb.and("Lower your torso further until it's nearly flat on the floor");
                }
            }
        }

        if twist < targets.torso.lower() || twist > targets.torso.upper() {
            fb.and("avoid twisting your torso - keep it straight");
        }

        if phase == SitUpPhase::Down && hip < targets.hip.lower() {
            fb.and("fully extend your hips at the bottom");
        }

        if (left_body - right_body).abs() > targets.asymmetry_limit {
            fb.also(format!(
                "your sides are uneven (L:{}° vs R:{}°)",
                round_degrees(left_body),
                round_degrees(right_body)
            ));
        }

        fb.or(match phase {
            SitUpPhase::Up => "Sit up with proper form",
            SitUpPhase::Down => "Lie down with proper form",
        })
    };

    let angles = AngleReadings::new()
        .with("torso", average_body)
        .with("twist", twist)
        .with("hips", hip);

    Some(FormVerdict::new(LABEL, feedback, is_correct, angles))
}
