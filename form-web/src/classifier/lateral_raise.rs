//! Side lateral raise form check
//!
//! Arms slightly bent (elbow ~90°), raised to shoulder height (hip-shoulder-
//! wrist ~80°) on both sides, torso upright.

use super::feedback::Feedback;
use super::targets::LateralRaiseTargets;
use super::verdict::{AngleReadings, FormVerdict};
use crate::geometry::{angle_between, round_degrees, worse_side, Side};
use crate::pose::{
    PoseFrame, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, NOSE, RIGHT_ELBOW, RIGHT_HIP,
    RIGHT_SHOULDER, RIGHT_WRIST,
};

pub const LABEL: &str = "Lateral Raise";

pub fn classify(frame: Option<&PoseFrame>, targets: &LateralRaiseTargets) -> Option<FormVerdict> {
    let frame = frame?;

    let left_shoulder = frame.point(LEFT_SHOULDER);
    let right_shoulder = frame.point(RIGHT_SHOULDER);
    let left_wrist = frame.point(LEFT_WRIST);
    let right_wrist = frame.point(RIGHT_WRIST);

    let left_arm = angle_between(left_shoulder, frame.point(LEFT_ELBOW), left_wrist);
    let right_arm = angle_between(right_shoulder, frame.point(RIGHT_ELBOW), right_wrist);
    let left_elevation = angle_between(frame.point(LEFT_HIP), left_shoulder, left_wrist);
    let right_elevation = angle_between(frame.point(RIGHT_HIP), right_shoulder, right_wrist);
    let torso = angle_between(frame.point(NOSE), left_shoulder, right_shoulder);

    let arm = targets.arm;
    let elevation = targets.elevation;
    let is_correct = arm.contains(left_arm)
        && arm.contains(right_arm)
        && elevation.contains(left_elevation)
        && elevation.contains(right_elevation)
        && targets.torso.contains(torso);

    let feedback = if is_correct {
        "Perfect lateral raise! Arms at 90° and raised to shoulder height".to_string()
    } else {
        let mut fb = Feedback::new();

        // Elbow bend
        if left_arm < arm.lower() || right_arm < arm.lower() {
            let side = worse_side(left_arm, right_arm, arm.degrees);
            fb.and(format!(
                "Your {} arm is too bent ({}°). Straighten it more",
                side,
                round_degrees(side.pick(left_arm, right_arm))
            ));
        } else if left_arm > arm.upper() || right_arm > arm.upper() {
            fb.and("Your arms are too straight. Maintain a slight bend");
        }

        // Elevation: the lower arm is the one called out
        if left_elevation < elevation.lower() || right_elevation < elevation.lower() {
            let side = if left_elevation < right_elevation {
                Side::Left
            } else {
                Side::Right
            };
            fb.and(format!(
                "your {} arm isn't high enough ({}°). Raise to shoulder level",
                side,
                round_degrees(side.pick(left_elevation, right_elevation))
            ));
        } else if left_elevation > elevation.upper() || right_elevation > elevation.upper() {
            fb.and("you're raising your arms too high. Lower to shoulder level");
        }

        if torso < targets.torso.lower() {
            fb.and("you're leaning forward. Stand straight");
        } else if torso > targets.torso.upper() {
            fb.and("you're leaning backward. Stand straight");
        }

        if (left_elevation - right_elevation).abs() > targets.asymmetry_limit {
            fb.also(format!(
                "your arms are uneven (L:{}° vs R:{}°)",
                round_degrees(left_elevation),
                round_degrees(right_elevation)
            ));
        }

        fb.or("Raise arms to shoulder height with slight bend at elbows")
    };

    let angles = AngleReadings::new()
        .with("leftArm", left_arm)
        .with("rightArm", right_arm)
        .with("leftElevation", left_elevation)
        .with("rightElevation", right_elevation)
        .with("torso", torso);

    Some(FormVerdict::new(LABEL, feedback, is_correct, angles))
}
