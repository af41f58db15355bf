//! Side plank form check
//!
//! The side with the smaller shoulder-hip-ankle angle is the working side.
//! That line should be straight, and so should shoulder-hip-opposite hip.

use super::feedback::Feedback;
use super::targets::SidePlankTargets;
use super::verdict::{AngleReadings, FormVerdict};
use crate::geometry::{angle_between, round_degrees, Side};
use crate::pose::{
    PoseFrame, LEFT_ANKLE, LEFT_HIP, LEFT_SHOULDER, RIGHT_ANKLE, RIGHT_HIP, RIGHT_SHOULDER,
};

pub const LABEL: &str = "Side Plank";

pub fn classify(frame: Option<&PoseFrame>, targets: &SidePlankTargets) -> Option<FormVerdict> {
    let frame = frame?;

    let left_shoulder = frame.point(LEFT_SHOULDER);
    let left_hip = frame.point(LEFT_HIP);
    let right_shoulder = frame.point(RIGHT_SHOULDER);
    let right_hip = frame.point(RIGHT_HIP);

    let left_body = angle_between(left_shoulder, left_hip, frame.point(LEFT_ANKLE));
    let right_body = angle_between(right_shoulder, right_hip, frame.point(RIGHT_ANKLE));

    let side = if left_body < right_body {
        Side::Left
    } else {
        Side::Right
    };
    let body = side.pick(left_body, right_body);
    let hip = match side {
        Side::Left => angle_between(left_shoulder, left_hip, right_hip),
        Side::Right => angle_between(right_shoulder, right_hip, left_hip),
    };

    let is_correct = targets.body.contains(body) && targets.hip.contains(hip);

    let feedback = if is_correct {
        format!("Perfect {} side plank! Body perfectly straight", side)
    } else {
        let mut fb = Feedback::new();

        if body < targets.body.lower() {
            fb.and(format!(
                "Your hips are sagging (body angle {}°). Lift them higher",
                round_degrees(body)
            ));
        } else if body > targets.body.upper() {
            fb.and(format!(
                "Your hips are too high (body angle {}°). Lower them slightly",
                round_degrees(body)
            ));
        }

        if hip < targets.hip.lower() {
            fb.and(format!(
                "you're leaning too far forward (hip angle {}°)",
                round_degrees(hip)
            ));
        } else if hip > targets.hip.upper() {
            fb.and(format!(
                "you're leaning too far backward (hip angle {}°)",
                round_degrees(hip)
            ));
        }

        fb.or("Straighten your body in a line from head to feet")
    };

    let angles = AngleReadings::new()
        .with("bodyAlignment", body)
        .with("hipAlignment", hip);

    Some(FormVerdict::new(LABEL, feedback, is_correct, angles).on_side(side))
}
