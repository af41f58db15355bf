//! Lunge form check
//!
//! The knee with the smaller angle is the front leg. Front knee at 90°, back
//! leg straight (or deeply bent near the floor), torso upright, and the
//! front knee kept behind the toes.

use super::feedback::Feedback;
use super::targets::LungeTargets;
use super::verdict::{AngleReadings, FormVerdict};
use crate::geometry::{angle_between, round_degrees, Side};
use crate::pose::{
    PoseFrame, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, NOSE, RIGHT_ANKLE, RIGHT_HIP,
    RIGHT_KNEE, RIGHT_SHOULDER,
};

pub const LABEL: &str = "Lunge";

const KNEE_PAST_TOES: &str = "your front knee is past your toes - keep it aligned with your ankle";

pub fn classify(frame: Option<&PoseFrame>, targets: &LungeTargets) -> Option<FormVerdict> {
    let frame = frame?;

    let left_knee = angle_between(
        frame.point(LEFT_HIP),
        frame.point(LEFT_KNEE),
        frame.point(LEFT_ANKLE),
    );
    let right_knee = angle_between(
        frame.point(RIGHT_HIP),
        frame.point(RIGHT_KNEE),
        frame.point(RIGHT_ANKLE),
    );
    let torso = angle_between(
        frame.point(NOSE),
        frame.point(LEFT_SHOULDER),
        frame.point(RIGHT_SHOULDER),
    );

    let front = if left_knee < right_knee {
        Side::Left
    } else {
        Side::Right
    };
    let front_knee = front.pick(left_knee, right_knee);
    let back_knee = front.pick(right_knee, left_knee);

    let knee_past_toes = {
        let knee = frame.point(front.pick(LEFT_KNEE, RIGHT_KNEE));
        let ankle = frame.point(front.pick(LEFT_ANKLE, RIGHT_ANKLE));
        knee.x < ankle.x
    };

    let is_correct = targets.front_knee.contains(front_knee)
        && (targets.back_knee.contains(back_knee) || back_knee < targets.back_knee_bent_below)
        && targets.torso.contains(torso);

    let mut fb = if is_correct {
        Feedback::starting_with(format!(
            "Perfect {} lunge! Front knee at 90° with proper torso alignment",
            front
        ))
    } else {
        let mut fb = Feedback::new();

        let knee = targets.front_knee;
        if front_knee < knee.lower() {
            fb.and(format!(
                "Your front knee is too bent ({}°). Move your foot forward slightly",
                round_degrees(front_knee)
            ));
        } else if front_knee > knee.upper() {
            fb.and(format!(
                "Your front knee isn't bent enough ({}°). Lower your hips further",
                round_degrees(front_knee)
            ));
        }

        if back_knee < targets.back_knee_straighten_below {
            fb.and(format!(
                "your back leg should be straighter (currently {}°)",
                round_degrees(back_knee)
            ));
        }

        if torso < targets.torso.lower() {
            fb.and(format!(
                "you're leaning too far forward ({}°)",
                round_degrees(torso)
            ));
        } else if torso > targets.torso.upper() {
            fb.and(format!("you're leaning too far back ({}°)", round_degrees(torso)));
        }

        fb
    };

    // Reported even when the angles are in range
    if knee_past_toes {
        fb.also(KNEE_PAST_TOES);
    }

    let feedback = fb.or("Perform a lunge with front knee at 90° and back leg straight");

    let angles = AngleReadings::new()
        .with("frontKnee", front_knee)
        .with("backKnee", back_knee)
        .with("torso", torso);

    Some(FormVerdict::new(LABEL, feedback, is_correct, angles).on_side(front))
}
