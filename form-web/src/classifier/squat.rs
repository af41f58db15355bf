//! Squat form check
//!
//! Both knees (hip-knee-ankle) should sit at 90° at the bottom of the squat.

use super::feedback::Feedback;
use super::targets::SquatTargets;
use super::verdict::{AngleReadings, FormVerdict};
use crate::geometry::{angle_between, round_degrees, worse_side};
use crate::pose::{PoseFrame, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE};

pub const LABEL: &str = "Squat";

pub fn classify(frame: Option<&PoseFrame>, targets: &SquatTargets) -> Option<FormVerdict> {
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

    let knee = targets.knee;
    let is_correct = knee.contains(left_knee) && knee.contains(right_knee);

    let feedback = if is_correct {
        "Perfect squat! Knees at 90° with good symmetry".to_string()
    } else {
        let mut fb = Feedback::new();

        let side = worse_side(left_knee, right_knee, knee.degrees);
        let worst = side.pick(left_knee, right_knee);
        if worst < knee.lower() {
            fb.and(format!(
                "Your {} knee is too bent ({}°). Rise slightly to reach 90°",
                side,
                round_degrees(worst)
            ));
        } else if worst > knee.upper() {
            fb.and(format!(
                "Your {} knee isn't bent enough ({}°). Lower yourself further",
                side,
                round_degrees(worst)
            ));
        }

        if (left_knee - right_knee).abs() > targets.asymmetry_limit {
            fb.also(format!(
                "your knees are uneven (L:{}° vs R:{}°). Focus on equal depth",
                round_degrees(left_knee),
                round_degrees(right_knee)
            ));
        }

        fb.or("Adjust your squat depth to reach 90° knee bend")
    };

    let angles = AngleReadings::new()
        .with("leftKnee", left_knee)
        .with("rightKnee", right_knee);

    Some(FormVerdict::new(LABEL, feedback, is_correct, angles))
}
