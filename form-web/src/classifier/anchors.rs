//! Where an overlay pins each reported angle
//!
//! Maps verdict angle keys to the landmark the host draws the value next to.

use crate::geometry::Side;
use crate::pose::{
    LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, RIGHT_ELBOW, RIGHT_KNEE, RIGHT_SHOULDER,
};

/// Landmark index for an angle key, or `None` for keys with no anchor.
///
/// `side` is the verdict's judged side; it decides which knee is the front
/// one for lunges (right when unknown).
pub fn anchor_landmark(joint: &str, side: Option<Side>) -> Option<usize> {
    let front = side.unwrap_or(Side::Right);
    let index = match joint {
        "leftKnee" => LEFT_KNEE,
        "rightKnee" => RIGHT_KNEE,
        "leftElbow" | "leftArm" => LEFT_ELBOW,
        "rightElbow" | "rightArm" => RIGHT_ELBOW,
        "leftShoulder" | "leftElevation" => LEFT_SHOULDER,
        "rightShoulder" | "rightElevation" => RIGHT_SHOULDER,
        "bodyAlignment" | "hipAlignment" | "torso" | "hips" => LEFT_HIP,
        "twist" => LEFT_SHOULDER,
        "frontKnee" => front.pick(LEFT_KNEE, RIGHT_KNEE),
        "backKnee" => front.pick(RIGHT_KNEE, LEFT_KNEE),
        _ => return None,
    };
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{FormTargets, EXERCISES};
    use crate::pose::fixtures::PoseBuilder;

    #[test]
    fn test_fixed_anchors() {
        assert_eq!(anchor_landmark("leftKnee", None), Some(25));
        assert_eq!(anchor_landmark("rightElbow", None), Some(14));
        assert_eq!(anchor_landmark("bodyAlignment", None), Some(23));
        assert_eq!(anchor_landmark("nope", None), None);
    }

    #[test]
    fn test_lunge_knees_follow_front_side() {
        assert_eq!(anchor_landmark("frontKnee", Some(Side::Left)), Some(LEFT_KNEE));
        assert_eq!(anchor_landmark("backKnee", Some(Side::Left)), Some(RIGHT_KNEE));
        assert_eq!(anchor_landmark("frontKnee", None), Some(RIGHT_KNEE));
    }

    #[test]
    fn test_every_reported_angle_has_an_anchor() {
        let frame = PoseBuilder::standing().build();
        for exercise in EXERCISES {
            let verdict = exercise.classify(Some(&frame), &FormTargets::STANDARD).unwrap();
            for (joint, _) in verdict.angles.iter() {
                assert!(
                    anchor_landmark(joint, verdict.side).is_some(),
                    "{} in {:?}",
                    joint,
                    exercise
                );
            }
        }
    }
}
