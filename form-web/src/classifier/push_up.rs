//! Push-up form check
//!
//! Elbows at 90° at the bottom with the body held in a straight line.

use super::feedback::Feedback;
use super::targets::PushUpTargets;
use super::verdict::{AngleReadings, FormVerdict};
use crate::geometry::{angle_between, round_degrees, worse_side};
use crate::pose::{
    PoseFrame, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, NOSE, RIGHT_ELBOW, RIGHT_HIP,
    RIGHT_SHOULDER, RIGHT_WRIST,
};

pub const LABEL: &str = "Push-up";

pub fn classify(frame: Option<&PoseFrame>, targets: &PushUpTargets) -> Option<FormVerdict> {
    let frame = frame?;

    let left_elbow = angle_between(
        frame.point(LEFT_SHOULDER),
        frame.point(LEFT_ELBOW),
        frame.point(LEFT_WRIST),
    );
    let right_elbow = angle_between(
        frame.point(RIGHT_SHOULDER),
        frame.point(RIGHT_ELBOW),
        frame.point(RIGHT_WRIST),
    );
    let body = angle_between(
        frame.point(NOSE),
        frame.point(LEFT_HIP),
        frame.point(RIGHT_HIP),
    );

    let elbow = targets.elbow;
    let is_correct =
        elbow.contains(left_elbow) && elbow.contains(right_elbow) && targets.body.contains(body);

    let feedback = if is_correct {
        "Excellent push-up form! Elbows at 90° with straight body".to_string()
    } else {
        let mut fb = Feedback::new();

        // Elbows first
        if left_elbow > elbow.upper() || right_elbow > elbow.upper() {
            let side = worse_side(left_elbow, right_elbow, elbow.degrees);
            fb.and(format!(
                "Your {} arm isn't bent enough ({}°). Lower your chest further",
                side,
                round_degrees(side.pick(left_elbow, right_elbow))
            ));
        } else if left_elbow < elbow.lower() || right_elbow < elbow.lower() {
            fb.and("You're too low. Push up slightly to reach 90° elbow bend");
        }

        // Then body line
        if body < targets.body.lower() {
            fb.and(format!(
                "Your hips are sagging (body angle {}°). Tighten your core",
                round_degrees(body)
            ));
        } else if body > targets.body.upper() {
            fb.and(format!(
                "Your hips are too high (body angle {}°). Lower your hips",
                round_degrees(body)
            ));
        }

        if (left_elbow - right_elbow).abs() > targets.asymmetry_limit {
            fb.also(format!(
                "your arms are uneven (L:{}° vs R:{}°)",
                round_degrees(left_elbow),
                round_degrees(right_elbow)
            ));
        }

        fb.or("Lower your body until elbows reach 90° while keeping body straight")
    };

    let angles = AngleReadings::new()
        .with("leftElbow", left_elbow)
        .with("rightElbow", right_elbow)
        .with("bodyAlignment", body);

    Some(FormVerdict::new(LABEL, feedback, is_correct, angles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::fixtures::PoseBuilder;

    /// Body line along y = 0.5 with the nose beyond the left hip
    fn plank() -> PoseBuilder {
        PoseBuilder::standing()
            .at(NOSE, 0.1, 0.5)
            .at(LEFT_HIP, 0.6, 0.5)
            .at(RIGHT_HIP, 0.7, 0.5)
    }

    fn push_up(builder: PoseBuilder, left: f32, right: f32) -> FormVerdict {
        let frame = builder
            .bend(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, left)
            .bend(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, right)
            .build();
        classify(Some(&frame), &PushUpTargets::STANDARD).unwrap()
    }

    #[test]
    fn test_perfect_push_up() {
        let verdict = push_up(plank(), 90.0, 90.0);
        assert!(verdict.is_correct);
        assert_eq!(verdict.rep_signal, 1);
        assert_eq!(verdict.label, "Push-up");
        assert_eq!(
            verdict.feedback,
            "Excellent push-up form! Elbows at 90° with straight body"
        );
        assert_eq!(verdict.angles.get("leftElbow"), Some(90));
        assert_eq!(verdict.angles.get("rightElbow"), Some(90));
        assert_eq!(verdict.angles.get("bodyAlignment"), Some(180));
    }

    #[test]
    fn test_straight_arms_and_sagging_hips() {
        let verdict = push_up(plank().at(RIGHT_HIP, 0.7, 0.6), 170.0, 180.0);
        assert!(!verdict.is_correct);
        assert_eq!(
            verdict.feedback,
            "Your right arm isn't bent enough (180°). Lower your chest further \
             and Your hips are sagging (body angle 135°). Tighten your core"
        );
        assert_eq!(verdict.angles.get("bodyAlignment"), Some(135));
    }

    #[test]
    fn test_too_low() {
        let verdict = push_up(plank(), 60.0, 60.0);
        assert!(!verdict.is_correct);
        assert_eq!(
            verdict.feedback,
            "You're too low. Push up slightly to reach 90° elbow bend"
        );
    }

    #[test]
    fn test_uneven_arms() {
        let verdict = push_up(plank(), 130.0, 90.0);
        assert!(!verdict.is_correct);
        assert_eq!(
            verdict.feedback,
            "Your left arm isn't bent enough (130°). Lower your chest further. \
             Also, your arms are uneven (L:130° vs R:90°)"
        );
    }

    #[test]
    fn test_no_pose() {
        assert!(classify(None, &PushUpTargets::STANDARD).is_none());
    }
}
