//! Exercise selection and per-frame dispatch

use std::fmt;
use std::str::FromStr;

use super::targets::FormTargets;
use super::verdict::FormVerdict;
use super::{lateral_raise, lunge, push_up, side_plank, sit_up, squat};
use crate::error::FormError;
use crate::pose::PoseFrame;

/// Supported exercises (closed set, each with its own classifier)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exercise {
    Squat,
    PushUp,
    Lunge,
    SidePlank,
    LateralRaise,
    SitUp,
}

/// All exercises in catalogue order
pub const EXERCISES: [Exercise; 6] = [
    Exercise::Squat,
    Exercise::PushUp,
    Exercise::Lunge,
    Exercise::SidePlank,
    Exercise::LateralRaise,
    Exercise::SitUp,
];

impl Exercise {
    /// Look up by catalogue name ("Squats", "Push-Ups", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Squats" => Some(Exercise::Squat),
            "Push-Ups" => Some(Exercise::PushUp),
            "Lunges" => Some(Exercise::Lunge),
            "Side Plank" => Some(Exercise::SidePlank),
            "Side Lateral Raises" => Some(Exercise::LateralRaise),
            "Sit-Ups" => Some(Exercise::SitUp),
            _ => None,
        }
    }

    /// Catalogue name as shown by the host
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::Squat => "Squats",
            Exercise::PushUp => "Push-Ups",
            Exercise::Lunge => "Lunges",
            Exercise::SidePlank => "Side Plank",
            Exercise::LateralRaise => "Side Lateral Raises",
            Exercise::SitUp => "Sit-Ups",
        }
    }

    /// Label carried by this exercise's verdicts
    pub fn label(&self) -> &'static str {
        match self {
            Exercise::Squat => squat::LABEL,
            Exercise::PushUp => push_up::LABEL,
            Exercise::Lunge => lunge::LABEL,
            Exercise::SidePlank => side_plank::LABEL,
            Exercise::LateralRaise => lateral_raise::LABEL,
            Exercise::SitUp => sit_up::LABEL,
        }
    }

    /// Run this exercise's classifier on one frame. `None` in, `None` out.
    pub fn classify(self, frame: Option<&PoseFrame>, targets: &FormTargets) -> Option<FormVerdict> {
        match self {
            Exercise::Squat => squat::classify(frame, &targets.squat),
            Exercise::PushUp => push_up::classify(frame, &targets.push_up),
            Exercise::Lunge => lunge::classify(frame, &targets.lunge),
            Exercise::SidePlank => side_plank::classify(frame, &targets.side_plank),
            Exercise::LateralRaise => lateral_raise::classify(frame, &targets.lateral_raise),
            Exercise::SitUp => sit_up::classify(frame, &targets.sit_up),
        }
    }
}

impl FromStr for Exercise {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Exercise::from_name(s).ok_or_else(|| FormError::UnknownExercise(s.to_string()))
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a frame for the exercise the host selected by name.
///
/// A frame with no pose yields `None` whatever the name. With a pose, an
/// unrecognized name gets the zero-valued stub verdict, never an error.
pub fn classify_by_name(
    name: &str,
    frame: Option<&PoseFrame>,
    targets: &FormTargets,
) -> Option<FormVerdict> {
    let frame = frame?;
    match Exercise::from_name(name) {
        Some(exercise) => {
            log::trace!("classifying frame as {}", exercise);
            exercise.classify(Some(frame), targets)
        }
        None => {
            log::debug!("unrecognized exercise '{}', returning stub verdict", name);
            Some(FormVerdict::stub())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::fixtures::PoseBuilder;

    #[test]
    fn test_names_round_trip() {
        for exercise in EXERCISES {
            assert_eq!(Exercise::from_name(exercise.name()), Some(exercise));
            assert_eq!(exercise.name().parse::<Exercise>().unwrap(), exercise);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Exercise::from_name("squats"), None);
        let err = "Burpees".parse::<Exercise>().unwrap_err();
        assert!(matches!(err, FormError::UnknownExercise(name) if name == "Burpees"));
    }

    #[test]
    fn test_dispatch_uses_matching_classifier() {
        let frame = PoseBuilder::standing().build();
        for exercise in EXERCISES {
            let verdict = exercise
                .classify(Some(&frame), &FormTargets::STANDARD)
                .unwrap();
            assert_eq!(verdict.label, exercise.label());
            assert!(!verdict.angles.is_empty());
        }
    }

    #[test]
    fn test_missing_pose_yields_none_for_every_exercise() {
        for exercise in EXERCISES {
            assert!(exercise.classify(None, &FormTargets::STANDARD).is_none());
            assert!(classify_by_name(exercise.name(), None, &FormTargets::STANDARD).is_none());
        }
        assert!(classify_by_name("Jumping Jacks", None, &FormTargets::STANDARD).is_none());
        assert!(classify_by_name("", None, &FormTargets::STANDARD).is_none());
    }

    #[test]
    fn test_unknown_exercise_gets_stub() {
        let frame = PoseBuilder::standing().build();
        let verdict = classify_by_name("Jumping Jacks", Some(&frame), &FormTargets::STANDARD)
            .unwrap();
        assert_eq!(verdict, FormVerdict::stub());
        assert!(!verdict.is_correct);
        assert_eq!(verdict.rep_signal, 0);
    }

    #[test]
    fn test_classify_by_name() {
        let frame = PoseBuilder::standing()
            .bend(
                crate::pose::LEFT_HIP,
                crate::pose::LEFT_KNEE,
                crate::pose::LEFT_ANKLE,
                90.0,
            )
            .bend(
                crate::pose::RIGHT_HIP,
                crate::pose::RIGHT_KNEE,
                crate::pose::RIGHT_ANKLE,
                90.0,
            )
            .build();
        let verdict = classify_by_name("Squats", Some(&frame), &FormTargets::STANDARD).unwrap();
        assert_eq!(verdict.label, "Squat");
        assert!(verdict.is_correct);
    }
}
