//! Verdict returned for one classified frame

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::geometry::{round_degrees, Side};

/// Joint angles reported for display, in insertion order, rounded to whole
/// degrees. Serializes as a `{ joint: degrees }` map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AngleReadings {
    joints: Vec<(&'static str, i32)>,
    degenerate: bool,
}

impl AngleReadings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw angle under `joint`. NaN is stored as 0 and marks the
    /// readings as degenerate.
    pub fn with(mut self, joint: &'static str, degrees: f32) -> Self {
        self.degenerate |= degrees.is_nan();
        self.joints.push((joint, round_degrees(degrees)));
        self
    }

    pub fn get(&self, joint: &str) -> Option<i32> {
        self.joints
            .iter()
            .find(|(name, _)| *name == joint)
            .map(|(_, degrees)| *degrees)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.joints.iter().copied()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.joints.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Whether any recorded angle was NaN before rounding
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

impl Serialize for AngleReadings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.joints.len()))?;
        for (joint, degrees) in &self.joints {
            map.serialize_entry(joint, degrees)?;
        }
        map.end()
    }
}

/// Classification result for a single frame
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormVerdict {
    /// Exercise label, empty for the stub verdict
    pub label: &'static str,
    /// Coaching text; empty only for the stub verdict
    pub feedback: String,
    pub is_correct: bool,
    /// 1 on frames judged correct, 0 otherwise. Not a running count.
    #[serde(rename = "count")]
    pub rep_signal: u8,
    pub angles: AngleReadings,
    /// Side the movement was judged on (lunge front leg, side plank)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    /// A reported angle was NaN (points missing from the frame)
    pub degenerate: bool,
}

impl FormVerdict {
    pub(crate) fn new(
        label: &'static str,
        feedback: String,
        is_correct: bool,
        angles: AngleReadings,
    ) -> Self {
        Self {
            label,
            feedback,
            is_correct,
            rep_signal: u8::from(is_correct),
            degenerate: angles.is_degenerate(),
            angles,
            side: None,
        }
    }

    pub(crate) fn on_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Zero-valued verdict for an unrecognized exercise
    pub fn stub() -> Self {
        Self {
            label: "",
            feedback: String::new(),
            is_correct: false,
            rep_signal: 0,
            angles: AngleReadings::new(),
            side: None,
            degenerate: false,
        }
    }

    /// Whether the host should speak the feedback aloud
    pub fn should_announce(&self) -> bool {
        !self.feedback.is_empty()
    }
}
