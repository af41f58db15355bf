//! Per-exercise angle targets
//!
//! Immutable records built once; `FormTargets::STANDARD` holds the stock
//! coaching values. The host may override any subset through JSON, missing
//! fields keep their standard value.

use serde::{Deserialize, Serialize};

use crate::error::FormResult;
use crate::geometry::AngleTarget;

/// Left/right difference above which the symmetry remark is added
pub const ASYMMETRY_LIMIT: f32 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SquatTargets {
    /// Hip-knee-ankle angle, both legs
    pub knee: AngleTarget,
    pub asymmetry_limit: f32,
}

impl SquatTargets {
    pub const STANDARD: Self = Self {
        knee: AngleTarget::new(90.0, 15.0),
        asymmetry_limit: ASYMMETRY_LIMIT,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PushUpTargets {
    /// Shoulder-elbow-wrist angle, both arms
    pub elbow: AngleTarget,
    /// Nose-hip-hip alignment
    pub body: AngleTarget,
    pub asymmetry_limit: f32,
}

impl PushUpTargets {
    pub const STANDARD: Self = Self {
        elbow: AngleTarget::new(90.0, 15.0),
        body: AngleTarget::new(180.0, 10.0),
        asymmetry_limit: ASYMMETRY_LIMIT,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LungeTargets {
    pub front_knee: AngleTarget,
    /// Straight back leg window
    pub back_knee: AngleTarget,
    /// A back knee bent below this also counts as acceptable
    pub back_knee_bent_below: f32,
    /// Back knee under this gets the "straighter" remark
    pub back_knee_straighten_below: f32,
    /// Nose-shoulder-shoulder lean
    pub torso: AngleTarget,
}

impl LungeTargets {
    pub const STANDARD: Self = Self {
        front_knee: AngleTarget::new(90.0, 15.0),
        back_knee: AngleTarget::new(170.0, 20.0),
        back_knee_bent_below: 100.0,
        back_knee_straighten_below: 160.0,
        torso: AngleTarget::new(180.0, 10.0),
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidePlankTargets {
    /// Shoulder-hip-ankle line on the working side
    pub body: AngleTarget,
    /// Shoulder-hip-opposite hip
    pub hip: AngleTarget,
}

impl SidePlankTargets {
    pub const STANDARD: Self = Self {
        body: AngleTarget::new(180.0, 10.0),
        hip: AngleTarget::new(180.0, 15.0),
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LateralRaiseTargets {
    /// Shoulder-elbow-wrist bend
    pub arm: AngleTarget,
    /// Hip-shoulder-wrist elevation
    pub elevation: AngleTarget,
    pub torso: AngleTarget,
    pub asymmetry_limit: f32,
}

impl LateralRaiseTargets {
    pub const STANDARD: Self = Self {
        arm: AngleTarget::new(90.0, 15.0),
        elevation: AngleTarget::new(80.0, 10.0),
        torso: AngleTarget::new(180.0, 5.0),
        asymmetry_limit: ASYMMETRY_LIMIT,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SitUpTargets {
    /// Shoulder-hip-knee angle at the top
    pub up: AngleTarget,
    /// Shoulder-hip-knee angle at the bottom
    pub down: AngleTarget,
    /// Average body angle under this is the up phase
    pub up_phase_below: f32,
    /// Twist check (nose-shoulder-shoulder)
    pub torso: AngleTarget,
    /// Hip extension required at the bottom
    pub hip: AngleTarget,
    pub asymmetry_limit: f32,
}

impl SitUpTargets {
    pub const STANDARD: Self = Self {
        up: AngleTarget::new(60.0, 15.0),
        down: AngleTarget::new(150.0, 15.0),
        up_phase_below: 100.0,
        torso: AngleTarget::new(180.0, 5.0),
        hip: AngleTarget::new(180.0, 10.0),
        asymmetry_limit: ASYMMETRY_LIMIT,
    };
}

macro_rules! standard_default {
    ($($ty:ty),* $(,)?) => {
        $(impl Default for $ty {
            fn default() -> Self {
                Self::STANDARD
            }
        })*
    };
}

standard_default!(
    SquatTargets,
    PushUpTargets,
    LungeTargets,
    SidePlankTargets,
    LateralRaiseTargets,
    SitUpTargets,
    FormTargets,
);

/// Targets for every supported exercise
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormTargets {
    pub squat: SquatTargets,
    pub push_up: PushUpTargets,
    pub lunge: LungeTargets,
    pub side_plank: SidePlankTargets,
    pub lateral_raise: LateralRaiseTargets,
    pub sit_up: SitUpTargets,
}

impl FormTargets {
    pub const STANDARD: Self = Self {
        squat: SquatTargets::STANDARD,
        push_up: PushUpTargets::STANDARD,
        lunge: LungeTargets::STANDARD,
        side_plank: SidePlankTargets::STANDARD,
        lateral_raise: LateralRaiseTargets::STANDARD,
        sit_up: SitUpTargets::STANDARD,
    };

    /// Parse an override document, e.g. `{"squat":{"knee":{"degrees":95,"tolerance":10}}}`
    pub fn from_json(json: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(FormTargets::default(), FormTargets::STANDARD);
        assert_eq!(FormTargets::STANDARD.squat.knee, AngleTarget::new(90.0, 15.0));
        assert_eq!(FormTargets::STANDARD.sit_up.down.degrees, 150.0);
    }

    #[test]
    fn test_partial_override_keeps_other_values() {
        let targets =
            FormTargets::from_json(r#"{"squat":{"knee":{"degrees":95,"tolerance":10}}}"#).unwrap();
        assert_eq!(targets.squat.knee, AngleTarget::new(95.0, 10.0));
        assert_eq!(targets.squat.asymmetry_limit, ASYMMETRY_LIMIT);
        assert_eq!(targets.lunge, LungeTargets::STANDARD);
    }

    #[test]
    fn test_nested_camel_case_fields() {
        let targets = FormTargets::from_json(r#"{"sitUp":{"upPhaseBelow":110}}"#).unwrap();
        assert_eq!(targets.sit_up.up_phase_below, 110.0);
        assert_eq!(targets.sit_up.up, SitUpTargets::STANDARD.up);
    }

    #[test]
    fn test_invalid_json() {
        let err = FormTargets::from_json(r#"{"squat": 3}"#).unwrap_err();
        assert!(matches!(err, FormError::InvalidTargets(_)));
    }
}
