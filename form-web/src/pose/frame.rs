//! One frame of pose landmarks
//!
//! Frames arrive fresh from the pose model every tick and are never kept
//! past a single classification.

use super::landmarks::{Landmark, LANDMARK_COUNT};
use crate::error::{FormError, FormResult};

/// Values per landmark in a flat array: x, y, z
pub const VALUES_PER_LANDMARK: usize = 3;

/// Values per landmark in a flat array: x, y, z, visibility
pub const VALUES_PER_LANDMARK_WITH_VISIBILITY: usize = 4;

/// Landmarks of a single frame, ordered by MediaPipe index
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoseFrame {
    landmarks: Vec<Landmark>,
}

impl PoseFrame {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Decode a flat `Float32Array` from JavaScript.
    ///
    /// Accepts 99 values (33 × x, y, z) or 132 values (33 × x, y, z,
    /// visibility). Undetected points are expected as NaN and are kept as-is.
    pub fn from_flat(data: &[f32]) -> FormResult<Self> {
        let stride = match data.len() {
            n if n == LANDMARK_COUNT * VALUES_PER_LANDMARK => VALUES_PER_LANDMARK,
            n if n == LANDMARK_COUNT * VALUES_PER_LANDMARK_WITH_VISIBILITY => {
                VALUES_PER_LANDMARK_WITH_VISIBILITY
            }
            actual => return Err(FormError::InvalidFrameLength { actual }),
        };

        let landmarks = data
            .chunks_exact(stride)
            .map(|v| Landmark {
                x: v[0],
                y: v[1],
                z: v[2],
                visibility: v.get(3).copied(),
            })
            .collect();

        Ok(Self { landmarks })
    }

    /// Landmark at `index`, or `Landmark::MISSING` when the frame is short.
    /// Never panics: gaps flow into the angle math as NaN.
    pub fn point(&self, index: usize) -> Landmark {
        self.landmarks
            .get(index)
            .copied()
            .unwrap_or(Landmark::MISSING)
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// True when all 33 points are present and none is NaN
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() >= LANDMARK_COUNT
            && self.landmarks[..LANDMARK_COUNT]
                .iter()
                .all(|lm| !lm.is_missing())
    }
}

impl From<Vec<Landmark>> for PoseFrame {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self::new(landmarks)
    }
}

impl FromIterator<Landmark> for PoseFrame {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
