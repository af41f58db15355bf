//! Synthetic poses for unit tests

use super::frame::PoseFrame;
use super::landmarks::*;

/// Builds a frame from a neutral standing pose, moving single points.
pub struct PoseBuilder {
    points: Vec<Landmark>,
}

impl PoseBuilder {
    /// Upright subject facing the camera, arms hanging, legs straight
    pub fn standing() -> Self {
        let mut points = vec![Landmark::new(0.5, 0.1); LANDMARK_COUNT];
        let mut set = |idx: usize, x: f32, y: f32| points[idx] = Landmark::new(x, y);

        set(NOSE, 0.5, 0.1);
        set(LEFT_EYE_INNER, 0.51, 0.09);
        set(LEFT_EYE, 0.52, 0.09);
        set(LEFT_EYE_OUTER, 0.53, 0.09);
        set(RIGHT_EYE_INNER, 0.49, 0.09);
        set(RIGHT_EYE, 0.48, 0.09);
        set(RIGHT_EYE_OUTER, 0.47, 0.09);
        set(LEFT_EAR, 0.55, 0.1);
        set(RIGHT_EAR, 0.45, 0.1);
        set(MOUTH_LEFT, 0.52, 0.13);
        set(MOUTH_RIGHT, 0.48, 0.13);
        set(LEFT_SHOULDER, 0.6, 0.3);
        set(RIGHT_SHOULDER, 0.4, 0.3);
        set(LEFT_ELBOW, 0.62, 0.45);
        set(RIGHT_ELBOW, 0.38, 0.45);
        set(LEFT_WRIST, 0.63, 0.6);
        set(RIGHT_WRIST, 0.37, 0.6);
        set(LEFT_PINKY, 0.64, 0.63);
        set(RIGHT_PINKY, 0.36, 0.63);
        set(LEFT_INDEX, 0.63, 0.64);
        set(RIGHT_INDEX, 0.37, 0.64);
        set(LEFT_THUMB, 0.62, 0.62);
        set(RIGHT_THUMB, 0.38, 0.62);
        set(LEFT_HIP, 0.56, 0.6);
        set(RIGHT_HIP, 0.44, 0.6);
        set(LEFT_KNEE, 0.56, 0.78);
        set(RIGHT_KNEE, 0.44, 0.78);
        set(LEFT_ANKLE, 0.56, 0.95);
        set(RIGHT_ANKLE, 0.44, 0.95);
        set(LEFT_HEEL, 0.55, 0.97);
        set(RIGHT_HEEL, 0.45, 0.97);
        set(LEFT_FOOT_INDEX, 0.58, 0.98);
        set(RIGHT_FOOT_INDEX, 0.42, 0.98);

        Self { points }
    }

    /// Place a point at absolute coordinates
    pub fn at(mut self, idx: usize, x: f32, y: f32) -> Self {
        self.points[idx] = Landmark::new(x, y);
        self
    }

    /// Place `idx` at `length` from `origin` along `heading_deg`
    /// (0° = +x, 90° = +y which is down the image)
    pub fn polar(mut self, idx: usize, origin: usize, heading_deg: f32, length: f32) -> Self {
        let o = self.points[origin];
        let h = heading_deg.to_radians();
        self.points[idx] = Landmark::new(o.x + length * h.cos(), o.y + length * h.sin());
        self
    }

    /// Move `c` so the joint a-b-c has the given angle at `b`, keeping
    /// |bc| = |ba|. Negative angles sweep the other way round.
    pub fn bend(mut self, a: usize, b: usize, c: usize, degrees: f32) -> Self {
        let pa = self.points[a];
        let pb = self.points[b];
        let (vx, vy) = (pa.x - pb.x, pa.y - pb.y);
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.points[c] = Landmark::new(pb.x + vx * cos - vy * sin, pb.y + vx * sin + vy * cos);
        self
    }

    /// Drop a point as if the model failed to detect it
    pub fn missing(mut self, idx: usize) -> Self {
        self.points[idx] = Landmark::MISSING;
        self
    }

    pub fn build(self) -> PoseFrame {
        PoseFrame::new(self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::angle_between;

    #[test]
    fn test_bend_produces_requested_angle() {
        for degrees in [30.0_f32, 60.0, 90.0, -90.0, 135.0] {
            let frame = PoseBuilder::standing()
                .bend(LEFT_HIP, LEFT_KNEE, LEFT_ANKLE, degrees)
                .build();
            let angle = angle_between(
                frame.point(LEFT_HIP),
                frame.point(LEFT_KNEE),
                frame.point(LEFT_ANKLE),
            );
            assert!((angle - degrees.abs()).abs() < 0.01, "{} vs {}", angle, degrees);
        }
    }

    #[test]
    fn test_standing_legs_are_straight() {
        let frame = PoseBuilder::standing().build();
        let angle = angle_between(
            frame.point(RIGHT_HIP),
            frame.point(RIGHT_KNEE),
            frame.point(RIGHT_ANKLE),
        );
        assert!((angle - 180.0).abs() < 0.01);
    }
}
