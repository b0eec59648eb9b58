use glam::Vec3;

/// Yaw and pitch in degrees.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct EulerAngles {
    pub yaw: f32,
    pub pitch: f32,
}

impl EulerAngles {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    pub fn sum_with(&mut self, yaw: f32, pitch: f32) {
        self.yaw += yaw;
        self.pitch += pitch;
    }

    /// keeps pitch inside `[-limit, limit]`, yaw is left unbounded
    pub fn clamp_pitch(&mut self, limit: f32) {
        self.pitch = self.pitch.clamp(-limit, limit);
    }
}

/// Unit direction for the given angles. Yaw is measured from +X towards +Z,
/// so a yaw of -90 degrees looks down -Z.
impl From<&EulerAngles> for Vec3 {
    fn from(angles: &EulerAngles) -> Self {
        let (yaw, pitch) = (angles.yaw.to_radians(), angles.pitch.to_radians());
        Vec3::new(
            pitch.cos() * yaw.cos(),
            pitch.sin(),
            pitch.cos() * yaw.sin(),
        )
        .normalize()
    }
}
