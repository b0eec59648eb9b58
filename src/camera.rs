use glam::{Mat4, Vec2, Vec3};

use crate::conversion::EulerAngles;

/// degrees of rotation per pixel of cursor travel
pub const SENSITIVITY: f32 = 0.1;

/// pitch is kept just short of straight up/down so the look-at basis never degenerates
pub const PITCH_LIMIT: f32 = 89.0;

/// Free-fly camera: the position moves along the look direction, the look
/// direction follows the cursor.
#[derive(Clone, Debug)]
pub struct FreeLookCamera {
    eye: Vec3,
    target_direction: Vec3,
    up: Vec3,
    angles: EulerAngles,
    last_cursor: Vec2,
    first_look: bool,
}

impl FreeLookCamera {
    /// `width` and `height` are the initial viewport size, only used to seed the
    /// cursor baseline.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(width: u32, height: u32) -> Self {
        let angles = EulerAngles::new(-90.0, 0.0);
        Self {
            eye: Vec3::ZERO,
            target_direction: Vec3::from(&angles),
            up: Vec3::Y,
            angles,
            last_cursor: Vec2::new((width / 2) as f32, (height / 2) as f32),
            first_look: true,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn target_direction(&self) -> Vec3 {
        self.target_direction
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.angles.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.angles.pitch
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.eye + self.target_direction, self.up)
    }

    pub fn move_forward(&mut self, speed: f32) {
        self.eye += speed * self.target_direction;
    }

    pub fn move_backward(&mut self, speed: f32) {
        self.eye -= speed * self.target_direction;
    }

    /// Strafing is not part of this camera; left and right leave the eye where it is.
    pub fn move_left(&mut self, _speed: f32) {}

    /// See [`FreeLookCamera::move_left`].
    pub fn move_right(&mut self, _speed: f32) {}

    pub fn move_up(&mut self, speed: f32) {
        self.eye += speed * self.up;
    }

    pub fn move_down(&mut self, speed: f32) {
        self.eye -= speed * self.up;
    }

    /// Turns the camera by the cursor travel since the last call. The first call
    /// only records the position, so capturing the cursor doesn't jerk the view.
    pub fn look_update(&mut self, cursor_x: f32, cursor_y: f32) {
        let cursor = Vec2::new(cursor_x, cursor_y);
        if self.first_look {
            self.last_cursor = cursor;
            self.first_look = false;
        }

        // y is inverted: screen coordinates grow downwards
        let x_offset = (cursor.x - self.last_cursor.x) * SENSITIVITY;
        let y_offset = (self.last_cursor.y - cursor.y) * SENSITIVITY;
        self.last_cursor = cursor;

        self.angles.sum_with(x_offset, y_offset);
        self.angles.clamp_pitch(PITCH_LIMIT);
        self.target_direction = Vec3::from(&self.angles);
    }
}
