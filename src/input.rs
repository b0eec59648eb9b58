use std::time::Instant;

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::camera::FreeLookCamera;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    None,
    Exit,
}

/// Movement keys currently held down. Applied to the camera once per frame so
/// movement speed doesn't depend on key repeat rate.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Controls {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

impl Controls {
    pub fn process_input(&mut self, event: &KeyEvent) -> InputAction {
        match event.physical_key {
            PhysicalKey::Code(code) => self.set_key(code, event.state == ElementState::Pressed),
            PhysicalKey::Unidentified(_) => InputAction::None,
        }
    }

    pub fn set_key(&mut self, code: KeyCode, pressed: bool) -> InputAction {
        match code {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            KeyCode::ArrowUp => self.up = pressed,
            KeyCode::ArrowDown => self.down = pressed,
            KeyCode::Escape if pressed => return InputAction::Exit,
            _ => (),
        };
        InputAction::None
    }

    /// `speed` is already scaled by the frame time
    pub fn apply(&self, camera: &mut FreeLookCamera, speed: f32) {
        if self.forward {
            camera.move_forward(speed);
        }
        if self.backward {
            camera.move_backward(speed);
        }
        if self.left {
            camera.move_left(speed);
        }
        if self.right {
            camera.move_right(speed);
        }
        if self.up {
            camera.move_up(speed);
        }
        if self.down {
            camera.move_down(speed);
        }
    }
}

/// Seconds between consecutive frames.
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
