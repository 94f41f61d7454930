use crate::constants::*;
use glam::Vec2;

/// Last known pointer position in viewport coordinates. Written by the
/// pointer-move listener, read once at the top of each frame; a one-event
/// stale value is harmless for a background effect.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

/// Target rotation from the pointer's offset to the viewport center.
/// Vertical offset drives pitch, horizontal drives yaw.
#[inline]
pub fn pointer_target(pointer: PointerState, viewport: Vec2) -> (f32, f32) {
    let target_pitch = (pointer.y - viewport.y * 0.5) * POINTER_SENSITIVITY;
    let target_yaw = (pointer.x - viewport.x * 0.5) * POINTER_SENSITIVITY;
    (target_pitch, target_yaw)
}

/// Running rotation angles, the only state that persists across frames.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub pitch: f32,
    pub yaw: f32,
}

impl RotationState {
    /// Advances one frame: pitch eases toward its target by a fixed blend
    /// fraction, yaw advances by the auto-spin increment plus a damped
    /// pointer term so the globe keeps turning with no input and pointer
    /// movement perturbs the rate.
    pub fn step(&mut self, target_pitch: f32, target_yaw: f32) {
        self.pitch += (target_pitch - self.pitch) * ROTATION_BLEND_ALPHA;
        self.yaw +=
            AUTO_ROTATE_PER_FRAME + (target_yaw - self.yaw * YAW_DAMPING) * ROTATION_BLEND_ALPHA;
    }
}
