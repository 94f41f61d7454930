// Host-side tests for rotation smoothing and pointer targeting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod motion {
    include!("../src/motion.rs");
}

use constants::*;
use glam::Vec2;
use motion::*;

const VIEWPORT: Vec2 = Vec2::new(1024.0, 768.0);

#[test]
fn pointer_at_center_targets_zero() {
    let mut pointer = PointerState::default();
    pointer.set(512.0, 384.0);
    let (pitch, yaw) = pointer_target(pointer, VIEWPORT);
    assert_eq!(pitch, 0.0);
    assert_eq!(yaw, 0.0);
}

#[test]
fn pointer_offset_scales_by_sensitivity() {
    let mut pointer = PointerState::default();
    pointer.set(512.0 + 100.0, 384.0 - 50.0);
    let (pitch, yaw) = pointer_target(pointer, VIEWPORT);
    assert!((yaw - 100.0 * POINTER_SENSITIVITY).abs() < 1e-6);
    assert!((pitch + 50.0 * POINTER_SENSITIVITY).abs() < 1e-6);
}

#[test]
fn pitch_eases_toward_target() {
    let mut rot = RotationState::default();
    let target = 0.5;

    let mut prev_gap = target;
    for _ in 0..100 {
        rot.step(target, 0.0);
        let gap = target - rot.pitch;
        assert!(gap >= 0.0, "pitch overshot its target");
        assert!(gap < prev_gap, "pitch stopped converging");
        prev_gap = gap;
    }
    assert!((target - rot.pitch).abs() < 1e-3);
}

#[test]
fn first_pitch_step_blends_a_tenth() {
    let mut rot = RotationState::default();
    rot.step(1.0, 0.0);
    assert!((rot.pitch - ROTATION_BLEND_ALPHA).abs() < 1e-6);
}

#[test]
fn yaw_keeps_turning_without_pointer_input() {
    let mut rot = RotationState::default();

    // With a centered (zero) target the yaw still advances every frame and
    // settles into a steady per-frame rate balancing auto-spin against the
    // damped pullback.
    let mut prev = rot.yaw;
    for _ in 0..200 {
        rot.step(0.0, 0.0);
        assert!(rot.yaw > prev, "auto-rotation stalled");
        prev = rot.yaw;
    }
    let equilibrium = AUTO_ROTATE_PER_FRAME / (ROTATION_BLEND_ALPHA * YAW_DAMPING);
    assert!((rot.yaw - equilibrium).abs() < 1e-3);
}

#[test]
fn pointer_perturbs_yaw_rate() {
    let mut steady = RotationState::default();
    let mut pushed = RotationState::default();
    for _ in 0..60 {
        steady.step(0.0, 0.0);
        pushed.step(0.0, 0.3);
    }
    assert!(pushed.yaw > steady.yaw);
}
