// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(MOBILE_BREAKPOINT_PX > 0.0);
    assert!(PARTICLE_COUNT_MOBILE > 0);
    assert!(RADIUS_DIVISOR_MOBILE >= 2.0);
    assert!(RADIUS_DIVISOR_DESKTOP >= 2.0);
    assert!(FOCAL_LENGTH > 0.0);

    // Blend and jitter fractions must stay inside the unit interval.
    assert!(ROTATION_BLEND_ALPHA > 0.0 && ROTATION_BLEND_ALPHA <= 1.0);
    assert!(YAW_DAMPING > 0.0 && YAW_DAMPING <= 1.0);
    assert!(RADIUS_JITTER_MIN > 0.0 && RADIUS_JITTER_MIN < 1.0);
    assert!(WAVE_AMPLITUDE_FRAC > 0.0 && WAVE_AMPLITUDE_FRAC < 1.0);
    assert!(ALPHA_FLOOR > 0.0 && ALPHA_FLOOR < 1.0);
    assert!(LINE_OPACITY_SCALE > 0.0 && LINE_OPACITY_SCALE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Narrow viewports get fewer particles.
    assert!(PARTICLE_COUNT_MOBILE < PARTICLE_COUNT_DESKTOP);

    // The alpha floor must sit below any front-facing alpha.
    assert!(ALPHA_FLOOR < 1.0 - ALPHA_SCALE_OFFSET);

    // The backface cutoff keeps some of the globe eligible as line origins.
    assert!(BACKFACE_ORIGIN_CUTOFF_FRAC > -1.0 && BACKFACE_ORIGIN_CUTOFF_FRAC < 0.0);

    // Glow only triggers for near-camera points; max scale at depth
    // radius*(1-jitter) away is still finite and above the threshold.
    assert!(GLOW_SCALE_THRESHOLD > 0.0 && GLOW_SCALE_THRESHOLD < 1.1);
    assert!(POINT_RADIUS_SCALE > POINT_RADIUS_MIN);

    // Deleting at half speed requires an even, nonzero base cadence.
    assert!(TYPE_SPEED_MS >= 2);
    assert!(TYPE_HOLD_MS > TYPE_SPEED_MS);
    assert!(TYPE_RESUME_MS > TYPE_SPEED_MS);

    assert!(CANVAS_OPACITY_DARK > CANVAS_OPACITY_LIGHT);
    assert!((0.0..=1.0).contains(&FADE_THRESHOLD));

    // The loading overlay must outlive at least one dot cycle, and the
    // scroll-top button should not appear above the fold.
    assert!(LOADING_DOTS_INTERVAL_MS > 0);
    assert!(LOADING_DISMISS_MS > LOADING_DOTS_INTERVAL_MS);
    assert!(SCROLL_TOP_THRESHOLD_PX > 0.0);
}

#[test]
fn auto_rotation_is_slow_and_positive() {
    assert!(AUTO_ROTATE_PER_FRAME > 0.0);
    // A full revolution should take on the order of a minute at 60Hz, not
    // seconds: keep the spin ambient.
    let frames_per_rev = std::f32::consts::TAU / AUTO_ROTATE_PER_FRAME;
    assert!(frames_per_rev > 600.0);
}
