/// Tuning constants for the particle globe and page effects.
///
/// These express intended behavior (breakpoints, smoothing factors, draw
/// limits) and keep magic numbers out of the frame code.

// Viewport breakpoint separating the mobile and desktop configurations
// (logical CSS pixels; width == breakpoint selects desktop).
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// Particle counts per configuration
pub const PARTICLE_COUNT_MOBILE: usize = 90;
pub const PARTICLE_COUNT_DESKTOP: usize = 250;

// Globe radius = viewport width / divisor
pub const RADIUS_DIVISOR_MOBILE: f32 = 2.0;
pub const RADIUS_DIVISOR_DESKTOP: f32 = 2.2;

// Per-point radius jitter: stored radius = globe radius * [min, 1.0]
pub const RADIUS_JITTER_MIN: f32 = 0.85;

// Perspective projection
pub const FOCAL_LENGTH: f32 = 500.0;

// Surface wave: amplitude as a fraction of globe radius, and the phase
// rates applied to time and to each point's angular coordinates.
pub const WAVE_AMPLITUDE_FRAC: f32 = 0.05;
pub const WAVE_TIME_RATE: f32 = 2.0;
pub const WAVE_PHI_RATE: f32 = 3.0;
pub const WAVE_THETA_RATE: f32 = 2.0;

// Rotation: constant auto-spin per frame plus pointer influence.
pub const AUTO_ROTATE_PER_FRAME: f32 = 0.0015;
pub const POINTER_SENSITIVITY: f32 = 0.001; // rad per px of offset from center
pub const ROTATION_BLEND_ALPHA: f32 = 0.1; // new = old + (target - old) * α
pub const YAW_DAMPING: f32 = 0.5; // yaw is halved before the blend offset

// Point appearance
pub const ALPHA_FLOOR: f32 = 0.05;
pub const ALPHA_SCALE_OFFSET: f32 = 0.2; // alpha = max(floor, scale - offset)
pub const POINT_RADIUS_MIN: f32 = 0.5;
pub const POINT_RADIUS_SCALE: f32 = 1.8;
pub const GLOW_SCALE_THRESHOLD: f32 = 0.9; // re-fill with glow above this
pub const GLOW_BLUR_SCALE: f32 = 12.0;

// Connection lines
pub const CONNECTION_DISTANCE_PX: f32 = 140.0;
pub const MAX_CONNECTIONS_PER_ORIGIN: usize = 5;
pub const LINE_WIDTH: f32 = 0.5;
pub const LINE_OPACITY_SCALE: f32 = 0.4;
// Points behind this z fraction of the globe radius never originate lines.
pub const BACKFACE_ORIGIN_CUTOFF_FRAC: f32 = -0.3;

// Palette (RGB) per theme
pub const DARK_BASE_COLOR: [u8; 3] = [0, 212, 255];
pub const LIGHT_BASE_COLOR: [u8; 3] = [37, 99, 235];

// Canvas container opacity per theme
pub const CANVAS_OPACITY_DARK: f32 = 0.8;
pub const CANVAS_OPACITY_LIGHT: f32 = 0.6;

// Typewriter timing (milliseconds)
pub const TYPE_SPEED_MS: u32 = 50;
pub const TYPE_HOLD_MS: u32 = 2000;
pub const TYPE_RESUME_MS: u32 = 500; // pause after a string is fully deleted

// Fade-in reveal
pub const FADE_THRESHOLD: f64 = 0.1;

// Loading overlay: dismissed after a fixed delay, with the indicator dots
// cycling until then (milliseconds).
pub const LOADING_DISMISS_MS: u32 = 1500;
pub const LOADING_DOTS_INTERVAL_MS: u32 = 300;

// Scroll-to-top button appears past this scroll depth (logical pixels).
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;
