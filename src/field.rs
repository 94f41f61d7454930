use crate::constants::*;
use crate::theme::Theme;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// Static configuration of the particle globe, derived once from the
/// viewport and theme at (re)initialization. Resize does not rebuild it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    pub particle_count: usize,
    pub radius: f32,
    pub color: [u8; 3],
}

impl FieldConfig {
    /// `width`/`height` are logical (CSS) pixels. Width at the breakpoint
    /// selects the desktop configuration.
    pub fn for_viewport(width: f32, height: f32, theme: Theme) -> Self {
        let mobile = width < MOBILE_BREAKPOINT_PX;
        let particle_count = if mobile {
            PARTICLE_COUNT_MOBILE
        } else {
            PARTICLE_COUNT_DESKTOP
        };
        let divisor = if mobile {
            RADIUS_DIVISOR_MOBILE
        } else {
            RADIUS_DIVISOR_DESKTOP
        };
        FieldConfig {
            width,
            height,
            particle_count,
            radius: width / divisor,
            color: theme.base_color(),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// A particle on the globe surface. Angles and radius are fixed at
/// creation; per-frame motion comes entirely from the wave and rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Azimuth, uniform in [0, 2π).
    pub theta: f32,
    /// Polar angle in [0, π], with cos(phi) uniform in [-1, 1] so points
    /// cover the sphere surface evenly instead of clustering at the poles.
    pub phi: f32,
    /// Stored radius: globe radius jittered into [0.85, 1.0] of itself.
    pub r: f32,
}

pub fn generate_points(rng: &mut impl Rng, config: &FieldConfig) -> Vec<Point> {
    (0..config.particle_count)
        .map(|_| {
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let phi = (rng.gen::<f32>() * 2.0 - 1.0).acos();
            let jitter = RADIUS_JITTER_MIN + rng.gen::<f32>() * (1.0 - RADIUS_JITTER_MIN);
            Point {
                theta,
                phi,
                r: config.radius * jitter,
            }
        })
        .collect()
}

/// Screen-space projection of one point for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub pos: Vec2,
    /// Depth after rotation; the draw order sorts on this.
    pub z: f32,
    pub scale: f32,
    pub alpha: f32,
}

/// Radial wave displacement at time `t` seconds, phased by the point's
/// angular coordinates so the surface undulates rather than breathes.
#[inline]
pub fn wave_offset(t: f32, point: &Point, globe_radius: f32) -> f32 {
    (t * WAVE_TIME_RATE + point.phi * WAVE_PHI_RATE + point.theta * WAVE_THETA_RATE).sin()
        * (globe_radius * WAVE_AMPLITUDE_FRAC)
}

/// Projects every point for the current frame: wave-displaced radius,
/// spherical to cartesian, yaw rotation about Y then pitch rotation about X,
/// perspective division, and a depth-derived alpha with a visibility floor.
///
/// The result is sorted by descending depth so nearer points (and the lines
/// that originate from them) draw on top of farther ones.
pub fn project(
    points: &[Point],
    pitch: f32,
    yaw: f32,
    t: f32,
    config: &FieldConfig,
) -> Vec<Projected> {
    let center = config.center();
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();

    let mut projected: Vec<Projected> = points
        .iter()
        .map(|p| {
            let r = p.r + wave_offset(t, p, config.radius);
            let (sin_phi, cos_phi) = p.phi.sin_cos();
            let (sin_theta, cos_theta) = p.theta.sin_cos();
            let px = r * sin_phi * cos_theta;
            let py = r * sin_phi * sin_theta;
            let pz = r * cos_phi;

            // Yaw about the vertical axis.
            let x = px * cos_yaw - pz * sin_yaw;
            let z = pz * cos_yaw + px * sin_yaw;
            // Pitch about the horizontal axis.
            let y = py * cos_pitch - z * sin_pitch;
            let z = z * cos_pitch + py * sin_pitch;

            // Depth is structurally positive: |z| <= r <= globe radius and
            // the focal length dominates.
            let depth = z + config.radius + FOCAL_LENGTH;
            let scale = FOCAL_LENGTH / depth;

            Projected {
                pos: Vec2::new(x, y) * scale + center,
                z,
                scale,
                alpha: (scale - ALPHA_SCALE_OFFSET).max(ALPHA_FLOOR),
            }
        })
        .collect();

    // Farthest first; ties keep generation order.
    projected.sort_by(|a, b| b.z.total_cmp(&a.z));
    projected
}

/// One connection line between two projected points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub opacity: f32,
}

/// Selects the connection lines for one frame from the depth-sorted
/// projection. Each origin connects to at most
/// [`MAX_CONNECTIONS_PER_ORIGIN`] later points within a reach that shrinks
/// with the origin's perspective scale; points deep on the back of the globe
/// never originate lines (they may still terminate one).
pub fn connections(projected: &[Projected], config: &FieldConfig) -> Vec<Segment> {
    let origin_cutoff = BACKFACE_ORIGIN_CUTOFF_FRAC * config.radius;
    let mut segments = Vec::new();

    for (i, p1) in projected.iter().enumerate() {
        if p1.z < origin_cutoff {
            continue;
        }
        let reach = CONNECTION_DISTANCE_PX * p1.scale;
        let mut local: SmallVec<[Segment; MAX_CONNECTIONS_PER_ORIGIN]> = SmallVec::new();

        for p2 in &projected[i + 1..] {
            if local.len() == MAX_CONNECTIONS_PER_ORIGIN {
                break;
            }
            let dist = p1.pos.distance(p2.pos);
            if dist < reach {
                local.push(Segment {
                    a: p1.pos,
                    b: p2.pos,
                    opacity: (1.0 - dist / reach) * p1.alpha.min(p2.alpha) * LINE_OPACITY_SCALE,
                });
            }
        }
        segments.extend(local);
    }
    segments
}
