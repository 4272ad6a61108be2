//! Concentric rotating energy rings.
//!
//! Each ring is a thin annulus with two independent rotation axes: an
//! in-plane rotation derived from elapsed time (never stored) and an
//! out-of-plane spin accumulated per advance. Tilt is randomized once at
//! construction and immutable afterwards.

use crate::theme::Theme;
use crate::uniforms::RingUniforms;
use crate::visuals::{BlendMode, DrawSettings, Facing};
use crate::REFERENCE_STEP;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI};

/// Radius of the innermost ring.
const BASE_RADIUS: f32 = 2.5;
/// Radius step between consecutive rings.
const RADIUS_STEP: f32 = 0.8;
/// Annulus half-width.
const HALF_WIDTH: f32 = 0.05;
/// Opacity of the innermost ring.
const BASE_OPACITY: f32 = 0.6;
/// Opacity falloff per ring.
const OPACITY_STEP: f32 = 0.15;

/// One rotating annulus.
#[derive(Debug, Clone)]
pub struct RingElement {
    base_radius: f32,
    half_width: f32,
    opacity: f32,
    tilt_x: f32,
    tilt_y: f32,
    spin: f32,
}

impl RingElement {
    /// Annulus center-line radius.
    #[inline]
    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    /// Annulus half-width.
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    /// Base opacity (already clamped to `>= 0`).
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Immutable tilt angles `(x, y)` in radians.
    #[inline]
    pub fn tilt(&self) -> (f32, f32) {
        (self.tilt_x, self.tilt_y)
    }

    /// Accumulated out-of-plane spin in radians.
    #[inline]
    pub fn spin(&self) -> f32 {
        self.spin
    }
}

/// The set of concentric rings around the orb.
#[derive(Debug, Clone)]
pub struct RingEnsemble {
    rings: Vec<RingElement>,
    time: f32,
    speed: f32,
    color: Vec3,
}

impl RingEnsemble {
    /// Build `ring_count` rings tinted by `theme`.
    ///
    /// Ring `i` sits at radius `2.5 + 0.8*i` with opacity
    /// `max(0.6 - 0.15*i, 0)`. Tilt jitters once within +/-0.25 radians of
    /// flat; yaw is uniform in `[0, pi)`.
    pub fn new<R: Rng>(ring_count: u32, theme: &Theme, rng: &mut R) -> Self {
        let rings = (0..ring_count)
            .map(|i| RingElement {
                base_radius: BASE_RADIUS + RADIUS_STEP * i as f32,
                half_width: HALF_WIDTH,
                opacity: (BASE_OPACITY - OPACITY_STEP * i as f32).max(0.0),
                tilt_x: FRAC_PI_2 + rng.gen_range(-0.25..0.25),
                tilt_y: rng.gen::<f32>() * PI,
                spin: 0.0,
            })
            .collect();
        Self {
            rings,
            time: 0.0,
            speed: theme.ring_speed,
            color: theme.primary_vec3(),
        }
    }

    /// Advance ring phases by `dt` seconds.
    ///
    /// Ring `i` accumulates out-of-plane spin at `0.01 * (i + 1)` per
    /// reference frame; the in-plane angle is derived from time on demand.
    pub fn advance(&mut self, dt: f32) {
        let step = dt / REFERENCE_STEP;
        self.time += dt;
        for (i, ring) in self.rings.iter_mut().enumerate() {
            ring.spin += 0.01 * (i + 1) as f32 * step;
        }
    }

    /// Swap in a new theme's tint and speed.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.color = theme.primary_vec3();
        self.speed = theme.ring_speed;
    }

    /// Number of rings.
    #[inline]
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Whether the ensemble is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// The ring elements.
    #[inline]
    pub fn rings(&self) -> &[RingElement] {
        &self.rings
    }

    /// The rings' animation clock (elapsed time scaled by the theme's ring
    /// speed).
    #[inline]
    pub fn clock(&self) -> f32 {
        self.time * self.speed
    }

    /// In-plane rotation angle of ring `i` at the current time:
    /// `clock * (0.5 + 0.2 * i)`.
    pub fn in_plane_angle(&self, index: usize) -> f32 {
        self.clock() * (0.5 + 0.2 * index as f32)
    }

    /// Model transform for ring `i`: the immutable tilt composed with the
    /// accumulated out-of-plane spin. In-plane rotation happens in the
    /// vertex stage (see [`RingEnsemble::shader_source`]).
    pub fn transform(&self, index: usize) -> Mat4 {
        let ring = &self.rings[index];
        Mat4::from_quat(Quat::from_euler(
            EulerRot::XYZ,
            ring.tilt_x,
            ring.tilt_y,
            ring.spin,
        ))
    }

    /// Uniform block for ring `i`.
    pub fn uniforms(&self, index: usize) -> RingUniforms {
        RingUniforms::new(self.color, self.rings[index].opacity, self.clock())
    }

    /// Rasterization flags shared by all rings.
    pub fn draw_settings(&self) -> DrawSettings {
        DrawSettings {
            blend_mode: BlendMode::Additive,
            depth_test: true,
            facing: Facing::Both,
        }
    }

    /// WGSL material for ring `index`, with that ring's in-plane rate baked
    /// in. Vertex stage spins the annulus in its own plane; fragment stage
    /// runs an animated banding pattern over the theme tint.
    pub fn shader_source(&self, index: usize) -> String {
        let rate = 0.5 + 0.2 * index as f32;
        format!(
            r#"struct Globals {{
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
}}

struct RingUniforms {{
    color: vec3<f32>,
    opacity: f32,
    time: f32,
    _pad0: f32,
    _pad1: f32,
    _pad2: f32,
}}

@group(0) @binding(0)
var<uniform> globals: Globals;

@group(0) @binding(1)
var<uniform> ring: RingUniforms;

struct VertexOutput {{
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
}}

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
) -> VertexOutput {{
    // Spin the annulus in its own plane
    let angle = ring.time * {rate:.3};
    var pos = position;
    pos.x = position.x * cos(angle) - position.z * sin(angle);
    pos.z = position.x * sin(angle) + position.z * cos(angle);

    var out: VertexOutput;
    out.clip_position = globals.view_proj * globals.model * vec4<f32>(pos, 1.0);
    out.uv = uv;
    return out;
}}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {{
    let intensity = sin(ring.time * 2.0 + in.uv.x * 10.0) * 0.3 + 0.7;
    return vec4<f32>(ring.color * intensity, ring.opacity);
}}
"#
        )
    }
}
