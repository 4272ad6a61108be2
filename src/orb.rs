//! The central pulsing orb body.
//!
//! [`OrbBody`] owns the ensemble's master clock outputs: accumulated time,
//! the derived pulse intensity, and two monotonically accumulating rotation
//! angles. The shading itself is a contract: [`OrbBody::shader_source`]
//! emits a WGSL material that realizes it, but any backend reproducing the
//! same time-domain behavior is conforming.

use crate::theme::Theme;
use crate::uniforms::OrbUniforms;
use crate::visuals::{BlendMode, DrawSettings, Facing};
use crate::REFERENCE_STEP;
use glam::{Quat, Vec3};

/// Yaw accumulated per reference frame.
const SPIN_Y: f32 = 0.005;
/// Pitch accumulated per reference frame.
const SPIN_X: f32 = 0.002;

/// The pulsing sphere at the center of the ensemble.
#[derive(Debug, Clone)]
pub struct OrbBody {
    radius: f32,
    time: f32,
    pulse_intensity: f32,
    rot_x: f32,
    rot_y: f32,
    primary: Vec3,
    secondary: Vec3,
}

impl OrbBody {
    /// Create an orb of the given radius, tinted by `theme`.
    pub fn new(radius: f32, theme: &Theme) -> Self {
        Self {
            radius,
            time: 0.0,
            pulse_intensity: 0.5,
            rot_x: 0.0,
            rot_y: 0.0,
            primary: theme.primary_vec3(),
            secondary: theme.secondary_vec3(),
        }
    }

    /// Advance the clock and rotation by `dt` seconds.
    ///
    /// The pulse is `0.5 + 0.5 * sin(2 * time)`, bounded in `[0, 1]` with
    /// period pi.
    pub fn advance(&mut self, dt: f32) {
        let step = dt / REFERENCE_STEP;
        self.time += dt;
        self.pulse_intensity = 0.5 + 0.5 * (2.0 * self.time).sin();
        self.rot_y += SPIN_Y * step;
        self.rot_x += SPIN_X * step;
    }

    /// Swap in a new theme's colors.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.primary = theme.primary_vec3();
        self.secondary = theme.secondary_vec3();
    }

    /// Sphere radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Accumulated animation time in seconds.
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Breathing scalar in `[0, 1]`.
    #[inline]
    pub fn pulse_intensity(&self) -> f32 {
        self.pulse_intensity
    }

    /// Accumulated rotation as a quaternion (pitch then yaw).
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.rot_y) * Quat::from_rotation_x(self.rot_x)
    }

    /// Raw rotation angles `(rot_x, rot_y)` in radians.
    #[inline]
    pub fn rotation_angles(&self) -> (f32, f32) {
        (self.rot_x, self.rot_y)
    }

    /// Current uniform block for the orb material.
    pub fn uniforms(&self) -> OrbUniforms {
        OrbUniforms::new(self.time, self.pulse_intensity, self.primary, self.secondary)
    }

    /// Rasterization flags for the orb material.
    pub fn draw_settings(&self) -> DrawSettings {
        DrawSettings {
            blend_mode: BlendMode::Alpha,
            depth_test: true,
            facing: Facing::Both,
        }
    }

    /// WGSL material for the orb.
    ///
    /// Vertex stage: organic wobble (two normal-aligned sine terms, amplitude
    /// <= 0.02) plus a pulse displacement of `pulse_intensity * 0.1` along
    /// the normal. Fragment stage: fresnel rim boost, animated energy
    /// pattern mixing primary into secondary, additive pulse tint.
    pub fn shader_source(&self) -> String {
        r#"struct Globals {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
}

struct OrbUniforms {
    time: f32,
    pulse_intensity: f32,
    _pad0: vec2<f32>,
    primary_color: vec3<f32>,
    _pad1: f32,
    secondary_color: vec3<f32>,
    _pad2: f32,
}

@group(0) @binding(0)
var<uniform> globals: Globals;

@group(0) @binding(1)
var<uniform> orb: OrbUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) normal: vec3<f32>,
    @location(1) local_pos: vec3<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var pos = in.position;

    // Subtle vertex displacement for an organic feel
    pos += in.normal * sin(orb.time * 2.0 + in.position.x * 5.0) * 0.02;
    pos += in.normal * sin(orb.time * 3.0 + in.position.y * 4.0) * 0.015;
    pos += in.normal * orb.pulse_intensity * 0.1;

    var out: VertexOutput;
    out.clip_position = globals.view_proj * globals.model * vec4<f32>(pos, 1.0);
    out.normal = normalize((globals.model * vec4<f32>(in.normal, 0.0)).xyz);
    out.local_pos = pos;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // Fresnel rim lighting
    let fresnel = pow(1.0 - dot(normalize(in.normal), vec3<f32>(0.0, 0.0, 1.0)), 2.0);

    // Animated energy patterns
    let pattern1 = sin(orb.time * 2.0 + in.local_pos.x * 10.0) * 0.5 + 0.5;
    let pattern2 = sin(orb.time * 1.5 + in.local_pos.y * 8.0) * 0.5 + 0.5;
    let energy = pattern1 * pattern2;

    var color = mix(orb.primary_color, orb.secondary_color, energy);
    color = mix(color, orb.primary_color * 2.0, fresnel);
    color += orb.primary_color * orb.pulse_intensity * 0.5;

    let alpha = 0.8 + fresnel * 0.2;
    return vec4<f32>(color, alpha);
}
"#
        .to_string()
    }
}
