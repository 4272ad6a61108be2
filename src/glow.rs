//! The ambient glow shell.
//!
//! A large inverted shell (twice the orb radius) whose rim-light intensity
//! breathes with the shared `sin(2t)` pulse. Purely parametric: the only
//! per-frame state is the accumulated time.

use crate::theme::Theme;
use crate::uniforms::GlowUniforms;
use crate::visuals::{BlendMode, DrawSettings, Facing};
use glam::Vec3;

/// Soft rim-light shell around the whole ensemble.
#[derive(Debug, Clone)]
pub struct GlowShell {
    radius: f32,
    time: f32,
    color: Vec3,
    intensity: f32,
}

impl GlowShell {
    /// Create the shell for an orb of `orb_radius`; the shell itself is
    /// twice that size.
    pub fn new(orb_radius: f32, theme: &Theme) -> Self {
        Self {
            radius: orb_radius * 2.0,
            time: 0.0,
            color: theme.primary_vec3(),
            intensity: theme.glow_intensity,
        }
    }

    /// Advance the time uniform.
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }

    /// Swap in a new theme's tint and intensity.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.color = theme.primary_vec3();
        self.intensity = theme.glow_intensity;
    }

    /// Shell radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current uniform block.
    pub fn uniforms(&self) -> GlowUniforms {
        GlowUniforms::new(self.color, self.intensity, self.time)
    }

    /// Rasterization flags: additive, depth-ignoring, back faces only.
    pub fn draw_settings(&self) -> DrawSettings {
        DrawSettings {
            blend_mode: BlendMode::Additive,
            depth_test: false,
            facing: Facing::Back,
        }
    }

    /// WGSL material: fresnel-style falloff on the inverted hull, breathing
    /// with `sin(2t) * 0.2 + 0.8`, scaled by the theme's glow intensity.
    pub fn shader_source(&self) -> String {
        r#"struct Globals {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
}

struct GlowUniforms {
    color: vec3<f32>,
    intensity: f32,
    time: f32,
    _pad0: f32,
    _pad1: f32,
    _pad2: f32,
}

@group(0) @binding(0)
var<uniform> globals: Globals;

@group(0) @binding(1)
var<uniform> glow: GlowUniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) normal: vec3<f32>,
}

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = globals.view_proj * globals.model * vec4<f32>(position, 1.0);
    out.normal = normalize((globals.model * vec4<f32>(normal, 0.0)).xyz);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let rim = max(0.7 - dot(normalize(in.normal), vec3<f32>(0.0, 0.0, 1.0)), 0.0);
    var strength = rim * rim;
    strength *= sin(glow.time * 2.0) * 0.2 + 0.8;
    return vec4<f32>(glow.color, strength * 0.3 * glow.intensity);
}
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeId;

    #[test]
    fn test_radius_is_twice_orb() {
        let glow = GlowShell::new(1.5, &ThemeId::Spartan.theme());
        assert_eq!(glow.radius(), 3.0);
    }

    #[test]
    fn test_uniforms_track_theme_and_time() {
        let mut glow = GlowShell::new(1.5, &ThemeId::Spartan.theme());
        glow.advance(0.5);
        glow.apply_theme(&ThemeId::Forerunner.theme());
        let u = glow.uniforms();
        assert_eq!(u.time, 0.5);
        assert_eq!(
            u.color,
            ThemeId::Forerunner.theme().primary_vec3().to_array()
        );
        assert_eq!(u.intensity, 1.2);
    }

    #[test]
    fn test_draw_settings_never_occlude() {
        let glow = GlowShell::new(1.5, &ThemeId::Spartan.theme());
        let settings = glow.draw_settings();
        assert_eq!(settings.blend_mode, BlendMode::Additive);
        assert!(!settings.depth_test);
        assert_eq!(settings.facing, Facing::Back);
    }
}
