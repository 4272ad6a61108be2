//! Upload-ready uniform blocks and the packed particle instance record.
//!
//! Every struct here is `#[repr(C)]` + [`bytemuck::Pod`] with explicit
//! padding, laid out to match the WGSL declarations emitted by each
//! component's `shader_source()`. A backend can cast any of them straight
//! into a buffer write:
//!
//! ```
//! use orbfx::prelude::*;
//!
//! let orb = OrbBody::new(1.5, &ThemeId::Spartan.theme());
//! let bytes: &[u8] = bytemuck::bytes_of(&orb.uniforms());
//! assert_eq!(bytes.len(), std::mem::size_of::<OrbUniforms>());
//! ```
//!
//! WGSL `vec3<f32>` members are 16-byte aligned, so each one carries a
//! trailing pad scalar on the Rust side; the uniform structs are padded to a
//! 16-byte multiple overall.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Uniform block for the orb body material.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct OrbUniforms {
    /// Accumulated animation time in seconds.
    pub time: f32,
    /// Breathing scalar in `[0, 1]`.
    pub pulse_intensity: f32,
    _pad0: [f32; 2],
    /// Theme primary color, linear RGB.
    pub primary_color: [f32; 3],
    _pad1: f32,
    /// Theme secondary color, linear RGB.
    pub secondary_color: [f32; 3],
    _pad2: f32,
}

impl OrbUniforms {
    pub fn new(time: f32, pulse_intensity: f32, primary: Vec3, secondary: Vec3) -> Self {
        Self {
            time,
            pulse_intensity,
            _pad0: [0.0; 2],
            primary_color: primary.to_array(),
            _pad1: 0.0,
            secondary_color: secondary.to_array(),
            _pad2: 0.0,
        }
    }
}

/// Uniform block for one energy ring.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RingUniforms {
    /// Ring tint (theme primary), linear RGB.
    pub color: [f32; 3],
    /// Base opacity after the per-ring falloff.
    pub opacity: f32,
    /// Ring animation clock (already scaled by the theme's ring speed).
    pub time: f32,
    _pad: [f32; 3],
}

impl RingUniforms {
    pub fn new(color: Vec3, opacity: f32, time: f32) -> Self {
        Self {
            color: color.to_array(),
            opacity,
            time,
            _pad: [0.0; 3],
        }
    }
}

/// Uniform block for the glow shell.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GlowUniforms {
    /// Glow tint (theme primary), linear RGB.
    pub color: [f32; 3],
    /// Alpha scale from the theme's glow intensity.
    pub intensity: f32,
    /// Accumulated animation time in seconds.
    pub time: f32,
    _pad: [f32; 3],
}

impl GlowUniforms {
    pub fn new(color: Vec3, intensity: f32, time: f32) -> Self {
        Self {
            color: color.to_array(),
            intensity,
            time,
            _pad: [0.0; 3],
        }
    }
}

/// Uniform block for the particle point-sprite pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleUniforms {
    /// Accumulated animation time in seconds.
    pub time: f32,
    /// Sprite size multiplier from the theme's particle intensity.
    pub size_scale: f32,
    _pad: [f32; 2],
}

impl ParticleUniforms {
    pub fn new(time: f32, size_scale: f32) -> Self {
        Self {
            time,
            size_scale,
            _pad: [0.0; 2],
        }
    }
}

/// One packed particle for the instance buffer.
///
/// 32 bytes: position + size in the first 16, color + lifetime in the
/// second. Matches the vertex layout in the particle `shader_source()`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// World-space position.
    pub position: [f32; 3],
    /// Base sprite size.
    pub size: f32,
    /// Sprite color, linear RGB.
    pub color: [f32; 3],
    /// Normalized age in `[0, 1)`.
    pub lifetime: f32,
}
