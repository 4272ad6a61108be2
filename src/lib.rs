//! # OrbFX - Themed Energy-Orb Animation Engine
//!
//! OrbFX animates a themed "energy orb": a central pulsing body surrounded
//! by a multi-formation particle field, concentric rotating rings, and a
//! soft outer glow. It owns all the per-frame animation state and hands
//! your rendering backend everything it needs to draw (buffers, uniform
//! blocks, draw settings, and generated WGSL materials) without ever
//! touching a GPU itself.
//!
//! ## Quick Start
//!
//! ```
//! use orbfx::prelude::*;
//!
//! let mut halo = HaloOrbConfig::new()
//!     .with_particle_count(2000)
//!     .with_ring_count(3)
//!     .with_seed(42)
//!     .build(&ThemeId::Spartan.theme())
//!     .unwrap();
//!
//! // Once per frame, from your render loop:
//! halo.update(0.016);
//!
//! // Then draw from the exposed state:
//! let _particle_positions = halo.particles().positions();
//! let _orb_uniforms = halo.orb().uniforms();
//! let _ring_transform = halo.rings().transform(0);
//!
//! // React to a theme-change event:
//! halo.apply_theme(&ThemeId::Covenant.theme()).unwrap();
//! ```
//!
//! ## Core Concepts
//!
//! ### Components
//!
//! | Component | Role |
//! |-----------|------|
//! | [`HaloOrb`] | orchestrator; `update(dt)` + `apply_theme(theme)` |
//! | [`ParticleField`] | per-particle state, formations, lifetime respawn |
//! | [`RingEnsemble`] | concentric annuli with two rotation axes each |
//! | [`OrbBody`] | pulsing core; time, pulse intensity, rotation |
//! | [`GlowShell`] | inverted rim-light hull |
//!
//! ### Themes
//!
//! A [`Theme`] is an immutable bundle of two accent colors, a background
//! color, and three intensity scalars. Four built-ins ship under
//! [`ThemeId`]; custom themes are plain struct literals validated at the
//! configuration boundary. Theme changes swap every derived uniform
//! atomically from the caller's perspective.
//!
//! ### Frame-rate independence
//!
//! All animation math scales by `dt / REFERENCE_STEP`, so a field advanced
//! at 30 Hz lands where it would have at the reference 60 Hz cadence. The
//! host supplies `dt`; [`time::Clock`] is a ready-made source.
//!
//! ### Rendering contract
//!
//! Drawing is out of scope by design. Each component exposes:
//! - buffers/transforms ([`ParticleField::write_instances`],
//!   [`RingEnsemble::transform`]),
//! - a `Pod` uniform block ([`uniforms`]),
//! - [`visuals::DrawSettings`] (blend, depth, facing),
//! - a `shader_source()` WGSL material realizing the visual contract.
//!
//! A backend that honors those reproduces the intended look; one that
//! brings its own shading only has to match the same time-domain behavior.

pub mod error;
pub mod formation;
pub mod glow;
pub mod halo;
pub mod motion;
pub mod orb;
pub mod particles;
pub mod rings;
pub mod theme;
pub mod time;
pub mod uniforms;
pub mod visuals;

pub use bytemuck;
pub use error::ConfigError;
pub use formation::{Formation, FormationKind};
pub use glam::{Mat4, Quat, Vec3};
pub use glow::GlowShell;
pub use halo::{HaloOrb, HaloOrbConfig};
pub use motion::Movement;
pub use orb::OrbBody;
pub use particles::ParticleField;
pub use rings::{RingElement, RingEnsemble};
pub use theme::{Theme, ThemeId};
pub use uniforms::{GlowUniforms, OrbUniforms, ParticleInstance, ParticleUniforms, RingUniforms};
pub use visuals::{BlendMode, DrawSettings, Facing};

/// Reference frame duration (seconds) all per-step constants are expressed
/// against. An `advance(REFERENCE_STEP)` is exactly one reference frame.
pub const REFERENCE_STEP: f32 = 0.016;

/// Convenient re-exports for common usage.
///
/// ```
/// use orbfx::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::formation::{Formation, FormationKind};
    pub use crate::glow::GlowShell;
    pub use crate::halo::{HaloOrb, HaloOrbConfig};
    pub use crate::motion::Movement;
    pub use crate::orb::OrbBody;
    pub use crate::particles::ParticleField;
    pub use crate::rings::{RingElement, RingEnsemble};
    pub use crate::theme::{Theme, ThemeId};
    pub use crate::time::Clock;
    pub use crate::uniforms::{
        GlowUniforms, OrbUniforms, ParticleInstance, ParticleUniforms, RingUniforms,
    };
    pub use crate::visuals::{BlendMode, DrawSettings, Facing};
    pub use crate::REFERENCE_STEP;
    pub use crate::{Mat4, Quat, Vec3};
}
