//! The orb ensemble orchestrator.
//!
//! [`HaloOrb`] owns the four animated components as one composite scene
//! unit and exposes the two operations a host needs: [`HaloOrb::update`]
//! once per frame, and [`HaloOrb::apply_theme`] on a theme-change event.
//! Configuration goes through [`HaloOrbConfig`]:
//!
//! ```
//! use orbfx::prelude::*;
//!
//! let mut orb = HaloOrbConfig::new()
//!     .with_particle_count(2000)
//!     .with_seed(7)
//!     .build(&ThemeId::Spartan.theme())
//!     .unwrap();
//!
//! orb.update(0.016);
//! orb.apply_theme(&ThemeId::Covenant.theme()).unwrap();
//! ```

use crate::error::ConfigError;
use crate::glow::GlowShell;
use crate::orb::OrbBody;
use crate::particles::ParticleField;
use crate::rings::RingEnsemble;
use crate::theme::Theme;
use crate::REFERENCE_STEP;
use glam::Mat4;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Whole-ensemble yaw accumulated per reference frame.
const GROUP_SPIN: f32 = 0.002;

/// Configuration builder for [`HaloOrb`].
#[derive(Debug, Clone, Copy)]
pub struct HaloOrbConfig {
    particle_count: u32,
    ring_count: u32,
    orb_radius: f32,
    seed: Option<u64>,
    sparkle: bool,
}

impl HaloOrbConfig {
    /// Defaults: 2000 particles, 3 rings, orb radius 1.5, entropy-seeded,
    /// no sparkle on theme change.
    pub fn new() -> Self {
        Self {
            particle_count: 2000,
            ring_count: 3,
            orb_radius: 1.5,
            seed: None,
            sparkle: false,
        }
    }

    /// Set the particle count (validated at build time).
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the number of energy rings.
    pub fn with_ring_count(mut self, count: u32) -> Self {
        self.ring_count = count;
        self
    }

    /// Set the central orb radius.
    pub fn with_orb_radius(mut self, radius: f32) -> Self {
        self.orb_radius = radius;
        self
    }

    /// Pin all random sampling to a seed, making the ensemble fully
    /// deterministic. Without this, seeding comes from OS entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Redraw particle color mixes on every theme change instead of
    /// re-tinting through the stored mixes.
    pub fn with_sparkle(mut self, sparkle: bool) -> Self {
        self.sparkle = sparkle;
        self
    }

    /// Build the ensemble under `theme`.
    pub fn build(self, theme: &Theme) -> Result<HaloOrb, ConfigError> {
        HaloOrb::new(self, theme)
    }
}

impl Default for HaloOrbConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The composite energy-orb scene unit.
#[derive(Debug, Clone)]
pub struct HaloOrb {
    theme: Theme,
    orb: OrbBody,
    particles: ParticleField,
    rings: RingEnsemble,
    glow: GlowShell,
    yaw: f32,
    sparkle: bool,
}

impl HaloOrb {
    /// Build the ensemble from `config` under `theme`.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if the theme is malformed or the particle count is
    /// zero. Construction is the only fallible moment; the per-frame path
    /// never fails.
    pub fn new(config: HaloOrbConfig, theme: &Theme) -> Result<Self, ConfigError> {
        theme.validate()?;

        let mut master = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let field_rng = SmallRng::seed_from_u64(master.gen());

        Ok(Self {
            theme: *theme,
            orb: OrbBody::new(config.orb_radius, theme),
            particles: ParticleField::new(
                config.particle_count,
                config.orb_radius,
                theme,
                field_rng,
            )?,
            rings: RingEnsemble::new(config.ring_count, theme, &mut master),
            glow: GlowShell::new(config.orb_radius, theme),
            yaw: 0.0,
            sparkle: config.sparkle,
        })
    }

    /// Advance the whole ensemble by `dt` seconds.
    ///
    /// Components advance in a fixed order (orb body, particle field, rings,
    /// glow) so anything reading a shared parameter sees this frame's value,
    /// never last frame's.
    pub fn update(&mut self, dt: f32) {
        self.orb.advance(dt);
        self.particles.advance(dt);
        self.rings.advance(dt);
        self.glow.advance(dt);
        self.yaw += GROUP_SPIN * dt / REFERENCE_STEP;
    }

    /// Swap the active theme.
    ///
    /// Validates first, then updates every theme-derived uniform in one
    /// call; a renderer reading state between frames never observes a
    /// half-applied theme. Particle colors re-tint through their stored mix
    /// factors unless the ensemble was built with sparkle enabled, in which
    /// case the mixes are redrawn.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if the new theme is malformed; the current theme
    /// stays fully in effect.
    pub fn apply_theme(&mut self, theme: &Theme) -> Result<(), ConfigError> {
        theme.validate()?;
        self.orb.apply_theme(theme);
        if self.sparkle {
            self.particles.reshuffle(theme);
        } else {
            self.particles.retint(theme);
        }
        self.rings.apply_theme(theme);
        self.glow.apply_theme(theme);
        self.theme = *theme;
        Ok(())
    }

    /// The active theme.
    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The central orb body.
    #[inline]
    pub fn orb(&self) -> &OrbBody {
        &self.orb
    }

    /// The particle field.
    #[inline]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Mutable particle field access, for consuming the dirty flag.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut ParticleField {
        &mut self.particles
    }

    /// The ring ensemble.
    #[inline]
    pub fn rings(&self) -> &RingEnsemble {
        &self.rings
    }

    /// The glow shell.
    #[inline]
    pub fn glow(&self) -> &GlowShell {
        &self.glow
    }

    /// Accumulated whole-ensemble yaw in radians.
    #[inline]
    pub fn group_yaw(&self) -> f32 {
        self.yaw
    }

    /// Model transform applied to every component.
    pub fn group_transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw)
    }
}
