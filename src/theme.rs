//! Theme records and the built-in theme catalog.
//!
//! A [`Theme`] bundles the colors and intensity scalars that give the whole
//! orb ensemble its visual identity. Themes are immutable values: a theme
//! change replaces the record wholesale via [`crate::HaloOrb::apply_theme`],
//! never by partial mutation.
//!
//! Four themes ship in the catalog, addressed by [`ThemeId`]:
//!
//! | Id | Primary | Secondary | Character |
//! |----|---------|-----------|-----------|
//! | [`ThemeId::Spartan`] | `0x0099ff` | `0xff6600` | stable blue/orange energy |
//! | [`ThemeId::Covenant`] | `0x9900ff` | `0xff0099` | flowing plasma purple/pink |
//! | [`ThemeId::Forerunner`] | `0x00ffcc` | `0xffffff` | crystalline cyan/white |
//! | [`ThemeId::Flood`] | `0x88ff00` | `0xffff00` | chaotic green/yellow spores |
//!
//! # Example
//!
//! ```
//! use orbfx::theme::{Theme, ThemeId};
//!
//! let spartan = ThemeId::Spartan.theme();
//! assert_eq!(spartan.primary_color, 0x0099ff);
//!
//! // Blend halfway toward Covenant for a transition frame.
//! let mid = spartan.lerp(&ThemeId::Covenant.theme(), 0.5);
//! assert!(mid.validate().is_ok());
//! ```

use crate::error::ConfigError;
use crate::motion::Movement;
use glam::Vec3;

/// Identifiers for the built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeId {
    /// Blue and orange energy signature.
    Spartan,
    /// Purple and pink plasma.
    Covenant,
    /// Cyan and white hard-light harmonics.
    Forerunner,
    /// Sickly green and yellow spore field.
    Flood,
}

impl ThemeId {
    /// All built-in themes, in catalog order.
    pub const ALL: [ThemeId; 4] = [
        ThemeId::Spartan,
        ThemeId::Covenant,
        ThemeId::Forerunner,
        ThemeId::Flood,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ThemeId::Spartan => "Spartan",
            ThemeId::Covenant => "Covenant",
            ThemeId::Forerunner => "Forerunner",
            ThemeId::Flood => "Flood",
        }
    }

    /// One-line description for UI panels.
    pub const fn description(self) -> &'static str {
        match self {
            ThemeId::Spartan => "Iconic blue and orange energy signature with steady particle shells.",
            ThemeId::Covenant => "Plasma technology with ethereal purple and pink energy patterns.",
            ThemeId::Forerunner => "Hard-light constructs with crystalline cyan and white harmonics.",
            ThemeId::Flood => "Corrupted biomass energy with infectious spore-like particles.",
        }
    }

    /// Cycle to the next catalog entry.
    pub const fn next(self) -> Self {
        match self {
            ThemeId::Spartan => ThemeId::Covenant,
            ThemeId::Covenant => ThemeId::Forerunner,
            ThemeId::Forerunner => ThemeId::Flood,
            ThemeId::Flood => ThemeId::Spartan,
        }
    }

    /// The theme record for this id.
    pub const fn theme(self) -> Theme {
        match self {
            ThemeId::Spartan => Theme {
                primary_color: 0x0099ff,
                secondary_color: 0xff6600,
                background_color: 0x001133,
                particle_intensity: 1.0,
                glow_intensity: 0.8,
                ring_speed: 1.0,
                movement: Movement::Orbital,
            },
            ThemeId::Covenant => Theme {
                primary_color: 0x9900ff,
                secondary_color: 0xff0099,
                background_color: 0x330033,
                particle_intensity: 1.2,
                glow_intensity: 1.0,
                ring_speed: 0.7,
                movement: Movement::Flowing,
            },
            ThemeId::Forerunner => Theme {
                primary_color: 0x00ffcc,
                secondary_color: 0xffffff,
                background_color: 0x002244,
                particle_intensity: 0.8,
                glow_intensity: 1.2,
                ring_speed: 1.5,
                movement: Movement::Geometric,
            },
            ThemeId::Flood => Theme {
                primary_color: 0x88ff00,
                secondary_color: 0xffff00,
                background_color: 0x221100,
                particle_intensity: 1.5,
                glow_intensity: 0.6,
                ring_speed: 2.0,
                movement: Movement::Chaotic,
            },
        }
    }
}

/// An immutable visual identity for the orb ensemble.
///
/// Colors are 24-bit RGB values (`0xRRGGBB`); intensities are non-negative
/// finite scalars. Construct custom themes with struct syntax and check them
/// with [`Theme::validate`] before use; [`crate::HaloOrb`] validates at
/// construction and on every [`crate::HaloOrb::apply_theme`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Dominant accent color (orb rim, rings, glow tint).
    pub primary_color: u32,
    /// Secondary accent color mixed into the energy patterns.
    pub secondary_color: u32,
    /// Suggested scene clear color for the host.
    pub background_color: u32,
    /// Scales particle drift amplitude and sprite size.
    pub particle_intensity: f32,
    /// Scales the glow shell's alpha.
    pub glow_intensity: f32,
    /// Scales the rings' animation clock.
    pub ring_speed: f32,
    /// Particle drift style.
    pub movement: Movement,
}

impl Theme {
    /// Check the theme invariants: 24-bit colors, non-negative finite
    /// intensities.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("primary_color", self.primary_color),
            ("secondary_color", self.secondary_color),
            ("background_color", self.background_color),
        ] {
            if value > 0xFF_FFFF {
                return Err(ConfigError::Color { field, value });
            }
        }
        for (field, value) in [
            ("particle_intensity", self.particle_intensity),
            ("glow_intensity", self.glow_intensity),
            ("ring_speed", self.ring_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Intensity { field, value });
            }
        }
        Ok(())
    }

    /// Primary color resolved to linear RGB in `[0, 1]`.
    #[inline]
    pub fn primary_vec3(&self) -> Vec3 {
        color_to_vec3(self.primary_color)
    }

    /// Secondary color resolved to linear RGB in `[0, 1]`.
    #[inline]
    pub fn secondary_vec3(&self) -> Vec3 {
        color_to_vec3(self.secondary_color)
    }

    /// Background color resolved to linear RGB in `[0, 1]`.
    #[inline]
    pub fn background_vec3(&self) -> Vec3 {
        color_to_vec3(self.background_color)
    }

    /// Interpolate toward `other` by `factor` in `[0, 1]`.
    ///
    /// Colors blend channel-wise with rounding; scalars blend linearly. The
    /// movement style switches at the midpoint (drift styles do not blend).
    pub fn lerp(&self, other: &Theme, factor: f32) -> Theme {
        let f = factor.clamp(0.0, 1.0);
        Theme {
            primary_color: lerp_color(self.primary_color, other.primary_color, f),
            secondary_color: lerp_color(self.secondary_color, other.secondary_color, f),
            background_color: lerp_color(self.background_color, other.background_color, f),
            particle_intensity: self.particle_intensity
                + (other.particle_intensity - self.particle_intensity) * f,
            glow_intensity: self.glow_intensity + (other.glow_intensity - self.glow_intensity) * f,
            ring_speed: self.ring_speed + (other.ring_speed - self.ring_speed) * f,
            movement: if f < 0.5 { self.movement } else { other.movement },
        }
    }

    /// Inclusive gradient from `a` to `b` in `steps` increments
    /// (`steps + 1` themes, endpoints included).
    ///
    /// Useful for animating a theme transition over several frames.
    pub fn gradient(a: &Theme, b: &Theme, steps: u32) -> Vec<Theme> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| a.lerp(b, i as f32 / steps as f32))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeId::Spartan.theme()
    }
}

/// Expand a 24-bit `0xRRGGBB` color to linear RGB in `[0, 1]`.
#[inline]
pub fn color_to_vec3(color: u32) -> Vec3 {
    Vec3::new(
        ((color >> 16) & 0xFF) as f32 / 255.0,
        ((color >> 8) & 0xFF) as f32 / 255.0,
        (color & 0xFF) as f32 / 255.0,
    )
}

/// Channel-wise interpolation between two 24-bit colors.
fn lerp_color(a: u32, b: u32, factor: f32) -> u32 {
    let ch = |shift: u32| {
        let ca = ((a >> shift) & 0xFF) as f32;
        let cb = ((b >> shift) & 0xFF) as f32;
        (ca + (cb - ca) * factor).round() as u32
    };
    (ch(16) << 16) | (ch(8) << 8) | ch(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_validates() {
        for id in ThemeId::ALL {
            assert!(id.theme().validate().is_ok(), "{} invalid", id.name());
        }
    }

    #[test]
    fn test_validate_rejects_wide_color() {
        let mut theme = ThemeId::Spartan.theme();
        theme.secondary_color = 0x1_000000;
        assert_eq!(
            theme.validate(),
            Err(ConfigError::Color {
                field: "secondary_color",
                value: 0x1_000000,
            })
        );
    }

    #[test]
    fn test_validate_rejects_negative_intensity() {
        let mut theme = ThemeId::Flood.theme();
        theme.ring_speed = -0.1;
        assert!(matches!(
            theme.validate(),
            Err(ConfigError::Intensity { field: "ring_speed", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_intensity() {
        let mut theme = ThemeId::Flood.theme();
        theme.glow_intensity = f32::NAN;
        assert!(theme.validate().is_err());
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = ThemeId::Spartan.theme();
        let b = ThemeId::Covenant.theme();
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint_channels() {
        // 0x000000 -> 0xff0000 halfway lands on 0x800000 (128 rounded).
        let mut a = ThemeId::Spartan.theme();
        let mut b = a;
        a.primary_color = 0x000000;
        b.primary_color = 0xff0000;
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.primary_color >> 16, 128);
    }

    #[test]
    fn test_gradient_length_and_ends() {
        let a = ThemeId::Forerunner.theme();
        let b = ThemeId::Flood.theme();
        let ramp = Theme::gradient(&a, &b, 10);
        assert_eq!(ramp.len(), 11);
        assert_eq!(ramp[0], a);
        assert_eq!(ramp[10], b);
    }

    #[test]
    fn test_color_to_vec3() {
        let c = color_to_vec3(0x0099ff);
        assert_eq!(c.x, 0.0);
        assert!((c.y - 0x99 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(c.z, 1.0);
    }

    #[test]
    fn test_theme_id_cycle() {
        let mut id = ThemeId::Spartan;
        for _ in 0..4 {
            id = id.next();
        }
        assert_eq!(id, ThemeId::Spartan);
    }
}
