//! Error types for OrbFX.
//!
//! All failure modes are configuration-time failures: a bad particle count,
//! a color outside the 24-bit range, a negative or non-finite intensity.
//! The per-frame path (`advance`/`update`) never fails.

use std::fmt;

/// Errors raised when constructing components or applying a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Particle count must be at least 1.
    ParticleCount(u32),
    /// A theme color exceeds the 24-bit RGB range.
    Color {
        /// Which theme field held the bad value.
        field: &'static str,
        /// The offending value.
        value: u32,
    },
    /// A theme intensity is negative or not finite.
    Intensity {
        /// Which theme field held the bad value.
        field: &'static str,
        /// The offending value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParticleCount(n) => {
                write!(f, "Invalid particle count {}: must be at least 1", n)
            }
            ConfigError::Color { field, value } => {
                write!(
                    f,
                    "Invalid color {:#08x} for {}: must be a 24-bit RGB value",
                    value, field
                )
            }
            ConfigError::Intensity { field, value } => {
                write!(
                    f,
                    "Invalid intensity {} for {}: must be finite and >= 0",
                    value, field
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ConfigError::ParticleCount(0);
        assert!(e.to_string().contains("particle count"));

        let e = ConfigError::Color {
            field: "primary_color",
            value: 0x1_000000,
        };
        assert!(e.to_string().contains("primary_color"));

        let e = ConfigError::Intensity {
            field: "glow_intensity",
            value: -1.0,
        };
        assert!(e.to_string().contains("glow_intensity"));
    }
}
