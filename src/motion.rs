//! Theme-specific particle movement styles.
//!
//! Each built-in theme carries a [`Movement`] that gives its particle field a
//! characteristic drift on top of the per-particle velocity. Styles are plain
//! enum variants dispatched by `match`, so a field's behavior is fully
//! determined by its theme and the elapsed time.
//!
//! # Styles
//!
//! | Style | Character |
//! |-------|-----------|
//! | [`Movement::Orbital`] | slow swirl around the vertical axis with a gentle bob |
//! | [`Movement::Flowing`] | smooth, organic sinusoidal drift |
//! | [`Movement::Geometric`] | small, precise phase-locked oscillation |
//! | [`Movement::Chaotic`] | three incommensurate sinusoids, jittery swarm |

use glam::Vec3;

/// Per-theme particle drift style.
///
/// [`Movement::drift`] returns the displacement for one reference frame
/// (1/60 s); callers scale it by `dt / REFERENCE_STEP` and by the theme's
/// particle intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Movement {
    /// Tangential swirl about +Y (~0.5 rad/s) plus a small vertical bob.
    #[default]
    Orbital,
    /// Slow flowing drift, amplitude 0.02 per axis.
    Flowing,
    /// Precise geometric oscillation, amplitude 0.01.
    Geometric,
    /// Erratic swarm motion, amplitudes 0.05/0.04/0.03.
    Chaotic,
}

/// Angular rate of the orbital swirl in radians per second.
const ORBITAL_RATE: f32 = 0.5;

/// Reference frame duration the drift amplitudes are expressed against.
const FRAME: f32 = crate::REFERENCE_STEP;

impl Movement {
    /// Displacement for one reference frame for the particle at `position`.
    ///
    /// `time` is the field's accumulated animation time; `index` decorrelates
    /// neighboring particles so the population does not move in lockstep.
    pub fn drift(&self, position: Vec3, time: f32, index: usize) -> Vec3 {
        let i = index as f32;
        match self {
            Movement::Orbital => {
                // Linearized rotation about +Y; the bob keeps shells from
                // reading as rigid.
                let omega = ORBITAL_RATE * FRAME;
                let bob = (time * 2.0 + i * 0.1).sin() * 0.003;
                Vec3::new(-position.z * omega, bob, position.x * omega)
            }
            Movement::Flowing => {
                let flow = time * 0.3 + i * 0.1;
                Vec3::new(
                    flow.sin() * 0.02,
                    (flow * 1.3).cos() * 0.02,
                    (flow * 0.7).sin() * 0.02,
                )
            }
            Movement::Geometric => {
                let phase = time + i * 0.314;
                Vec3::new(
                    phase.sin() * 0.01,
                    (phase * 2.0).cos() * 0.01,
                    phase.sin() * 0.01,
                )
            }
            Movement::Chaotic => Vec3::new(
                (time * 3.0 + i * 0.7).sin() * 0.05,
                (time * 2.3 + i * 0.4).cos() * 0.04,
                (time * 1.7 + i * 0.9).sin() * 0.03,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drift_is_bounded() {
        let pos = Vec3::new(3.0, 1.0, -2.0);
        for style in [
            Movement::Orbital,
            Movement::Flowing,
            Movement::Geometric,
            Movement::Chaotic,
        ] {
            for frame in 0..200 {
                let d = style.drift(pos, frame as f32 * FRAME, frame);
                assert!(d.is_finite());
                // Largest amplitude across styles is the orbital tangent at
                // this radius; everything else stays well under 0.1.
                assert!(d.length() < 0.1, "{:?} drifted {}", style, d.length());
            }
        }
    }

    #[test]
    fn test_orbital_is_tangential() {
        let pos = Vec3::new(2.0, 0.0, 0.0);
        let d = Movement::Orbital.drift(pos, 0.0, 0);
        // At +X the swirl pushes toward +Z, never radially.
        assert_eq!(d.x, 0.0);
        assert!(d.z > 0.0);
    }

    #[test]
    fn test_styles_differ() {
        let pos = Vec3::new(1.0, 1.0, 1.0);
        let a = Movement::Flowing.drift(pos, 1.0, 7);
        let b = Movement::Chaotic.drift(pos, 1.0, 7);
        assert_ne!(a, b);
    }
}
