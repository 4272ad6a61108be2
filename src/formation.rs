//! Formation seeding for the particle field.
//!
//! Every particle is assigned a formation exactly once, at construction. The
//! formation determines the particle's anchor position; respawns re-jitter
//! around that anchor rather than resampling the formation.
//!
//! # Formation Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Formation::Shell`] | spherical shell hugging the orb |
//! | [`Formation::Band`] | flat equatorial ring band |
//! | [`Formation::Spiral`] | rising Archimedean spiral arm |
//!
//! The weighted draw in [`Formation::pick`] splits the population 40%
//! shell / 30% band / 30% spiral.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Initial spatial distribution assigned to a particle at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formation {
    /// Spherical shell around the orb.
    ///
    /// Radius is uniform in `[inner, inner + thickness]`; direction comes
    /// from independent polar and azimuthal angles.
    Shell {
        /// Inner shell radius (the orb surface).
        inner: f32,
        /// Radial extent of the shell.
        thickness: f32,
    },

    /// Flat ring band in the XZ plane.
    ///
    /// Radius is uniform in `[inner, outer]`, height uniform in
    /// `[-half_height, half_height]`.
    Band {
        /// Inner band radius.
        inner: f32,
        /// Outer band radius.
        outer: f32,
        /// Half of the band's vertical extent.
        half_height: f32,
    },

    /// Archimedean spiral arm rising out of the orb's south pole.
    ///
    /// Parameter `t` is uniform in `[0, turns)`; radius grows as
    /// `1 + growth * t` while height advances `pitch * t - drop`.
    Spiral {
        /// Total angular extent in radians.
        turns: f32,
        /// Radial growth per radian.
        growth: f32,
        /// Vertical advance per radian.
        pitch: f32,
        /// Downward offset of the arm's base.
        drop: f32,
    },
}

/// Discriminant tag for a [`Formation`], kept per particle for introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormationKind {
    Shell,
    Band,
    Spiral,
}

impl Formation {
    /// Shell formation hugging an orb of the given radius.
    pub fn shell(orb_radius: f32) -> Self {
        Formation::Shell {
            inner: orb_radius,
            thickness: 3.0,
        }
    }

    /// The standard equatorial band.
    pub fn band() -> Self {
        Formation::Band {
            inner: 2.0,
            outer: 4.0,
            half_height: 0.25,
        }
    }

    /// The standard two-turn spiral arm.
    pub fn spiral() -> Self {
        Formation::Spiral {
            turns: 4.0 * PI,
            growth: 0.1,
            pitch: 0.2,
            drop: 2.0,
        }
    }

    /// Weighted formation draw: 40% shell, 30% band, 30% spiral.
    pub fn pick<R: Rng>(orb_radius: f32, rng: &mut R) -> Self {
        let draw: f32 = rng.gen();
        if draw < 0.4 {
            Formation::shell(orb_radius)
        } else if draw < 0.7 {
            Formation::band()
        } else {
            Formation::spiral()
        }
    }

    /// The discriminant tag.
    pub fn kind(&self) -> FormationKind {
        match self {
            Formation::Shell { .. } => FormationKind::Shell,
            Formation::Band { .. } => FormationKind::Band,
            Formation::Spiral { .. } => FormationKind::Spiral,
        }
    }

    /// Sample an anchor position from this formation.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec3 {
        match *self {
            Formation::Shell { inner, thickness } => {
                let radius = inner + rng.gen::<f32>() * thickness;
                let theta = rng.gen::<f32>() * TAU;
                let phi = rng.gen::<f32>() * PI;
                Vec3::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                )
            }
            Formation::Band {
                inner,
                outer,
                half_height,
            } => {
                let radius = rng.gen_range(inner..outer);
                let angle = rng.gen::<f32>() * TAU;
                let height = rng.gen_range(-half_height..half_height);
                Vec3::new(radius * angle.cos(), height, radius * angle.sin())
            }
            Formation::Spiral {
                turns,
                growth,
                pitch,
                drop,
            } => {
                let t = rng.gen::<f32>() * turns;
                let radius = 1.0 + growth * t;
                Vec3::new(radius * t.cos(), pitch * t - drop, radius * t.sin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_shell_radius_band() {
        let mut rng = SmallRng::seed_from_u64(1);
        let formation = Formation::shell(1.5);
        for _ in 0..500 {
            let p = formation.sample(&mut rng);
            let r = p.length();
            assert!((1.5..=4.5).contains(&r), "shell radius {} out of band", r);
        }
    }

    #[test]
    fn test_band_envelope() {
        let mut rng = SmallRng::seed_from_u64(2);
        let formation = Formation::band();
        for _ in 0..500 {
            let p = formation.sample(&mut rng);
            let planar = (p.x * p.x + p.z * p.z).sqrt();
            assert!((2.0..=4.0).contains(&planar));
            assert!(p.y.abs() <= 0.25);
        }
    }

    #[test]
    fn test_spiral_parametrization() {
        let mut rng = SmallRng::seed_from_u64(3);
        let formation = Formation::spiral();
        for _ in 0..500 {
            let p = formation.sample(&mut rng);
            // Recover t from the height, then check the radius matches.
            let t = (p.y + 2.0) / 0.2;
            assert!((0.0..4.0 * PI + 1e-3).contains(&t));
            let expected = 1.0 + 0.1 * t;
            let planar = (p.x * p.x + p.z * p.z).sqrt();
            assert!((planar - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_pick_weights() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut counts = [0usize; 3];
        let n = 20_000;
        for _ in 0..n {
            match Formation::pick(1.5, &mut rng).kind() {
                FormationKind::Shell => counts[0] += 1,
                FormationKind::Band => counts[1] += 1,
                FormationKind::Spiral => counts[2] += 1,
            }
        }
        let frac = |c: usize| c as f32 / n as f32;
        assert!((frac(counts[0]) - 0.4).abs() < 0.02);
        assert!((frac(counts[1]) - 0.3).abs() < 0.02);
        assert!((frac(counts[2]) - 0.3).abs() < 0.02);
    }
}
