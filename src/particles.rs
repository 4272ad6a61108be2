//! The particle field: the only component with real per-entity state.
//!
//! All `N` particles are allocated once at construction and live for the
//! process lifetime; a particle "dies" by wrapping its normalized lifetime
//! past 1.0, at which point it respawns in place near its formation anchor.
//! State lives in parallel arrays indexed by particle id: position, color,
//! and size stay in lock-step, and a dirty flag tells the backend when to
//! re-upload.
//!
//! # Example
//!
//! ```
//! use orbfx::prelude::*;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let theme = ThemeId::Spartan.theme();
//! let rng = SmallRng::seed_from_u64(7);
//! let mut field = ParticleField::new(2000, 1.5, &theme, rng).unwrap();
//!
//! field.advance(0.016);
//! assert_eq!(field.positions().len(), 2000);
//! assert!(field.take_dirty());
//! ```

use crate::error::ConfigError;
use crate::formation::{Formation, FormationKind};
use crate::motion::Movement;
use crate::theme::Theme;
use crate::uniforms::{ParticleInstance, ParticleUniforms};
use crate::visuals::{BlendMode, DrawSettings, Facing};
use crate::REFERENCE_STEP;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::Rng;

/// Lifetime advance per reference frame.
const LIFETIME_STEP: f32 = 0.005;
/// Per-axis respawn jitter bound.
const RESPAWN_JITTER: f32 = 0.25;
/// Per-axis velocity noise bound (displacement per reference frame).
const VELOCITY_NOISE: f32 = 0.01;

/// Fixed-size animated particle population around the orb.
#[derive(Debug, Clone)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    initial_positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    colors: Vec<Vec3>,
    mixes: Vec<f32>,
    sizes: Vec<f32>,
    lifetimes: Vec<f32>,
    kinds: Vec<FormationKind>,
    movement: Movement,
    intensity: f32,
    time: f32,
    dirty: bool,
    rng: SmallRng,
}

impl ParticleField {
    /// Allocate and seed `count` particles.
    ///
    /// Each particle draws a formation (40% shell / 30% band / 30% spiral),
    /// an anchor position within it, per-axis velocity noise in
    /// `[-0.01, 0.01]`, a color mix factor between the theme's primary and
    /// secondary colors, a sprite size in `[1, 4)`, and a lifetime phase
    /// offset in `[0, 1)` so the population never respawns in lockstep.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ParticleCount`] if `count` is zero.
    pub fn new(
        count: u32,
        orb_radius: f32,
        theme: &Theme,
        mut rng: SmallRng,
    ) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::ParticleCount(count));
        }
        let n = count as usize;
        let primary = theme.primary_vec3();
        let secondary = theme.secondary_vec3();

        let mut positions = Vec::with_capacity(n);
        let mut velocities = Vec::with_capacity(n);
        let mut colors = Vec::with_capacity(n);
        let mut mixes = Vec::with_capacity(n);
        let mut sizes = Vec::with_capacity(n);
        let mut lifetimes = Vec::with_capacity(n);
        let mut kinds = Vec::with_capacity(n);

        for _ in 0..n {
            let formation = Formation::pick(orb_radius, &mut rng);
            positions.push(formation.sample(&mut rng));
            kinds.push(formation.kind());

            velocities.push(Vec3::new(
                rng.gen_range(-VELOCITY_NOISE..VELOCITY_NOISE),
                rng.gen_range(-VELOCITY_NOISE..VELOCITY_NOISE),
                rng.gen_range(-VELOCITY_NOISE..VELOCITY_NOISE),
            ));

            let mix: f32 = rng.gen();
            mixes.push(mix);
            colors.push(primary.lerp(secondary, mix));

            sizes.push(rng.gen::<f32>() * 3.0 + 1.0);
            lifetimes.push(rng.gen());
        }

        Ok(Self {
            initial_positions: positions.clone(),
            positions,
            velocities,
            colors,
            mixes,
            sizes,
            lifetimes,
            kinds,
            movement: theme.movement,
            intensity: theme.particle_intensity,
            time: 0.0,
            dirty: true,
            rng,
        })
    }

    /// Advance every particle by `dt` seconds.
    ///
    /// Lifetime steps by `0.005 * dt / 0.016`; a particle whose lifetime
    /// reaches 1.0 wraps to 0 and repositions to its anchor plus a jitter of
    /// up to 0.25 per axis. Everything else takes an Euler step along its
    /// velocity plus the theme's movement drift. Total for all states,
    /// including a lifetime sitting exactly on the wrap boundary.
    pub fn advance(&mut self, dt: f32) {
        let step = dt / REFERENCE_STEP;
        self.time += dt;
        for i in 0..self.positions.len() {
            self.lifetimes[i] += LIFETIME_STEP * step;
            if self.lifetimes[i] >= 1.0 {
                self.lifetimes[i] = 0.0;
                // Re-jitter instead of an exact reset, so respawns never pop
                // back to the identical spot.
                let jitter = Vec3::new(
                    self.rng.gen_range(-RESPAWN_JITTER..RESPAWN_JITTER),
                    self.rng.gen_range(-RESPAWN_JITTER..RESPAWN_JITTER),
                    self.rng.gen_range(-RESPAWN_JITTER..RESPAWN_JITTER),
                );
                self.positions[i] = self.initial_positions[i] + jitter;
            } else {
                let drift = self.movement.drift(self.positions[i], self.time, i);
                self.positions[i] += (self.velocities[i] + drift * self.intensity) * step;
            }
        }
        self.dirty = true;
    }

    /// Re-tint every particle from its stored mix factor.
    ///
    /// Idempotent: applying the same theme twice leaves the colors
    /// bit-identical.
    pub fn retint(&mut self, theme: &Theme) {
        let primary = theme.primary_vec3();
        let secondary = theme.secondary_vec3();
        for i in 0..self.colors.len() {
            self.colors[i] = primary.lerp(secondary, self.mixes[i]);
        }
        self.movement = theme.movement;
        self.intensity = theme.particle_intensity;
        self.dirty = true;
    }

    /// Redraw every mix factor, then re-tint (the "sparkle" theme change).
    pub fn reshuffle(&mut self, theme: &Theme) {
        for i in 0..self.mixes.len() {
            self.mixes[i] = self.rng.gen();
        }
        self.retint(theme);
    }

    /// Number of particles (fixed at construction).
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the field is empty (never true for a constructed field).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Current positions, one per particle.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Formation anchor positions.
    #[inline]
    pub fn initial_positions(&self) -> &[Vec3] {
        &self.initial_positions
    }

    /// Current colors, lock-step with positions.
    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Sprite sizes, lock-step with positions.
    #[inline]
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Normalized lifetimes in `[0, 1)`.
    #[inline]
    pub fn lifetimes(&self) -> &[f32] {
        &self.lifetimes
    }

    /// Formation tag per particle.
    #[inline]
    pub fn kinds(&self) -> &[FormationKind] {
        &self.kinds
    }

    /// The active movement style.
    #[inline]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Whether buffers changed since the last [`ParticleField::take_dirty`].
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consume the dirty flag; returns whether a re-upload is due.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Current uniform block for the sprite pass.
    pub fn uniforms(&self) -> ParticleUniforms {
        ParticleUniforms::new(self.time, self.intensity)
    }

    /// Pack the particle buffers into `out` as upload-ready instances.
    ///
    /// `out` is cleared first; its final length equals [`ParticleField::len`].
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.reserve(self.positions.len());
        for i in 0..self.positions.len() {
            out.push(ParticleInstance {
                position: self.positions[i].to_array(),
                size: self.sizes[i],
                color: self.colors[i].to_array(),
                lifetime: self.lifetimes[i],
            });
        }
    }

    /// Rasterization flags: additive, depth-ignoring point sprites.
    pub fn draw_settings(&self) -> DrawSettings {
        DrawSettings {
            blend_mode: BlendMode::Additive,
            depth_test: false,
            facing: Facing::Front,
        }
    }

    /// WGSL point-sprite material.
    ///
    /// Each instance expands to a camera-facing quad whose size breathes
    /// with `1 + 0.3 * sin(3t + x + y)`; the fragment stage draws a soft
    /// radial sprite in the particle's color.
    pub fn shader_source(&self) -> String {
        r#"struct Globals {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
}

struct ParticleUniforms {
    time: f32,
    size_scale: f32,
    _pad: vec2<f32>,
}

@group(0) @binding(0)
var<uniform> globals: Globals;

@group(0) @binding(1)
var<uniform> field: ParticleUniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
    @location(1) uv: vec2<f32>,
}

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) particle_pos: vec3<f32>,
    @location(1) particle_size: f32,
    @location(2) particle_color: vec3<f32>,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );
    let quad_pos = quad_vertices[vertex_index];

    // Animated size based on time and position
    let wave = sin(field.time * 3.0 + particle_pos.x + particle_pos.y) * 0.3;
    let animated = particle_size * (1.0 + wave) * field.size_scale * 0.01;

    var clip_pos = globals.view_proj * globals.model * vec4<f32>(particle_pos, 1.0);
    clip_pos.x += quad_pos.x * animated * clip_pos.w;
    clip_pos.y += quad_pos.y * animated * clip_pos.w;

    var out: VertexOutput;
    out.clip_position = clip_pos;
    out.color = particle_color;
    out.uv = quad_pos;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let dist = length(in.uv);
    if dist > 1.0 {
        discard;
    }
    // Soft radial sprite
    let alpha = (1.0 - smoothstep(0.3, 1.0, dist)) * 0.8;
    return vec4<f32>(in.color, alpha);
}
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeId;
    use rand::SeedableRng;

    fn field(count: u32, seed: u64) -> ParticleField {
        ParticleField::new(
            count,
            1.5,
            &ThemeId::Spartan.theme(),
            SmallRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let result = ParticleField::new(
            0,
            1.5,
            &ThemeId::Spartan.theme(),
            SmallRng::seed_from_u64(0),
        );
        assert_eq!(result.err(), Some(ConfigError::ParticleCount(0)));
    }

    #[test]
    fn test_buffers_stay_lock_step() {
        let f = field(500, 1);
        assert_eq!(f.positions().len(), 500);
        assert_eq!(f.colors().len(), 500);
        assert_eq!(f.sizes().len(), 500);
        assert_eq!(f.lifetimes().len(), 500);
        assert_eq!(f.kinds().len(), 500);
    }

    #[test]
    fn test_seeded_fields_are_reproducible() {
        let a = field(100, 42);
        let b = field(100, 42);
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.lifetimes(), b.lifetimes());
    }

    #[test]
    fn test_velocity_noise_is_bounded() {
        let f = field(1000, 2);
        for v in &f.velocities {
            assert!(v.x.abs() <= VELOCITY_NOISE);
            assert!(v.y.abs() <= VELOCITY_NOISE);
            assert!(v.z.abs() <= VELOCITY_NOISE);
        }
    }

    #[test]
    fn test_sizes_in_range() {
        let f = field(1000, 3);
        for &s in f.sizes() {
            assert!((1.0..4.0).contains(&s));
        }
    }

    #[test]
    fn test_lifetime_invariant_over_many_frames() {
        let mut f = field(300, 4);
        for _ in 0..600 {
            f.advance(0.016);
            for &lt in f.lifetimes() {
                assert!((0.0..1.0).contains(&lt), "lifetime {} escaped [0,1)", lt);
            }
        }
    }

    #[test]
    fn test_wrap_at_exact_boundary() {
        let mut f = field(1, 5);
        // Force the lifetime to land exactly on 1.0 after one step.
        f.lifetimes[0] = 1.0 - LIFETIME_STEP;
        f.advance(0.016);
        assert_eq!(f.lifetimes()[0], 0.0);
    }

    #[test]
    fn test_respawn_lands_within_jitter_bound() {
        let mut f = field(200, 6);
        for frame in 0..600 {
            let before: Vec<f32> = f.lifetimes().to_vec();
            f.advance(0.016);
            for i in 0..f.len() {
                if f.lifetimes()[i] < before[i] {
                    let delta = f.positions()[i] - f.initial_positions()[i];
                    assert!(
                        delta.x.abs() <= RESPAWN_JITTER
                            && delta.y.abs() <= RESPAWN_JITTER
                            && delta.z.abs() <= RESPAWN_JITTER,
                        "frame {} particle {} respawned {:?} from anchor",
                        frame,
                        i,
                        delta
                    );
                }
            }
        }
    }

    #[test]
    fn test_lifetime_step_is_frame_rate_independent() {
        let mut slow = field(50, 7);
        let mut fast = field(50, 7);
        slow.advance(0.032);
        fast.advance(0.016);
        fast.advance(0.016);
        for i in 0..50 {
            assert!((slow.lifetimes()[i] - fast.lifetimes()[i]).abs() < 1e-5);
        }
    }

    #[test]
    fn test_retint_is_idempotent() {
        let mut f = field(100, 8);
        let covenant = ThemeId::Covenant.theme();
        f.retint(&covenant);
        let once: Vec<Vec3> = f.colors().to_vec();
        f.retint(&covenant);
        assert_eq!(f.colors(), &once[..]);
    }

    #[test]
    fn test_reshuffle_changes_mixes() {
        let mut f = field(200, 9);
        let before = f.mixes.clone();
        f.reshuffle(&ThemeId::Spartan.theme());
        assert_ne!(f.mixes, before);
    }

    #[test]
    fn test_colors_lie_between_theme_endpoints() {
        let f = field(500, 10);
        let theme = ThemeId::Spartan.theme();
        let lo = theme.primary_vec3().min(theme.secondary_vec3());
        let hi = theme.primary_vec3().max(theme.secondary_vec3());
        for c in f.colors() {
            assert!(c.x >= lo.x - 1e-6 && c.x <= hi.x + 1e-6);
            assert!(c.y >= lo.y - 1e-6 && c.y <= hi.y + 1e-6);
            assert!(c.z >= lo.z - 1e-6 && c.z <= hi.z + 1e-6);
        }
    }

    #[test]
    fn test_dirty_flag_cycle() {
        let mut f = field(10, 11);
        assert!(f.take_dirty());
        assert!(!f.is_dirty());
        f.advance(0.016);
        assert!(f.take_dirty());
    }

    #[test]
    fn test_write_instances_packs_everything() {
        let mut f = field(64, 12);
        f.advance(0.016);
        let mut out = Vec::new();
        f.write_instances(&mut out);
        assert_eq!(out.len(), 64);
        assert_eq!(out[0].position, f.positions()[0].to_array());
        assert_eq!(out[0].size, f.sizes()[0]);
    }
}
