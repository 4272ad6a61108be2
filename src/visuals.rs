//! The compositing contract between components and the rendering backend.
//!
//! Each component reports the [`DrawSettings`] its material requires. The
//! backend is free to rasterize however it likes, but honoring these flags is
//! part of the visual contract: the glow and the particle sprites are
//! additive and depth-ignoring so they layer over the orb instead of
//! occluding it.

/// Blend mode for a component's draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending (default).
    ///
    /// Used by the orb body, whose rim transparency reads against the
    /// background.
    #[default]
    Alpha,

    /// Additive blending.
    ///
    /// Colors accumulate, so overlapping fragments glow brighter. Used by
    /// the particle sprites, rings, and glow shell.
    Additive,
}

/// Which faces the backend should rasterize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Front faces only.
    #[default]
    Front,
    /// Back faces only: the glow shell is an inverted hull.
    Back,
    /// Both faces: thin geometry like rings and the displaced orb skin.
    Both,
}

/// Rasterization flags a component's material requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSettings {
    /// How fragments combine with the framebuffer.
    pub blend_mode: BlendMode,
    /// Whether the depth test applies. Depth-ignoring draws never occlude
    /// or get occluded; they composite purely by blending.
    pub depth_test: bool,
    /// Face culling contract.
    pub facing: Facing,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            blend_mode: BlendMode::Alpha,
            depth_test: true,
            facing: Facing::Front,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DrawSettings::default();
        assert_eq!(settings.blend_mode, BlendMode::Alpha);
        assert!(settings.depth_test);
        assert_eq!(settings.facing, Facing::Front);
    }
}
