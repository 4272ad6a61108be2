//! Headless demo: pump the orb ensemble for a few seconds and print what a
//! renderer would see, cycling through the theme catalog along the way.
//!
//! Run with: `cargo run`

use orbfx::prelude::*;

fn main() {
    let mut theme_id = ThemeId::Spartan;
    let mut halo = HaloOrbConfig::new()
        .with_seed(42)
        .build(&theme_id.theme())
        .expect("built-in theme is valid");

    println!("=== OrbFX headless demo ===");
    println!(
        "Particles: {}  Rings: {}  Theme: {}",
        halo.particles().len(),
        halo.rings().len(),
        theme_id.name()
    );

    let mut clock = Clock::fixed(REFERENCE_STEP);
    let mut instances = Vec::new();

    for frame in 1..=480u32 {
        let (elapsed, dt) = clock.update();
        halo.update(dt);

        // Swap themes every two seconds, like a host reacting to UI clicks.
        if frame % 120 == 0 {
            theme_id = theme_id.next();
            halo.apply_theme(&theme_id.theme())
                .expect("built-in theme is valid");
            println!(
                "t={:.2}s  switched theme -> {} (bg #{:06x})",
                elapsed,
                theme_id.name(),
                halo.theme().background_color
            );
        }

        if frame % 60 == 0 {
            if halo.particles_mut().take_dirty() {
                halo.particles().write_instances(&mut instances);
            }
            let orb = halo.orb().uniforms();
            let first = &instances[0];
            println!(
                "t={:.2}s  pulse={:.3}  ring0_angle={:.3}  p0=({:.2}, {:.2}, {:.2})",
                elapsed,
                orb.pulse_intensity,
                halo.rings().in_plane_angle(0),
                first.position[0],
                first.position[1],
                first.position[2],
            );
        }
    }
}
