//! Astro Sweeper entry point
//!
//! On the web the module-load hook in `app` drives everything; the native
//! binary runs a headless sweep of the field as a smoke test of the
//! simulation core.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use astro_sweeper::Settings;
    use astro_sweeper::sim::{GameSession, advance, motion};
    use glam::Vec2;

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = GameSession::new(seed, 800.0, 600.0, Settings::default());
    log::info!(
        "headless session: seed {}, {} stars, {} asteroids",
        seed,
        session.stars.len(),
        session.asteroids.len()
    );

    // Sweep the corners, then return to the center
    let tour = [
        Vec2::new(60.0, 60.0),
        Vec2::new(740.0, 60.0),
        Vec2::new(740.0, 540.0),
        Vec2::new(60.0, 540.0),
        Vec2::new(400.0, 300.0),
    ];
    for target in tour {
        motion::begin_seek(&mut session, target);
        let mut frames = 0;
        while session.moving && frames < 10_000 {
            let outcome = advance(&mut session);
            if outcome.collected > 0 {
                log::info!(
                    "collected {} (total {})",
                    outcome.collected,
                    session.collected
                );
            }
            frames += 1;
        }
    }

    println!(
        "swept {} asteroids, {} remaining",
        session.collected,
        session.asteroids.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is app::start, this is just to satisfy the compiler
}
