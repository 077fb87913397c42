//! Headless driver for the sidescroller world: runs a fixed input script
//! at 60 Hz against the built-in level and logs what happens. Useful for
//! eyeballing the physics without a renderer attached.

use std::thread;
use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use skybridge_core::clock::GameClock;
use skybridge_core::input::{Action, InputTracker};
use skybridge_sidescroller::config::SidescrollerConfig;
use skybridge_sidescroller::level::Level;
use skybridge_sidescroller::{SidescrollerWorld, TickEvent};

const TICK_HZ: u32 = 60;
const DEFAULT_TICKS: u64 = 720;

enum KeyEdge {
    Press(Action),
    Release(Action),
}

/// Demo route: settle on the starting ledge, walk off it to the floor,
/// double jump, summon a platform mid-fall and perch on it until it
/// expires, then walk right into the first spike and respawn.
const SCRIPT: &[(u64, KeyEdge)] = &[
    (120, KeyEdge::Press(Action::MoveRight)),
    (168, KeyEdge::Release(Action::MoveRight)),
    (240, KeyEdge::Press(Action::Jump)),
    (250, KeyEdge::Release(Action::Jump)),
    (270, KeyEdge::Press(Action::Jump)),
    (280, KeyEdge::Release(Action::Jump)),
    (300, KeyEdge::Press(Action::SummonPlatform)),
    (310, KeyEdge::Release(Action::SummonPlatform)),
    (650, KeyEdge::Press(Action::MoveRight)),
    (710, KeyEdge::Release(Action::MoveRight)),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ticks: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    let config = SidescrollerConfig::load();
    let mut world = SidescrollerWorld::new(Level::builtin(), config);
    let clock = GameClock::new();
    let mut tracker = InputTracker::new();

    tracing::info!(ticks, tick_hz = TICK_HZ, "Skybridge sim starting");

    let tick_duration = Duration::from_secs(1) / TICK_HZ;
    let mut next_deadline = Instant::now() + tick_duration;

    for tick in 0..ticks {
        for (at, edge) in SCRIPT {
            if *at == tick {
                match edge {
                    KeyEdge::Press(action) => tracker.press(*action),
                    KeyEdge::Release(action) => tracker.release(*action),
                }
            }
        }

        let events = world.tick(&tracker.snapshot(), clock.now_ms());
        for event in &events {
            match event {
                TickEvent::PlatformSummoned { x, y } => {
                    tracing::info!(tick, x, y, "platform summoned");
                },
                TickEvent::PlatformExpired => tracing::info!(tick, "platform expired"),
                TickEvent::PlayerRespawned => tracing::info!(tick, "player respawned"),
            }
        }

        if tick % 60 == 0 {
            let p = world.player();
            tracing::info!(tick, x = p.x, y = p.y, grounded = p.grounded, "player state");
        }

        // Deadline pacing: sleep toward an absolute schedule so jitter in
        // one tick does not accumulate into the next.
        if let Some(remaining) = next_deadline.checked_duration_since(Instant::now()) {
            thread::sleep(remaining);
        }
        next_deadline += tick_duration;
    }

    let p = world.player();
    tracing::info!(
        x = p.x,
        y = p.y,
        grounded = p.grounded,
        draw_commands = world.renderables().len(),
        "Skybridge sim finished"
    );
}
