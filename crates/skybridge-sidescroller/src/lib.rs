//! Sidescroller simulation: a single player, fixed level geometry, spike
//! hazards, and one summonable platform on a cooldown.
//!
//! The world is advanced by [`SidescrollerWorld::tick`], which takes the
//! current input snapshot and a monotonic timestamp and returns the events
//! that happened. Rendering, windowing, and input decoding live outside
//! this crate; the world only emits draw commands via `renderables`.

pub mod config;
pub mod level;
pub mod player;
pub mod summon;

use serde::{Deserialize, Serialize};

use skybridge_core::color::Color;
use skybridge_core::input::InputSnapshot;
use skybridge_core::scene::Renderable;

use config::SidescrollerConfig;
use level::{Hazard, Level, Platform};
use player::PlayerState;
use summon::{PlatformSummoner, SummonEvent, SummonedPlatform};

/// Events emitted by a world tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickEvent {
    PlatformSummoned { x: f32, y: f32 },
    PlatformExpired,
    PlayerRespawned,
}

/// The whole game state: level, player, and summoned-platform lifecycle.
pub struct SidescrollerWorld {
    config: SidescrollerConfig,
    level: Level,
    player: PlayerState,
    summoner: PlatformSummoner,
}

impl SidescrollerWorld {
    pub fn new(level: Level, config: SidescrollerConfig) -> Self {
        let player = PlayerState::new(level.spawn_x, level.spawn_y, &config);
        Self {
            config,
            level,
            player,
            summoner: PlatformSummoner::default(),
        }
    }

    pub fn config(&self) -> &SidescrollerConfig {
        &self.config
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn summoned_platform(&self) -> Option<&SummonedPlatform> {
        self.summoner.active()
    }

    /// Every surface the player can currently land on: the level's static
    /// platforms plus the summoned one while it is out.
    pub fn solid_platforms(&self) -> impl Iterator<Item = &Platform> {
        self.level
            .platforms
            .iter()
            .chain(self.summoner.active().map(|s| &s.platform))
    }

    pub fn hazards(&self) -> impl Iterator<Item = &Hazard> {
        self.level.hazards.iter()
    }

    /// Advance the simulation by one tick.
    ///
    /// Order within the tick: summoned-platform lifecycle first, then
    /// player movement against the resulting set of solids, then hazard
    /// contact. A platform summoned this tick is already solid for this
    /// tick's movement.
    pub fn tick(&mut self, input: &InputSnapshot, now_ms: u64) -> Vec<TickEvent> {
        let mut events = Vec::new();

        match self
            .summoner
            .update(input.summon, &self.player.bounds(), now_ms, &self.config)
        {
            Some(SummonEvent::Summoned { x, y }) => {
                tracing::debug!(x, y, now_ms, "Summoned platform placed");
                events.push(TickEvent::PlatformSummoned { x, y });
            },
            Some(SummonEvent::Expired) => {
                tracing::debug!(now_ms, "Summoned platform expired");
                events.push(TickEvent::PlatformExpired);
            },
            None => {},
        }

        let summoned_bounds = self.summoner.active().map(|s| &s.platform.bounds);
        player::update_player(
            &mut self.player,
            input,
            &self.level,
            summoned_bounds,
            &self.config,
        );

        let player_bounds = self.player.bounds();
        if self
            .level
            .hazards
            .iter()
            .any(|h| player_bounds.overlaps(&h.bounds))
        {
            tracing::debug!(
                x = self.player.x,
                y = self.player.y,
                "Player hit a hazard, respawning"
            );
            self.player.respawn();
            events.push(TickEvent::PlayerRespawned);
        }

        events
    }

    /// Draw commands for the current state, back to front: static
    /// platforms, hazards, the summoned platform, then the player.
    pub fn renderables(&self) -> Vec<Renderable> {
        let mut out = Vec::new();
        for platform in &self.level.platforms {
            out.push(Renderable::rect(platform.bounds, platform.color));
        }
        for hazard in &self.level.hazards {
            out.push(Renderable::spike(hazard.bounds, Color::RED));
        }
        if let Some(live) = self.summoner.active() {
            out.push(Renderable::rect(live.platform.bounds, live.platform.color));
        }
        out.push(Renderable::rect(self.player.bounds(), Color::GREEN));
        out
    }
}

impl Default for SidescrollerWorld {
    fn default() -> Self {
        Self::new(Level::builtin(), SidescrollerConfig::default())
    }
}
