//! The summonable platform: a single transient ledge the player can
//! conjure under their feet, on a cooldown.

use serde::{Deserialize, Serialize};
use skybridge_core::color::Color;
use skybridge_core::geometry::Rect;

use crate::config::SidescrollerConfig;
use crate::level::Platform;

/// A live summoned platform and the moment it appeared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummonedPlatform {
    pub platform: Platform,
    pub created_at_ms: u64,
}

/// Lifecycle change reported by [`PlatformSummoner::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummonEvent {
    Summoned { x: f32, y: f32 },
    Expired,
}

/// Tracks the single summoned platform, the summon cooldown, and the
/// edge state of the summon key.
#[derive(Debug, Clone, Default)]
pub struct PlatformSummoner {
    active: Option<SummonedPlatform>,
    /// Timestamp of the last placement. `None` until the first summon,
    /// so a fresh game is never on cooldown.
    last_summon_ms: Option<u64>,
    summon_was_held: bool,
}

impl PlatformSummoner {
    pub fn active(&self) -> Option<&SummonedPlatform> {
        self.active.as_ref()
    }

    /// Whether a summon at `now_ms` would be rejected by the cooldown.
    pub fn on_cooldown(&self, now_ms: u64, config: &SidescrollerConfig) -> bool {
        self.last_summon_ms
            .is_some_and(|placed| now_ms.saturating_sub(placed) < config.summon_cooldown_ms)
    }

    /// Advance the summon lifecycle by one tick.
    ///
    /// A platform appears on the rising edge of the summon key, centered
    /// under `actor` and just below its feet, provided no platform is
    /// already out and the cooldown has elapsed. Holding the key does
    /// nothing further until it is released and pressed again.
    ///
    /// The placement attempt is evaluated before expiry, so a press on
    /// the exact tick a platform times out is rejected and the player
    /// has to press again.
    pub fn update(
        &mut self,
        summon_held: bool,
        actor: &Rect,
        now_ms: u64,
        config: &SidescrollerConfig,
    ) -> Option<SummonEvent> {
        let pressed = summon_held && !self.summon_was_held;
        self.summon_was_held = summon_held;

        let mut event = None;

        if pressed && self.active.is_none() && !self.on_cooldown(now_ms, config) {
            let x = actor.x + actor.w / 2.0 - config.summon_width / 2.0;
            let y = actor.bottom() + config.summon_drop_gap;
            let platform = Platform {
                bounds: Rect::new(x, y, config.summon_width, config.summon_height),
                color: Color::AQUA,
            };
            self.active = Some(SummonedPlatform {
                platform,
                created_at_ms: now_ms,
            });
            self.last_summon_ms = Some(now_ms);
            event = Some(SummonEvent::Summoned { x, y });
        }

        if let Some(live) = &self.active
            && now_ms.saturating_sub(live.created_at_ms) > config.summon_lifetime_ms
        {
            self.active = None;
            event = Some(SummonEvent::Expired);
        }

        event
    }
}
