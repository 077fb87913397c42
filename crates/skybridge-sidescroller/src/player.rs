//! Player movement: horizontal intent, double jump, gravity, and
//! land-from-above collision against platforms.

use serde::{Deserialize, Serialize};
use skybridge_core::geometry::Rect;
use skybridge_core::input::InputSnapshot;

use crate::config::SidescrollerConfig;
use crate::level::Level;

/// Jumps available before the player has to touch ground again.
pub const MAX_JUMPS: u8 = 2;

/// State of the player actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    pub grounded: bool,
    pub jumps_remaining: u8,
    /// Latch for the jump key. Set when a jump fires, cleared only when
    /// the key is released, so holding the key spends one jump at most.
    pub jump_in_progress: bool,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl PlayerState {
    pub fn new(spawn_x: f32, spawn_y: f32, config: &SidescrollerConfig) -> Self {
        Self {
            x: spawn_x,
            y: spawn_y,
            vx: 0.0,
            vy: 0.0,
            width: config.player_width,
            height: config.player_height,
            grounded: false,
            jumps_remaining: MAX_JUMPS,
            jump_in_progress: false,
            spawn_x,
            spawn_y,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Send the player back to spawn. Position, velocity, and the jump
    /// budget reset; the grounded flag and jump latch carry over.
    pub fn respawn(&mut self) {
        self.x = self.spawn_x;
        self.y = self.spawn_y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.jumps_remaining = MAX_JUMPS;
    }
}

/// Advance the player by one tick against the level's platforms plus an
/// optional summoned platform.
///
/// Collision is land-from-above only: a platform stops the player when
/// their feet cross its top edge while moving downward. There are no
/// side or ceiling collisions against platforms, only the world borders.
pub fn update_player(
    player: &mut PlayerState,
    input: &InputSnapshot,
    level: &Level,
    summoned: Option<&Rect>,
    config: &SidescrollerConfig,
) {
    // Sanitize state that may arrive from deserialization
    player.jumps_remaining = player.jumps_remaining.min(MAX_JUMPS);

    // Horizontal intent is rebuilt from held keys every tick
    player.vx = 0.0;
    if input.move_left {
        player.vx -= config.move_speed;
    }
    if input.move_right {
        player.vx += config.move_speed;
    }

    // Double jump
    if input.jump {
        if player.jumps_remaining > 0 && !player.jump_in_progress {
            player.vy = config.jump_strength;
            player.grounded = false;
            player.jumps_remaining -= 1;
            player.jump_in_progress = true;
        }
    } else {
        player.jump_in_progress = false;
    }

    // Gravity
    player.vy += config.gravity;

    let next_x = player.x + player.vx;
    let next_y = player.y + player.vy;

    // Land-from-above check against every solid surface. The feet must be
    // at or above a platform top this tick and at or below it after the
    // move. When several platforms qualify at once the topmost one wins.
    let mut landing_top: Option<f32> = None;
    if player.vy >= 0.0 {
        let solids = level.platforms.iter().map(|p| &p.bounds).chain(summoned);
        for plat in solids {
            let within_x = next_x + player.width > plat.x && next_x < plat.x + plat.w;
            let falling_onto =
                player.y + player.height <= plat.y && next_y + player.height >= plat.y;
            if within_x && falling_onto {
                landing_top = Some(match landing_top {
                    Some(top) => top.min(plat.y),
                    None => plat.y,
                });
            }
        }
    }

    // Commit the move
    player.x = next_x;
    match landing_top {
        Some(top) => {
            player.y = top - player.height;
            player.vy = 0.0;
            player.grounded = true;
        },
        None => {
            player.y = next_y;
            player.grounded = false;
        },
    }

    // World borders
    if player.x < 0.0 {
        player.x = 0.0;
    }
    if player.x + player.width > level.world_width {
        player.x = level.world_width - player.width;
    }
    if player.y < 0.0 {
        player.y = 0.0;
    }
    if player.y + player.height > level.world_height {
        player.y = level.world_height - player.height;
        player.vy = 0.0;
        player.grounded = true;
    }

    if player.grounded {
        player.jumps_remaining = MAX_JUMPS;
    }
}
