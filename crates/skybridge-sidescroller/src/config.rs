use serde::{Deserialize, Serialize};

/// Downward acceleration per tick (px/tick^2).
pub const GRAVITY: f32 = 0.5;
/// Horizontal speed while a direction is held (px/tick).
pub const MOVE_SPEED: f32 = 3.0;
/// Vertical velocity set by a jump (negative = upward, px/tick).
pub const JUMP_STRENGTH: f32 = -10.0;
/// Player bounding-box width (px).
pub const PLAYER_WIDTH: f32 = 50.0;
/// Player bounding-box height (px).
pub const PLAYER_HEIGHT: f32 = 50.0;
/// Summoned platform width (px).
pub const SUMMON_WIDTH: f32 = 100.0;
/// Summoned platform height (px).
pub const SUMMON_HEIGHT: f32 = 15.0;
/// Gap between the player's feet and the summoned platform's top (px).
pub const SUMMON_DROP_GAP: f32 = 2.0;
/// How long a summoned platform stays solid (ms).
pub const SUMMON_LIFETIME_MS: u64 = 5000;
/// Minimum delay between summons, measured from when the last one was
/// placed (ms).
pub const SUMMON_COOLDOWN_MS: u64 = 5000;

/// Tuning parameters for the sidescroller, loadable from TOML.
///
/// Level layout is deliberately not part of this: the world geometry is
/// fixed data, only the feel of the simulation is tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidescrollerConfig {
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_strength: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub summon_width: f32,
    pub summon_height: f32,
    pub summon_drop_gap: f32,
    pub summon_lifetime_ms: u64,
    pub summon_cooldown_ms: u64,
}

impl Default for SidescrollerConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_strength: JUMP_STRENGTH,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            summon_width: SUMMON_WIDTH,
            summon_height: SUMMON_HEIGHT,
            summon_drop_gap: SUMMON_DROP_GAP,
            summon_lifetime_ms: SUMMON_LIFETIME_MS,
            summon_cooldown_ms: SUMMON_COOLDOWN_MS,
        }
    }
}

impl SidescrollerConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("SKYBRIDGE_CONFIG")
            .unwrap_or_else(|_| "config/sidescroller.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<SidescrollerConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    SidescrollerConfig::default()
                },
            },
            Err(_) => SidescrollerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_wired_to_constants() {
        let cfg = SidescrollerConfig::default();
        assert_eq!(cfg.gravity, GRAVITY);
        assert_eq!(cfg.jump_strength, JUMP_STRENGTH);
        assert_eq!(cfg.summon_lifetime_ms, SUMMON_LIFETIME_MS);
        assert_eq!(cfg.summon_cooldown_ms, SUMMON_COOLDOWN_MS);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let cfg: SidescrollerConfig = toml::from_str("gravity = 1.25\nmove_speed = 6.0").unwrap();
        assert_eq!(cfg.gravity, 1.25);
        assert_eq!(cfg.move_speed, 6.0);
        assert_eq!(cfg.jump_strength, JUMP_STRENGTH);
        assert_eq!(cfg.player_width, PLAYER_WIDTH);
    }

    #[test]
    fn full_roundtrip_through_toml() {
        let cfg = SidescrollerConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        let back: SidescrollerConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.gravity, cfg.gravity);
        assert_eq!(back.summon_width, cfg.summon_width);
        assert_eq!(back.summon_cooldown_ms, cfg.summon_cooldown_ms);
    }
}
