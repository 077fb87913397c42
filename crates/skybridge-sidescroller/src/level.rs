//! Level geometry: world bounds, static platforms, and hazards.

use serde::{Deserialize, Serialize};
use skybridge_core::color::Color;
use skybridge_core::geometry::Rect;

/// A static platform the player can stand on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub bounds: Rect,
    pub color: Color,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            bounds: Rect::new(x, y, w, h),
            color: Color::GRAY,
        }
    }
}

/// A lethal spike. Touching it sends the player back to spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub bounds: Rect,
}

impl Hazard {
    /// Spikes are square: `size` is both width and height.
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            bounds: Rect::new(x, y, size, size),
        }
    }
}

/// A complete level: world extents, spawn point, and fixed geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub world_width: f32,
    pub world_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub platforms: Vec<Platform>,
    pub hazards: Vec<Hazard>,
}

impl Level {
    /// The built-in level: a full-width floor, a staircase of ledges
    /// climbing to the right, and spikes guarding the landings.
    pub fn builtin() -> Self {
        Self {
            world_width: 2000.0,
            world_height: 1000.0,
            spawn_x: 150.0,
            spawn_y: 100.0,
            platforms: vec![
                Platform::new(0.0, 950.0, 2000.0, 50.0),
                Platform::new(300.0, 800.0, 250.0, 30.0),
                Platform::new(700.0, 700.0, 250.0, 30.0),
                Platform::new(1300.0, 850.0, 300.0, 25.0),
                Platform::new(1700.0, 600.0, 200.0, 30.0),
                Platform::new(1800.0, 400.0, 120.0, 30.0),
                Platform::new(100.0, 650.0, 180.0, 20.0),
            ],
            hazards: vec![
                Hazard::new(500.0, 920.0, 40.0),
                Hazard::new(900.0, 670.0, 40.0),
                Hazard::new(1350.0, 820.0, 40.0),
                Hazard::new(1800.0, 570.0, 40.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_floor_spans_the_world() {
        let level = Level::builtin();
        let floor = &level.platforms[0].bounds;
        assert_eq!(floor.x, 0.0);
        assert_eq!(floor.w, level.world_width);
        assert_eq!(floor.bottom(), level.world_height);
    }

    #[test]
    fn builtin_spawn_is_inside_the_world() {
        let level = Level::builtin();
        assert!(level.spawn_x >= 0.0 && level.spawn_x < level.world_width);
        assert!(level.spawn_y >= 0.0 && level.spawn_y < level.world_height);
    }

    #[test]
    fn builtin_geometry_fits_inside_the_world() {
        let level = Level::builtin();
        for platform in &level.platforms {
            assert!(platform.bounds.left() >= 0.0);
            assert!(platform.bounds.right() <= level.world_width);
            assert!(platform.bounds.top() >= 0.0);
            assert!(platform.bounds.bottom() <= level.world_height);
        }
        for hazard in &level.hazards {
            assert!(hazard.bounds.left() >= 0.0);
            assert!(hazard.bounds.right() <= level.world_width);
            assert!(hazard.bounds.bottom() <= level.world_height);
        }
    }

    #[test]
    fn hazards_are_anchored_in_a_platform() {
        // Every builtin spike has its base embedded in some platform, so
        // none of them float in mid-air.
        let level = Level::builtin();
        for hazard in &level.hazards {
            let base = hazard.bounds.bottom();
            let anchored = level.platforms.iter().any(|p| {
                base > p.bounds.top()
                    && base <= p.bounds.bottom()
                    && hazard.bounds.left() >= p.bounds.left()
                    && hazard.bounds.right() <= p.bounds.right()
            });
            assert!(anchored, "hazard with base {base} has no supporting platform");
        }
    }

    #[test]
    fn level_roundtrips_through_json() {
        let level = Level::builtin();
        let json = serde_json::to_string(&level).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);
    }
}
