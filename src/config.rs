use std::time::Duration;

use ratatui::style::Color;
use serde::Serialize;

use crate::error::ConfigError;
use crate::food::FoodCategory;
use crate::grid::Arena;
use crate::snake::STARTING_BODY_LEN;

/// Default playable width in cells.
pub const DEFAULT_ARENA_WIDTH: u16 = 30;

/// Default playable height in cells.
pub const DEFAULT_ARENA_HEIGHT: u16 = 20;

/// Default inset, in cells, kept clear when placing food and rocks.
pub const DEFAULT_SPAWN_MARGIN: u16 = 2;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

pub const DEFAULT_FOOD_COUNT: u16 = 1;
pub const DEFAULT_ROCKS_MIN: u16 = 4;
pub const DEFAULT_ROCKS_MAX: u16 = 8;

/// Smallest arena width that holds the starting snake: the head sits at
/// `width / 2` with its body trailing to the left, so `width / 2` must
/// exceed the body length.
pub const MIN_ARENA_WIDTH: u16 = 2 * (STARTING_BODY_LEN as u16 + 1);

/// Smallest arena height.
pub const MIN_ARENA_HEIGHT: u16 = 5;

/// Terminal columns used to draw one cell.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_CELL: &str = "██";
pub const GLYPH_FOOD: &str = "<>";
pub const GLYPH_ROCK: &str = "▓▓";

pub const COLOR_SNAKE_HEAD: Color = Color::LightBlue;
pub const COLOR_SNAKE_BODY: Color = Color::Blue;
pub const COLOR_ROCK: Color = Color::Gray;
pub const COLOR_BORDER: Color = Color::Red;
pub const COLOR_HUD: Color = Color::White;
pub const COLOR_TITLE: Color = Color::Green;

/// Display color for a food category.
#[must_use]
pub fn food_color(category: FoodCategory) -> Color {
    match category {
        FoodCategory::Stationary => Color::Red,
        FoodCategory::Erratic => Color::Yellow,
        FoodCategory::Evasive => Color::Magenta,
    }
}

/// Everything needed to build a session.
#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub arena: Arena,
    pub tick_interval_ms: u64,
    pub food_count: u16,
    pub rocks_min: u16,
    pub rocks_max: u16,
    /// Proximity tolerance, in cells, for eating food.
    pub food_tolerance: i32,
    /// Proximity tolerance, in cells, for hitting a rock.
    pub rock_tolerance: i32,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena: Arena {
                width: DEFAULT_ARENA_WIDTH,
                height: DEFAULT_ARENA_HEIGHT,
                spawn_margin: DEFAULT_SPAWN_MARGIN,
            },
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            food_count: DEFAULT_FOOD_COUNT,
            rocks_min: DEFAULT_ROCKS_MIN,
            rocks_max: DEFAULT_ROCKS_MAX,
            food_tolerance: 0,
            rock_tolerance: 0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Checks values that can be rejected without generating a board.
    ///
    /// Whether rocks and food fit beside the starting snake is checked when
    /// the session is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Arena {
            width,
            height,
            spawn_margin,
        } = self.arena;

        if width < MIN_ARENA_WIDTH || height < MIN_ARENA_HEIGHT {
            return Err(ConfigError::ArenaTooSmall {
                width,
                height,
                min_width: MIN_ARENA_WIDTH,
                min_height: MIN_ARENA_HEIGHT,
            });
        }

        if u32::from(spawn_margin) * 2 >= u32::from(width.min(height)) {
            return Err(ConfigError::MarginTooLarge {
                margin: spawn_margin,
                width,
                height,
            });
        }

        if self.food_count == 0 {
            return Err(ConfigError::NoFood);
        }

        if self.rocks_min > self.rocks_max {
            return Err(ConfigError::InvertedRockRange {
                min: self.rocks_min,
                max: self.rocks_max,
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(())
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use crate::error::ConfigError;
    use crate::food::FoodCategory;

    use super::{GameConfig, MIN_ARENA_HEIGHT, MIN_ARENA_WIDTH, food_color};

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn tiny_arena_is_rejected() {
        let mut config = GameConfig::default();
        config.arena.width = 4;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArenaTooSmall { width: 4, .. })
        ));
    }

    #[test]
    fn minimum_width_leaves_room_for_the_starting_snake() {
        let mut config = GameConfig::default();
        config.arena.width = MIN_ARENA_WIDTH - 1;
        config.arena.height = MIN_ARENA_HEIGHT;
        config.arena.spawn_margin = 1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ArenaTooSmall {
                width: MIN_ARENA_WIDTH - 1,
                height: MIN_ARENA_HEIGHT,
                min_width: MIN_ARENA_WIDTH,
                min_height: MIN_ARENA_HEIGHT,
            })
        );

        config.arena.width = MIN_ARENA_WIDTH;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn each_food_category_has_its_own_color() {
        assert_eq!(food_color(FoodCategory::Stationary), Color::Red);
        assert_eq!(food_color(FoodCategory::Erratic), Color::Yellow);
        assert_eq!(food_color(FoodCategory::Evasive), Color::Magenta);
    }

    #[test]
    fn margin_must_leave_a_spawn_rectangle() {
        let mut config = GameConfig::default();
        config.arena.height = 8;
        config.arena.spawn_margin = 4;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MarginTooLarge { margin: 4, .. })
        ));
    }

    #[test]
    fn inverted_rock_range_and_empty_food_are_rejected() {
        let mut config = GameConfig::default();
        config.rocks_min = 9;
        config.rocks_max = 3;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedRockRange { min: 9, max: 3 })
        );

        let mut config = GameConfig::default();
        config.food_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoFood));
    }
}
