use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::grid::{Arena, Heading, Position};

/// How a food item behaves between bites.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum FoodCategory {
    /// Sits still.
    Stationary,
    /// Wanders one cell in a random legal direction each tick.
    Erratic,
    /// Steps away from the snake head on each axis.
    Evasive,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 3] = [
        FoodCategory::Stationary,
        FoodCategory::Erratic,
        FoodCategory::Evasive,
    ];

    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Food {
    pub position: Position,
    pub category: FoodCategory,
}

impl Food {
    #[must_use]
    pub fn new(position: Position, category: FoodCategory) -> Self {
        Self { position, category }
    }

    /// Spawns food with a random category on a random spawn cell for which
    /// `is_blocked` is false.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        arena: Arena,
        is_blocked: impl Fn(Position) -> bool,
    ) -> Self {
        let position = arena.random_spawn_cell(rng, is_blocked);
        Self::new(position, FoodCategory::random(rng))
    }

    /// Moves the food for one tick according to its category.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, arena: Arena, snake_head: Position) {
        let (dx, dy) = match self.category {
            FoodCategory::Stationary => (0, 0),
            FoodCategory::Erratic => erratic_step(rng, arena, self.position),
            FoodCategory::Evasive => evasive_step(arena, self.position, snake_head),
        };

        self.position = self.position.translated(dx, dy);
    }

    /// Returns true when the snake head is within `tolerance` of this food.
    #[must_use]
    pub fn is_eaten_by(&self, snake_head: Position, tolerance: i32) -> bool {
        self.position.is_near(snake_head, tolerance)
    }
}

fn erratic_step<R: Rng + ?Sized>(rng: &mut R, arena: Arena, position: Position) -> (i32, i32) {
    let zone = arena.zone_of(position);
    let legal: Vec<Heading> = Heading::ALL
        .into_iter()
        .filter(|heading| zone.allows(*heading))
        .collect();

    legal.choose(rng).map_or((0, 0), |heading| heading.delta())
}

fn evasive_step(arena: Arena, position: Position, snake_head: Position) -> (i32, i32) {
    let zone = arena.zone_of(position);

    let dx = match (position.x - snake_head.x).signum() {
        -1 if zone.allows(Heading::Left) => -1,
        1 if zone.allows(Heading::Right) => 1,
        _ => 0,
    };
    let dy = match (position.y - snake_head.y).signum() {
        -1 if zone.allows(Heading::Up) => -1,
        1 if zone.allows(Heading::Down) => 1,
        _ => 0,
    };

    (dx, dy)
}
