use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::food::Food;
use crate::grid::{Arena, Heading, Position};
use crate::input::GameInput;
use crate::rocks::Rocks;
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// What ended the last round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum DeathReason {
    Wall,
    Itself,
    Rock,
}

/// Score of the current round and best score of the process.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct Scoreboard {
    pub score: u32,
    pub best: u32,
}

impl Scoreboard {
    /// Folds the round score into the best score.
    pub fn finish(&mut self) {
        self.best = self.best.max(self.score);
    }

    /// Board for a fresh round carrying the best score forward.
    #[must_use]
    pub fn next_round(self) -> Self {
        Self {
            score: 0,
            best: self.best,
        }
    }
}

/// Read-only view of everything a frame needs.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub status: GameStatus,
    pub score: u32,
    pub best: u32,
    pub head: Position,
    pub heading: Heading,
    pub body: Vec<Position>,
    pub foods: Vec<Food>,
    pub rocks: Vec<Position>,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
}

/// Complete mutable game state for one process.
///
/// Inputs are queued with [`GameState::enqueue`] and drained ahead of each
/// physics update, so a turn or pause never interleaves with a tick.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub foods: Vec<Food>,
    pub rocks: Rocks,
    pub scoreboard: Scoreboard,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    config: GameConfig,
    rng: StdRng,
    commands: VecDeque<GameInput>,
}

impl GameState {
    /// Builds a session from `config`, seeding from the config or from
    /// entropy.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self::with_rng(config, rng)
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        check_board_capacity(&config)?;

        let (snake, rocks, foods) = generate_board(&config, &mut rng);
        tracing::debug!(
            rocks = rocks.len(),
            foods = foods.len(),
            "board generated"
        );

        Ok(Self {
            snake,
            foods,
            rocks,
            scoreboard: Scoreboard::default(),
            status: GameStatus::NotStarted,
            death_reason: None,
            tick_count: 0,
            config,
            rng,
            commands: VecDeque::new(),
        })
    }

    #[must_use]
    pub fn arena(&self) -> Arena {
        self.config.arena
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns true while the tick driver should be running.
    #[must_use]
    pub fn wants_ticks(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Queues an input for the next command drain.
    pub fn enqueue(&mut self, input: GameInput) {
        self.commands.push_back(input);
    }

    /// Applies every queued input in arrival order.
    pub fn process_commands(&mut self) {
        while let Some(input) = self.commands.pop_front() {
            self.apply_input(input);
        }
    }

    /// Applies one input immediately.
    pub fn apply_input(&mut self, input: GameInput) {
        match (self.status, input) {
            (_, GameInput::Quit) => {}
            (GameStatus::NotStarted, _) => {
                tracing::info!("game started");
                self.status = GameStatus::Running;
            }
            (GameStatus::Running, GameInput::Turn(heading)) => self.snake.turn(heading),
            (GameStatus::Running, GameInput::Pause) => {
                tracing::info!(score = self.scoreboard.score, "paused");
                self.status = GameStatus::Paused;
            }
            (GameStatus::Paused, GameInput::Pause) => {
                tracing::info!(score = self.scoreboard.score, "resumed");
                self.status = GameStatus::Running;
            }
            (GameStatus::GameOver, GameInput::Confirm) => self.reset(),
            _ => {}
        }
    }

    /// Drains queued inputs, then advances simulation by one tick.
    pub fn tick(&mut self) {
        self.process_commands();

        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;
        self.snake.advance();

        let arena = self.config.arena;
        let head = self.snake.head();
        for index in 0..self.foods.len() {
            let mut food = self.foods[index];
            food.update(&mut self.rng, arena, head);

            if food.is_eaten_by(head, self.config.food_tolerance) {
                self.snake.add_segment();
                self.scoreboard.score += 1;
                food = spawn_food(&mut self.rng, arena, &self.snake, &self.rocks, &self.foods);
                tracing::debug!(score = self.scoreboard.score, "food eaten");
            }

            self.foods[index] = food;
        }

        if let Some(reason) = self.death_reason_at(head) {
            self.game_over(reason);
        }
    }

    fn death_reason_at(&self, head: Position) -> Option<DeathReason> {
        if !self.config.arena.contains(head) {
            Some(DeathReason::Wall)
        } else if self.snake.head_overlaps_body() {
            Some(DeathReason::Itself)
        } else if self.rocks.collides_with(head, self.config.rock_tolerance) {
            Some(DeathReason::Rock)
        } else {
            None
        }
    }

    fn game_over(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        self.scoreboard.finish();

        tracing::info!(
            ?reason,
            score = self.scoreboard.score,
            best = self.scoreboard.best,
            ticks = self.tick_count,
            "game over"
        );
        match serde_json::to_string(&self.snapshot()) {
            Ok(json) => tracing::debug!(snapshot = %json, "final board"),
            Err(error) => tracing::warn!(%error, "could not serialize final board"),
        }
    }

    /// Starts a fresh round: new snake, food and rocks, score zero, best
    /// score kept.
    pub fn reset(&mut self) {
        let (snake, rocks, foods) = generate_board(&self.config, &mut self.rng);
        self.snake = snake;
        self.rocks = rocks;
        self.foods = foods;

        self.scoreboard = self.scoreboard.next_round();
        self.death_reason = None;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        tracing::info!(best = self.scoreboard.best, "game reset");
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            score: self.scoreboard.score,
            best: self.scoreboard.best,
            head: self.snake.head(),
            heading: self.snake.heading(),
            body: self.snake.body().to_vec(),
            foods: self.foods.clone(),
            rocks: self.rocks.cells().to_vec(),
            death_reason: self.death_reason,
            tick_count: self.tick_count,
        }
    }
}

fn starting_snake(arena: Arena) -> Snake {
    Snake::new(arena.center(), Heading::Right)
}

/// Cells a rock may not take: the snake and the cell its head moves into
/// on the first tick.
fn is_reserved_for_start(snake: &Snake, position: Position) -> bool {
    snake.occupies(position) || position == snake.head().stepped(snake.heading(), 1)
}

/// Builds a fresh round. Capacity was checked by [`check_board_capacity`]
/// when the session was created, so every rock and food gets a free cell.
fn generate_board(config: &GameConfig, rng: &mut StdRng) -> (Snake, Rocks, Vec<Food>) {
    let snake = starting_snake(config.arena);
    let rock_count = usize::from(rng.gen_range(config.rocks_min..=config.rocks_max));
    let rocks = Rocks::generate(rng, config.arena, rock_count, |position| {
        is_reserved_for_start(&snake, position)
    });
    let foods = spawn_foods(config, rng, &snake, &rocks);

    (snake, rocks, foods)
}

fn spawn_foods(config: &GameConfig, rng: &mut StdRng, snake: &Snake, rocks: &Rocks) -> Vec<Food> {
    let mut foods = Vec::with_capacity(usize::from(config.food_count));
    for _ in 0..config.food_count {
        let food = spawn_food(rng, config.arena, snake, rocks, &foods);
        foods.push(food);
    }
    foods
}

fn spawn_food(
    rng: &mut StdRng,
    arena: Arena,
    snake: &Snake,
    rocks: &Rocks,
    others: &[Food],
) -> Food {
    Food::spawn(rng, arena, |position| {
        snake.occupies(position)
            || rocks.contains(position)
            || others.iter().any(|food| food.position == position)
    })
}

/// Rejects configurations where the largest rock count plus every food
/// item cannot each get their own free cell beside a fresh snake.
fn check_board_capacity(config: &GameConfig) -> Result<(), ConfigError> {
    let snake = starting_snake(config.arena);
    let available = config
        .arena
        .spawn_cells()
        .filter(|position| !is_reserved_for_start(&snake, *position))
        .count();
    let rocks = usize::from(config.rocks_max);
    let foods = usize::from(config.food_count);

    if rocks > available {
        return Err(ConfigError::TooManyRocks {
            requested: rocks,
            available,
        });
    }

    if foods > available - rocks {
        return Err(ConfigError::TooManyFoods {
            requested: foods,
            available: available - rocks,
        });
    }

    Ok(())
}
