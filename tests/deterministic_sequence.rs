use std::time::{Duration, Instant};

use snake_arcade::config::GameConfig;
use snake_arcade::driver::TickDriver;
use snake_arcade::food::{Food, FoodCategory};
use snake_arcade::game::{DeathReason, GameState, GameStatus};
use snake_arcade::grid::{Arena, Heading, Position};
use snake_arcade::input::GameInput;
use snake_arcade::rocks::Rocks;
use snake_arcade::snake::Snake;

fn config() -> GameConfig {
    GameConfig {
        arena: Arena {
            width: 10,
            height: 8,
            spawn_margin: 1,
        },
        rocks_min: 0,
        rocks_max: 0,
        ..GameConfig::default()
    }
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(config(), 42).expect("valid config");
    state.enqueue(GameInput::Other);
    state.process_commands();
    assert_eq!(state.status, GameStatus::Running);

    state.snake = Snake::new(Position::new(4, 3), Heading::Right);
    state.foods = vec![Food::new(Position::new(5, 3), FoodCategory::Stationary)];
    state.rocks = Rocks::default();

    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.scoreboard.score, 1);
    assert_eq!(state.snake.len(), 5);
    assert_eq!(state.snake.head(), Position::new(5, 3));

    state.foods = vec![Food::new(Position::new(8, 6), FoodCategory::Stationary)];
    state.enqueue(GameInput::Turn(Heading::Up));
    for expected_y in [2, 1, 0] {
        state.tick();
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.head(), Position::new(5, expected_y));
    }

    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::Wall));
    assert_eq!(state.scoreboard.best, 1);

    state.enqueue(GameInput::Confirm);
    state.process_commands();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.scoreboard.score, 0);
    assert_eq!(state.scoreboard.best, 1);
}

#[test]
fn driver_follows_session_status_through_pause_and_game_over() {
    let mut state = GameState::new_with_seed(config(), 7).expect("valid config");
    let interval = state.config().tick_interval();
    let mut driver = TickDriver::new(interval);
    let start = Instant::now();

    driver.sync(state.wants_ticks(), start);
    assert!(!driver.is_running());

    state.enqueue(GameInput::Other);
    state.process_commands();
    driver.sync(state.wants_ticks(), start);
    assert!(driver.is_running());

    state.snake = Snake::new(Position::new(2, 4), Heading::Right);
    state.foods = vec![Food::new(Position::new(8, 1), FoodCategory::Stationary)];
    state.rocks = Rocks::default();

    let mut now = start + interval;
    assert!(driver.poll(now));
    state.tick();
    assert_eq!(state.snake.head(), Position::new(3, 4));

    state.enqueue(GameInput::Pause);
    state.process_commands();
    driver.sync(state.wants_ticks(), now);
    assert!(!driver.is_running());

    now += interval * 3;
    assert!(!driver.poll(now));

    state.enqueue(GameInput::Pause);
    state.process_commands();
    driver.sync(state.wants_ticks(), now);
    assert!(driver.is_running());
    assert_eq!(state.snake.head(), Position::new(3, 4));
    assert_eq!(state.tick_count, 1);

    for _ in 0..20 {
        now += interval;
        if driver.poll(now) {
            state.tick();
            driver.sync(state.wants_ticks(), now);
        }
    }

    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::Wall));
    assert!(!driver.is_running());
    assert!(!driver.poll(now + Duration::from_secs(1)));
}
