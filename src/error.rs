use thiserror::Error;

/// Problems detected while building a session from its configuration.
///
/// These are reported once, before the first tick; nothing inside a tick
/// can fail.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("arena {width}x{height} is smaller than the {min_width}x{min_height} minimum")]
    ArenaTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("spawn margin {margin} leaves no room inside a {width}x{height} arena")]
    MarginTooLarge { margin: u16, width: u16, height: u16 },

    #[error("at least one food item is required")]
    NoFood,

    #[error("rock range is inverted ({min} > {max})")]
    InvertedRockRange { min: u16, max: u16 },

    #[error("cannot place {requested} rocks: only {available} free cells")]
    TooManyRocks { requested: usize, available: usize },

    #[error("cannot place {requested} food items: only {available} free cells left after rocks")]
    TooManyFoods { requested: usize, available: usize },

    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}
