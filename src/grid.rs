use rand::Rng;
use serde::Serialize;

/// Movement headings for the snake and for moving food.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

/// Axis a heading travels along.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Up | Self::Down => Axis::Vertical,
        }
    }

    /// Unit step for this heading; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Grid position in cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Moves `magnitude` cells along `heading`.
    #[must_use]
    pub fn stepped(self, heading: Heading, magnitude: i32) -> Self {
        let (dx, dy) = heading.delta();
        self.translated(dx * magnitude, dy * magnitude)
    }

    /// Proximity test: both axis distances are within `tolerance`.
    ///
    /// A tolerance of zero degenerates to exact equality.
    #[must_use]
    pub fn is_near(self, other: Position, tolerance: i32) -> bool {
        self == other
            || ((self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance)
    }
}

/// Where a coordinate sits relative to the two edges of one axis.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Edge {
    Min,
    Inside,
    Max,
}

impl Edge {
    fn classify(value: i32, max: i32) -> Self {
        if value <= 0 {
            Self::Min
        } else if value >= max {
            Self::Max
        } else {
            Self::Inside
        }
    }
}

/// Boundary zone of a position: interior, one of four edges, or one of
/// four corners.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Zone {
    pub x: Edge,
    pub y: Edge,
}

impl Zone {
    #[must_use]
    pub fn is_interior(self) -> bool {
        self.x == Edge::Inside && self.y == Edge::Inside
    }

    /// Returns false when a unit step along `heading` would leave the arena.
    #[must_use]
    pub fn allows(self, heading: Heading) -> bool {
        match heading {
            Heading::Left => self.x != Edge::Min,
            Heading::Right => self.x != Edge::Max,
            Heading::Up => self.y != Edge::Min,
            Heading::Down => self.y != Edge::Max,
        }
    }
}

/// Playable rectangle in cells plus the inset used when placing items.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Arena {
    pub width: u16,
    pub height: u16,
    pub spawn_margin: u16,
}

impl Arena {
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < i32::from(self.width)
            && position.y < i32::from(self.height)
    }

    #[must_use]
    pub fn center(self) -> Position {
        Position::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    #[must_use]
    pub fn zone_of(self, position: Position) -> Zone {
        Zone {
            x: Edge::classify(position.x, i32::from(self.width) - 1),
            y: Edge::classify(position.y, i32::from(self.height) - 1),
        }
    }

    /// Iterates every cell of the spawn rectangle, row by row.
    pub fn spawn_cells(self) -> impl Iterator<Item = Position> {
        let margin = i32::from(self.spawn_margin);
        let max_x = i32::from(self.width) - 1 - margin;
        let max_y = i32::from(self.height) - 1 - margin;

        (margin..=max_y).flat_map(move |y| (margin..=max_x).map(move |x| Position::new(x, y)))
    }

    /// Cells of the spawn rectangle for which `is_blocked` is false.
    pub fn free_spawn_cells(self, is_blocked: impl Fn(Position) -> bool) -> Vec<Position> {
        self.spawn_cells()
            .filter(|position| !is_blocked(*position))
            .collect()
    }

    /// Picks a uniformly random free spawn cell, falling back to any spawn
    /// cell when everything is blocked.
    #[must_use]
    pub fn random_spawn_cell<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        is_blocked: impl Fn(Position) -> bool,
    ) -> Position {
        let mut candidates = self.free_spawn_cells(is_blocked);
        if candidates.is_empty() {
            candidates = self.spawn_cells().collect();
        }

        if candidates.is_empty() {
            return self.center();
        }

        let index = rng.gen_range(0..candidates.len());
        candidates[index]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{Arena, Edge, Heading, Position, Zone};

    const ARENA: Arena = Arena {
        width: 10,
        height: 8,
        spawn_margin: 1,
    };

    #[test]
    fn near_accepts_offsets_up_to_tolerance() {
        let origin = Position::new(0, 0);

        assert!(origin.is_near(Position::new(0, 0), 0));
        assert!(origin.is_near(Position::new(2, 2), 2));
        assert!(origin.is_near(Position::new(-2, 1), 2));
        assert!(!origin.is_near(Position::new(3, 0), 2));
        assert!(!origin.is_near(Position::new(1, 0), 0));
    }

    #[test]
    fn stepping_follows_heading_and_magnitude() {
        let start = Position::new(5, 5);

        assert_eq!(start.stepped(Heading::Up, 1), Position::new(5, 4));
        assert_eq!(start.stepped(Heading::Down, 2), Position::new(5, 7));
        assert_eq!(start.stepped(Heading::Left, 3), Position::new(2, 5));
        assert_eq!(start.stepped(Heading::Right, 1), Position::new(6, 5));
        assert_eq!(start.translated(-1, 2), Position::new(4, 7));
    }

    #[test]
    fn zones_cover_edges_and_corners() {
        assert!(ARENA.zone_of(Position::new(4, 4)).is_interior());
        assert_eq!(
            ARENA.zone_of(Position::new(0, 0)),
            Zone {
                x: Edge::Min,
                y: Edge::Min
            }
        );
        assert_eq!(
            ARENA.zone_of(Position::new(9, 7)),
            Zone {
                x: Edge::Max,
                y: Edge::Max
            }
        );
        assert_eq!(
            ARENA.zone_of(Position::new(9, 3)),
            Zone {
                x: Edge::Max,
                y: Edge::Inside
            }
        );
    }

    #[test]
    fn zone_blocks_steps_that_leave_the_arena() {
        for y in 0..8 {
            for x in 0..10 {
                let position = Position::new(x, y);
                let zone = ARENA.zone_of(position);
                for heading in Heading::ALL {
                    if zone.allows(heading) {
                        assert!(ARENA.contains(position.stepped(heading, 1)));
                    }
                }
            }
        }
    }

    #[test]
    fn spawn_cells_respect_margin() {
        let cells: Vec<_> = ARENA.spawn_cells().collect();

        assert_eq!(cells.len(), 8 * 6);
        assert!(cells.iter().all(|cell| (1..=8).contains(&cell.x) && (1..=6).contains(&cell.y)));
    }

    #[test]
    fn random_spawn_cell_skips_blocked_cells() {
        let mut rng = StdRng::seed_from_u64(11);
        let blocked = Position::new(1, 1);

        for _ in 0..100 {
            let cell = ARENA.random_spawn_cell(&mut rng, |position| position.x < 8);
            assert_eq!(cell.x, 8);
            assert_ne!(cell, blocked);
        }
    }

    #[test]
    fn random_spawn_cell_falls_back_when_everything_is_blocked() {
        let mut rng = StdRng::seed_from_u64(12);

        let cell = ARENA.random_spawn_cell(&mut rng, |_| true);

        assert!(ARENA.spawn_cells().any(|candidate| candidate == cell));
    }
}
