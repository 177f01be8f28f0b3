use rand::Rng;
use rand::seq::index;

use crate::grid::{Arena, Position};

/// Fixed set of obstacle cells for one play-through.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Rocks {
    cells: Vec<Position>,
}

impl Rocks {
    #[must_use]
    pub fn from_cells(cells: Vec<Position>) -> Self {
        Self { cells }
    }

    /// Places up to `count` rocks on distinct spawn cells for which
    /// `is_blocked` is false.
    ///
    /// Never places more rocks than there are free cells; callers check
    /// capacity up front.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        arena: Arena,
        count: usize,
        is_blocked: impl Fn(Position) -> bool,
    ) -> Self {
        let candidates = arena.free_spawn_cells(is_blocked);
        let count = count.min(candidates.len());

        let cells = index::sample(rng, candidates.len(), count)
            .into_iter()
            .map(|i| candidates[i])
            .collect();

        Self { cells }
    }

    /// Returns true when `position` is within `tolerance` of any rock.
    #[must_use]
    pub fn collides_with(&self, position: Position, tolerance: i32) -> bool {
        self.cells
            .iter()
            .any(|rock| position.is_near(*rock, tolerance))
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::grid::{Arena, Position};

    use super::Rocks;

    const ARENA: Arena = Arena {
        width: 8,
        height: 6,
        spawn_margin: 1,
    };

    #[test]
    fn generated_rocks_are_distinct_and_avoid_blocked_cells() {
        let mut rng = StdRng::seed_from_u64(9);
        let blocked = Position::new(3, 3);

        let rocks = Rocks::generate(&mut rng, ARENA, 20, |position| position == blocked);

        let unique: HashSet<_> = rocks.cells().iter().copied().collect();
        assert_eq!(rocks.len(), 20);
        assert_eq!(unique.len(), 20);
        assert!(!rocks.contains(blocked));
        assert!(rocks.cells().iter().all(|cell| ARENA.contains(*cell)));
    }

    #[test]
    fn generation_stops_at_the_free_cell_count() {
        let mut rng = StdRng::seed_from_u64(10);

        let rocks = Rocks::generate(&mut rng, ARENA, 25, |position| position.y == 1);

        assert_eq!(rocks.len(), 18);
        assert!(rocks.cells().iter().all(|cell| cell.y != 1));
    }

    #[test]
    fn collision_uses_tolerance() {
        let rocks = Rocks::from_cells(vec![Position::new(4, 4)]);

        assert!(rocks.collides_with(Position::new(4, 4), 0));
        assert!(!rocks.collides_with(Position::new(5, 4), 0));
        assert!(rocks.collides_with(Position::new(5, 5), 1));
        assert!(!rocks.collides_with(Position::new(6, 4), 1));
    }
}
