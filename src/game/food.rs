use rand::Rng;
use rand::seq::IteratorRandom;

use super::config::FoodPlacement;
use super::grid::{Coordinate, Grid};
use super::state::Snake;

/// Food items currently on the board
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPool {
    items: Vec<Coordinate>,
    capacity: usize,
    placement: FoodPlacement,
}

impl FoodPool {
    pub fn new(capacity: usize, placement: FoodPlacement) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            placement,
        }
    }

    pub fn items(&self) -> &[Coordinate] {
        &self.items
    }

    /// Number of items the pool is refilled to
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clear the pool and fill it back up to capacity
    pub fn reset<R: Rng + ?Sized>(&mut self, grid: &Grid, snake: &Snake, rng: &mut R) {
        self.items.clear();
        for _ in 0..self.capacity {
            self.generate_one(grid, snake, rng);
        }
    }

    /// Index of the first item at `pos`
    pub fn find_index_at(&self, pos: Coordinate) -> Option<usize> {
        self.items.iter().position(|item| *item == pos)
    }

    /// Remove one item, returning its position
    pub fn remove_at(&mut self, index: usize) -> Option<Coordinate> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Put an item at a known position
    pub fn place(&mut self, pos: Coordinate) {
        self.items.push(pos);
    }

    /// Spawn one item at a random cell and return where it landed
    pub fn generate_one<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        snake: &Snake,
        rng: &mut R,
    ) -> Coordinate {
        let pos = match self.placement {
            FoodPlacement::Unchecked => random_cell(grid, rng),
            FoodPlacement::AvoidOccupied => self
                .free_cell(grid, snake, rng)
                .unwrap_or_else(|| random_cell(grid, rng)),
        };

        self.items.push(pos);
        pos
    }

    fn is_free(&self, pos: Coordinate, snake: &Snake) -> bool {
        !self.items.contains(&pos) && !snake.contains(pos)
    }

    /// Rejection sampling first; a full scan once the board gets crowded.
    fn free_cell<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        snake: &Snake,
        rng: &mut R,
    ) -> Option<Coordinate> {
        for _ in 0..grid.cell_count() {
            let pos = random_cell(grid, rng);
            if self.is_free(pos, snake) {
                return Some(pos);
            }
        }

        grid.cells()
            .filter(|pos| self.is_free(*pos, snake))
            .choose(rng)
    }
}

fn random_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Coordinate {
    let size = grid.size() as i32;
    Coordinate::new(rng.gen_range(0..size), rng.gen_range(0..size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_reset_fills_to_capacity() {
        let grid = Grid::new(16);
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = FoodPool::new(3, FoodPlacement::Unchecked);

        pool.reset(&grid, &Snake::new(), &mut rng);
        assert_eq!(pool.len(), 3);
        assert!(pool.items().iter().all(|pos| grid.contains(*pos)));

        pool.reset(&grid, &Snake::new(), &mut rng);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_find_and_remove() {
        let mut pool = FoodPool::new(3, FoodPlacement::Unchecked);
        pool.place(Coordinate::new(1, 1));
        pool.place(Coordinate::new(2, 2));
        pool.place(Coordinate::new(2, 2));

        assert_eq!(pool.find_index_at(Coordinate::new(2, 2)), Some(1));
        assert_eq!(pool.find_index_at(Coordinate::new(9, 9)), None);

        assert_eq!(pool.remove_at(1), Some(Coordinate::new(2, 2)));
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.find_index_at(Coordinate::new(2, 2)), Some(1));
        assert_eq!(pool.remove_at(5), None);
    }

    #[test]
    fn test_avoid_occupied_skips_snake_and_food() {
        let grid = Grid::new(4);
        let mut rng = StdRng::seed_from_u64(42);
        let snake = Snake::new();
        let mut pool = FoodPool::new(13, FoodPlacement::AvoidOccupied);

        // 16 cells - 3 snake cells = 13 free cells, so every cell gets used once
        pool.reset(&grid, &snake, &mut rng);

        assert_eq!(pool.len(), 13);
        for (i, pos) in pool.items().iter().enumerate() {
            assert!(!snake.contains(*pos));
            assert_eq!(pool.find_index_at(*pos), Some(i));
        }
    }

    #[test]
    fn test_avoid_occupied_falls_back_when_full() {
        let grid = Grid::new(4);
        let mut rng = StdRng::seed_from_u64(3);
        let body: Vec<_> = grid.cells().collect();
        let snake = Snake::from_segments(body, Direction::Right);
        let mut pool = FoodPool::new(1, FoodPlacement::AvoidOccupied);

        let pos = pool.generate_one(&grid, &snake, &mut rng);
        assert!(grid.contains(pos));
        assert_eq!(pool.len(), 1);
    }
}
