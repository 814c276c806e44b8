use log::{debug, trace};

use crate::automata::pattern::Pattern;
use crate::traits_and_structs::cell::Cell;
use crate::traits_and_structs::error::{BannerError, Result};

/// What neighbor counting sees past the edge of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Everything outside is dead, so patterns decay at the border.
    #[default]
    Bounded,
    /// Opposite edges are joined.
    Toroidal,
}

/// Conway's Game of Life on a fixed-size rectangle.
///
/// Holds two buffers of the same shape. `advance` writes the next generation
/// into the scratch buffer while reading only the current one, then swaps them.
#[derive(Clone, Debug)]
pub struct AutomatonGrid {
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
    width: usize,
    height: usize,
    edge_policy: EdgePolicy,
    generation: u64,
}

impl AutomatonGrid {
    /// An all-dead grid. Zero-sized grids are allowed and never change.
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            cells: vec![Cell::default(); size],
            scratch: vec![Cell::default(); size],
            width,
            height,
            edge_policy: EdgePolicy::default(),
            generation: 0,
        }
    }

    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    pub fn set_edge_policy(&mut self, edge_policy: EdgePolicy) {
        self.edge_policy = edge_policy;
    }

    /// Generations advanced since the last seed or resize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces every cell with the pattern's state.
    pub fn seed(&mut self, pattern: &Pattern) -> Result<()> {
        if pattern.dimensions() != self.dimensions() {
            return Err(BannerError::DimensionMismatch {
                expected: self.dimensions(),
                found: pattern.dimensions(),
            });
        }
        for (c, &alive) in self.cells.iter_mut().zip(pattern.as_slice()) {
            *c = Cell::new(alive);
        }
        self.generation = 0;
        debug!(
            "seeded {}x{} grid with {} live cells",
            self.width,
            self.height,
            pattern.live_count()
        );
        Ok(())
    }

    pub fn advance(&mut self) {
        for c in self.scratch.iter_mut() {
            *c = Cell::default();
        }
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = col + row * self.width;
                let next = self.cells[idx].next_state(self.live_neighbors(row, col));
                // Write into `self.scratch`, since we're still reading from `self.cells`
                self.scratch[idx] = next;
            }
        }
        std::mem::swap(&mut self.scratch, &mut self.cells);
        self.generation += 1;
        trace!(
            "generation {}: {} live cells",
            self.generation,
            self.live_count()
        );
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell> {
        self.grid_idx(row, col)
            .map(|i| self.cells[i])
            .ok_or(BannerError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
    }

    /// Drops all state; both buffers become all-dead at the new shape.
    pub fn resize(&mut self, width: usize, height: usize) {
        debug!(
            "resizing grid {}x{} -> {}x{}",
            self.width, self.height, width, height
        );
        let edge_policy = self.edge_policy;
        *self = AutomatonGrid::new(width, height).with_edge_policy(edge_policy);
    }

    pub fn snapshot(&self) -> Pattern {
        let mut pattern = Pattern::new(self.width, self.height);
        for (i, c) in self.cells.iter().enumerate() {
            if c.is_alive() {
                pattern.set(i / self.width, i % self.width, true);
            }
        }
        pattern
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Live cells as `(row, col)`.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i / width, i % width))
    }

    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in -1_isize..=1 {
            for dc in -1_isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = row as isize + dr;
                let c = col as isize + dc;
                let idx = match self.edge_policy {
                    EdgePolicy::Bounded => self.grid_idx(r, c),
                    EdgePolicy::Toroidal => self.grid_idx(
                        r.rem_euclid(self.height as isize),
                        c.rem_euclid(self.width as isize),
                    ),
                };
                if idx.map_or(false, |i| self.cells[i].is_alive()) {
                    count += 1;
                }
            }
        }
        count
    }

    fn grid_idx<I: TryInto<usize>>(&self, row: I, col: I) -> Option<usize> {
        if let (Ok(row), Ok(col)) = (row.try_into(), col.try_into()) {
            if row < self.height && col < self.width {
                Some(col + row * self.width)
            } else {
                None
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(picture: &str) -> AutomatonGrid {
        let pattern = Pattern::from_ascii(picture).unwrap();
        let mut grid = AutomatonGrid::new(pattern.width(), pattern.height());
        grid.seed(&pattern).unwrap();
        grid
    }

    fn stepped(picture: &str) -> Pattern {
        let mut grid = grid_from(picture);
        grid.advance();
        grid.snapshot()
    }

    #[test]
    fn lone_cell_dies() {
        let next = stepped(
            "
            ...
            .#.
            ...
            ",
        );
        assert!(next.is_empty());
    }

    #[test]
    fn surrounded_center_stays_dead() {
        // eight neighbors is overcrowding; the ring itself thins out too
        let next = stepped(
            "
            .....
            .###.
            .#.#.
            .###.
            .....
            ",
        );
        assert!(!next.get(2, 2));
        assert_eq!(
            next,
            Pattern::from_ascii(
                "
                ..#..
                .#.#.
                #...#
                .#.#.
                ..#..
                "
            )
            .unwrap()
        );
    }

    #[test]
    fn three_neighbors_give_birth() {
        let next = stepped(
            "
            #.#
            ...
            .#.
            ",
        );
        assert!(next.get(1, 1));
    }

    #[test]
    fn two_neighbors_keep_alive_cell() {
        let next = stepped(
            "
            #..
            .#.
            ..#
            ",
        );
        assert!(next.get(1, 1));
        assert!(!next.get(0, 0));
        assert!(!next.get(2, 2));
    }

    #[test]
    fn block_is_still() {
        let picture = "
            ....
            .##.
            .##.
            ....
            ";
        assert_eq!(stepped(picture), Pattern::from_ascii(picture).unwrap());
    }

    #[test]
    fn blinker_flips_whole_generation_at_once() {
        // an in-place update would let the first birth leak into later counts
        let vertical = "
            .....
            ..#..
            ..#..
            ..#..
            .....
            ";
        let horizontal = "
            .....
            .....
            .###.
            .....
            .....
            ";
        let mut grid = grid_from(vertical);
        grid.advance();
        assert_eq!(grid.snapshot(), Pattern::from_ascii(horizontal).unwrap());
        grid.advance();
        assert_eq!(grid.snapshot(), Pattern::from_ascii(vertical).unwrap());
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn bounded_edge_kills_blinker_on_border() {
        let mut grid = grid_from(
            "
            ###
            ...
            ...
            ",
        );
        grid.advance();
        assert_eq!(
            grid.snapshot(),
            Pattern::from_ascii(
                "
                .#.
                .#.
                ...
                "
            )
            .unwrap()
        );
    }

    #[test]
    fn toroidal_edge_wraps() {
        let pattern = Pattern::from_ascii(
            "
            .....
            .....
            .....
            .....
            ###..
            ",
        )
        .unwrap();
        let mut grid = AutomatonGrid::new(5, 5).with_edge_policy(EdgePolicy::Toroidal);
        grid.seed(&pattern).unwrap();
        grid.advance();
        // the vertical phase re-enters from the top
        assert!(grid.cell_at(0, 1).unwrap().is_alive());
        assert!(grid.cell_at(3, 1).unwrap().is_alive());
        assert!(grid.cell_at(4, 1).unwrap().is_alive());
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn cell_at_bounds() {
        let grid = AutomatonGrid::new(4, 2);
        assert_eq!(grid.cell_at(1, 3), Ok(Cell::DEAD));
        assert_eq!(
            grid.cell_at(2, 0),
            Err(BannerError::OutOfBounds {
                row: 2,
                col: 0,
                width: 4,
                height: 2
            })
        );
        assert!(grid.cell_at(0, 4).is_err());
    }

    #[test]
    fn seed_rejects_other_shapes() {
        let mut grid = AutomatonGrid::new(4, 2);
        let err = grid.seed(&Pattern::new(2, 4)).unwrap_err();
        assert_eq!(
            err,
            BannerError::DimensionMismatch {
                expected: (4, 2),
                found: (2, 4)
            }
        );
    }

    #[test]
    fn resize_clears_and_keeps_policy() {
        let mut grid = grid_from("##\n##").with_edge_policy(EdgePolicy::Toroidal);
        grid.advance();
        grid.resize(6, 3);
        assert_eq!(grid.dimensions(), (6, 3));
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.edge_policy(), EdgePolicy::Toroidal);
    }

    #[test]
    fn zero_sized_grid_is_inert() {
        let mut grid = AutomatonGrid::new(0, 0);
        grid.seed(&Pattern::new(0, 0)).unwrap();
        grid.advance();
        assert_eq!(grid.live_count(), 0);
    }
}
