/// One position of the automaton: alive or dead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false };
    pub const ALIVE: Cell = Cell { alive: true };

    pub fn new(alive: bool) -> Self {
        Self { alive }
    }

    pub fn is_alive(self) -> bool {
        self.alive
    }

    /// B3/S23: born with exactly three live neighbors, survives with two or three.
    #[must_use]
    pub fn next_state(self, live_neighbors: u8) -> Self {
        let alive = match (self.alive, live_neighbors) {
            (_, 3) => true,
            (true, 2) => true,
            _ => false,
        };
        Self::new(alive)
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive
    }

    pub fn toggle(&mut self) {
        self.alive = !self.alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Cell::new(alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_needs_exactly_three() {
        for n in 0..=8 {
            assert_eq!(Cell::DEAD.next_state(n).is_alive(), n == 3, "dead with {} neighbors", n);
        }
    }

    #[test]
    fn survival_needs_two_or_three() {
        for n in 0..=8 {
            assert_eq!(
                Cell::ALIVE.next_state(n).is_alive(),
                n == 2 || n == 3,
                "alive with {} neighbors",
                n
            );
        }
    }

    #[test]
    fn toggle_flips() {
        let mut c = Cell::default();
        c.toggle();
        assert!(c.is_alive());
        c.set_alive(false);
        assert_eq!(c, Cell::DEAD);
    }
}
