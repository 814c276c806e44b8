//! Small still lifes and period-2 oscillators used to build text that never
//! decays.

use crate::automata::pattern::Pattern;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimeKind {
    Block,
    Tub,
    Boat,
    Beehive,
    Loaf,
    Blinker,
    Toad,
    Beacon,
}

/// A prime drawn in its envelope: the smallest box holding every phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prime {
    pub kind: PrimeKind,
    pub period: u32,
    rows: &'static [&'static str],
}

pub const BLOCK: Prime = Prime {
    kind: PrimeKind::Block,
    period: 1,
    rows: &["##", "##"],
};

pub const TUB: Prime = Prime {
    kind: PrimeKind::Tub,
    period: 1,
    rows: &[".#.", "#.#", ".#."],
};

pub const BOAT: Prime = Prime {
    kind: PrimeKind::Boat,
    period: 1,
    rows: &["##.", "#.#", ".#."],
};

pub const BEEHIVE: Prime = Prime {
    kind: PrimeKind::Beehive,
    period: 1,
    rows: &[".##.", "#..#", ".##."],
};

pub const LOAF: Prime = Prime {
    kind: PrimeKind::Loaf,
    period: 1,
    rows: &[".##.", "#..#", ".#.#", "..#."],
};

pub const BLINKER: Prime = Prime {
    kind: PrimeKind::Blinker,
    period: 2,
    rows: &["...", "###", "..."],
};

pub const TOAD: Prime = Prime {
    kind: PrimeKind::Toad,
    period: 2,
    rows: &["....", ".###", "###.", "...."],
};

pub const BEACON: Prime = Prime {
    kind: PrimeKind::Beacon,
    period: 2,
    rows: &["##..", "##..", "..##", "..##"],
};

pub const PRIMES: [Prime; 8] = [BLOCK, TUB, BOAT, BEEHIVE, LOAF, BLINKER, TOAD, BEACON];

impl Prime {
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Live cells of the first phase, relative to the envelope's top-left.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, line)| {
            line.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'#')
                .map(move |(c, _)| (r, c))
        })
    }

    pub fn pattern(&self) -> Pattern {
        let mut p = Pattern::new(self.width(), self.height());
        for (r, c) in self.live_cells() {
            p.set(r, c, true);
        }
        p
    }
}
