//! Approximates glyph blocks with non-interacting primes.
//!
//! Every prime is kept together with a one-cell border around its envelope,
//! and bordered envelopes may neither overlap nor leave their glyph block.
//! No dead cell then touches two primes, so the primes evolve exactly as
//! they would alone and the whole seed has period at most two.

use log::debug;
use randomize::PCG32;

use crate::auxiliary::randomizer::generate_seed;
use crate::automata::pattern::Pattern;
use crate::automata::primes::{Prime, PRIMES};
use crate::automata::rasterizer::GlyphBlock;

const REMOVE_PROBABILITY: f32 = 0.1;
const ADD_PROBABILITY: f32 = 0.05;
const STRAY_PENALTY: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OptimizerConfig {
    /// Rounds of local search per glyph block.
    pub iterations: u32,
    pub seed: (u64, u64),
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            iterations: 300,
            seed: (0x853c_49e6_748f_ea9b, 0xda3e_39cb_94b9_5bdb),
        }
    }
}

impl OptimizerConfig {
    /// Default iterations with a seed from the OS.
    pub fn random() -> Result<Self, getrandom::Error> {
        Ok(Self {
            seed: generate_seed()?,
            ..Self::default()
        })
    }
}

/// A prime whose envelope's top-left corner is at `(row, col)` of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub prime: Prime,
    pub row: usize,
    pub col: usize,
}

/// The part of a glyph block that lies inside the grid.
#[derive(Clone, Copy, Debug)]
struct Region {
    top: usize,
    left: usize,
    width: usize,
    height: usize,
}

impl Region {
    fn clip(block: &GlyphBlock, width: usize, height: usize) -> Self {
        Self {
            top: block.row,
            left: block.col,
            width: (block.col + block.width).min(width).saturating_sub(block.col),
            height: (block.row + block.height).min(height).saturating_sub(block.row),
        }
    }

    fn local(&self, row: usize, col: usize) -> usize {
        (col - self.left) + (row - self.top) * self.width
    }
}

pub struct PrimeOptimizer {
    iterations: u32,
    rng: PCG32,
}

impl PrimeOptimizer {
    pub fn new(config: &OptimizerConfig) -> Self {
        Self {
            iterations: config.iterations,
            rng: config.seed.into(),
        }
    }

    /// Seeds a pattern of `target`'s shape with primes that imitate the ink of
    /// each block.
    pub fn approximate(&mut self, target: &Pattern, blocks: &[GlyphBlock]) -> Pattern {
        let mut result = Pattern::new(target.width(), target.height());
        for block in blocks {
            let region = Region::clip(block, target.width(), target.height());
            let placements = self.optimize(target, region);
            debug!(
                "{:?}: {} primes after {} rounds",
                block.ch,
                placements.len(),
                self.iterations
            );
            for p in &placements {
                for (r, c) in p.prime.live_cells() {
                    result.set(p.row + r, p.col + c, true);
                }
            }
        }
        result
    }

    fn optimize(&mut self, target: &Pattern, region: Region) -> Vec<Placement> {
        if region.width == 0 || region.height == 0 {
            return Vec::new();
        }
        let mut best = Vec::new();
        self.add_primes(target, region, &mut best);
        let mut best_score = score(target, &best);

        for _ in 0..self.iterations {
            let mut candidate = best.clone();
            self.remove_primes(&mut candidate);
            self.add_primes(target, region, &mut candidate);
            let candidate_score = score(target, &candidate);
            if candidate_score > best_score {
                best = candidate;
                best_score = candidate_score;
            }
        }
        best
    }

    fn remove_primes(&mut self, placements: &mut Vec<Placement>) {
        let rng = &mut self.rng;
        placements.retain(|_| randomize::f32_half_open_right(rng.next_u32()) >= REMOVE_PROBABILITY);
    }

    fn add_primes(&mut self, target: &Pattern, region: Region, placements: &mut Vec<Placement>) {
        let mut occupied = vec![false; region.width * region.height];
        for p in placements.iter() {
            mark(&mut occupied, region, p);
        }
        for row in region.top..region.top + region.height {
            for col in region.left..region.left + region.width {
                if !target.get(row, col) {
                    continue;
                }
                if randomize::f32_half_open_right(self.rng.next_u32()) >= ADD_PROBABILITY {
                    continue;
                }
                let prime = PRIMES[(self.rng.next_u32() % PRIMES.len() as u32) as usize];
                let candidate = Placement { prime, row, col };
                if fits(&occupied, region, &candidate) {
                    mark(&mut occupied, region, &candidate);
                    placements.push(candidate);
                }
            }
        }
    }
}

/// Bordered envelope as inclusive-exclusive row and column ranges, if it has
/// room for the border on the top and left.
fn bordered(p: &Placement) -> Option<(std::ops::Range<usize>, std::ops::Range<usize>)> {
    let top = p.row.checked_sub(1)?;
    let left = p.col.checked_sub(1)?;
    Some((
        top..p.row + p.prime.height() + 1,
        left..p.col + p.prime.width() + 1,
    ))
}

fn fits(occupied: &[bool], region: Region, p: &Placement) -> bool {
    let (rows, cols) = match bordered(p) {
        Some(ranges) => ranges,
        None => return false,
    };
    if rows.start < region.top
        || cols.start < region.left
        || rows.end > region.top + region.height
        || cols.end > region.left + region.width
    {
        return false;
    }
    rows.into_iter()
        .all(|r| cols.clone().all(|c| !occupied[region.local(r, c)]))
}

fn mark(occupied: &mut [bool], region: Region, p: &Placement) {
    if let Some((rows, cols)) = bordered(p) {
        for r in rows {
            for c in cols.clone() {
                occupied[region.local(r, c)] = true;
            }
        }
    }
}

/// Ink covered minus a penalty for live cells off the ink.
fn score(target: &Pattern, placements: &[Placement]) -> f32 {
    let mut hits = 0;
    let mut strays = 0;
    for p in placements {
        for (r, c) in p.prime.live_cells() {
            if target.get(p.row + r, p.col + c) {
                hits += 1;
            } else {
                strays += 1;
            }
        }
    }
    hits as f32 - strays as f32 * STRAY_PENALTY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automata::glyphs::BitmapFont;
    use crate::automata::grid::AutomatonGrid;
    use crate::automata::rasterizer::TextRasterizer;

    fn hi_banner(config: &OptimizerConfig) -> (Pattern, Vec<GlyphBlock>) {
        let r = TextRasterizer::new(120, 4);
        let (w, h) = (60, 34);
        let target = r.rasterize(&BitmapFont, "HI", w, h);
        let blocks = r.layout("HI", w, h);
        (PrimeOptimizer::new(config).approximate(&target, &blocks), blocks)
    }

    #[test]
    fn approximation_has_period_at_most_two() {
        let config = OptimizerConfig {
            iterations: 500,
            ..OptimizerConfig::default()
        };
        let (seed, _) = hi_banner(&config);
        assert!(seed.live_count() > 0);

        let mut grid = AutomatonGrid::new(seed.width(), seed.height());
        grid.seed(&seed).unwrap();
        grid.advance();
        grid.advance();
        assert_eq!(grid.snapshot(), seed);
    }

    #[test]
    fn primes_stay_in_their_blocks() {
        let (seed, blocks) = hi_banner(&OptimizerConfig::default());
        for (row, col) in seed.live_cells() {
            assert!(blocks.iter().any(|b| b.contains(row, col)));
        }
    }

    #[test]
    fn same_seed_same_pattern() {
        let config = OptimizerConfig::default();
        assert_eq!(hi_banner(&config).0, hi_banner(&config).0);
    }

    #[test]
    fn bordered_envelopes_never_overlap() {
        let region = Region {
            top: 0,
            left: 0,
            width: 10,
            height: 10,
        };
        let mut occupied = vec![false; 100];
        let a = Placement {
            prime: crate::automata::primes::BLOCK,
            row: 1,
            col: 1,
        };
        assert!(fits(&occupied, region, &a));
        mark(&mut occupied, region, &a);
        // border of `a` ends at column 3
        let touching = Placement { col: 3, ..a };
        let apart = Placement { col: 5, ..a };
        assert!(!fits(&occupied, region, &touching));
        assert!(fits(&occupied, region, &apart));
        // no room for the top border
        assert!(!fits(&occupied, region, &Placement { row: 0, col: 6, ..a }));
        // right border would leave the region
        assert!(!fits(&occupied, region, &Placement { row: 5, col: 8, ..a }));
    }

    #[test]
    fn blocks_outside_the_grid_get_nothing() {
        let target = Pattern::new(4, 4);
        let block = GlyphBlock {
            ch: 'x',
            row: 0,
            col: 10,
            width: 5,
            height: 4,
        };
        let out = PrimeOptimizer::new(&OptimizerConfig::default()).approximate(&target, &[block]);
        assert!(out.is_empty());
    }
}
