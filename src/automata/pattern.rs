use std::fmt;

use crate::traits_and_structs::error::{BannerError, Result};

/// A row-major rectangle of live/dead flags, used to seed a grid and to take
/// snapshots of one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Pattern {
    /// An all-dead pattern.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Builds a pattern from nested rows. Ragged rows are a `DimensionMismatch`.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                return Err(BannerError::DimensionMismatch {
                    expected: (width, height),
                    found: (row.len(), height),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parses a picture such as
    ///
    /// ```text
    /// .#.
    /// .#.
    /// .#.
    /// ```
    ///
    /// `#`, `o`, `O` and `*` are alive, `.` and `b` are dead. Blank lines and
    /// surrounding whitespace are ignored.
    pub fn from_ascii(picture: &str) -> Result<Self> {
        let rows = picture
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        '#' | 'o' | 'O' | '*' => Ok(true),
                        '.' | 'b' => Ok(false),
                        other => Err(BannerError::InvalidConfig(format!(
                            "unexpected {:?} in pattern picture",
                            other
                        ))),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Pattern::from_rows(rows)
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

    /// Anything outside the pattern reads as dead.
    pub fn get<I: TryInto<usize>>(&self, row: I, col: I) -> bool {
        self.idx(row, col).map_or(false, |i| self.cells[i])
    }

    /// Returns false, and changes nothing, when the position is outside.
    pub fn set<I: TryInto<usize>>(&mut self, row: I, col: I, alive: bool) -> bool {
        match self.idx(row, col) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&alive| !alive)
    }

    /// Positions of live cells as `(row, col)`, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| (i / width, i % width))
    }

    pub(crate) fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    fn idx<I: TryInto<usize>>(&self, row: I, col: I) -> Option<usize> {
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

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().map(|&a| if a { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_picture() {
        let p = Pattern::from_ascii(
            "
            .#.
            ..#
            ###
            ",
        )
        .unwrap();
        assert_eq!(p.dimensions(), (3, 3));
        assert_eq!(p.live_count(), 5);
        assert!(p.get(0, 1));
        assert!(!p.get(0, 0));
        assert_eq!(p.to_string(), ".#.\n..#\n###\n");
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Pattern::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();
        assert!(matches!(err, BannerError::DimensionMismatch { .. }));
        assert!(Pattern::from_ascii("##\n#").is_err());
    }

    #[test]
    fn unknown_symbol_rejected() {
        assert!(matches!(
            Pattern::from_ascii("#x#"),
            Err(BannerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn outside_reads_dead() {
        let mut p = Pattern::new(2, 2);
        assert!(!p.get(-1, 0));
        assert!(!p.get(0, 2));
        assert!(!p.set(5, 5, true));
        assert!(p.set(1, 1, true));
        assert_eq!(p.live_cells().collect::<Vec<_>>(), vec![(1, 1)]);
    }
}
