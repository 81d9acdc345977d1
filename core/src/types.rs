use alloc::{format, string::String};
use ndarray::Array2;

use crate::{GameError, Result};

/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub trait NeighborIterExt {
    /// Up, down, left and right neighbors that exist on the grid.
    fn iter_orthogonal(&self, index: Coord2) -> NeighborIter;

    /// The up-to-four diagonal neighbors that exist on the grid.
    fn iter_diagonal(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_orthogonal(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, side_of(self), &ORTHOGONAL)
    }

    fn iter_diagonal(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, side_of(self), &DIAGONAL)
    }
}

fn side_of<T>(grid: &Array2<T>) -> Coord {
    grid.dim().0.try_into().unwrap_or(Coord::MAX)
}

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains on a `side`×`side` grid.
fn apply_delta(coords: Coord2, delta: (isize, isize), side: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= side {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= side {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    side: Coord,
    displacements: &'static [(isize, isize)],
    index: usize,
}

impl NeighborIter {
    fn new(center: Coord2, side: Coord, displacements: &'static [(isize, isize)]) -> Self {
        Self {
            center,
            side,
            displacements,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.displacements.get(self.index)?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.side) {
                return Some(next_item);
            }
        }
    }
}

/// Formats coordinates the way the board overlay labels them: column letter, then 1-based row.
///
/// `(1, 2)` becomes `"C2"`.
pub fn coord_label((row, col): Coord2) -> String {
    let letter = char::from_u32(u32::from(b'A') + u32::from(col)).unwrap_or('?');
    format!("{}{}", letter, u16::from(row) + 1)
}

/// Parses a label such as `"C2"` (case-insensitive) into coordinates on a `side`×`side` board.
pub fn parse_coord_label(label: &str, side: Coord) -> Result<Coord2> {
    let label = label.trim();
    let mut chars = label.chars();
    let letter = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or(GameError::InvalidCoordLabel)?;
    let row: u16 = chars
        .as_str()
        .parse()
        .map_err(|_| GameError::InvalidCoordLabel)?;
    if row == 0 {
        return Err(GameError::InvalidCoordLabel);
    }

    let col = u32::from(letter.to_ascii_uppercase()) - u32::from('A');
    let row = u32::from(row - 1);
    if row >= u32::from(side) || col >= u32::from(side) {
        return Err(GameError::OutOfRange);
    }

    // both fit in `Coord` since they are below `side`
    Ok((row as Coord, col as Coord))
}
