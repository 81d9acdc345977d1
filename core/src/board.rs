use alloc::string::{String, ToString};
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of tiles addressed by `(row, col)`.
///
/// The grid is always fully populated and its side length never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Tile>", into = "Array2<Tile>")]
pub struct Board {
    tiles: Array2<Tile>,
}

impl Board {
    /// A `side`×`side` board where every tile is black with no power.
    pub fn solved(side: Coord) -> Self {
        let side = usize::from(side.max(1));
        Self {
            tiles: Array2::from_elem((side, side), Tile::SOLVED),
        }
    }

    pub fn from_tiles(tiles: Array2<Tile>) -> Result<Self> {
        let (rows, cols) = tiles.dim();
        if rows == 0 || rows != cols || Coord::try_from(rows).is_err() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { tiles })
    }

    pub fn side(&self) -> Coord {
        // checked on construction
        self.tiles.dim().0 as Coord
    }

    pub fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let side = self.side();
        if coords.0 < side && coords.1 < side {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// Changes the power of a tile without touching its color.
    pub fn set_power(&mut self, coords: Coord2, power: Power) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.tiles[coords.to_nd_index()].power = power;
        Ok(())
    }

    pub fn set_color(&mut self, coords: Coord2, color: TileColor) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.tiles[coords.to_nd_index()].color = color;
        Ok(())
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(|tile| tile.color.is_black())
    }

    pub fn white_count(&self) -> usize {
        self.tiles.iter().filter(|tile| !tile.color.is_black()).count()
    }

    /// Every tile carrying a power other than [`Power::Normal`], in row-major order.
    pub fn power_tiles(&self) -> impl Iterator<Item = (Coord2, Power)> + '_ {
        self.tiles
            .indexed_iter()
            .filter(|(_, tile)| !tile.power.is_normal())
            .map(|((row, col), tile)| ((row as Coord, col as Coord), tile.power))
    }

    /// Human-readable summary of a tile, e.g. "black green-bordered tile".
    pub fn describe_tile(&self, coords: Coord2) -> Result<String> {
        Ok(self.tile_at(coords)?.to_string())
    }

    pub(crate) fn flip(&mut self, coords: Coord2) {
        self.tiles[coords.to_nd_index()].flip();
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.tiles[(row as usize, col as usize)]
    }
}

impl TryFrom<Array2<Tile>> for Board {
    type Error = GameError;

    fn try_from(tiles: Array2<Tile>) -> Result<Self> {
        Self::from_tiles(tiles)
    }
}

impl From<Board> for Array2<Tile> {
    fn from(board: Board) -> Self {
        board.tiles
    }
}

/// One line per row, two characters per tile: `#` for black or `.` for white, then the power letter.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows() {
            for tile in row {
                let color = if tile.color.is_black() { '#' } else { '.' };
                write!(f, "{}{}", color, tile.power.letter())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
