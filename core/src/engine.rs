use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Coordinates flipped by a single move. No coordinate appears twice.
pub type FlipSet = SmallVec<[Coord2; 8]>;

/// Who is making a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// A click by the player, subject to the black-tile rule.
    Player,
    /// A move used to build a starting layout. Every tile is clickable.
    Construction,
}

impl MoveKind {
    pub const fn is_player(self) -> bool {
        matches!(self, Self::Player)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStatus {
    /// The target tile is black and not green, nothing changed.
    Rejected,
    Continue,
    Solved,
}

impl MoveStatus {
    pub const fn has_update(self) -> bool {
        use MoveStatus::*;
        match self {
            Rejected => false,
            Continue => true,
            Solved => true,
        }
    }

    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl Power {
    /// Tiles flipped when a tile with this power at `coords` is clicked on `tiles`.
    fn flip_pattern(self, coords: Coord2, tiles: &Array2<Tile>) -> FlipSet {
        use Power::*;

        let mut flips = FlipSet::new();
        match self {
            Normal | Green => {
                flips.push(coords);
                flips.extend(tiles.iter_orthogonal(coords));
            }
            Red => {
                flips.push(coords);
                flips.extend(tiles.iter_diagonal(coords));
            }
            Blue => flips.extend(tiles.iter_orthogonal(coords)),
            Purple => {
                let (row, col) = coords;
                let side = tiles.dim().0 as Coord;
                flips.push(coords);
                flips.extend((0..side).filter(|&c| c != col).map(|c| (row, c)));
                flips.extend((0..side).filter(|&r| r != row).map(|r| (r, col)));
            }
        }
        flips
    }
}

impl Board {
    /// Coordinates a click at `coords` would flip, given the power currently at `coords`.
    pub fn flip_set(&self, coords: Coord2) -> Result<FlipSet> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords].power.flip_pattern(coords, self.tiles()))
    }

    /// Applies a click at `coords`.
    ///
    /// Player moves on a black tile are rejected unless the tile is green. Construction moves are never
    /// rejected. Applying the same accepted move twice restores the board.
    pub fn apply_move(&mut self, coords: Coord2, kind: MoveKind) -> Result<MoveStatus> {
        let coords = self.validate_coords(coords)?;
        let tile = self[coords];

        if kind.is_player() && !tile.accepts_player_click() {
            log::debug!("Rejected click on {} at {}", tile, coord_label(coords));
            return Ok(MoveStatus::Rejected);
        }

        for pos in tile.power.flip_pattern(coords, self.tiles()) {
            self.flip(pos);
            log::trace!("Flipped {} to {}", coord_label(pos), self[pos].color);
        }

        Ok(if self.is_solved() {
            MoveStatus::Solved
        } else {
            MoveStatus::Continue
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn sorted(flips: FlipSet) -> Vec<Coord2> {
        let mut flips = flips.into_vec();
        flips.sort_unstable();
        flips
    }

    fn board_with(side: Coord, tiles: &[(Coord2, Tile)]) -> Board {
        let mut board = Board::solved(side);
        for &(coords, tile) in tiles {
            board.set_color(coords, tile.color).unwrap();
            board.set_power(coords, tile.power).unwrap();
        }
        board
    }

    #[test]
    fn normal_flips_self_and_orthogonal_neighbors() {
        let mut board = board_with(4, &[((1, 1), Tile::white(Power::Normal))]);

        let status = board.apply_move((1, 1), MoveKind::Player).unwrap();

        assert_eq!(status, MoveStatus::Continue);
        assert_eq!(board[(1, 1)].color, TileColor::Black);
        for coords in [(0, 1), (2, 1), (1, 0), (1, 2)] {
            assert_eq!(board[coords].color, TileColor::White, "{coords:?}");
        }
        assert_eq!(board.white_count(), 4);
    }

    #[test]
    fn red_flips_self_and_diagonals() {
        let board = board_with(4, &[((1, 2), Tile::white(Power::Red))]);

        assert_eq!(
            sorted(board.flip_set((1, 2)).unwrap()),
            [(0, 1), (0, 3), (1, 2), (2, 1), (2, 3)]
        );
    }

    #[test]
    fn blue_does_not_flip_itself() {
        let mut board = board_with(4, &[((2, 1), Tile::white(Power::Blue))]);

        board.apply_move((2, 1), MoveKind::Player).unwrap();

        assert_eq!(board[(2, 1)], Tile::white(Power::Blue));
        assert_eq!(
            sorted(board.flip_set((2, 1)).unwrap()),
            [(1, 1), (2, 0), (2, 2), (3, 1)]
        );
    }

    #[test]
    fn purple_flips_row_and_column() {
        let board = board_with(4, &[((2, 2), Tile::white(Power::Purple))]);

        let flips = sorted(board.flip_set((2, 2)).unwrap());

        assert_eq!(flips.len(), 7);
        assert_eq!(
            flips,
            [(0, 2), (1, 2), (2, 0), (2, 1), (2, 2), (2, 3), (3, 2)]
        );
    }

    #[test]
    fn corner_patterns_are_clipped() {
        let mut board = Board::solved(4);
        assert_eq!(sorted(board.flip_set((0, 0)).unwrap()), [(0, 0), (0, 1), (1, 0)]);

        board.set_power((0, 0), Power::Red).unwrap();
        assert_eq!(sorted(board.flip_set((0, 0)).unwrap()), [(0, 0), (1, 1)]);
    }

    #[test]
    fn green_matches_normal_pattern() {
        let mut board = Board::solved(3);
        let normal = sorted(board.flip_set((1, 1)).unwrap());
        board.set_power((1, 1), Power::Green).unwrap();

        assert_eq!(sorted(board.flip_set((1, 1)).unwrap()), normal);
    }

    #[test]
    fn black_tile_rejects_player_click() {
        let mut board = board_with(4, &[((0, 0), Tile::white(Power::Normal))]);
        let before = board.clone();

        let status = board.apply_move((2, 2), MoveKind::Player).unwrap();

        assert_eq!(status, MoveStatus::Rejected);
        assert!(!status.has_update());
        assert_eq!(board, before);
    }

    #[test]
    fn black_green_tile_accepts_player_click() {
        let mut board = board_with(4, &[((2, 2), Tile::black(Power::Green))]);

        let status = board.apply_move((2, 2), MoveKind::Player).unwrap();

        assert_eq!(status, MoveStatus::Continue);
        assert_eq!(board[(2, 2)], Tile::white(Power::Green));
        assert_eq!(board.white_count(), 5);
    }

    #[test]
    fn construction_move_ignores_black_rule() {
        let mut board = Board::solved(3);

        let status = board.apply_move((0, 0), MoveKind::Construction).unwrap();

        assert_eq!(status, MoveStatus::Continue);
        assert_eq!(board.white_count(), 3);
    }

    #[test]
    fn last_flip_reports_solved() {
        let mut board = Board::solved(3);
        board.apply_move((1, 1), MoveKind::Construction).unwrap();

        assert_eq!(
            board.apply_move((1, 1), MoveKind::Player).unwrap(),
            MoveStatus::Solved
        );
        assert!(board.is_solved());
    }

    #[test]
    fn out_of_range_move_is_an_error() {
        let mut board = Board::solved(3);

        assert_eq!(
            board.apply_move((3, 0), MoveKind::Construction),
            Err(GameError::OutOfRange)
        );
        assert_eq!(board.flip_set((0, 9)), Err(GameError::OutOfRange));
    }
}
