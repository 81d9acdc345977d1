use crate::*;

impl LevelDefinition {
    /// Builds the level's starting board.
    ///
    /// Starts from the solved board with the power placements applied, then runs the level's fixture.
    pub fn initial_board(&self) -> Result<Board> {
        let mut board = Board::solved(self.grid_size);
        for placement in self.power_placements {
            board.set_power(placement.coords, placement.power)?;
        }

        match self.fixture {
            LevelFixture::ReplaySolution => replay_solution(&mut board, self.solution)?,
            LevelFixture::ExplicitLayout { layout, encoding } => {
                decode_layout(&mut board, layout, encoding)?
            }
        }

        log::debug!(
            "{} initialized, solvable in {} moves",
            self.id.title(),
            self.moves_budget()
        );
        Ok(board)
    }
}

/// Plays `moves` as construction moves.
///
/// Flips are their own inverse, so playing a solution once on the solved board yields a board that the same
/// solution solves again.
pub fn replay_solution(board: &mut Board, moves: &[Coord2]) -> Result<()> {
    for &coords in moves {
        board.apply_move(coords, MoveKind::Construction)?;
    }
    Ok(())
}

/// Overwrites `board` from a row-major layout string using `encoding` to interpret each symbol.
///
/// The layout must have exactly one known symbol per cell.
pub fn decode_layout(board: &mut Board, layout: &str, encoding: &[Glyph]) -> Result<()> {
    let side = usize::from(board.side());
    if layout.chars().count() != side * side {
        return Err(GameError::InvalidLayout);
    }

    for (index, symbol) in layout.chars().enumerate() {
        let glyph = encoding
            .iter()
            .find(|glyph| glyph.symbol == symbol)
            .ok_or(GameError::InvalidLayout)?;
        // index < side * side and side fits in `Coord`
        let coords = ((index / side) as Coord, (index % side) as Coord);

        board.set_color(coords, glyph.color)?;
        if let Some(power) = glyph.power {
            board.set_power(coords, power)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const BINARY: [Glyph; 2] = [
        Glyph {
            symbol: '#',
            color: TileColor::Black,
            power: None,
        },
        Glyph {
            symbol: '.',
            color: TileColor::White,
            power: None,
        },
    ];

    const WITH_POWER: [Glyph; 2] = [
        Glyph {
            symbol: 'x',
            color: TileColor::Black,
            power: Some(Power::Normal),
        },
        Glyph {
            symbol: 'G',
            color: TileColor::Black,
            power: Some(Power::Green),
        },
    ];

    #[test]
    fn decode_sets_colors_row_major() {
        let mut board = Board::solved(2);

        decode_layout(&mut board, "#..#", &BINARY).unwrap();

        assert_eq!(board[(0, 0)].color, TileColor::Black);
        assert_eq!(board[(0, 1)].color, TileColor::White);
        assert_eq!(board[(1, 0)].color, TileColor::White);
        assert_eq!(board[(1, 1)].color, TileColor::Black);
    }

    #[test]
    fn glyph_without_power_keeps_placed_power() {
        let mut board = Board::solved(2);
        board.set_power((1, 0), Power::Blue).unwrap();

        decode_layout(&mut board, "##.#", &BINARY).unwrap();

        assert_eq!(board[(1, 0)], Tile::white(Power::Blue));
    }

    #[test]
    fn power_glyph_fixes_color_and_power() {
        let mut board = Board::solved(2);

        decode_layout(&mut board, "xGxx", &WITH_POWER).unwrap();

        assert_eq!(board[(0, 1)], Tile::black(Power::Green));
        assert!(board.is_solved());
    }

    #[test]
    fn decode_rejects_bad_layouts() {
        let mut board = Board::solved(2);

        assert_eq!(
            decode_layout(&mut board, "#.#", &BINARY),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            decode_layout(&mut board, "#.#.#", &BINARY),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            decode_layout(&mut board, "#.?#", &BINARY),
            Err(GameError::InvalidLayout)
        );
    }

    #[test]
    fn replay_twice_returns_to_solved() {
        let mut board = Board::solved(4);
        board.set_power((1, 2), Power::Red).unwrap();
        let moves = [(1, 2), (0, 1), (2, 3), (3, 0)];

        replay_solution(&mut board, &moves).unwrap();
        assert!(!board.is_solved());

        replay_solution(&mut board, &moves).unwrap();
        assert!(board.is_solved());
    }

    #[test]
    fn replayed_level_matches_authored_layout() {
        // level 4 ships an explicit layout that equals its replayed solution
        let level = level_definition(LevelId::Numbered(4)).unwrap();
        let mut replayed = Board::solved(level.grid_size);
        for placement in level.power_placements {
            replayed.set_power(placement.coords, placement.power).unwrap();
        }
        replay_solution(&mut replayed, level.solution).unwrap();

        assert_eq!(level.initial_board().unwrap(), replayed);
    }

    #[test]
    fn replay_fixture_builds_level_one() {
        let board = level_definition(LevelId::FIRST)
            .unwrap()
            .initial_board()
            .unwrap();

        assert_eq!(board.to_string(), ". # # \n# . . \n# . # \n");
    }
}
