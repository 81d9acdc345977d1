use alloc::{format, string::String};
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of a move made through a [`Session`]: the status plus a snapshot to render from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub status: MoveStatus,
    pub board: Board,
    pub move_count: u32,
}

/// One player's game on one level.
///
/// Sessions own their board and move counter outright, so any number of them can be played side by side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    level: LevelId,
    board: Board,
    move_count: u32,
}

impl Session {
    pub fn initialize(level: LevelId) -> Result<Self> {
        let board = level_definition(level)?.initial_board()?;
        Ok(Self {
            level,
            board,
            move_count: 0,
        })
    }

    pub fn level(&self) -> LevelId {
        self.level
    }

    pub fn definition(&self) -> Result<&'static LevelDefinition> {
        level_definition(self.level)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Plays a player click at `coords`.
    ///
    /// Rejected clicks leave the board and the counter untouched.
    pub fn apply_move(&mut self, coords: Coord2) -> Result<MoveReport> {
        let status = self.board.apply_move(coords, MoveKind::Player)?;
        if status.has_update() {
            self.move_count += 1;
        }
        if status.is_solved() {
            log::info!(
                "{} solved in {} moves",
                self.level.title(),
                self.move_count
            );
        }

        Ok(MoveReport {
            status,
            board: self.board.clone(),
            move_count: self.move_count,
        })
    }

    /// Restores the level's starting board and zeroes the counter.
    pub fn reset(&mut self) -> Result<()> {
        *self = Self::initialize(self.level)?;
        Ok(())
    }

    /// Switches to another level. On error the current game is kept.
    pub fn change_level(&mut self, level: LevelId) -> Result<()> {
        *self = Self::initialize(level)?;
        Ok(())
    }

    /// The level to offer once this one is solved.
    pub fn next_level(&self) -> Option<LevelId> {
        self.level.next()
    }

    pub fn describe_tile(&self, coords: Coord2) -> Result<String> {
        self.board.describe_tile(coords)
    }

    /// Congratulation text, available once the board is solved.
    pub fn completion_message(&self) -> Option<String> {
        if !self.is_solved() {
            return None;
        }
        let level = match self.level {
            LevelId::Numbered(number) => format!("level {}", number),
            LevelId::Daily => String::from("the Daily Challenge"),
        };
        Some(format!(
            "You completed {} in {} moves!",
            level, self.move_count
        ))
    }
}
