//! Compiled-in level data.
//!
//! Every level lists its canonical solution. The par shown to the player is always the solution length.

use alloc::{format, string::String};
use core::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::*;
use Power::*;
use TileColor::{Black, White};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelId {
    Numbered(u8),
    Daily,
}

impl LevelId {
    pub const FIRST: LevelId = LevelId::Numbered(1);

    /// Highest numbered level.
    pub const LAST_NUMBERED: u8 = 7;

    /// Menu order: numbered levels first, then the daily challenge.
    pub const ALL: [LevelId; 8] = [
        LevelId::Numbered(1),
        LevelId::Numbered(2),
        LevelId::Numbered(3),
        LevelId::Numbered(4),
        LevelId::Numbered(5),
        LevelId::Numbered(6),
        LevelId::Numbered(7),
        LevelId::Daily,
    ];

    pub fn numbered(number: u8) -> Result<Self> {
        if (1..=Self::LAST_NUMBERED).contains(&number) {
            Ok(Self::Numbered(number))
        } else {
            Err(GameError::UnknownLevel)
        }
    }

    /// The level offered after completing this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Numbered(number) if number < Self::LAST_NUMBERED => {
                Some(Self::Numbered(number + 1))
            }
            _ => None,
        }
    }

    /// "Level 3" or "Daily Challenge".
    pub fn title(self) -> String {
        match self {
            Self::Numbered(number) => format!("Level {}", number),
            Self::Daily => String::from("Daily Challenge"),
        }
    }
}

impl Default for LevelId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numbered(number) => write!(f, "{}", number),
            Self::Daily => f.write_str("daily"),
        }
    }
}

impl FromStr for LevelId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("daily") {
            return Ok(Self::Daily);
        }
        let number = s.parse().map_err(|_| GameError::UnknownLevel)?;
        Self::numbered(number)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PowerPlacement {
    pub coords: Coord2,
    pub power: Power,
}

/// One symbol of a layout string and the tile state it stands for.
///
/// A glyph without a power keeps whatever power the cell already has.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Glyph {
    pub symbol: char,
    pub color: TileColor,
    pub power: Option<Power>,
}

const fn glyph(symbol: char, color: TileColor, power: Option<Power>) -> Glyph {
    Glyph {
        symbol,
        color,
        power,
    }
}

/// How a level's starting board is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum LevelFixture {
    /// Play the solution as construction moves on the solved board.
    ReplaySolution,
    /// Decode a row-major layout string, one symbol per cell.
    ExplicitLayout {
        layout: &'static str,
        encoding: &'static [Glyph],
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelDefinition {
    pub id: LevelId,
    pub grid_size: Coord,
    /// Powers applied before the fixture. Layout glyphs may add more.
    pub power_placements: &'static [PowerPlacement],
    pub solution: &'static [Coord2],
    pub fixture: LevelFixture,
}

impl LevelDefinition {
    /// Par count shown to the player.
    pub fn moves_budget(&self) -> usize {
        self.solution.len()
    }

    /// Solution as display text, e.g. "Click the tile at position B2".
    pub fn solution_steps(&self) -> impl Iterator<Item = String> + '_ {
        self.solution
            .iter()
            .map(|&coords| format!("Click the tile at position {}", coord_label(coords)))
    }
}

pub fn level_definition(id: LevelId) -> Result<&'static LevelDefinition> {
    LEVELS
        .iter()
        .find(|level| level.id == id)
        .ok_or(GameError::UnknownLevel)
}

pub fn all_levels() -> &'static [LevelDefinition] {
    LEVELS
}

/// `0` black, `1` white, `2` black green, `3` white purple.
static DIGIT_GLYPHS: [Glyph; 4] = [
    glyph('0', Black, None),
    glyph('1', White, None),
    glyph('2', Black, Some(Green)),
    glyph('3', White, Some(Purple)),
];

/// `0` white, `X` black, power letters are white tiles with that power.
static LETTER_GLYPHS: [Glyph; 6] = [
    glyph('0', White, Some(Normal)),
    glyph('X', Black, Some(Normal)),
    glyph('R', White, Some(Red)),
    glyph('G', White, Some(Green)),
    glyph('B', White, Some(Blue)),
    glyph('P', White, Some(Purple)),
];

/// `o` white, `x` black, lowercase power letters are white, uppercase are black.
static CASED_GLYPHS: [Glyph; 10] = [
    glyph('o', White, Some(Normal)),
    glyph('x', Black, Some(Normal)),
    glyph('r', White, Some(Red)),
    glyph('g', White, Some(Green)),
    glyph('b', White, Some(Blue)),
    glyph('p', White, Some(Purple)),
    glyph('R', Black, Some(Red)),
    glyph('G', Black, Some(Green)),
    glyph('B', Black, Some(Blue)),
    glyph('P', Black, Some(Purple)),
];

static LEVELS: &[LevelDefinition] = &[
    LevelDefinition {
        id: LevelId::Numbered(1),
        grid_size: 3,
        power_placements: &[],
        solution: &[(1, 1), (0, 0)],
        fixture: LevelFixture::ReplaySolution,
    },
    LevelDefinition {
        id: LevelId::Numbered(2),
        grid_size: 4,
        power_placements: &[],
        solution: &[(0, 3), (1, 0), (2, 2), (3, 1)],
        fixture: LevelFixture::ReplaySolution,
    },
    LevelDefinition {
        id: LevelId::Numbered(3),
        grid_size: 4,
        power_placements: &[PowerPlacement {
            coords: (1, 2),
            power: Red,
        }],
        solution: &[(1, 2), (0, 1), (2, 3), (3, 0)],
        fixture: LevelFixture::ReplaySolution,
    },
    LevelDefinition {
        id: LevelId::Numbered(4),
        grid_size: 4,
        power_placements: &[PowerPlacement {
            coords: (2, 1),
            power: Blue,
        }],
        solution: &[(3, 2), (1, 2), (2, 1), (2, 0)],
        fixture: LevelFixture::ExplicitLayout {
            layout: "0010101101101011",
            encoding: &DIGIT_GLYPHS,
        },
    },
    LevelDefinition {
        id: LevelId::Numbered(5),
        grid_size: 4,
        power_placements: &[],
        solution: &[(2, 0), (1, 2), (1, 3), (0, 1)],
        fixture: LevelFixture::ExplicitLayout {
            layout: "1101102011111000",
            encoding: &DIGIT_GLYPHS,
        },
    },
    LevelDefinition {
        id: LevelId::Numbered(6),
        grid_size: 4,
        power_placements: &[],
        solution: &[(0, 1), (1, 3), (2, 3), (2, 1), (1, 0)],
        fixture: LevelFixture::ExplicitLayout {
            layout: "0111310101001101",
            encoding: &DIGIT_GLYPHS,
        },
    },
    LevelDefinition {
        id: LevelId::Numbered(7),
        grid_size: 4,
        power_placements: &[],
        solution: &[(1, 0), (0, 1), (1, 3), (2, 2)],
        fixture: LevelFixture::ExplicitLayout {
            layout: "0R0GB000X0PXXX0X",
            encoding: &LETTER_GLYPHS,
        },
    },
    LevelDefinition {
        id: LevelId::Daily,
        grid_size: 4,
        power_placements: &[],
        solution: &[(0, 2), (0, 0), (2, 2), (2, 1)],
        fixture: LevelFixture::ExplicitLayout {
            layout: "pxbxxxoxoRgoxxxx",
            encoding: &CASED_GLYPHS,
        },
    },
];
