use core::fmt;
use serde::{Deserialize, Serialize};

/// Binary tile state. A board is solved when every tile is black.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileColor {
    White,
    Black,
}

impl TileColor {
    pub const fn flipped(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl Default for TileColor {
    fn default() -> Self {
        Self::Black
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Special behavior attached to a tile, shown as a colored border.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Power {
    /// Flips itself and the orthogonal neighbors.
    Normal,
    /// Flips itself and the diagonal neighbors.
    Red,
    /// Flips the orthogonal neighbors but not itself.
    Blue,
    /// Same pattern as [`Power::Normal`], but can be clicked while black.
    Green,
    /// Flips its whole row and column.
    Purple,
}

impl Power {
    pub const ALL: [Power; 5] = [
        Self::Normal,
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Purple,
    ];

    pub const fn is_normal(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Whether a player may click a black tile carrying this power.
    pub const fn clickable_when_black(self) -> bool {
        matches!(self, Self::Green)
    }

    /// Name of the border color, `None` for normal tiles.
    pub const fn border_name(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Red => Some("red"),
            Self::Blue => Some("blue"),
            Self::Green => Some("green"),
            Self::Purple => Some("purple"),
        }
    }

    /// Single letter used by the text rendering of a board.
    pub const fn letter(self) -> char {
        match self {
            Self::Normal => ' ',
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Purple => 'P',
        }
    }
}

impl Default for Power {
    fn default() -> Self {
        Self::Normal
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub color: TileColor,
    pub power: Power,
}

impl Tile {
    pub const SOLVED: Tile = Tile::new(TileColor::Black, Power::Normal);

    pub const fn new(color: TileColor, power: Power) -> Self {
        Self { color, power }
    }

    pub const fn white(power: Power) -> Self {
        Self::new(TileColor::White, power)
    }

    pub const fn black(power: Power) -> Self {
        Self::new(TileColor::Black, power)
    }

    pub fn flip(&mut self) {
        self.color = self.color.flipped();
    }

    /// Whether a player click on this tile is accepted.
    pub const fn accepts_player_click(self) -> bool {
        !self.color.is_black() || self.power.clickable_when_black()
    }
}

/// Human-readable summary such as "white tile" or "black green-bordered tile".
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.power.border_name() {
            Some(border) => write!(f, "{} {}-bordered tile", self.color, border),
            None => write!(f, "{} tile", self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn flipping_twice_restores_color() {
        let mut tile = Tile::white(Power::Red);
        tile.flip();
        assert_eq!(tile, Tile::black(Power::Red));
        tile.flip();
        assert_eq!(tile, Tile::white(Power::Red));
    }

    #[test]
    fn only_green_is_clickable_while_black() {
        for power in Power::ALL {
            assert!(Tile::white(power).accepts_player_click());
            assert_eq!(
                Tile::black(power).accepts_player_click(),
                power == Power::Green
            );
        }
    }

    #[test]
    fn description_mentions_border() {
        assert_eq!(Tile::white(Power::Normal).to_string(), "white tile");
        assert_eq!(
            Tile::black(Power::Purple).to_string(),
            "black purple-bordered tile"
        );
    }
}
