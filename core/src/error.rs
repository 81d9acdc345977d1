use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the board")]
    OutOfRange,
    #[error("Unknown level")]
    UnknownLevel,
    #[error("Board must be a non-empty square grid")]
    InvalidBoardShape,
    #[error("Layout does not match the board size or its encoding table")]
    InvalidLayout,
    #[error("Invalid coordinate label, expected a column letter followed by a row number")]
    InvalidCoordLabel,
}

pub type Result<T> = core::result::Result<T, GameError>;
