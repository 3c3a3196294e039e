use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading dictionary file
    #[error("Dictionary \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded lexicon
    #[cfg(feature = "bincode")]
    #[error("Lexicon {0} could not be deserialized")]
    LexiconDeserializeError(String),

    /// Character is not a letter, blank or empty cell
    #[error("Invalid character '{0}'")]
    InvalidCharacter(char),

    /// A word is longer than one board row
    #[error("Word too long: \"{0}\"")]
    WordTooLong(String),

    /// Error parsing board state from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// Error parsing premium cell
    #[error("Invalid grid premium cell: \"{0}\"")]
    GridParseError(String),

    /// A play may not start on a cell that already holds a tile
    #[error("Cannot start word on existing tile at {0}")]
    StartsOnFilledTile(crate::board::Pos),

    /// Not enough empty cells left to hold all new tiles
    #[error("Word does not fit on the board at {0}")]
    OutOfBounds(crate::board::Position),

    /// A play after the first turn must touch the existing tiles
    #[error("Word does not overlap with any other word")]
    NoOverlap,

    /// The first play of the game must pass through the center cell
    #[error("First move must be through the center tile")]
    MustStartAtCenter,

    /// The word formed is not in the lexicon
    #[error("\"{0}\" is not in the dictionary")]
    NotInDictionary(String),
}
