use thiserror::Error;

/// Errors that can occur during contour extraction and encoding.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("contour needs at least 2 points, got {0}")]
    ContourTooShort(usize),

    #[error("points {0} and {1} are not a unit step apart")]
    NonUnitStep(usize, usize),

    #[error("invalid chain code character '{0}'")]
    InvalidChainCode(char),

    #[error("malformed chain line: {0}")]
    ChainFormat(String),

    #[error("line {line}: {message}")]
    SdpParse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
