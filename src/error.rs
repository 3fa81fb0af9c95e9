use thiserror::Error;

/// Errors reported when a walk or a render is misconfigured. They are
/// always raised before any work is done.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `width * height` is zero, even or does not fit in a `usize`: the
    /// field would have no unique center cell.
    #[error("invalid dimensions {width}x{height}: width * height must be odd")]
    InvalidDimensions { width: usize, height: usize },

    /// A palette needs at least one glyph.
    #[error("palette must contain at least one glyph")]
    EmptyPalette,
}

pub type Result<T> = core::result::Result<T, Error>;
