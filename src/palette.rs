use alloc::vec::Vec;

use crate::error::{Error, Result};

/// Glyphs used when no palette is given. `S` marks the start, `E` the end,
/// a space an unvisited cell, and the rest increasing traffic.
pub const DEFAULT_GLYPHS: &str = "SE .o+=*BOX@%&#/^";

/// Ordered list of glyphs indexed by cell value modulo its length. Values
/// beyond the last glyph wrap around to the start of the palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    pub fn new(glyphs: &str) -> Result<Self> {
        Self::try_from(glyphs.chars().collect::<Vec<_>>())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false, empty palettes are rejected on construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[inline]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Glyph displayed for a cell holding `value`.
    #[inline]
    pub fn glyph(&self, value: u32) -> char {
        self.glyphs[value as usize % self.glyphs.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { glyphs: DEFAULT_GLYPHS.chars().collect() }
    }
}

impl TryFrom<Vec<char>> for Palette {
    type Error = Error;

    fn try_from(glyphs: Vec<char>) -> Result<Self> {
        if glyphs.is_empty() {
            log::debug!("rejecting empty palette");
            return Err(Error::EmptyPalette);
        }
        Ok(Self { glyphs })
    }
}

impl TryFrom<&str> for Palette {
    type Error = Error;

    fn try_from(glyphs: &str) -> Result<Self> {
        Self::new(glyphs)
    }
}
