use alloc::string::String;

use crate::error::Result;
use crate::field::Field;
use crate::palette::Palette;
use crate::render::render;
use crate::walk::{field_size, walk_with, Stride, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Field dimensions, stride and palette used to turn keys into art.
///
/// ```
/// use randomart::{Config, Palette};
///
/// let art = Config::new(3, 3)
///     .set_palette(Palette::new("SE .o+=*BOX@%&#/^").unwrap())
///     .render(b"")
///     .unwrap();
/// assert_eq!(art, "+---+\n|   |\n| E |\n|   |\n+---+");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    width: usize,
    height: usize,
    stride: Stride,
    palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Config {
    /// Creates a configuration for a `width` x `height` field with the
    /// default stride and palette. Dimensions are checked by
    /// [Config::validate] and on every walk.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, stride: Stride::Width, palette: Palette::default() }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub const fn stride(&self) -> Stride {
        self.stride
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Sets how far vertical moves go. See [Stride].
    pub const fn set_stride(mut self, stride: Stride) -> Self {
        self.stride = stride;
        self
    }

    pub fn set_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Fails with [crate::Error::InvalidDimensions] if the field has no
    /// unique center cell.
    pub fn validate(&self) -> Result<()> {
        field_size(self.width, self.height).map(|_| ())
    }

    pub fn walk(&self, key: &[u8]) -> Result<Field> {
        walk_with(key, self.width, self.height, self.stride)
    }

    /// Walks `key` and renders the resulting field.
    pub fn render(&self, key: &[u8]) -> Result<String> {
        let field = self.walk(key)?;
        Ok(render(&field, &self.palette))
    }
}
