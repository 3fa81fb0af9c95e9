use alloc::string::{String, ToString};
use core::fmt;

use crate::field::Field;
use crate::palette::Palette;

/// Bordered text renderer for a [Field].
///
/// ```text
/// +---+
/// |.oE|
/// |+S.|
/// |o..|
/// +---+
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Randomart<'a> {
    field: &'a Field,
    palette: &'a Palette,
}

impl<'a> Randomart<'a> {
    pub const fn new(field: &'a Field, palette: &'a Palette) -> Self {
        Self { field, palette }
    }

    /// Width of every rendered line, in glyphs.
    pub const fn width(&self) -> usize {
        self.field.width() + 2
    }

    /// Number of rendered lines.
    pub const fn height(&self) -> usize {
        self.field.height() + 2
    }

    fn border(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+")?;
        for _ in 0..self.field.width() {
            write!(f, "-")?;
        }
        write!(f, "+")
    }
}

impl fmt::Display for Randomart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.border(f)?;
        for row in self.field.rows() {
            write!(f, "\n|")?;
            for &cell in row {
                write!(f, "{}", self.palette.glyph(cell))?;
            }
            write!(f, "|")?;
        }
        writeln!(f)?;
        self.border(f)
    }
}

/// Renders `field` with `palette`, lines separated by `\n` and no trailing
/// newline.
pub fn render(field: &Field, palette: &Palette) -> String {
    Randomart::new(field, palette).to_string()
}
