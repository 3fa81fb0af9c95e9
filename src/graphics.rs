//! Drawing rendered art with [embedded_graphics].
//!
//! ```
//! use embedded_graphics::mock_display::MockDisplay;
//! use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
//! use embedded_graphics::pixelcolor::BinaryColor;
//! use embedded_graphics::prelude::*;
//! use randomart::{graphics::ArtText, Config};
//!
//! let art = Config::new(3, 3).render(b"asde").unwrap();
//! let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
//!
//! let mut display = MockDisplay::new();
//! ArtText::new(&art, Point::zero(), style).draw(&mut display).unwrap();
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

/// Multi-line art drawn one line per text row, top left corner at
/// `position`. Mono fonts only cover ASCII, so palettes should stick to it.
#[derive(Debug, Clone, Copy)]
pub struct ArtText<'a, C> {
    art: &'a str,
    position: Point,
    style: MonoTextStyle<'a, C>,
}

impl<'a, C: PixelColor> ArtText<'a, C> {
    pub const fn new(art: &'a str, position: Point, style: MonoTextStyle<'a, C>) -> Self {
        Self { art, position, style }
    }

    fn line_height(&self) -> u32 {
        self.style.font.character_size.height
    }
}

impl<C: PixelColor> Drawable for ArtText<'_, C> {
    type Color = C;
    /// Position below the last drawn line.
    type Output = Point;

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let mut position = self.position;
        for line in self.art.lines() {
            Text::with_baseline(line, position, self.style, Baseline::Top).draw(target)?;
            position.y += self.line_height() as i32;
        }
        Ok(position)
    }
}

impl<C: PixelColor> Dimensions for ArtText<'_, C> {
    fn bounding_box(&self) -> Rectangle {
        let font = self.style.font;
        let cols = self.art.lines().map(|line| line.chars().count()).max().unwrap_or(0) as u32;
        let rows = self.art.lines().count() as u32;

        let width = cols * font.character_size.width + cols.saturating_sub(1) * font.character_spacing;
        Rectangle::new(self.position, Size::new(width, rows * self.line_height()))
    }
}

#[cfg(test)]
mod tests {
    use super::ArtText;
    use crate::Config;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{ContainsPoint, Rectangle};

    #[test]
    fn test_draw() {
        let art = Config::new(3, 3).render(b"asde").unwrap();
        let text = ArtText::new(&art, Point::new(2, 4), MonoTextStyle::new(&FONT_6X10, BinaryColor::On));

        let bbox = text.bounding_box();
        assert_eq!(bbox, Rectangle::new(Point::new(2, 4), Size::new(30, 50)));

        let mut display = MockDisplay::new();
        let next = text.draw(&mut display).unwrap();
        assert_eq!(next, Point::new(2, 54));

        let area = display.affected_area();
        assert!(!area.is_zero_sized());
        assert!(bbox.contains(area.top_left));
        assert!(area.bottom_right().map_or(false, |p| bbox.contains(p)));
    }

    #[test]
    fn test_empty() {
        let text = ArtText::new("", Point::zero(), MonoTextStyle::new(&FONT_6X10, BinaryColor::On));
        assert!(text.bounding_box().is_zero_sized());

        let mut display = MockDisplay::<BinaryColor>::new();
        assert_eq!(text.draw(&mut display).unwrap(), Point::zero());
    }
}
