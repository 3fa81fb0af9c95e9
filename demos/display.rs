use embedded_graphics::mono_font::{ascii::FONT_5X7, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use randomart::{graphics::ArtText, Config};

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";
const PADDING: usize = 4;

const KEY: [u8; 16] = [0x51, 0x8E, 0x2B, 0x9A, 0x07, 0xD4, 0x66, 0x3C, 0xF1, 0x10, 0xA2, 0x5B, 0xC9, 0x8D, 0x34, 0xE7];

/// Monochrome framebuffer printed to the terminal.
struct Canvas {
    size: Size,
    pixels: Vec<bool>,
}

impl Canvas {
    fn new(size: Size) -> Self {
        Self { size, pixels: vec![false; (size.width * size.height) as usize] }
    }

    fn print(&self) {
        let width = self.size.width as usize;
        let quiet_zone_v = str::repeat(WHITE, width + PADDING * 2);
        let quiet_zone_h = &quiet_zone_v[..PADDING * WHITE.len()];

        println!("{quiet_zone_v}\n{quiet_zone_v}");
        for chunk in self.pixels.chunks(width) {
            print!("{quiet_zone_h}");
            for &on in chunk { print!("{}", if on { BLACK } else { WHITE }); }
            println!("{quiet_zone_h}");
        }
        println!("{quiet_zone_v}\n{quiet_zone_v}\x1B[0m");
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x < self.size.width && y < self.size.height {
                self.pixels[(y * self.size.width + x) as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

fn main() {
    let art = Config::default().render(&KEY).unwrap();
    let text = ArtText::new(&art, Point::zero(), MonoTextStyle::new(&FONT_5X7, BinaryColor::On));

    let mut canvas = Canvas::new(text.bounding_box().size);
    text.draw(&mut canvas).unwrap();

    println!("{art}");
    canvas.print();
}
