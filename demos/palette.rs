use randomart::{Config, Palette};

const KEY: &[u8] = b"drunken bishop";

fn main() {
    for glyphs in ["SE .o+=*BOX@%&#/^", "SE .:-=+*#%@", "SE ░▒▓█", "SE.x"] {
        let palette = Palette::new(glyphs).unwrap();
        let art = Config::new(11, 7).set_palette(palette).render(KEY).unwrap();
        println!("{glyphs:?}\n{art}\n");
    }
}
