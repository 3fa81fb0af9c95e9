//! Deterministic ASCII art for byte strings such as key fingerprints, using
//! the "drunken bishop" walk popularized by OpenSSH.
//!
//! A bishop starts on the center cell of a small field and moves one cell
//! per bit pair of the key. Every cell it leaves gets one more visit, and
//! the field is finally drawn with a palette of glyphs of increasing
//! density. Two different fingerprints are very likely to look different,
//! which makes a quick visual comparison possible. The walk is a display aid,
//! not a hash: it gives no cryptographic guarantee.
//!
//! ```
//! use randomart::Config;
//!
//! let fingerprint = [
//!     0xCB, 0x7C, 0x8A, 0x7B, 0x56, 0x7F, 0xB2, 0xC2, 0xAC, 0xC2,
//!     0x87, 0x3B, 0x04, 0xFA, 0xC2, 0xE9, 0xCC, 0x21, 0x42, 0x4A,
//! ];
//! let art = Config::default().render(&fingerprint).unwrap();
//! assert_eq!(art, "\
//! +-----------------+
//! |              .  |
//! |     oo.o.    +.+|
//! |..   o. ooo.oo+.+|
//! |.+o  ...**.oo  ..|
//! | .o  .. S+.o.    |
//! |  .              |
//! |  E              |
//! |                 |
//! |                 |
//! +-----------------+");
//! ```
//!
//! The lower level pieces can be used separately: [walk()] produces a
//! [Field] of visit counts and [render()] turns it into text with any
//! [Palette].

#![no_std]

extern crate alloc;

pub mod bits;
pub mod grouper;
pub mod field;
pub mod walk;
mod palette;
mod render;
mod config;
mod error;
#[cfg(feature = "embedded-graphics")]
pub mod graphics;

pub use config::Config;
pub use error::{Error, Result};
pub use field::Field;
pub use palette::{Palette, DEFAULT_GLYPHS};
pub use render::{render, Randomart};
pub use walk::{walk, walk_with, Direction, Stride, DEFAULT_HEIGHT, DEFAULT_WIDTH};
