//! The drunken bishop walk.
//!
//! Every byte of the key is read as four bit pairs, most significant pair
//! first. Each pair moves the bishop one cell on a toroidal field: moves are
//! applied to the linear cell index modulo the field size, so leaving the
//! field on one side enters it again on the other.

use alloc::vec;
use log::{debug, trace};

use crate::bits::Bits;
use crate::error::{Error, Result};
use crate::field::{Field, END, START, UNVISITED};
use crate::grouper::grouper;

/// Default field width, as used for SSH host key art.
pub const DEFAULT_WIDTH: usize = 17;
/// Default field height, as used for SSH host key art.
pub const DEFAULT_HEIGHT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    East = 0,
    West = 1,
    South = 2,
    North = 3,
}

impl Direction {
    /// Decodes the two low bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Direction::East,
            1 => Direction::West,
            2 => Direction::South,
            _ => Direction::North,
        }
    }
}

/// Distance covered by a vertical move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stride {
    /// North and south move by one row (`width` cells).
    #[default]
    Width,
    /// North and south move by `height` cells. Some fingerprint tools
    /// step this way; use it to reproduce their art. Identical to
    /// [Stride::Width] on square fields.
    Height,
}

impl Stride {
    const fn step(self, width: usize, height: usize) -> usize {
        match self {
            Stride::Width => width,
            Stride::Height => height,
        }
    }
}

/// Checks that the field has a unique center cell and returns its size.
pub(crate) fn field_size(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(size) if size % 2 == 1 => Ok(size),
        _ => {
            debug!("rejecting {width}x{height} field: size must be odd");
            Err(Error::InvalidDimensions { width, height })
        }
    }
}

/// Walks `key` over a `width` x `height` field with the default [Stride].
pub fn walk(key: &[u8], width: usize, height: usize) -> Result<Field> {
    walk_with(key, width, height, Stride::default())
}

/// Walks `key` over a `width` x `height` field.
///
/// Fails with [Error::InvalidDimensions] unless `width * height` is odd.
pub fn walk_with(key: &[u8], width: usize, height: usize, stride: Stride) -> Result<Field> {
    let size = field_size(width, height)?;
    let step = stride.step(width, height) % size;

    let mut cells = vec![UNVISITED; size];
    let mut position = size / 2;
    cells[position] = START;

    for &byte in key {
        for pair in grouper::<_, 2>(Bits::new(byte)) {
            let bits = pair.iter().fold(0u8, |acc, bit| (acc << 1) | bit.unwrap_or(false) as u8);
            let direction = Direction::from_bits(bits);

            if cells[position] > END {
                cells[position] = cells[position].saturating_add(1);
            }

            let next = match direction {
                Direction::East => (position + 1) % size,
                Direction::West => (position + size - 1) % size,
                Direction::South => (position + step) % size,
                Direction::North => (position + size - step) % size,
            };
            trace!("{direction:?}: {position} -> {next}");
            position = next;
        }
    }

    cells[position] = END;
    debug!("walked {} bytes over {width}x{height} field, ended at {position}", key.len());

    Ok(Field::from_parts(cells, width, height, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const REFERENCE_KEY: [u8; 20] = [
        0xCB, 0x7C, 0x8A, 0x7B, 0x56, 0x7F, 0xB2, 0xC2, 0xAC, 0xC2,
        0x87, 0x3B, 0x04, 0xFA, 0xC2, 0xE9, 0xCC, 0x21, 0x42, 0x4A,
    ];

    fn rows(field: &Field) -> Vec<Vec<u32>> {
        field.rows().map(|row| row.to_vec()).collect()
    }

    /// Deterministic pseudo random keys of varying lengths.
    fn keys() -> impl Iterator<Item = Vec<u8>> {
        let mut state: u32 = 0x2545_F491;
        (0..64).map(move |len| {
            (0..len).map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state >> 24) as u8
            }).collect()
        })
    }

    #[test]
    fn test_direction_from_bits() {
        assert_eq!(Direction::from_bits(0), Direction::East);
        assert_eq!(Direction::from_bits(1), Direction::West);
        assert_eq!(Direction::from_bits(2), Direction::South);
        assert_eq!(Direction::from_bits(3), Direction::North);
        assert_eq!(Direction::from_bits(0b110), Direction::South);
    }

    #[test]
    fn test_invalid_dimensions() {
        for (width, height) in [(4, 3), (17, 8), (2, 2), (0, 9), (9, 0), (usize::MAX, 3)] {
            assert_eq!(walk(&REFERENCE_KEY, width, height),
                Err(Error::InvalidDimensions { width, height }));
        }
    }

    #[test]
    fn test_empty_walk() {
        let field = walk(b"", 3, 3).unwrap();
        assert_eq!(rows(&field), [[2, 2, 2], [2, 1, 2], [2, 2, 2]]);
        assert_eq!(field.start(), 4);
        assert_eq!(field.end(), 4);
    }

    #[test]
    fn test_walk_asde() {
        let field = walk(b"asde", 3, 3).unwrap();
        assert_eq!(rows(&field), [[3, 4, 1], [5, 0, 3], [4, 3, 3]]);
        assert_eq!(field.end(), 2);
    }

    #[test]
    fn test_single_byte() {
        // 0x00 heads east four times, wrapping onto the next row
        let field = walk(&[0x00], 3, 3).unwrap();
        assert_eq!(rows(&field), [[2, 2, 2], [2, 0, 3], [3, 3, 1]]);

        // 0x1B = 00 01 10 11: east, west, south, north
        let field = walk(&[0x1B], 5, 3).unwrap();
        assert_eq!(rows(&field), [[2, 2, 2, 2, 2], [2, 2, 1, 3, 2], [2, 2, 3, 2, 2]]);
    }

    #[test]
    fn test_vertical_wraparound() {
        // 0xFF goes north four times on a 1x5 field: 2 -> 1 -> 0 -> 4 -> 3
        let field = walk(&[0xFF], 1, 5).unwrap();
        assert_eq!(field.cells(), [3, 3, 0, 1, 3]);

        // 0xAA goes south four times
        let field = walk(&[0xAA], 1, 5).unwrap();
        assert_eq!(field.cells(), [3, 1, 0, 3, 3]);
    }

    #[test]
    fn test_strides() {
        let width = walk_with(&[0xAA], 5, 3, Stride::Width).unwrap();
        assert_eq!(rows(&width), [[2, 2, 3, 2, 2], [2, 2, 0, 2, 2], [2, 2, 1, 2, 2]]);

        // south by 3 cells: 7 -> 10 -> 13 -> 1 -> 4
        let height = walk_with(&[0xAA], 5, 3, Stride::Height).unwrap();
        assert_eq!(height.cells(), [2, 3, 2, 2, 1, 2, 2, 0, 2, 2, 3, 2, 2, 3, 2]);

        let square = walk_with(&REFERENCE_KEY, 7, 7, Stride::Width).unwrap();
        assert_eq!(square, walk_with(&REFERENCE_KEY, 7, 7, Stride::Height).unwrap());
    }

    #[test]
    fn test_reference_key() {
        let field = walk(&REFERENCE_KEY, DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        assert_eq!(field.get(4, 8), Some(START));
        assert_eq!(field.get(6, 2), Some(END));
        assert_eq!(field.end(), 6 * 17 + 2);
        assert_eq!(field.cells().iter().max(), Some(&7));
    }

    #[test]
    fn test_sentinels() {
        for key in keys() {
            for (width, height) in [(3, 3), (17, 9), (1, 7), (11, 5)] {
                let field = walk(&key, width, height).unwrap();
                let cells = field.cells();

                assert_eq!(cells.iter().filter(|&&c| c == END).count(), 1);
                assert_eq!(cells[field.end()], END);

                let starts = cells.iter().filter(|&&c| c == START).count();
                if field.end() == field.start() {
                    assert_eq!(starts, 0);
                } else {
                    assert_eq!(starts, 1);
                    assert_eq!(cells[field.start()], START);
                }

                let visits: u32 = cells.iter()
                    .filter(|&&c| c >= UNVISITED)
                    .map(|&c| c - UNVISITED)
                    .sum();
                assert!(visits as usize <= key.len() * 4);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for key in keys() {
            assert_eq!(walk(&key, 17, 9), walk(&key, 17, 9));
        }
    }
}
