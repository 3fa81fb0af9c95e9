use core::iter;

/// Iterator over the eight bits of a byte, most significant bit first.
#[derive(Debug, Clone)]
pub struct Bits {
    value: u8,
    count: u8,
}

impl Bits {
    pub const fn new(value: u8) -> Self {
        Self { value, count: 8 }
    }
}

impl iter::Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count > 0 {
            self.count -= 1;
            Some((self.value >> self.count) & 1 != 0)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count as usize;
        (count, Some(count))
    }
}

impl iter::DoubleEndedIterator for Bits {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.count > 0 {
            let bit = (self.value & 1) != 0;
            self.value >>= 1;
            self.count -= 1;
            Some(bit)
        } else {
            None
        }
    }
}

impl iter::ExactSizeIterator for Bits {}
impl iter::FusedIterator for Bits {}
