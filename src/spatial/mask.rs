use bitvec::prelude::*;

/// Fixed-size bit grid recording which pixels a fill has already processed
///
/// Row-major, one bit per pixel. Coordinates outside the grid are reported
/// as visited so callers never step past the tile edge.
#[derive(Clone, Debug)]
pub struct VisitedMask {
    bits: BitVec,
    width: u32,
    height: u32,
}

impl VisitedMask {
    /// Create a mask with no pixels visited
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bits: bitvec![0; width as usize * height as usize],
            width,
            height,
        }
    }

    const fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Mark a pixel visited, returning `false` if it already was
    pub fn visit(&mut self, x: u32, y: u32) -> bool {
        match self.offset(x, y) {
            Some(offset) => !self.bits.replace(offset, true),
            None => false,
        }
    }

    /// Test whether a pixel has been visited
    pub fn is_visited(&self, x: u32, y: u32) -> bool {
        self.offset(x, y)
            .is_none_or(|offset| self.bits.get(offset).as_deref() == Some(&true))
    }

    /// Count visited pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}
