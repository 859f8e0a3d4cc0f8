/// Packed bit grid stored row-major (`y * width + x`), one bit per module.
///
/// Used both for module colours (true = dark) and for the reservation map
/// (true = owned by a function pattern).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create an all-zero matrix
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Create an all-zero square matrix
    pub fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn locate(&self, x: usize, y: usize) -> Option<(usize, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y * self.width + x;
        Some((index / 8, 1 << (index % 8)))
    }

    /// Get bit at (x, y); out-of-range reads are false
    pub fn get(&self, x: usize, y: usize) -> bool {
        match self.locate(x, y) {
            Some((byte, bit)) => self.data[byte] & bit != 0,
            None => false,
        }
    }

    /// Set bit at (x, y); out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if let Some((byte, bit)) = self.locate(x, y) {
            if value {
                self.data[byte] |= bit;
            } else {
                self.data[byte] &= !bit;
            }
        }
    }

    /// Set every bit of the `w` x `h` rectangle at (x, y), clipped to bounds
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, value: bool) {
        let end_x = (x + w).min(self.width);
        let end_y = (y + h).min(self.height);
        for yy in y..end_y {
            for xx in x..end_x {
                self.set(xx, yy, value);
            }
        }
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        // Padding bits in the last byte are never set.
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}
