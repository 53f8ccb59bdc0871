use super::*;

impl TrailField {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) outside {}x{} field",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((idx % w) as u32, (idx / w) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    /// True when a continuous position lies in `[0, width) x [0, height)`
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x < self.width as f32 && pos.y >= 0.0 && pos.y < self.height as f32
    }

    /// Get index without the public bounds assertion
    #[inline(always)]
    pub fn index_unchecked(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index_unchecked: out of bounds ({}, {}) for {}x{} field",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + x as usize
    }

    /// Cell containing `pos`, clamped to the nearest edge cell.
    /// Float-to-int casts saturate and map NaN to 0, so any input resolves.
    #[inline]
    pub fn cell_of(&self, pos: Vec2) -> (u32, u32) {
        clamp_cell(pos, self.width, self.height)
    }
}

/// Cell containing `pos` in a `width x height` grid, clamped to the edges.
#[inline]
pub(crate) fn clamp_cell(pos: Vec2, width: u32, height: u32) -> (u32, u32) {
    let x = (pos.x.floor() as i64).clamp(0, width as i64 - 1) as u32;
    let y = (pos.y.floor() as i64).clamp(0, height as i64 - 1) as u32;
    (x, y)
}
