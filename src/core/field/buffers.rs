use super::*;

/// The three generations of the trail field plus the swap bookkeeping.
///
/// Only `&mut FieldBuffers` can swap or clear, so no pass can observe a
/// half-swapped state: the orchestrator owns the buffers exclusively between
/// passes and lends out `split()` views during them.
#[derive(Debug)]
pub struct FieldBuffers {
    pub current: TrailField,
    pub next: TrailField,
    pub deposits: DepositBuffer,
    generation: u64,
}

impl FieldBuffers {
    pub fn new(width: u32, height: u32) -> Result<Self, SimError> {
        Ok(Self {
            current: TrailField::new(width, height)?,
            next: TrailField::new(width, height)?,
            deposits: DepositBuffer::new(width, height)?,
            generation: 0,
        })
    }

    /// Number of swaps performed so far
    #[inline]
    pub fn generation(&self) -> u64 { self.generation }

    /// Fresh write target for the coming steering pass.
    pub fn prepare_write(&mut self) {
        self.deposits.clear();
    }

    /// Read views for the diffusion pass and the disjoint output buffer.
    #[inline]
    pub fn split(&mut self) -> (&TrailField, &DepositBuffer, &mut TrailField) {
        (&self.current, &self.deposits, &mut self.next)
    }

    /// Promote `next` to `current`. Pointer swap only, no cell is copied.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }
}
