//! Static block schedule for the index range `[0, len)`.
//!
//! The range is cut into contiguous blocks of `chunk_size` indices (the last
//! one may be shorter). Block `k` belongs to worker `k % workers`, so every
//! worker walks its own blocks in ascending order and no two workers share an
//! index.

use std::num::NonZeroUsize;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticSchedule {
    len: usize,
    chunk_size: NonZeroUsize,
    workers: NonZeroUsize,
}

impl StaticSchedule {
    pub fn new(len: usize, chunk_size: NonZeroUsize, workers: NonZeroUsize) -> Self {
        Self {
            len,
            chunk_size,
            workers,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size.get()
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    pub fn block_count(&self) -> usize {
        self.len.div_ceil(self.chunk_size())
    }

    /// Index range covered by block `block`
    pub fn block(&self, block: usize) -> Range<usize> {
        let start = (block * self.chunk_size()).min(self.len);
        let end = (start + self.chunk_size()).min(self.len);
        start..end
    }

    pub fn blocks(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.block_count()).map(move |block| self.block(block))
    }

    pub fn worker_for(&self, block: usize) -> usize {
        block % self.workers()
    }

    /// Blocks owned by `worker`, ascending
    pub fn blocks_for(&self, worker: usize) -> impl Iterator<Item = Range<usize>> + '_ {
        (worker..self.block_count())
            .step_by(self.workers())
            .map(move |block| self.block(block))
    }

    /// Workers that own at least one block
    pub fn active_workers(&self) -> usize {
        self.workers().min(self.block_count())
    }
}
