//! Parallel element-wise addition: `c[i] = a[i] + b[i]`.
//!
//! The output buffer is cut into `chunk_size` blocks with `chunks_mut`, and
//! the blocks are handed out round-robin to one rayon task per worker (see
//! [`StaticSchedule`]). Each task owns its `&mut` blocks outright, so no
//! locking is needed and the borrow checker rules out overlapping writes.
//! `ThreadPool::scope` returns only after every task has finished.

use colored::Colorize;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::num::NonZeroUsize;

use crate::config::SumConfig;
use crate::error::SumError;
use crate::schedule::StaticSchedule;
use crate::sequence::Sequence;

enum Executor {
    Pool {
        pool: ThreadPool,
        workers: NonZeroUsize,
    },
    Sequential,
}

pub struct ParallelAdder {
    chunk_size: NonZeroUsize,
    executor: Executor,
}

impl ParallelAdder {
    /// Builds a pool of `config.resolved_workers()` threads. If the threads
    /// cannot be started the adder prints a warning and runs sequentially.
    pub fn new(config: &SumConfig) -> Self {
        let workers = config.resolved_workers();
        let chunk_size = config.chunk_size();

        if workers.get() == 1 {
            return Self::sequential(chunk_size);
        }

        let built = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|i| format!("sum-worker-{i}"))
            .build();

        Self::from_pool(built, workers, chunk_size)
    }

    fn from_pool(
        built: Result<ThreadPool, ThreadPoolBuildError>,
        workers: NonZeroUsize,
        chunk_size: NonZeroUsize,
    ) -> Self {
        match built {
            Ok(pool) => ParallelAdder {
                chunk_size,
                executor: Executor::Pool { pool, workers },
            },
            Err(err) => {
                eprintln!(
                    "{} could not start {} worker threads ({}); summing sequentially",
                    "warning:".yellow().bold(),
                    workers,
                    err
                );
                Self::sequential(chunk_size)
            }
        }
    }

    /// Single-worker adder that walks the blocks on the calling thread
    pub fn sequential(chunk_size: NonZeroUsize) -> Self {
        ParallelAdder {
            chunk_size,
            executor: Executor::Sequential,
        }
    }

    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    pub fn workers(&self) -> usize {
        match &self.executor {
            Executor::Pool { workers, .. } => workers.get(),
            Executor::Sequential => 1,
        }
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self.executor, Executor::Pool { .. })
    }

    pub fn sum(&self, a: &[f32], b: &[f32]) -> Result<Sequence, SumError> {
        let mut out = Sequence::zeroed(a.len());
        self.sum_into(a, b, out.as_mut_slice())?;
        Ok(out)
    }

    /// Overwrites every element of `out` with `a[i] + b[i]`
    pub fn sum_into(&self, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<(), SumError> {
        if a.len() != b.len() {
            return Err(SumError::length_mismatch(a.len(), b.len()));
        }
        if a.len() != out.len() {
            return Err(SumError::length_mismatch(a.len(), out.len()));
        }

        let chunk = self.chunk_size.get();
        match &self.executor {
            Executor::Sequential => {
                for (index, block) in out.chunks_mut(chunk).enumerate() {
                    let start = index * chunk;
                    add_block(a, b, start, block);
                }
            }
            Executor::Pool { pool, workers } => {
                let schedule = StaticSchedule::new(out.len(), self.chunk_size, *workers);

                let mut assignments: Vec<Vec<(usize, &mut [f32])>> =
                    (0..schedule.active_workers()).map(|_| Vec::new()).collect();
                for (index, block) in out.chunks_mut(chunk).enumerate() {
                    assignments[schedule.worker_for(index)].push((index * chunk, block));
                }

                pool.scope(|scope| {
                    for blocks in assignments {
                        scope.spawn(move |_| {
                            for (start, block) in blocks {
                                add_block(a, b, start, block);
                            }
                        });
                    }
                });
            }
        }

        Ok(())
    }
}

fn add_block(a: &[f32], b: &[f32], start: usize, block: &mut [f32]) {
    let end = start + block.len();
    for ((c, x), y) in block.iter_mut().zip(&a[start..end]).zip(&b[start..end]) {
        *c = x + y;
    }
}

/// Plain single loop, used as the reference result
pub fn sum_sequential(a: &[f32], b: &[f32]) -> Result<Sequence, SumError> {
    if a.len() != b.len() {
        return Err(SumError::length_mismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect::<Vec<_>>().into())
}
