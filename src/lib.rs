//! Parallel Array Sum
//!
//! Adds two `f32` arrays element by element on a rayon thread pool. The
//! index range is split into fixed-size chunks that are assigned statically,
//! round-robin, to the workers; every worker writes only its own chunks, so
//! the result is bit-for-bit the same as a sequential loop.
//!
//! ## Running the demos
//!
//! ```bash
//! cargo run --bin sum_arrays                  # a[i] = 5i,  b[i] = (i + 0.5) * 2.1
//! cargo run --bin sum_arrays_alt              # a[i] = 10i, b[i] = (i + 2.5) * 3.6
//! cargo run --bin sum_arrays -- run.toml      # override len / chunk_size / ...
//! ```

pub mod adder;
pub mod config;
pub mod demo;
pub mod error;
pub mod report;
pub mod schedule;
pub mod sequence;
pub mod variant;

pub use adder::{sum_sequential, ParallelAdder};
pub use config::{SumConfig, SumConfigBuilder};
pub use error::{ConfigError, SumError};
pub use schedule::StaticSchedule;
pub use sequence::Sequence;
pub use variant::Variant;
