//! Owned, contiguous `f32` buffer with a runtime length.

use std::ops::{Deref, Index};

/// Sequence: fixed-length numeric buffer
/// The length is chosen at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    data: Vec<f32>,
}

impl Sequence {
    /// Creates a sequence of `len` zeros
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    /// Creates a sequence by evaluating `f` at every index in order
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> f32) -> Self {
        Self {
            data: (0..len).map(f).collect(),
        }
    }

    pub fn from_vec(data: Vec<f32>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// First `min(count, len)` elements
    pub fn head(&self, count: usize) -> &[f32] {
        &self.data[..count.min(self.data.len())]
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Bitwise comparison. Unlike `==`, a NaN at the same index counts as equal.
    pub fn bit_eq(&self, other: &Sequence) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(x, y)| x.to_bits() == y.to_bits())
    }
}

impl Deref for Sequence {
    type Target = [f32];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl Index<usize> for Sequence {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl From<Vec<f32>> for Sequence {
    fn from(data: Vec<f32>) -> Self {
        Self::from_vec(data)
    }
}
