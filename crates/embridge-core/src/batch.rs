//! Fixed-size partitioning of input texts.

use std::num::NonZeroUsize;

/// A contiguous slice of the input texts sent in one upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    /// 0-based position among all batches.
    pub index: usize,
    /// Index in the input of `texts[0]`.
    pub start: usize,
    pub texts: &'a [String],
}

impl Batch<'_> {
    /// 1-based position, as used in log lines.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Number of batches needed for `len` texts: `ceil(len / batch_size)`.
pub fn batch_count(len: usize, batch_size: NonZeroUsize) -> usize {
    len.div_ceil(batch_size.get())
}

/// Split `texts` left-to-right into batches of at most `batch_size`.
///
/// Only the last batch may be shorter. An empty input yields no batches.
pub fn partition(
    texts: &[String],
    batch_size: NonZeroUsize,
) -> impl ExactSizeIterator<Item = Batch<'_>> {
    let size = batch_size.get();
    texts
        .chunks(size)
        .enumerate()
        .map(move |(index, chunk)| Batch {
            index,
            start: index * size,
            texts: chunk,
        })
}
