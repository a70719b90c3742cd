//! ±1 RMQ via block decomposition ("Four Russians"). O(n) | O(1).
//!
//! Valid only for sequences whose neighbours differ by exactly one, such as
//! the depth sequence of an Euler tour.
//!
//! ## Layout
//!
//! - The sequence is cut into blocks of `2^k` elements with
//!   `k = floor(log2(floor(log2 n))) - 1`, saturated at zero.
//! - A sparse table over the block minima answers "which block holds the
//!   minimum" for runs of whole blocks.
//! - Each block is classified by its up/down step pattern. Two blocks with
//!   the same pattern are translates of each other, so they share one sparse
//!   table built over a copy of the first block seen with that pattern.
//!
//! Since there are at most `2^(blockSize - 1)` patterns and
//! `blockSize <= log2(n) / 2`, the class tables take `O(sqrt(n) log n)` space
//! in total.

use super::{min_index, RangeMinimum, SparseTable};
use crate::util::floor_log2;
use tracing::debug;

/// Block decomposition tables, detached from the input they describe.
#[derive(Debug, Clone)]
pub struct PlusMinusIndex<T> {
    /// `log2(block_size)`.
    shift: usize,
    /// `block_size - 1`.
    mask: usize,

    /// Minimum value of each block.
    block_min_val: Vec<T>,
    /// Position of each block minimum in the input.
    block_min_idx: Vec<usize>,
    /// Sparse table over `block_min_val`.
    blocks: SparseTable,

    /// Step pattern of each block.
    block_class: Vec<usize>,
    /// Which entry of `class_tables` serves each block.
    block_slot: Vec<usize>,
    /// One table per distinct class, in order of first appearance.
    class_tables: Vec<ClassTable<T>>,
}

/// Representative values of one block class and the sparse table over them.
#[derive(Debug, Clone)]
struct ClassTable<T> {
    values: Vec<T>,
    table: SparseTable,
}

impl<T> Default for PlusMinusIndex<T> {
    fn default() -> Self {
        Self {
            shift: 0,
            mask: 0,
            block_min_val: Vec::new(),
            block_min_idx: Vec::new(),
            blocks: SparseTable::default(),
            block_class: Vec::new(),
            block_slot: Vec::new(),
            class_tables: Vec::new(),
        }
    }
}

/// Exponent of the block size for a sequence of `n` elements.
pub(crate) fn block_shift(n: usize) -> usize {
    floor_log2(floor_log2(n)).saturating_sub(1)
}

impl<T: Ord + Clone> PlusMinusIndex<T> {
    /// Build the block decomposition of `data`.
    ///
    /// `data` must satisfy the ±1 property; this is not checked.
    pub fn build(data: &[T]) -> Self {
        let n = data.len();
        let shift = block_shift(n);
        let block_size = 1usize << shift;
        let block_count = n.div_ceil(block_size);

        // Block minima.
        let mut block_min_val = Vec::with_capacity(block_count);
        let mut block_min_idx = Vec::with_capacity(block_count);
        for (b, chunk) in data.chunks(block_size).enumerate() {
            let start = b * block_size;
            let offset = (1..chunk.len()).fold(0, |best, k| min_index(chunk, best, k));
            block_min_val.push(chunk[offset].clone());
            block_min_idx.push(start + offset);
        }
        let blocks = SparseTable::build(&block_min_val);

        // Block classes.
        let class_count = 1usize << (block_size - 1);
        let mut slot_of_class: Vec<Option<usize>> = vec![None; class_count];
        let mut block_class = Vec::with_capacity(block_count);
        let mut block_slot = Vec::with_capacity(block_count);
        let mut class_tables: Vec<ClassTable<T>> = Vec::new();

        for (b, chunk) in data.chunks(block_size).enumerate() {
            let class = classify(chunk, block_size);
            let slot = match slot_of_class[class] {
                Some(slot) => slot,
                None => {
                    let values = chunk.to_vec();
                    let table = SparseTable::build(&values);
                    class_tables.push(ClassTable { values, table });
                    let slot = class_tables.len() - 1;
                    slot_of_class[class] = Some(slot);
                    slot
                }
            };
            debug_assert!(
                chunk.len() <= class_tables[slot].values.len(),
                "block {} is longer than its class representative",
                b
            );
            block_class.push(class);
            block_slot.push(slot);
        }

        debug!(
            n,
            block_size,
            block_count,
            classes = class_tables.len(),
            "plus-minus index built"
        );

        Self {
            shift,
            mask: block_size - 1,
            block_min_val,
            block_min_idx,
            blocks,
            block_class,
            block_slot,
            class_tables,
        }
    }

    /// Index of the left-most minimum of `data[i..=j]`; `data` must be the
    /// slice the index was built from.
    pub fn query(&self, data: &[T], i: usize, j: usize) -> usize {
        debug_assert!(i <= j && j < data.len(), "invalid range [{}, {}]", i, j);

        let (ib, jb) = (i >> self.shift, j >> self.shift);
        let (io, jo) = (i & self.mask, j & self.mask);

        if ib == jb {
            return self.in_block(ib, io, jo);
        }

        let suffix = self.in_block(ib, io, self.mask);
        let prefix = self.in_block(jb, 0, jo);
        let best = min_index(data, suffix, prefix);

        if ib + 1 == jb {
            return best;
        }

        let b = self.blocks.query(&self.block_min_val, ib + 1, jb - 1);
        min_index(data, best, self.block_min_idx[b])
    }

    /// Minimum of offsets `lo..=hi` inside block `b`, as an input index.
    #[inline]
    fn in_block(&self, b: usize, lo: usize, hi: usize) -> usize {
        let class = &self.class_tables[self.block_slot[b]];
        (b << self.shift) + class.table.query(&class.values, lo, hi)
    }
}

impl<T> PlusMinusIndex<T> {
    /// Elements per block.
    pub fn block_size(&self) -> usize {
        1 << self.shift
    }

    /// Number of blocks, the last one possibly short.
    pub fn block_count(&self) -> usize {
        self.block_slot.len()
    }

    /// Number of distinct block classes that needed a table.
    pub fn class_count(&self) -> usize {
        self.class_tables.len()
    }

    /// Step pattern of block `b`.
    pub fn class_of(&self, b: usize) -> usize {
        self.block_class[b]
    }
}

/// Step pattern of a block as `block_size - 1` bits, first step in the most
/// significant position. A set bit is a downward step. Steps missing from a
/// short final block count as upward, which keeps its relative minima equal
/// to those of any full block with the same class.
fn classify<T: Ord>(chunk: &[T], block_size: usize) -> usize {
    (1..block_size).fold(0, |class, k| {
        let down = k < chunk.len() && chunk[k] < chunk[k - 1];
        class << 1 | usize::from(down)
    })
}

/// ±1 RMQ over a borrowed sequence.
#[derive(Debug, Clone)]
pub struct PlusMinusRmq<'a, T> {
    data: &'a [T],
    index: PlusMinusIndex<T>,
}

impl<'a, T: Ord + Clone> PlusMinusRmq<'a, T> {
    /// Wrap `data`; tables are built by [`RangeMinimum::preprocess`].
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            index: PlusMinusIndex::default(),
        }
    }

    /// The block decomposition built by the last preprocessing pass.
    pub fn index(&self) -> &PlusMinusIndex<T> {
        &self.index
    }
}

impl<T: Ord + Clone> RangeMinimum for PlusMinusRmq<'_, T> {
    fn preprocess(&mut self) {
        self.index = PlusMinusIndex::build(self.data);
    }

    #[inline]
    fn query(&self, i: usize, j: usize) -> usize {
        self.index.query(self.data, i, j)
    }
}
