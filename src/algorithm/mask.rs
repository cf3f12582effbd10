use bitvec::prelude::*;

/// Fixed-size bitset over positions in the eligible item pool
///
/// Tracks which pool entries have already been placed in the outfit so the
/// fill stages never pick the same item twice. Out-of-range indices are
/// ignored on insert and reported absent on lookup.
#[derive(Clone, Debug)]
pub struct ItemMask {
    bits: BitVec,
}

impl ItemMask {
    /// Create a mask with no items marked
    pub fn new(pool_size: usize) -> Self {
        Self {
            bits: bitvec![0; pool_size],
        }
    }

    /// Mark a pool position as taken
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Test whether a pool position is taken
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Pool positions not yet marked, ascending
    pub fn unmarked(&self) -> Vec<usize> {
        self.bits.iter_zeros().collect()
    }
}
