/// Iterator over the indices tried by a binary search within `[low, high]`.
/// After every [`next_index`](BinarySearchIterator::next_index), the caller narrows the range with
/// [`lower`](BinarySearchIterator::lower) or [`higher`](BinarySearchIterator::higher).
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearchIterator {
    low: isize,
    high: isize,
    mid: isize,
}

impl BinarySearchIterator {
    pub fn reset(&mut self, high: usize, low: usize) {
        self.low = low as isize;
        self.high = high as isize;
        self.mid = low as isize;
    }

    pub fn has_next(&self) -> bool {
        self.low <= self.high
    }

    pub fn next_index(&mut self) -> usize {
        debug_assert!(self.has_next());
        self.mid = self.low + (self.high - self.low) / 2;
        self.mid as usize
    }

    /// Continue the search below the last tried index
    pub fn lower(&mut self) {
        self.high = self.mid - 1;
    }

    /// Continue the search above the last tried index
    pub fn higher(&mut self) {
        self.low = self.mid + 1;
    }
}
