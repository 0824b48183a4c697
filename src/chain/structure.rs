// created = "2026-10-17"
// modified = "2026-10-17"

//! In-place reordering: sorting, rotation and swapping.
//!
//! None of these allocate or free nodes. Sorting and swapping move digit
//! values between existing nodes; rotation only moves the head and tail.

use smallvec::SmallVec;

use super::DigitChain;

impl DigitChain {
    /// Sort digits from smallest to largest.
    pub fn sort_ascending(&mut self) {
        self.sort_with(|digits| digits.sort_unstable());
    }

    /// Sort digits from largest to smallest.
    pub fn sort_descending(&mut self) {
        self.sort_with(|digits| digits.sort_unstable_by(|a, b| b.cmp(a)));
    }

    /// Copy values out, sort them, and write them back in chain order.
    fn sort_with<F: FnOnce(&mut [u8])>(&mut self, sort: F) {
        if self.len <= 1 {
            return;
        }
        let mut digits: SmallVec<[u8; 64]> = self.iter().collect();
        sort(&mut digits[..]);

        let mut cur = self.head;
        for digit in digits {
            let node = &mut self.nodes[cur as usize];
            node.digit = digit;
            cur = node.next;
        }
    }

    /// Make the second digit the first and the old first digit the last.
    pub fn rotate_left(&mut self) {
        if self.len <= 1 {
            return;
        }
        self.head = self.nodes[self.head as usize].next;
        self.tail = self.nodes[self.tail as usize].next;
    }

    /// Make the last digit the first.
    pub fn rotate_right(&mut self) {
        if self.len <= 1 {
            return;
        }
        self.head = self.nodes[self.head as usize].prev;
        self.tail = self.nodes[self.tail as usize].prev;
    }

    /// Swap the digits at two positions. Returns false if either is out of
    /// range.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i >= self.len || j >= self.len {
            return false;
        }
        if i == j {
            return true;
        }
        let a = self.node_at(i) as usize;
        let b = self.node_at(j) as usize;
        let digit = self.nodes[a].digit;
        self.nodes[a].digit = self.nodes[b].digit;
        self.nodes[b].digit = digit;
        return true;
    }
}
