// created = "2026-10-17"
// modified = "2026-10-17"

//! Circular doubly-linked digit chains.
//!
//! A chain stores the digits of one unsigned integer, most significant digit
//! first, in a fixed radix. Nodes live in a Vec and link to each other by
//! index, so the cycle `tail.next == head`, `head.prev == tail` involves no
//! shared ownership. Removed slots go on a free list and get reused.
//!
//! Positional access walks from whichever end is closer, so reaching index
//! `i` costs O(min(i, len - i)).

pub mod codec;
pub mod structure;

use std::fmt;

use crate::config::Profile;
use crate::config::check_radix;
use crate::error::ChainError;

/// Index into the node arena.
type NodeIdx = u32;
/// Sentinel value for no node.
const NONE: NodeIdx = u32::MAX;

/// A single digit and its neighbours.
#[derive(Clone, Copy, Debug)]
struct Node {
    digit: u8,
    next: NodeIdx,
    prev: NodeIdx,
}

/// An unsigned integer stored as a circular chain of digits.
#[derive(Clone)]
pub struct DigitChain {
    /// Node storage. Slots listed in `free` are unused.
    nodes: Vec<Node>,
    /// Slots of removed nodes, reused by later inserts.
    free: Vec<NodeIdx>,
    /// Most significant digit (NONE when empty).
    head: NodeIdx,
    /// Least significant digit (NONE when empty).
    tail: NodeIdx,
    /// Number of linked nodes.
    len: usize,
    radix: u32,
    profile: Profile,
}

impl DigitChain {
    /// Create an empty chain in the profile's main radix.
    pub fn new(profile: Profile) -> DigitChain {
        return DigitChain::empty(profile, profile.radix());
    }

    /// Create an empty chain in an explicit radix.
    pub fn with_radix(profile: Profile, radix: u32) -> Result<DigitChain, ChainError> {
        let radix = check_radix(radix)?;
        return Ok(DigitChain::empty(profile, radix));
    }

    /// Create a chain holding the given digits, most significant first.
    pub fn from_digits(profile: Profile, radix: u32, digits: &[u8]) -> Result<DigitChain, ChainError> {
        let mut chain = DigitChain::with_radix(profile, radix)?;
        chain.try_extend(digits.iter().copied())?;
        return Ok(chain);
    }

    /// Radix must already be checked.
    pub(crate) fn empty(profile: Profile, radix: u32) -> DigitChain {
        return DigitChain {
            nodes: Vec::new(),
            free: Vec::new(),
            head: NONE,
            tail: NONE,
            len: 0,
            radix,
            profile,
        };
    }

    pub fn radix(&self) -> u32 {
        return self.radix;
    }

    /// The profile this chain was built with.
    pub fn profile(&self) -> Profile {
        return self.profile;
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    fn check_digit(&self, digit: u8) -> Result<u8, ChainError> {
        if u32::from(digit) >= self.radix {
            return Err(ChainError::InvalidDigit { digit, radix: self.radix });
        }
        return Ok(digit);
    }

    fn check_index(&self, index: usize) -> Result<usize, ChainError> {
        if index >= self.len {
            return Err(ChainError::IndexOutOfRange { index, len: self.len });
        }
        return Ok(index);
    }

    /// Allocate a detached node, reusing a free slot if available.
    fn alloc(&mut self, digit: u8) -> NodeIdx {
        let node = Node { digit, next: NONE, prev: NONE };
        if let Some(idx) = self.free.pop() {
            self.nodes[idx as usize] = node;
            return idx;
        }
        let idx = self.nodes.len() as NodeIdx;
        self.nodes.push(node);
        return idx;
    }

    /// Find the node at `index`, walking from the nearer end.
    /// Index must be in range.
    fn node_at(&self, index: usize) -> NodeIdx {
        let mut cur;
        if index <= self.len / 2 {
            cur = self.head;
            for _ in 0..index {
                cur = self.nodes[cur as usize].next;
            }
        } else {
            cur = self.tail;
            for _ in (index + 1)..self.len {
                cur = self.nodes[cur as usize].prev;
            }
        }
        return cur;
    }

    /// Link a new node after the tail. Digit must already be checked.
    pub(crate) fn link_last(&mut self, digit: u8) {
        let idx = self.alloc(digit);
        if self.head == NONE {
            // A lone node is its own neighbour.
            let node = &mut self.nodes[idx as usize];
            node.next = idx;
            node.prev = idx;
            self.head = idx;
            self.tail = idx;
        } else {
            let (head, tail) = (self.head, self.tail);
            self.nodes[idx as usize].prev = tail;
            self.nodes[idx as usize].next = head;
            self.nodes[tail as usize].next = idx;
            self.nodes[head as usize].prev = idx;
            self.tail = idx;
        }
        self.len += 1;
    }

    /// Unlink a node and return its digit.
    fn unlink(&mut self, idx: NodeIdx) -> u8 {
        let node = self.nodes[idx as usize];
        if self.len == 1 {
            self.clear();
            return node.digit;
        }

        self.nodes[node.prev as usize].next = node.next;
        self.nodes[node.next as usize].prev = node.prev;
        if idx == self.head {
            self.head = node.next;
        }
        if idx == self.tail {
            self.tail = node.prev;
        }
        self.free.push(idx);
        self.len -= 1;
        return node.digit;
    }

    /// Append a digit as the new least significant digit.
    pub fn push(&mut self, digit: u8) -> Result<(), ChainError> {
        let digit = self.check_digit(digit)?;
        self.link_last(digit);
        return Ok(());
    }

    /// Append every digit in order, stopping at the first invalid one.
    /// Digits before the invalid one stay appended.
    pub fn try_extend<I: IntoIterator<Item = u8>>(&mut self, digits: I) -> Result<(), ChainError> {
        for digit in digits {
            self.push(digit)?;
        }
        return Ok(());
    }

    /// Insert a digit so that it ends up at `index`.
    pub fn insert(&mut self, index: usize, digit: u8) -> Result<(), ChainError> {
        let digit = self.check_digit(digit)?;
        if index > self.len {
            return Err(ChainError::IndexOutOfRange { index, len: self.len });
        }
        if index == self.len {
            self.link_last(digit);
            return Ok(());
        }

        let next = self.node_at(index);
        let prev = self.nodes[next as usize].prev;
        let idx = self.alloc(digit);
        self.nodes[idx as usize].next = next;
        self.nodes[idx as usize].prev = prev;
        self.nodes[prev as usize].next = idx;
        self.nodes[next as usize].prev = idx;
        if index == 0 {
            self.head = idx;
        }
        self.len += 1;
        return Ok(());
    }

    /// Remove the digit at `index` and return it.
    pub fn remove(&mut self, index: usize) -> Result<u8, ChainError> {
        let index = self.check_index(index)?;
        let idx = self.node_at(index);
        return Ok(self.unlink(idx));
    }

    /// Get the digit at `index`.
    pub fn get(&self, index: usize) -> Result<u8, ChainError> {
        let index = self.check_index(index)?;
        return Ok(self.nodes[self.node_at(index) as usize].digit);
    }

    /// Replace the digit at `index`, returning the old one.
    pub fn set(&mut self, index: usize, digit: u8) -> Result<u8, ChainError> {
        let index = self.check_index(index)?;
        let digit = self.check_digit(digit)?;
        let idx = self.node_at(index);
        let old = self.nodes[idx as usize].digit;
        self.nodes[idx as usize].digit = digit;
        return Ok(old);
    }

    /// Index of the first occurrence of `digit`.
    pub fn position(&self, digit: u8) -> Option<usize> {
        return self.iter().position(|d| d == digit);
    }

    /// Index of the last occurrence of `digit`.
    pub fn rposition(&self, digit: u8) -> Option<usize> {
        return self.iter().rposition(|d| d == digit);
    }

    pub fn contains(&self, digit: u8) -> bool {
        return self.position(digit).is_some();
    }

    /// Remove the first occurrence of `digit`. Returns whether one was found.
    pub fn remove_digit(&mut self, digit: u8) -> bool {
        let mut cur = self.head;
        for _ in 0..self.len {
            let node = self.nodes[cur as usize];
            if node.digit == digit {
                self.unlink(cur);
                return true;
            }
            cur = node.next;
        }
        return false;
    }

    /// Keep only the digits for which `keep` returns true.
    pub fn retain<F: FnMut(u8) -> bool>(&mut self, mut keep: F) {
        let count = self.len;
        let mut cur = self.head;
        for _ in 0..count {
            let node = self.nodes[cur as usize];
            if !keep(node.digit) {
                // Only clears the arena when this is the last unvisited node.
                self.unlink(cur);
            }
            cur = node.next;
        }
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = NONE;
        self.tail = NONE;
        self.len = 0;
    }

    /// Iterate over digits, most significant first.
    pub fn iter(&self) -> Iter<'_> {
        return Iter {
            chain: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        };
    }

    pub fn to_vec(&self) -> Vec<u8> {
        return self.iter().collect();
    }

    /// Check every structural invariant: circular links in both directions,
    /// head/tail agreement with `len`, digit range, and arena accounting.
    pub fn is_well_formed(&self) -> bool {
        if self.len == 0 {
            return self.head == NONE && self.tail == NONE;
        }
        if self.head == NONE || self.tail == NONE {
            return false;
        }
        if self.nodes.len() - self.free.len() != self.len {
            return false;
        }

        let mut cur = self.head;
        for i in 0..self.len {
            let node = self.nodes[cur as usize];
            if u32::from(node.digit) >= self.radix {
                return false;
            }
            if self.nodes[node.next as usize].prev != cur {
                return false;
            }
            if i == self.len - 1 && cur != self.tail {
                return false;
            }
            cur = node.next;
        }
        if cur != self.head {
            return false;
        }

        let mut cur = self.tail;
        for _ in 0..self.len {
            cur = self.nodes[cur as usize].prev;
        }
        return cur == self.tail;
    }
}

/// Iterator over the digits of a chain.
pub struct Iter<'a> {
    chain: &'a DigitChain,
    front: NodeIdx,
    back: NodeIdx,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.nodes[self.front as usize];
        self.front = node.next;
        self.remaining -= 1;
        return Some(node.digit);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.nodes[self.back as usize];
        self.back = node.prev;
        self.remaining -= 1;
        return Some(node.digit);
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DigitChain {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        return self.iter();
    }
}

// Equality is on digit values only, so a chain compares equal to any
// byte sequence with the same digits regardless of radix.

impl PartialEq for DigitChain {
    fn eq(&self, other: &DigitChain) -> bool {
        return self.len == other.len && self.iter().eq(other.iter());
    }
}

impl Eq for DigitChain {}

impl PartialEq<[u8]> for DigitChain {
    fn eq(&self, other: &[u8]) -> bool {
        return self.len == other.len() && self.iter().eq(other.iter().copied());
    }
}

impl PartialEq<&[u8]> for DigitChain {
    fn eq(&self, other: &&[u8]) -> bool {
        return *self == **other;
    }
}

impl PartialEq<Vec<u8>> for DigitChain {
    fn eq(&self, other: &Vec<u8>) -> bool {
        return *self == other[..];
    }
}

impl<const N: usize> PartialEq<[u8; N]> for DigitChain {
    fn eq(&self, other: &[u8; N]) -> bool {
        return *self == other[..];
    }
}

/// Render one digit: 0-9, then A-Z, then `[n]` past base 36.
fn write_digit(f: &mut fmt::Formatter<'_>, digit: u8) -> fmt::Result {
    return match digit {
        0..=9 => write!(f, "{}", (b'0' + digit) as char),
        10..=35 => write!(f, "{}", (b'A' + digit - 10) as char),
        _ => write!(f, "[{}]", digit),
    };
}

impl fmt::Display for DigitChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write_digit(f, digit)?;
        }
        return Ok(());
    }
}

impl fmt::Debug for DigitChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitChain(radix {}, ", self.radix)?;
        f.debug_list().entries(self.iter()).finish()?;
        return write!(f, ")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(digits: &[u8]) -> DigitChain {
        return DigitChain::from_digits(Profile::default(), 10, digits).unwrap();
    }

    #[test]
    fn empty_chain() {
        let chain = DigitChain::new(Profile::default());
        assert_eq!(chain.len(), 0);
        assert!(chain.is_empty());
        assert_eq!(chain.radix(), 3);
        assert!(chain.is_well_formed());
        assert_eq!(chain.to_string(), "");
    }

    #[test]
    fn single_node_links_to_itself() {
        let chain = decimal(&[7]);
        assert_eq!(chain.head, chain.tail);
        let node = chain.nodes[chain.head as usize];
        assert_eq!(node.next, chain.head);
        assert_eq!(node.prev, chain.head);
        assert!(chain.is_well_formed());
    }

    #[test]
    fn push_rejects_digit_outside_radix() {
        let mut chain = DigitChain::with_radix(Profile::default(), 8).unwrap();
        assert_eq!(chain.push(8), Err(ChainError::InvalidDigit { digit: 8, radix: 8 }));
        assert!(chain.is_empty());
        chain.push(7).unwrap();
        assert_eq!(chain, [7]);
    }

    #[test]
    fn with_radix_rejects_unsupported() {
        assert_eq!(
            DigitChain::with_radix(Profile::default(), 1).unwrap_err(),
            ChainError::InvalidRadix(1),
        );
        assert!(DigitChain::with_radix(Profile::default(), 256).is_ok());
    }

    #[test]
    fn get_walks_from_both_ends() {
        let chain = decimal(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        for i in 0..10 {
            assert_eq!(chain.get(i), Ok(i as u8));
        }
        assert_eq!(chain.get(10), Err(ChainError::IndexOutOfRange { index: 10, len: 10 }));
    }

    #[test]
    fn insert_at_front_middle_and_end() {
        let mut chain = decimal(&[2, 4]);
        chain.insert(0, 1).unwrap();
        chain.insert(2, 3).unwrap();
        chain.insert(4, 5).unwrap();
        assert_eq!(chain, [1, 2, 3, 4, 5]);
        assert!(chain.is_well_formed());

        assert_eq!(chain.insert(6, 0), Err(ChainError::IndexOutOfRange { index: 6, len: 5 }));
        assert_eq!(chain.insert(0, 10), Err(ChainError::InvalidDigit { digit: 10, radix: 10 }));
        assert_eq!(chain.len(), 5);
    }

    #[test]
    fn insert_into_empty() {
        let mut chain = decimal(&[]);
        chain.insert(0, 4).unwrap();
        assert_eq!(chain, [4]);
        assert!(chain.is_well_formed());
    }

    #[test]
    fn remove_head_tail_and_middle() {
        let mut chain = decimal(&[1, 2, 3, 4, 5]);
        assert_eq!(chain.remove(0), Ok(1));
        assert_eq!(chain.remove(3), Ok(5));
        assert_eq!(chain.remove(1), Ok(3));
        assert_eq!(chain, [2, 4]);
        assert!(chain.is_well_formed());
        assert_eq!(chain.remove(2), Err(ChainError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn removing_last_node_resets_chain() {
        let mut chain = decimal(&[9]);
        assert_eq!(chain.remove(0), Ok(9));
        assert!(chain.is_empty());
        assert_eq!(chain.head, NONE);
        assert_eq!(chain.tail, NONE);
        assert!(chain.nodes.is_empty());
        assert!(chain.is_well_formed());
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut chain = decimal(&[1, 2, 3]);
        chain.remove(1).unwrap();
        chain.push(4).unwrap();
        assert_eq!(chain.nodes.len(), 3);
        assert_eq!(chain, [1, 3, 4]);
        assert!(chain.is_well_formed());
    }

    #[test]
    fn set_returns_previous_digit() {
        let mut chain = decimal(&[1, 2, 3]);
        assert_eq!(chain.set(1, 9), Ok(2));
        assert_eq!(chain, [1, 9, 3]);
        assert_eq!(chain.set(0, 10), Err(ChainError::InvalidDigit { digit: 10, radix: 10 }));
        assert_eq!(chain.set(3, 0), Err(ChainError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn locate_first_and_last() {
        let chain = decimal(&[1, 2, 1, 3, 1]);
        assert_eq!(chain.position(1), Some(0));
        assert_eq!(chain.rposition(1), Some(4));
        assert_eq!(chain.position(3), Some(3));
        assert_eq!(chain.rposition(3), Some(3));
        assert_eq!(chain.position(7), None);
        assert_eq!(chain.rposition(7), None);
        assert!(chain.contains(2));
        assert!(!chain.contains(0));
    }

    #[test]
    fn remove_digit_takes_first_occurrence() {
        let mut chain = decimal(&[5, 1, 5]);
        assert!(chain.remove_digit(5));
        assert_eq!(chain, [1, 5]);
        assert!(!chain.remove_digit(9));
        assert!(chain.is_well_formed());
    }

    #[test]
    fn retain_filters_in_place() {
        let mut chain = decimal(&[1, 2, 3, 4, 5, 6]);
        chain.retain(|d| d % 2 == 0);
        assert_eq!(chain, [2, 4, 6]);
        assert!(chain.is_well_formed());

        chain.retain(|_| false);
        assert!(chain.is_empty());
        assert!(chain.is_well_formed());
    }

    #[test]
    fn try_extend_stops_at_invalid_digit() {
        let mut chain = decimal(&[]);
        let err = chain.try_extend([1, 2, 12, 3]).unwrap_err();
        assert_eq!(err, ChainError::InvalidDigit { digit: 12, radix: 10 });
        assert_eq!(chain, [1, 2]);
    }

    #[test]
    fn iterates_both_directions() {
        let chain = decimal(&[1, 2, 3]);
        assert_eq!(chain.iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
        let mut iter = chain.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next_back(), None);

        let mut sum = 0;
        for digit in &chain {
            sum += digit;
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn equality_ignores_radix() {
        let a = decimal(&[1, 0, 1]);
        let b = DigitChain::from_digits(Profile::default(), 2, &[1, 0, 1]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, vec![1, 0, 1]);
        assert_eq!(a, &[1u8, 0, 1][..]);
        assert_ne!(a, [1, 0]);
        assert_ne!(a, [1, 0, 0]);
    }

    #[test]
    fn display_and_debug() {
        let chain = DigitChain::from_digits(Profile::default(), 16, &[15, 0, 10]).unwrap();
        assert_eq!(chain.to_string(), "F0A");
        assert_eq!(format!("{:?}", chain), "DigitChain(radix 16, [15, 0, 10])");

        let wide = DigitChain::from_digits(Profile::default(), 100, &[1, 42]).unwrap();
        assert_eq!(wide.to_string(), "1[42]");
    }

    #[test]
    fn clone_is_independent() {
        let original = decimal(&[1, 2, 3]);
        let mut copy = original.clone();
        copy.set(0, 9).unwrap();
        assert_eq!(original, [1, 2, 3]);
        assert_eq!(copy, [9, 2, 3]);
    }

    #[test]
    fn clear_resets() {
        let mut chain = decimal(&[1, 2, 3]);
        chain.clear();
        assert!(chain.is_empty());
        assert!(chain.is_well_formed());
        chain.push(4).unwrap();
        assert_eq!(chain, [4]);
    }
}
