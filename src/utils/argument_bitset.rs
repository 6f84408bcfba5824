use crate::aa::{AAFramework, Argument, LabelType};
use std::fmt::Display;

const WORD_BITS: usize = u64::BITS as usize;

/// A set of arguments, represented as a fixed-width bitset indexed by argument ids.
///
/// The width of the set is given at construction time, and is usually the number of arguments of the framework the set refers to.
/// Binary operations between sets are only meaningful for sets sharing the same width.
///
/// # Example
///
/// ```
/// # use dungsem::utils::ArgumentBitSet;
/// let mut set = ArgumentBitSet::new(70);
/// set.insert(3);
/// set.insert(65);
/// assert!(set.contains(65));
/// assert_eq!(vec![3, 65], set.iter().collect::<Vec<usize>>());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArgumentBitSet {
    words: Vec<u64>,
    capacity: usize,
}

impl ArgumentBitSet {
    /// Builds an empty set able to hold the ids from `0` to `capacity - 1`.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            capacity,
        }
    }

    /// Builds the set containing all the ids from `0` to `capacity - 1`.
    pub fn full(capacity: usize) -> Self {
        let mut set = Self {
            words: vec![u64::MAX; capacity.div_ceil(WORD_BITS)],
            capacity,
        };
        set.clear_padding();
        set
    }

    /// Builds a set from an iterator of ids.
    ///
    /// # Panics
    ///
    /// Panics if an id is not lower than the capacity.
    pub fn from_ids<I>(capacity: usize, ids: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::new(capacity);
        ids.into_iter().for_each(|i| set.insert(i));
        set
    }

    /// Builds a set from a slice of arguments.
    pub fn from_arguments<T>(capacity: usize, arguments: &[&Argument<T>]) -> Self
    where
        T: LabelType,
    {
        Self::from_ids(capacity, arguments.iter().map(|a| a.id()))
    }

    fn clear_padding(&mut self) {
        let rem = self.capacity % WORD_BITS;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }

    /// Returns the width of this set.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adds an id to this set.
    ///
    /// # Panics
    ///
    /// Panics if the id is not lower than the capacity.
    pub fn insert(&mut self, id: usize) {
        assert!(id < self.capacity, "id {} out of bounds", id);
        self.words[id / WORD_BITS] |= 1u64 << (id % WORD_BITS);
    }

    /// Removes an id from this set.
    pub fn remove(&mut self, id: usize) {
        if id < self.capacity {
            self.words[id / WORD_BITS] &= !(1u64 << (id % WORD_BITS));
        }
    }

    /// Returns `true` iff the id belongs to this set.
    pub fn contains(&self, id: usize) -> bool {
        id < self.capacity && self.words[id / WORD_BITS] & (1u64 << (id % WORD_BITS)) != 0
    }

    /// Returns the number of ids in this set.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` iff this set contains no id.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Returns `true` iff all the ids of this set are in the other one.
    pub fn is_subset(&self, other: &ArgumentBitSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & !b == 0)
    }

    /// Returns `true` iff this set is a subset of the other one, and the sets differ.
    pub fn is_strict_subset(&self, other: &ArgumentBitSet) -> bool {
        self.is_subset(other) && self != other
    }

    /// Returns `true` iff both sets share at least one id.
    pub fn intersects(&self, other: &ArgumentBitSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Adds to this set the ids of the other one.
    pub fn union_with(&mut self, other: &ArgumentBitSet) {
        self.words
            .iter_mut()
            .zip(other.words.iter())
            .for_each(|(a, b)| *a |= b);
    }

    /// Keeps in this set the ids that also belong to the other one.
    pub fn intersect_with(&mut self, other: &ArgumentBitSet) {
        self.words
            .iter_mut()
            .zip(other.words.iter())
            .for_each(|(a, b)| *a &= b);
    }

    /// Removes from this set the ids of the other one.
    pub fn difference_with(&mut self, other: &ArgumentBitSet) {
        self.words
            .iter_mut()
            .zip(other.words.iter())
            .for_each(|(a, b)| *a &= !b);
    }

    /// Returns the ids that do not belong to this set.
    pub fn complement(&self) -> ArgumentBitSet {
        let mut set = Self {
            words: self.words.iter().map(|w| !w).collect(),
            capacity: self.capacity,
        };
        set.clear_padding();
        set
    }

    /// Iterates over the ids of this set, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, w)| {
            let mut word = *w;
            std::iter::from_fn(move || {
                if word == 0 {
                    None
                } else {
                    let bit = word.trailing_zeros() as usize;
                    word &= word - 1;
                    Some(i * WORD_BITS + bit)
                }
            })
        })
    }

    /// Translates this set into the corresponding arguments of a framework, sorted by id.
    pub fn to_arguments<'a, T>(&self, af: &'a AAFramework<T>) -> Vec<&'a Argument<T>>
    where
        T: LabelType,
    {
        self.iter()
            .map(|i| af.argument_set().get_argument_by_id(i))
            .collect()
    }
}

impl Display for ArgumentBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "}}")
    }
}
