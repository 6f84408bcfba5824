use crate::{
    aa::{AAFramework, Argument, LabelType},
    utils::{ArgumentBitSet, FrameworkIndex},
};

/// Checks whether sets of arguments are conflict-free.
///
/// A set is conflict-free if no member attacks a member (itself included).
/// As a consequence, a self-attacking argument never belongs to a non-empty conflict-free set containing it.
pub struct ConflictFreeEvaluator<'a> {
    index: &'a FrameworkIndex,
}

impl<'a> ConflictFreeEvaluator<'a> {
    /// Builds a new evaluator for the indexed framework.
    pub fn new(index: &'a FrameworkIndex) -> Self {
        Self { index }
    }

    /// Returns `true` iff no member of the set attacks a member of the set.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{AAFramework, ArgumentSet};
    /// # use dungsem::utils::{ArgumentBitSet, FrameworkIndex};
    /// # use dungsem::solvers::ConflictFreeEvaluator;
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b", "c"]));
    /// af.new_attack(&"a", &"b").unwrap();
    /// let index = FrameworkIndex::new(&af);
    /// let evaluator = ConflictFreeEvaluator::new(&index);
    /// assert!(evaluator.is_conflict_free(&ArgumentBitSet::from_ids(3, [0, 2])));
    /// assert!(!evaluator.is_conflict_free(&ArgumentBitSet::from_ids(3, [0, 1])));
    /// ```
    pub fn is_conflict_free(&self, set: &ArgumentBitSet) -> bool {
        set.iter().all(|id| !self.index.targets(id).intersects(set))
    }

    /// Returns `true` iff adding the argument to a conflict-free set would break its conflict-freeness.
    pub fn conflicts_with(&self, set: &ArgumentBitSet, id: usize) -> bool {
        self.index.is_self_attacking(id)
            || self.index.targets(id).intersects(set)
            || self.index.attackers(id).intersects(set)
    }
}

/// Checks whether a set of arguments of a framework is conflict-free.
pub fn is_conflict_free<T>(af: &AAFramework<T>, arguments: &[&Argument<T>]) -> bool
where
    T: LabelType,
{
    let index = FrameworkIndex::new(af);
    let set = ArgumentBitSet::from_arguments(index.n_arguments(), arguments);
    ConflictFreeEvaluator::new(&index).is_conflict_free(&set)
}
