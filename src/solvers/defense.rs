use super::ConflictFreeEvaluator;
use crate::{
    aa::{AAFramework, Argument, LabelType},
    utils::{ArgumentBitSet, FrameworkIndex},
};

/// Evaluates the defense provided by sets of arguments.
///
/// An argument is acceptable with respect to a set if each of its attackers is attacked by a member of the set.
/// The characteristic function `F` maps a set to the arguments that are acceptable with respect to it.
/// `F` is monotone: a superset of a set defends at least the same arguments.
pub struct DefenseEvaluator<'a> {
    index: &'a FrameworkIndex,
}

impl<'a> DefenseEvaluator<'a> {
    /// Builds a new evaluator for the indexed framework.
    pub fn new(index: &'a FrameworkIndex) -> Self {
        Self { index }
    }

    /// Returns `true` iff each attacker of the argument is attacked by a member of the set.
    pub fn is_acceptable(&self, id: usize, set: &ArgumentBitSet) -> bool {
        self.is_acceptable_given_range(id, &self.index.attacked_by(set))
    }

    // `range` is the set of arguments attacked by the defending set.
    fn is_acceptable_given_range(&self, id: usize, range: &ArgumentBitSet) -> bool {
        self.index.attackers(id).is_subset(range)
    }

    /// Applies the characteristic function to a set.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{AAFramework, ArgumentSet};
    /// # use dungsem::utils::{ArgumentBitSet, FrameworkIndex};
    /// # use dungsem::solvers::DefenseEvaluator;
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b", "c"]));
    /// af.new_attack(&"a", &"b").unwrap();
    /// af.new_attack(&"b", &"c").unwrap();
    /// let index = FrameworkIndex::new(&af);
    /// let evaluator = DefenseEvaluator::new(&index);
    /// let f_empty = evaluator.characteristic_function(&index.empty_set());
    /// assert_eq!(vec![0], f_empty.iter().collect::<Vec<usize>>());
    /// let f_a = evaluator.characteristic_function(&f_empty);
    /// assert_eq!(vec![0, 2], f_a.iter().collect::<Vec<usize>>());
    /// ```
    pub fn characteristic_function(&self, set: &ArgumentBitSet) -> ArgumentBitSet {
        let range = self.index.attacked_by(set);
        ArgumentBitSet::from_ids(
            self.index.n_arguments(),
            (0..self.index.n_arguments()).filter(|id| self.is_acceptable_given_range(*id, &range)),
        )
    }

    /// Returns `true` iff the set defends all its members, i.e. `S ⊆ F(S)`.
    pub fn is_self_defending(&self, set: &ArgumentBitSet) -> bool {
        let range = self.index.attacked_by(set);
        set.iter().all(|id| self.is_acceptable_given_range(id, &range))
    }

    /// Returns `true` iff the set is conflict-free and self-defending.
    pub fn is_admissible(&self, set: &ArgumentBitSet) -> bool {
        ConflictFreeEvaluator::new(self.index).is_conflict_free(set) && self.is_self_defending(set)
    }

    /// Returns `true` iff the set is admissible and contains exactly the arguments it defends.
    pub fn is_complete(&self, set: &ArgumentBitSet) -> bool {
        self.is_admissible(set) && &self.characteristic_function(set) == set
    }
}

/// Checks whether an argument is acceptable with respect to a set of arguments.
pub fn is_acceptable<T>(af: &AAFramework<T>, argument: &Argument<T>, set: &[&Argument<T>]) -> bool
where
    T: LabelType,
{
    let index = FrameworkIndex::new(af);
    let set = ArgumentBitSet::from_arguments(index.n_arguments(), set);
    DefenseEvaluator::new(&index).is_acceptable(argument.id(), &set)
}

/// Checks whether a set of arguments is admissible.
pub fn is_admissible<T>(af: &AAFramework<T>, set: &[&Argument<T>]) -> bool
where
    T: LabelType,
{
    let index = FrameworkIndex::new(af);
    let set = ArgumentBitSet::from_arguments(index.n_arguments(), set);
    DefenseEvaluator::new(&index).is_admissible(&set)
}
