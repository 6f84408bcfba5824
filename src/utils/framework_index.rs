use super::ArgumentBitSet;
use crate::aa::{AAFramework, LabelType};

/// A dense view of the attack relation of a framework.
///
/// For each argument, the index stores the set of its attackers and the set of the arguments it attacks, both as [`ArgumentBitSet`]s.
/// This turns conflict-freeness and defense checks into word-level bitwise operations.
///
/// An index is a snapshot: it is not updated when the framework it was built from changes.
/// The [generation](Self::generation) it was built at can be compared to the current one of the framework.
#[derive(Clone, Debug)]
pub struct FrameworkIndex {
    attackers: Vec<ArgumentBitSet>,
    targets: Vec<ArgumentBitSet>,
    self_attacking: ArgumentBitSet,
    generation: u64,
}

impl FrameworkIndex {
    /// Builds the index of a framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{AAFramework, ArgumentSet};
    /// # use dungsem::utils::FrameworkIndex;
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
    /// af.new_attack(&"a", &"b").unwrap();
    /// let index = FrameworkIndex::new(&af);
    /// assert!(index.attackers(1).contains(0));
    /// assert!(index.targets(0).contains(1));
    /// ```
    pub fn new<T>(af: &AAFramework<T>) -> Self
    where
        T: LabelType,
    {
        let n = af.n_arguments();
        let mut attackers = vec![ArgumentBitSet::new(n); n];
        let mut targets = vec![ArgumentBitSet::new(n); n];
        let mut self_attacking = ArgumentBitSet::new(n);
        af.iter_attacks().for_each(|att| {
            let (from, to) = (att.attacker().id(), att.attacked().id());
            attackers[to].insert(from);
            targets[from].insert(to);
            if from == to {
                self_attacking.insert(from);
            }
        });
        Self {
            attackers,
            targets,
            self_attacking,
            generation: af.generation(),
        }
    }

    /// Returns the number of arguments of the indexed framework.
    pub fn n_arguments(&self) -> usize {
        self.attackers.len()
    }

    /// Returns the generation of the framework at the time this index was built.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the attackers of an argument.
    pub fn attackers(&self, id: usize) -> &ArgumentBitSet {
        &self.attackers[id]
    }

    /// Returns the arguments attacked by an argument.
    pub fn targets(&self, id: usize) -> &ArgumentBitSet {
        &self.targets[id]
    }

    /// Returns `true` iff the argument attacks itself.
    pub fn is_self_attacking(&self, id: usize) -> bool {
        self.self_attacking.contains(id)
    }

    /// Returns the set of self-attacking arguments.
    pub fn self_attacking(&self) -> &ArgumentBitSet {
        &self.self_attacking
    }

    /// Returns an empty set sized for this framework.
    pub fn empty_set(&self) -> ArgumentBitSet {
        ArgumentBitSet::new(self.n_arguments())
    }

    /// Returns the set of all the arguments of this framework.
    pub fn full_set(&self) -> ArgumentBitSet {
        ArgumentBitSet::full(self.n_arguments())
    }

    /// Returns the set of arguments attacked by at least one member of the given set.
    pub fn attacked_by(&self, set: &ArgumentBitSet) -> ArgumentBitSet {
        let mut result = self.empty_set();
        set.iter().for_each(|id| result.union_with(&self.targets[id]));
        result
    }
}
