use super::{
    utils, ConflictFreeEvaluator, CredulousAcceptanceComputer, DefenseEvaluator,
    ExtensionEnumerator, SingleExtensionComputer, SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    utils::{grounded_labelling, ArgumentBitSet, FrameworkIndex},
};
use log::{debug, warn};

/// Bounds applied to the search for admissible sets.
///
/// Enumerating admissible sets is exponential in the worst case.
/// These limits allow callers to bound the time spent in the search; by default, no limit is set.
///
/// When a limit is reached, the search returns the sets found so far and flags its result as truncated.
/// Results computed from a truncated search may not satisfy the usual relationships between semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationLimits {
    max_depth: Option<usize>,
    max_sets: Option<usize>,
}

impl EnumerationLimits {
    /// Sets the maximal cardinality of the explored sets.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets the maximal number of admissible sets to enumerate.
    pub fn with_max_sets(mut self, max_sets: usize) -> Self {
        self.max_sets = Some(max_sets);
        self
    }

    /// Returns the maximal cardinality of the explored sets, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Returns the maximal number of admissible sets to enumerate, if any.
    pub fn max_sets(&self) -> Option<usize> {
        self.max_sets
    }

    /// Returns `true` iff no limit is set.
    pub fn is_unbounded(&self) -> bool {
        self.max_depth.is_none() && self.max_sets.is_none()
    }
}

/// The result of an admissible set enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissibleSets {
    sets: Vec<ArgumentBitSet>,
    truncated: bool,
}

impl AdmissibleSets {
    /// Returns the admissible sets, in discovery order.
    pub fn sets(&self) -> &[ArgumentBitSet] {
        &self.sets
    }

    /// Consumes this object, returning the admissible sets.
    pub fn into_sets(self) -> Vec<ArgumentBitSet> {
        self.sets
    }

    /// Returns `true` iff the search was stopped by a limit before its end.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Enumerates the admissible sets of a framework.
///
/// The enumerator performs a depth-first search over the subsets of arguments, considered in increasing id order.
/// An argument is added to the current set only if it keeps the set conflict-free.
/// A branch is cut as soon as a member of the current set has an attacker that no argument still reachable by the search can attack.
///
/// The empty set is always admissible, so the result is never empty (unless the search is truncated before reaching it).
pub struct AdmissibleSetEnumerator<'a> {
    index: &'a FrameworkIndex,
    conflicts: ConflictFreeEvaluator<'a>,
    defense: DefenseEvaluator<'a>,
    limits: EnumerationLimits,
}

struct SearchState {
    current: ArgumentBitSet,
    found: Vec<ArgumentBitSet>,
    n_nodes: usize,
    truncated: bool,
}

impl<'a> AdmissibleSetEnumerator<'a> {
    /// Builds a new enumerator without search limits.
    pub fn new(index: &'a FrameworkIndex) -> Self {
        Self::new_with_limits(index, EnumerationLimits::default())
    }

    /// Builds a new enumerator bounded by the given limits.
    pub fn new_with_limits(index: &'a FrameworkIndex, limits: EnumerationLimits) -> Self {
        Self {
            index,
            conflicts: ConflictFreeEvaluator::new(index),
            defense: DefenseEvaluator::new(index),
            limits,
        }
    }

    /// Enumerates the admissible sets.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{AAFramework, ArgumentSet};
    /// # use dungsem::utils::FrameworkIndex;
    /// # use dungsem::solvers::AdmissibleSetEnumerator;
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
    /// af.new_attack(&"a", &"b").unwrap();
    /// af.new_attack(&"b", &"a").unwrap();
    /// let index = FrameworkIndex::new(&af);
    /// let admissible = AdmissibleSetEnumerator::new(&index).enumerate();
    /// assert_eq!(3, admissible.sets().len()); // {}, {a} and {b}
    /// assert!(!admissible.is_truncated());
    /// ```
    pub fn enumerate(&self) -> AdmissibleSets {
        let mut state = SearchState {
            current: self.index.empty_set(),
            found: vec![],
            n_nodes: 0,
            truncated: false,
        };
        self.explore(0, &mut state);
        debug!(
            "admissible set search explored {} node(s) and found {} set(s)",
            state.n_nodes,
            state.found.len()
        );
        if state.truncated {
            warn!(
                "the admissible set search was truncated after {} set(s)",
                state.found.len()
            );
        }
        AdmissibleSets {
            sets: state.found,
            truncated: state.truncated,
        }
    }

    // Returns `false` iff the search must stop.
    fn explore(&self, next: usize, state: &mut SearchState) -> bool {
        state.n_nodes += 1;
        if !self.may_be_defended(next, &state.current) {
            return true;
        }
        if next == self.index.n_arguments() {
            if self.defense.is_self_defending(&state.current) {
                // the search is only truncated if a set beyond the limit exists
                if self.limits.max_sets.is_some_and(|max| state.found.len() >= max) {
                    state.truncated = true;
                    return false;
                }
                state.found.push(state.current.clone());
            }
            return true;
        }
        if !self.conflicts.conflicts_with(&state.current, next) {
            if self
                .limits
                .max_depth
                .is_some_and(|max| state.current.len() >= max)
            {
                state.truncated = true;
            } else {
                state.current.insert(next);
                let go_on = self.explore(next + 1, state);
                state.current.remove(next);
                if !go_on {
                    return false;
                }
            }
        }
        self.explore(next + 1, state)
    }

    // Checks that each attacker of the current set is either already counter-attacked,
    // or attacked by an argument the search may still add.
    fn may_be_defended(&self, next: usize, current: &ArgumentBitSet) -> bool {
        if current.is_empty() {
            return true;
        }
        let mut available = current.clone();
        (next..self.index.n_arguments())
            .filter(|id| !self.conflicts.conflicts_with(current, *id))
            .for_each(|id| available.insert(id));
        let range = self.index.attacked_by(current);
        current.iter().all(|member| {
            self.index
                .attackers(member)
                .iter()
                .filter(|attacker| !range.contains(*attacker))
                .all(|attacker| self.index.attackers(attacker).intersects(&available))
        })
    }
}

/// A solver dedicated to the admissible sets.
///
/// The single extension returned by this solver is the grounded extension, which is the least complete (and so admissible) set.
/// An argument is credulously accepted iff it belongs to an admissible set.
/// Since the empty set is admissible, no argument is skeptically accepted.
pub struct AdmissibleSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    limits: EnumerationLimits,
    admissible: Option<Vec<ArgumentBitSet>>,
}

impl<'a, T> AdmissibleSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the admissible sets.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_limits(af, EnumerationLimits::default())
    }

    /// Builds a new solver dedicated to the admissible sets, bounding the search by the given limits.
    pub fn new_with_limits(af: &'a AAFramework<T>, limits: EnumerationLimits) -> Self {
        Self {
            af,
            limits,
            admissible: None,
        }
    }

    fn admissible_sets(&mut self) -> &[ArgumentBitSet] {
        let (af, limits) = (self.af, self.limits);
        self.admissible.get_or_insert_with(|| {
            let index = FrameworkIndex::new(af);
            AdmissibleSetEnumerator::new_with_limits(&index, limits)
                .enumerate()
                .into_sets()
        })
    }
}

impl<T> SingleExtensionComputer<T> for AdmissibleSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        Some(grounded_labelling(self.af).extension(self.af))
    }
}

impl<T> ExtensionEnumerator<T> for AdmissibleSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Vec<Vec<&Argument<T>>> {
        let af = self.af;
        utils::sets_to_extensions(self.admissible_sets(), af)
    }
}

impl<T> CredulousAcceptanceComputer<T> for AdmissibleSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.is_credulously_accepted_with_certificate(arg).0
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        let af = self.af;
        utils::credulous_acceptance(self.admissible_sets(), arg, af)
    }
}

impl<T> SkepticalAcceptanceComputer<T> for AdmissibleSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, _arg: &Argument<T>) -> bool {
        false
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        _arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        (false, Some(vec![]))
    }
}
