use super::{utils, AdmissibleSetEnumerator, DefenseEvaluator, EnumerationLimits};
use crate::{
    aa::{AAFramework, LabelType},
    utils::{grounded_labelling, ArgumentBitSet, FrameworkIndex},
};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

/// The extensions of a framework under each semantics, as sets of argument ids.
///
/// All the multi-extension semantics are derived from a single admissible set enumeration.
#[derive(Debug, Clone)]
pub struct SemanticsSets {
    admissible: Vec<ArgumentBitSet>,
    complete: Vec<ArgumentBitSet>,
    grounded: ArgumentBitSet,
    preferred: Vec<ArgumentBitSet>,
    stable: Vec<ArgumentBitSet>,
    ideal: ArgumentBitSet,
    truncated: bool,
}

impl SemanticsSets {
    /// Computes the extensions of the indexed framework.
    ///
    /// The index must have been built from the framework.
    pub fn compute<T>(
        af: &AAFramework<T>,
        index: &FrameworkIndex,
        limits: EnumerationLimits,
    ) -> Self
    where
        T: LabelType,
    {
        let admissible = AdmissibleSetEnumerator::new_with_limits(index, limits).enumerate();
        let truncated = admissible.is_truncated();
        let admissible = admissible.into_sets();
        let complete = utils::filter_complete(index, &admissible);
        let preferred = utils::filter_maximal(&complete);
        let stable = utils::filter_stable(index, &admissible);
        let ideal = if preferred.len() == 1 {
            preferred[0].clone()
        } else {
            utils::ideal_set(index, &preferred)
        };
        Self {
            admissible,
            complete,
            grounded: grounded_labelling(af).in_set(),
            preferred,
            stable,
            ideal,
            truncated,
        }
    }

    /// Returns the admissible sets.
    pub fn admissible(&self) -> &[ArgumentBitSet] {
        &self.admissible
    }

    /// Returns the complete extensions.
    pub fn complete(&self) -> &[ArgumentBitSet] {
        &self.complete
    }

    /// Returns the grounded extension.
    pub fn grounded(&self) -> &ArgumentBitSet {
        &self.grounded
    }

    /// Returns the preferred extensions.
    pub fn preferred(&self) -> &[ArgumentBitSet] {
        &self.preferred
    }

    /// Returns the stable extensions.
    pub fn stable(&self) -> &[ArgumentBitSet] {
        &self.stable
    }

    /// Returns the ideal extension.
    pub fn ideal(&self) -> &ArgumentBitSet {
        &self.ideal
    }

    /// Returns `true` iff the underlying admissible set search was stopped by a limit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// The relationships that must hold between the semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum ConsistencyLaw {
    /// The grounded extension is included in each complete extension.
    GroundedInComplete,
    /// Each preferred extension is a complete extension.
    PreferredAreComplete,
    /// Each stable extension is a preferred extension.
    StableArePreferred,
    /// Each complete extension is an admissible set.
    CompleteAreAdmissible,
    /// The grounded extension is a complete extension.
    GroundedIsComplete,
    /// The grounded extension is the intersection of the complete extensions.
    GroundedIsIntersectionOfComplete,
    /// The ideal extension contains the grounded extension and is included in each preferred extension.
    IdealBetweenGroundedAndPreferred,
    /// No admissible set contains a self-attacking argument.
    NoSelfAttackingMember,
    /// The collection of admissible sets is not empty.
    AdmissibleSetsNonEmpty,
}

/// The outcome of the check of a single law.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawCheck {
    law: ConsistencyLaw,
    violations: Vec<String>,
}

impl LawCheck {
    /// Returns the checked law.
    pub fn law(&self) -> ConsistencyLaw {
        self.law
    }

    /// Returns `true` iff no violation was found.
    pub fn is_passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a human readable description of each violation.
    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

/// The result of a consistency check, with one entry per [ConsistencyLaw].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyReport {
    entries: Vec<LawCheck>,
    truncated: bool,
}

impl ConsistencyReport {
    /// Returns `true` iff all the laws hold.
    pub fn is_consistent(&self) -> bool {
        self.entries.iter().all(|e| e.is_passed())
    }

    /// Returns `true` iff the given law holds.
    pub fn passed(&self, law: ConsistencyLaw) -> bool {
        self.entries
            .iter()
            .find(|e| e.law == law)
            .map(|e| e.is_passed())
            .unwrap_or(true)
    }

    /// Returns `true` iff the grounded extension is included in each complete extension.
    pub fn grounded_in_complete(&self) -> bool {
        self.passed(ConsistencyLaw::GroundedInComplete)
    }

    /// Returns `true` iff each preferred extension is a complete extension.
    pub fn preferred_are_complete(&self) -> bool {
        self.passed(ConsistencyLaw::PreferredAreComplete)
    }

    /// Returns `true` iff each stable extension is a preferred extension.
    pub fn stable_are_preferred(&self) -> bool {
        self.passed(ConsistencyLaw::StableArePreferred)
    }

    /// Returns `true` iff each complete extension is admissible.
    pub fn complete_are_admissible(&self) -> bool {
        self.passed(ConsistencyLaw::CompleteAreAdmissible)
    }

    /// Iterates over the checks, in the order of [ConsistencyLaw].
    pub fn iter(&self) -> impl Iterator<Item = &LawCheck> + '_ {
        self.entries.iter()
    }

    /// Returns `true` iff the checked extensions come from a truncated search.
    ///
    /// In this case, a failed law does not imply a bug.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Checks the relationships between the semantics computed for a framework.
///
/// All the laws are checked, even when some fail; violations are reported as data.
///
/// # Example
///
/// ```
/// # use dungsem::aa::{AAFramework, ArgumentSet};
/// # use dungsem::solvers::{EnumerationLimits, SemanticsConsistencyChecker};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// af.new_attack(&"b", &"a").unwrap();
/// let checker = SemanticsConsistencyChecker::new(&af);
/// let report = checker.check_framework(EnumerationLimits::default());
/// assert!(report.is_consistent());
/// ```
pub struct SemanticsConsistencyChecker<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    index: FrameworkIndex,
}

impl<'a, T> SemanticsConsistencyChecker<'a, T>
where
    T: LabelType,
{
    /// Builds a checker for the given framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self {
            af,
            index: FrameworkIndex::new(af),
        }
    }

    /// Computes the extensions of the framework and checks them.
    pub fn check_framework(&self, limits: EnumerationLimits) -> ConsistencyReport {
        self.check(&SemanticsSets::compute(self.af, &self.index, limits))
    }

    /// Checks precomputed extensions of the framework.
    pub fn check(&self, sets: &SemanticsSets) -> ConsistencyReport {
        let entries = ConsistencyLaw::iter()
            .map(|law| LawCheck {
                law,
                violations: self.violations_of(law, sets),
            })
            .collect();
        ConsistencyReport {
            entries,
            truncated: sets.is_truncated(),
        }
    }

    fn violations_of(&self, law: ConsistencyLaw, sets: &SemanticsSets) -> Vec<String> {
        let defense = DefenseEvaluator::new(&self.index);
        match law {
            ConsistencyLaw::GroundedInComplete => sets
                .complete()
                .iter()
                .filter(|c| !sets.grounded().is_subset(c))
                .map(|c| {
                    format!(
                        "grounded extension {} is not included in complete extension {}",
                        self.fmt(sets.grounded()),
                        self.fmt(c)
                    )
                })
                .collect(),
            ConsistencyLaw::PreferredAreComplete => sets
                .preferred()
                .iter()
                .filter(|p| !sets.complete().contains(p) || !defense.is_complete(p))
                .map(|p| format!("preferred extension {} is not complete", self.fmt(p)))
                .collect(),
            ConsistencyLaw::StableArePreferred => sets
                .stable()
                .iter()
                .filter(|s| !sets.preferred().contains(s))
                .map(|s| format!("stable extension {} is not preferred", self.fmt(s)))
                .collect(),
            ConsistencyLaw::CompleteAreAdmissible => sets
                .complete()
                .iter()
                .filter(|c| !sets.admissible().contains(c) || !defense.is_admissible(c))
                .map(|c| format!("complete extension {} is not admissible", self.fmt(c)))
                .collect(),
            ConsistencyLaw::GroundedIsComplete => {
                if defense.is_complete(sets.grounded()) {
                    vec![]
                } else {
                    vec![format!(
                        "grounded extension {} is not complete",
                        self.fmt(sets.grounded())
                    )]
                }
            }
            ConsistencyLaw::GroundedIsIntersectionOfComplete => {
                let mut intersection = self.index.full_set();
                sets.complete()
                    .iter()
                    .for_each(|c| intersection.intersect_with(c));
                if sets.complete().is_empty() || &intersection == sets.grounded() {
                    vec![]
                } else {
                    vec![format!(
                        "grounded extension {} differs from the intersection {} of the complete extensions",
                        self.fmt(sets.grounded()),
                        self.fmt(&intersection)
                    )]
                }
            }
            ConsistencyLaw::IdealBetweenGroundedAndPreferred => {
                let mut violations = vec![];
                if !sets.grounded().is_subset(sets.ideal()) {
                    violations.push(format!(
                        "grounded extension {} is not included in ideal extension {}",
                        self.fmt(sets.grounded()),
                        self.fmt(sets.ideal())
                    ));
                }
                sets.preferred()
                    .iter()
                    .filter(|p| !sets.ideal().is_subset(p))
                    .for_each(|p| {
                        violations.push(format!(
                            "ideal extension {} is not included in preferred extension {}",
                            self.fmt(sets.ideal()),
                            self.fmt(p)
                        ))
                    });
                if !defense.is_admissible(sets.ideal()) {
                    violations.push(format!(
                        "ideal extension {} is not admissible",
                        self.fmt(sets.ideal())
                    ));
                }
                violations
            }
            ConsistencyLaw::NoSelfAttackingMember => sets
                .admissible()
                .iter()
                .filter(|s| s.intersects(self.index.self_attacking()))
                .map(|s| {
                    format!(
                        "admissible set {} contains a self-attacking argument",
                        self.fmt(s)
                    )
                })
                .collect(),
            ConsistencyLaw::AdmissibleSetsNonEmpty => {
                if sets.admissible().iter().any(|s| s.is_empty()) {
                    vec![]
                } else {
                    vec!["the empty set is missing from the admissible sets".to_string()]
                }
            }
        }
    }

    fn fmt(&self, set: &ArgumentBitSet) -> String {
        let labels = set
            .to_arguments(self.af)
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>();
        format!("[{}]", labels.join(","))
    }
}
