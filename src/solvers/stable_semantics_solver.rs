use super::{
    utils, AdmissibleSetEnumerator, CredulousAcceptanceComputer, EnumerationLimits,
    ExtensionEnumerator, SingleExtensionComputer, SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    utils::{ArgumentBitSet, FrameworkIndex},
};

/// A solver for the stable semantics.
///
/// A stable extension is a conflict-free set attacking every argument outside of it.
/// Stable extensions are admissible, so they are obtained by filtering the output of an [AdmissibleSetEnumerator].
///
/// A framework may have no stable extension at all.
/// In this case, no argument is credulously accepted and each argument is (vacuously) skeptically accepted.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    limits: EnumerationLimits,
    stable: Option<Vec<ArgumentBitSet>>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the stable semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_limits(af, EnumerationLimits::default())
    }

    /// Builds a new solver for the stable semantics, bounding the underlying admissible set search.
    pub fn new_with_limits(af: &'a AAFramework<T>, limits: EnumerationLimits) -> Self {
        Self {
            af,
            limits,
            stable: None,
        }
    }

    fn stable_sets(&mut self) -> &[ArgumentBitSet] {
        let (af, limits) = (self.af, self.limits);
        self.stable.get_or_insert_with(|| {
            let index = FrameworkIndex::new(af);
            let admissible = AdmissibleSetEnumerator::new_with_limits(&index, limits).enumerate();
            utils::filter_stable(&index, admissible.sets())
        })
    }
}

impl<T> SingleExtensionComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        let af = self.af;
        self.stable_sets().first().map(|s| s.to_arguments(af))
    }
}

impl<T> ExtensionEnumerator<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Vec<Vec<&Argument<T>>> {
        let af = self.af;
        utils::sets_to_extensions(self.stable_sets(), af)
    }
}

impl<T> CredulousAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
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
        utils::credulous_acceptance(self.stable_sets(), arg, af)
    }
}

impl<T> SkepticalAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.is_skeptically_accepted_with_certificate(arg).0
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        let af = self.af;
        utils::skeptical_acceptance(self.stable_sets(), arg, af)
    }
}
