use super::{
    utils, AdmissibleSetEnumerator, CredulousAcceptanceComputer, EnumerationLimits,
    ExtensionEnumerator, SingleExtensionComputer, SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    utils::{ArgumentBitSet, FrameworkIndex},
};

/// A solver for the preferred semantics.
///
/// The preferred extensions are the complete extensions that are maximal with respect to set inclusion.
/// They are obtained by filtering the output of an [AdmissibleSetEnumerator];
/// their order follows the order in which the search discovered them.
///
/// Each framework has at least one preferred extension, so [SingleExtensionComputer::compute_one_extension] never returns `None`
/// unless the search was truncated before reaching any set.
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    limits: EnumerationLimits,
    preferred: Option<Vec<ArgumentBitSet>>,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the preferred semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_limits(af, EnumerationLimits::default())
    }

    /// Builds a new solver for the preferred semantics, bounding the underlying admissible set search.
    pub fn new_with_limits(af: &'a AAFramework<T>, limits: EnumerationLimits) -> Self {
        Self {
            af,
            limits,
            preferred: None,
        }
    }

    pub(crate) fn preferred_sets(&mut self) -> &[ArgumentBitSet] {
        let (af, limits) = (self.af, self.limits);
        self.preferred.get_or_insert_with(|| {
            let index = FrameworkIndex::new(af);
            let admissible = AdmissibleSetEnumerator::new_with_limits(&index, limits).enumerate();
            utils::filter_maximal(&utils::filter_complete(&index, admissible.sets()))
        })
    }
}

impl<T> SingleExtensionComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        let af = self.af;
        self.preferred_sets().first().map(|s| s.to_arguments(af))
    }
}

impl<T> ExtensionEnumerator<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Vec<Vec<&Argument<T>>> {
        let af = self.af;
        utils::sets_to_extensions(self.preferred_sets(), af)
    }
}

impl<T> CredulousAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
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
        utils::credulous_acceptance(self.preferred_sets(), arg, af)
    }
}

impl<T> SkepticalAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
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
        utils::skeptical_acceptance(self.preferred_sets(), arg, af)
    }
}
