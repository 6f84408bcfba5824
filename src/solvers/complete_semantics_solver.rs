use super::{
    utils, AdmissibleSetEnumerator, CredulousAcceptanceComputer, EnumerationLimits,
    ExtensionEnumerator, GroundedSemanticsSolver, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    utils::{grounded_extension, ArgumentBitSet, FrameworkIndex},
};

/// A solver for the complete semantics.
///
/// A complete extension is an admissible set that contains each argument it defends.
/// The complete extensions are obtained by filtering the output of an [AdmissibleSetEnumerator].
///
/// A special case of complete extension is the grounded extension, which is included in all the others.
/// Thus, computing an extension or checking the skeptical acceptance of an argument
/// is delegated to a [GroundedSemanticsSolver] and does not require any enumeration.
///
/// The certificate provided in case an argument is credulously accepted is a complete extension containing the argument.
/// The certificate provided in case an argument is not skeptically accepted is the grounded extension.
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    limits: EnumerationLimits,
    complete: Option<Vec<ArgumentBitSet>>,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the complete semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{AAFramework, Argument, ArgumentSet, LabelType};
    /// # use dungsem::solvers::{CredulousAcceptanceComputer, CompleteSemanticsSolver};
    /// fn check_credulous_acceptance<T>(af: &AAFramework<T>, arg: &T) where T: LabelType {
    ///     let mut solver = CompleteSemanticsSolver::new(af);
    ///     let argument = af.argument_set().get_argument(arg).unwrap();
    ///     if solver.is_credulously_accepted(argument) {
    ///         println!("there exists complete extension(s) with {}", arg)
    ///     } else {
    ///         println!("there is no complete extension with {}", arg)
    ///     }
    /// }
    /// # let arg_set = ArgumentSet::new_with_labels(&["a"]);
    /// # let af = AAFramework::new_with_argument_set(arg_set);
    /// # check_credulous_acceptance(&af, &"a");
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_limits(af, EnumerationLimits::default())
    }

    /// Builds a new solver for the complete semantics, bounding the underlying admissible set search.
    pub fn new_with_limits(af: &'a AAFramework<T>, limits: EnumerationLimits) -> Self {
        Self {
            af,
            limits,
            complete: None,
        }
    }

    fn complete_sets(&mut self) -> &[ArgumentBitSet] {
        let (af, limits) = (self.af, self.limits);
        self.complete.get_or_insert_with(|| {
            let index = FrameworkIndex::new(af);
            let admissible = AdmissibleSetEnumerator::new_with_limits(&index, limits).enumerate();
            utils::filter_complete(&index, admissible.sets())
        })
    }
}

impl<T> SingleExtensionComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        Some(grounded_extension(self.af))
    }
}

impl<T> ExtensionEnumerator<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Vec<Vec<&Argument<T>>> {
        let af = self.af;
        utils::sets_to_extensions(self.complete_sets(), af)
    }
}

impl<T> CredulousAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
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
        utils::credulous_acceptance(self.complete_sets(), arg, af)
    }
}

impl<T> SkepticalAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        GroundedSemanticsSolver::new(self.af).is_skeptically_accepted(arg)
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        let grounded = grounded_extension(self.af);
        if grounded.iter().any(|a| a.id() == arg.id()) {
            (true, None)
        } else {
            (false, Some(grounded))
        }
    }
}
