use super::{
    utils, CredulousAcceptanceComputer, EnumerationLimits, ExtensionEnumerator,
    PreferredSemanticsSolver, SingleExtensionComputer, SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    utils::{ArgumentBitSet, FrameworkIndex},
};

/// A solver for the ideal semantics.
///
/// The ideal extension is the greatest admissible set included in every preferred extension.
/// It is unique, contains the grounded extension, and is contained in each preferred extension.
///
/// The solver computes the preferred extensions, intersects them,
/// and then removes from this intersection the arguments it does not defend until a fixpoint is reached.
/// When there is a single preferred extension, the ideal extension is this preferred extension.
///
/// Since the extension is unique, credulous and skeptical acceptance coincide.
/// The certificates for the acceptance queries are the ideal extension itself.
pub struct IdealSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    limits: EnumerationLimits,
    ideal: Option<ArgumentBitSet>,
}

impl<'a, T> IdealSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the ideal semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{AAFramework, LabelType};
    /// # use dungsem::solvers::{SingleExtensionComputer, IdealSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = IdealSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension().unwrap();
    ///     println!("found the ideal extension: {:?}", ext);
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_limits(af, EnumerationLimits::default())
    }

    /// Builds a new solver for the ideal semantics, bounding the underlying admissible set search.
    pub fn new_with_limits(af: &'a AAFramework<T>, limits: EnumerationLimits) -> Self {
        Self {
            af,
            limits,
            ideal: None,
        }
    }

    fn ideal_set(&mut self) -> &ArgumentBitSet {
        let (af, limits) = (self.af, self.limits);
        self.ideal.get_or_insert_with(|| {
            let index = FrameworkIndex::new(af);
            let mut preferred_solver = PreferredSemanticsSolver::new_with_limits(af, limits);
            let preferred = preferred_solver.preferred_sets();
            if preferred.len() == 1 {
                return preferred[0].clone();
            }
            utils::ideal_set(&index, preferred)
        })
    }

    fn ideal_extension(&mut self) -> Vec<&'a Argument<T>> {
        let af = self.af;
        self.ideal_set().to_arguments(af)
    }
}

impl<T> SingleExtensionComputer<T> for IdealSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        Some(self.ideal_extension())
    }
}

impl<T> ExtensionEnumerator<T> for IdealSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Vec<Vec<&Argument<T>>> {
        vec![self.ideal_extension()]
    }
}

impl<T> CredulousAcceptanceComputer<T> for IdealSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.ideal_set().contains(arg.id())
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        if self.ideal_set().contains(arg.id()) {
            (true, Some(self.ideal_extension()))
        } else {
            (false, None)
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for IdealSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.ideal_set().contains(arg.id())
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        if self.ideal_set().contains(arg.id()) {
            (true, None)
        } else {
            (false, Some(self.ideal_extension()))
        }
    }
}
