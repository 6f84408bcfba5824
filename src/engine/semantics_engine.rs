use super::{EngineConfig, FrameworkCache};
use crate::{
    aa::{AAFramework, Argument, FrameworkError, LabelType, Semantics},
    solvers::{
        ConflictFreeEvaluator, ConsistencyReport, DefenseEvaluator, SemanticsConsistencyChecker,
        SemanticsSets,
    },
    utils::{grounded_labelling, ArgumentBitSet, FrameworkIndex, GroundedLabelling, Label},
};
use log::{debug, error, warn};
use std::sync::{PoisonError, RwLock};

/// A semantics engine, owning a framework and the results computed for it.
///
/// The framework is built incrementally with [add_argument](Self::add_argument) and [add_attack](Self::add_attack),
/// and queried with the other methods.
/// Query results are cached until the next mutation of the framework.
///
/// Queries only require a shared reference, so that an engine can be queried from several threads at once.
/// Mutations require an exclusive reference; callers sharing an engine between threads must serialize them.
///
/// Extensions are returned as vectors of arguments sorted by their ids, i.e. by insertion order.
/// The order of the extensions of multi-extension semantics is unspecified.
///
/// # Example
///
/// ```
/// # use dungsem::engine::SemanticsEngine;
/// let mut engine = SemanticsEngine::new();
/// engine.add_argument("base1").unwrap();
/// engine.add_argument("base2").unwrap();
/// engine.add_attack(&"base1", &"base2").unwrap();
/// let grounded = engine.grounded_extension();
/// assert_eq!(vec!["base1"], grounded.iter().map(|a| *a.label()).collect::<Vec<&str>>());
/// ```
pub struct SemanticsEngine<T>
where
    T: LabelType,
{
    af: AAFramework<T>,
    config: EngineConfig,
    cache: RwLock<FrameworkCache>,
}

impl<T> Default for SemanticsEngine<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SemanticsEngine<T>
where
    T: LabelType,
{
    /// Builds an engine with an empty framework and the default configuration.
    pub fn new() -> Self {
        Self::new_with_config(EngineConfig::default())
    }

    /// Builds an engine with an empty framework and the given configuration.
    pub fn new_with_config(config: EngineConfig) -> Self {
        Self::from_framework_with_config(AAFramework::new(), config)
    }

    /// Builds an engine for an existing framework.
    pub fn from_framework(af: AAFramework<T>) -> Self {
        Self::from_framework_with_config(af, EngineConfig::default())
    }

    /// Builds an engine for an existing framework and the given configuration.
    pub fn from_framework_with_config(af: AAFramework<T>, config: EngineConfig) -> Self {
        Self {
            af,
            config,
            cache: RwLock::new(FrameworkCache::default()),
        }
    }

    /// Returns the configuration of this engine.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the underlying framework.
    pub fn framework(&self) -> &AAFramework<T> {
        &self.af
    }

    /// Returns the generation of the underlying framework.
    pub fn generation(&self) -> u64 {
        self.af.generation()
    }

    /// Returns the number of cache entries computed so far.
    pub fn n_computations(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .n_computations()
    }

    /// Adds an argument to the framework.
    ///
    /// An error is returned if an argument with the same label exists; in this case, the framework is left unchanged.
    pub fn add_argument(&mut self, label: T) -> Result<(), FrameworkError> {
        self.add_argument_with_metadata(label, None)
    }

    /// Adds an argument with some free-text metadata to the framework.
    ///
    /// The metadata is not used by the semantics.
    pub fn add_argument_with_metadata(
        &mut self,
        label: T,
        metadata: Option<String>,
    ) -> Result<(), FrameworkError> {
        self.af.new_argument_with_metadata(label, metadata)?;
        self.invalidate_cache();
        Ok(())
    }

    /// Adds an attack to the framework.
    ///
    /// An error is returned if one of the arguments does not exist; in this case, the framework is left unchanged.
    /// Adding an attack that already exists has no effect.
    pub fn add_attack(&mut self, attacker: &T, attacked: &T) -> Result<(), FrameworkError> {
        let generation = self.af.generation();
        self.af.new_attack(attacker, attacked)?;
        if self.af.generation() != generation {
            self.invalidate_cache();
        }
        Ok(())
    }

    fn invalidate_cache(&mut self) {
        self.cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .invalidate();
    }

    fn with_index<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&FrameworkIndex) -> R,
    {
        let generation = self.af.generation();
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(index) = cache.index(generation) {
                return f(index);
            }
        }
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        f(cache.index_or_insert_with(generation, || FrameworkIndex::new(&self.af)))
    }

    fn with_grounded<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&GroundedLabelling) -> R,
    {
        let generation = self.af.generation();
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(labelling) = cache.grounded(generation) {
                return f(labelling);
            }
        }
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        f(cache.grounded_or_insert_with(generation, || grounded_labelling(&self.af)))
    }

    fn with_sets<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SemanticsSets) -> R,
    {
        let generation = self.af.generation();
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(sets) = cache.sets(generation) {
                return f(sets);
            }
        }
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let index = cache
            .index_or_insert_with(generation, || FrameworkIndex::new(&self.af))
            .clone();
        f(cache.sets_or_insert_with(generation, || self.compute_sets(&index)))
    }

    fn compute_sets(&self, index: &FrameworkIndex) -> SemanticsSets {
        let sets = SemanticsSets::compute(&self.af, index, self.config.limits());
        debug!(
            "found {} admissible set(s), {} complete, {} preferred and {} stable extension(s)",
            sets.admissible().len(),
            sets.complete().len(),
            sets.preferred().len(),
            sets.stable().len()
        );
        if self.config.check_consistency() {
            let report = SemanticsConsistencyChecker::new(&self.af).check(&sets);
            report
                .iter()
                .flat_map(|check| check.violations().iter().map(move |v| (check.law(), v)))
                .for_each(|(law, v)| error!("consistency law {} violated: {}", law, v));
            if !report.is_consistent() && report.is_truncated() {
                warn!("the violations may be caused by the truncation of the search");
            }
        }
        sets
    }

    fn to_extensions(&self, sets: &[ArgumentBitSet]) -> Vec<Vec<&Argument<T>>> {
        sets.iter().map(|s| s.to_arguments(&self.af)).collect()
    }

    fn argument_ids(&self, labels: &[T]) -> Result<ArgumentBitSet, FrameworkError> {
        let ids = labels
            .iter()
            .map(|l| self.af.argument_set().get_argument_index(l))
            .collect::<Result<Vec<usize>, FrameworkError>>()?;
        Ok(ArgumentBitSet::from_ids(self.af.n_arguments(), ids))
    }

    /// Checks whether a set of arguments is conflict-free.
    ///
    /// An error is returned if one of the labels is unknown.
    pub fn is_conflict_free(&self, labels: &[T]) -> Result<bool, FrameworkError> {
        let set = self.argument_ids(labels)?;
        Ok(self.with_index(|index| ConflictFreeEvaluator::new(index).is_conflict_free(&set)))
    }

    /// Checks whether a set of arguments is admissible.
    ///
    /// An error is returned if one of the labels is unknown.
    pub fn is_admissible(&self, labels: &[T]) -> Result<bool, FrameworkError> {
        let set = self.argument_ids(labels)?;
        Ok(self.with_index(|index| DefenseEvaluator::new(index).is_admissible(&set)))
    }

    /// Returns the grounded extension.
    pub fn grounded_extension(&self) -> Vec<&Argument<T>> {
        let set = self.with_grounded(|labelling| labelling.in_set());
        set.to_arguments(&self.af)
    }

    /// Returns the label given to an argument by the grounded labelling.
    pub fn grounded_label(&self, label: &T) -> Result<Label, FrameworkError> {
        let id = self.af.argument_set().get_argument_index(label)?;
        Ok(self.with_grounded(|labelling| labelling.label_of(id)))
    }

    /// Returns the admissible sets.
    ///
    /// The empty set is always admissible.
    pub fn admissible_sets(&self) -> Vec<Vec<&Argument<T>>> {
        self.with_sets(|sets| self.to_extensions(sets.admissible()))
    }

    /// Returns the complete extensions.
    pub fn complete_extensions(&self) -> Vec<Vec<&Argument<T>>> {
        self.with_sets(|sets| self.to_extensions(sets.complete()))
    }

    /// Returns the preferred extensions.
    pub fn preferred_extensions(&self) -> Vec<Vec<&Argument<T>>> {
        self.with_sets(|sets| self.to_extensions(sets.preferred()))
    }

    /// Returns the stable extensions.
    ///
    /// The result may be empty.
    pub fn stable_extensions(&self) -> Vec<Vec<&Argument<T>>> {
        self.with_sets(|sets| self.to_extensions(sets.stable()))
    }

    /// Returns the ideal extension.
    pub fn ideal_extension(&self) -> Vec<&Argument<T>> {
        self.with_sets(|sets| sets.ideal().to_arguments(&self.af))
    }

    /// Returns the extensions of a semantics.
    ///
    /// The single-status semantics (grounded and ideal) return a single extension.
    pub fn extensions(&self, semantics: Semantics) -> Vec<Vec<&Argument<T>>> {
        match semantics {
            Semantics::AD => self.admissible_sets(),
            Semantics::CO => self.complete_extensions(),
            Semantics::GR => vec![self.grounded_extension()],
            Semantics::PR => self.preferred_extensions(),
            Semantics::ST => self.stable_extensions(),
            Semantics::ID => vec![self.ideal_extension()],
        }
    }

    fn extension_sets(&self, semantics: Semantics) -> Vec<ArgumentBitSet> {
        match semantics {
            Semantics::GR => vec![self.with_grounded(|labelling| labelling.in_set())],
            Semantics::AD => self.with_sets(|sets| sets.admissible().to_vec()),
            Semantics::CO => self.with_sets(|sets| sets.complete().to_vec()),
            Semantics::PR => self.with_sets(|sets| sets.preferred().to_vec()),
            Semantics::ST => self.with_sets(|sets| sets.stable().to_vec()),
            Semantics::ID => vec![self.with_sets(|sets| sets.ideal().clone())],
        }
    }

    /// Checks whether an argument belongs to at least one extension of a semantics.
    ///
    /// An error is returned if the label is unknown.
    pub fn is_credulously_accepted(
        &self,
        label: &T,
        semantics: Semantics,
    ) -> Result<bool, FrameworkError> {
        let id = self.af.argument_set().get_argument_index(label)?;
        Ok(self
            .extension_sets(semantics)
            .iter()
            .any(|s| s.contains(id)))
    }

    /// Checks whether an argument belongs to all the extensions of a semantics.
    ///
    /// If the semantics admits no extension, the argument is (vacuously) accepted.
    /// An error is returned if the label is unknown.
    pub fn is_skeptically_accepted(
        &self,
        label: &T,
        semantics: Semantics,
    ) -> Result<bool, FrameworkError> {
        let id = self.af.argument_set().get_argument_index(label)?;
        Ok(self
            .extension_sets(semantics)
            .iter()
            .all(|s| s.contains(id)))
    }

    /// Returns `true` iff the last admissible set search was stopped by a search limit.
    pub fn is_truncated(&self) -> bool {
        self.with_sets(|sets| sets.is_truncated())
    }

    /// Checks the consistency laws between the semantics.
    ///
    /// This method never fails: violations are reported in the returned object.
    pub fn check_semantics_consistency(&self) -> ConsistencyReport {
        self.with_sets(|sets| SemanticsConsistencyChecker::new(&self.af).check(sets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::EnumerationLimits;

    fn labels(ext: &[&Argument<&'static str>]) -> Vec<&'static str> {
        ext.iter().map(|a| *a.label()).collect()
    }

    fn sorted(extensions: Vec<Vec<&Argument<&'static str>>>) -> Vec<Vec<&'static str>> {
        let mut result = extensions.iter().map(|e| labels(e)).collect::<Vec<_>>();
        result.sort_unstable();
        result
    }

    fn build(
        args: &[&'static str],
        attacks: &[(&'static str, &'static str)],
    ) -> SemanticsEngine<&'static str> {
        let mut engine = SemanticsEngine::new();
        args.iter().for_each(|a| engine.add_argument(*a).unwrap());
        attacks
            .iter()
            .for_each(|(a, b)| engine.add_attack(a, b).unwrap());
        engine
    }

    #[test]
    fn test_mutation_errors_leave_framework_unchanged() {
        let mut engine = build(&["a"], &[]);
        let generation = engine.generation();
        assert_eq!(
            Err(FrameworkError::DuplicateArgument("a".to_string())),
            engine.add_argument("a")
        );
        assert_eq!(
            Err(FrameworkError::UnknownArgument("b".to_string())),
            engine.add_attack(&"a", &"b")
        );
        assert_eq!(generation, engine.generation());
        assert_eq!(0, engine.framework().n_attacks());
    }

    #[test]
    fn test_cache_is_reused() {
        let engine = build(&["a", "b"], &[("a", "b"), ("b", "a")]);
        assert_eq!(2, engine.preferred_extensions().len());
        let n = engine.n_computations();
        assert_eq!(2, engine.preferred_extensions().len());
        assert_eq!(2, engine.stable_extensions().len());
        assert_eq!(n, engine.n_computations());
    }

    #[test]
    fn test_mutation_invalidates_cache() {
        let mut engine = build(&["base1", "base2"], &[("base1", "base2")]);
        assert_eq!(vec!["base1"], labels(&engine.grounded_extension()));
        engine.add_argument("disruptor").unwrap();
        engine.add_attack(&"disruptor", &"base1").unwrap();
        assert_eq!(
            vec!["base2", "disruptor"],
            labels(&engine.grounded_extension())
        );
    }

    fn sorted_labels(extensions: Vec<Vec<&Argument<&'static str>>>) -> Vec<Vec<&'static str>> {
        let mut result = extensions.iter().map(|e| labels(e)).collect::<Vec<_>>();
        result.sort_unstable();
        result
    }

    #[test]
    fn test_attack_invalidates_cached_extensions() {
        let mut engine = build(&["a", "b", "c"], &[("a", "b"), ("b", "a")]);
        let preferred = sorted_labels(engine.preferred_extensions());
        let stable = sorted_labels(engine.stable_extensions());
        assert_eq!(vec![vec!["a", "c"], vec!["b", "c"]], preferred);
        assert_eq!(preferred, stable);
        let n = engine.n_computations();
        engine.add_attack(&"c", &"a").unwrap();
        assert_eq!(
            vec![vec!["b", "c"]],
            sorted_labels(engine.preferred_extensions())
        );
        assert_eq!(vec![vec!["b", "c"]], sorted_labels(engine.stable_extensions()));
        assert_eq!(
            vec![vec![], vec!["b"], vec!["b", "c"], vec!["c"]],
            sorted_labels(engine.admissible_sets())
        );
        assert_eq!(vec!["b", "c"], labels(&engine.ideal_extension()));
        assert!(engine.n_computations() > n);
    }

    #[test]
    fn test_argument_invalidates_cached_extensions() {
        let mut engine = build(&["a", "b"], &[("a", "b"), ("b", "a")]);
        assert_eq!(
            vec![vec!["a"], vec!["b"]],
            sorted_labels(engine.complete_extensions())
                .into_iter()
                .filter(|e| !e.is_empty())
                .collect::<Vec<_>>()
        );
        let n = engine.n_computations();
        engine.add_argument("c").unwrap();
        assert_eq!(
            vec![vec!["a", "c"], vec!["b", "c"]],
            sorted_labels(engine.preferred_extensions())
        );
        assert_eq!(
            vec![vec!["a", "c"], vec!["b", "c"], vec!["c"]],
            sorted_labels(engine.complete_extensions())
        );
        assert!(engine.n_computations() > n);
    }

    #[test]
    fn test_concurrent_queries() {
        let attacks = [("a", "b"), ("b", "a"), ("b", "c"), ("c", "d"), ("d", "c")];
        let engine = build(&["a", "b", "c", "d"], &attacks);
        let sequential = build(&["a", "b", "c", "d"], &attacks);
        let expected_preferred = sorted_labels(sequential.preferred_extensions());
        let expected_stable = sorted_labels(sequential.stable_extensions());
        let expected_grounded = labels(&sequential.grounded_extension());
        let expected_ideal = labels(&sequential.ideal_extension());
        let n_sequential = sequential.n_computations();
        std::thread::scope(|scope| {
            let handles = (0..8)
                .map(|i| {
                    let engine = &engine;
                    scope.spawn(move || {
                        if i % 2 == 0 {
                            (
                                sorted_labels(engine.preferred_extensions()),
                                sorted_labels(engine.stable_extensions()),
                                labels(&engine.grounded_extension()),
                                labels(&engine.ideal_extension()),
                            )
                        } else {
                            let grounded = labels(&engine.grounded_extension());
                            let ideal = labels(&engine.ideal_extension());
                            let stable = sorted_labels(engine.stable_extensions());
                            (
                                sorted_labels(engine.preferred_extensions()),
                                stable,
                                grounded,
                                ideal,
                            )
                        }
                    })
                })
                .collect::<Vec<_>>();
            for handle in handles {
                let (preferred, stable, grounded, ideal) = handle.join().unwrap();
                assert_eq!(expected_preferred, preferred);
                assert_eq!(expected_stable, stable);
                assert_eq!(expected_grounded, grounded);
                assert_eq!(expected_ideal, ideal);
            }
        });
        assert_eq!(n_sequential, engine.n_computations());
    }

    #[test]
    fn test_duplicate_attack_keeps_cache() {
        let mut engine = build(&["a", "b"], &[("a", "b")]);
        engine.grounded_extension();
        let n = engine.n_computations();
        engine.add_attack(&"a", &"b").unwrap();
        engine.grounded_extension();
        assert_eq!(n, engine.n_computations());
    }

    #[test]
    fn test_extensions_by_semantics() {
        let engine = build(&["a", "b", "c"], &[("a", "b"), ("b", "a"), ("b", "c")]);
        assert_eq!(
            vec![vec![], vec!["a"], vec!["a", "c"], vec!["b"]],
            sorted(engine.extensions(Semantics::AD))
        );
        assert_eq!(
            vec![vec![], vec!["a", "c"], vec!["b"]],
            sorted(engine.extensions(Semantics::CO))
        );
        assert_eq!(vec![vec![] as Vec<&str>], sorted(engine.extensions(Semantics::GR)));
        assert_eq!(
            vec![vec!["a", "c"], vec!["b"]],
            sorted(engine.extensions(Semantics::PR))
        );
        assert_eq!(
            vec![vec!["a", "c"], vec!["b"]],
            sorted(engine.extensions(Semantics::ST))
        );
        assert_eq!(vec![vec![] as Vec<&str>], sorted(engine.extensions(Semantics::ID)));
    }

    #[test]
    fn test_acceptance() {
        let engine = build(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert_eq!(Ok(false), engine.is_credulously_accepted(&"a", Semantics::PR));
        assert_eq!(Ok(true), engine.is_skeptically_accepted(&"a", Semantics::ST));
        assert_eq!(Ok(false), engine.is_credulously_accepted(&"a", Semantics::ST));
        assert!(engine.is_credulously_accepted(&"d", Semantics::GR).is_err());
        assert_eq!(Ok(Label::Undec), engine.grounded_label(&"b"));
    }

    #[test]
    fn test_set_checks() {
        let engine = build(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "c")]);
        assert_eq!(Ok(true), engine.is_conflict_free(&[]));
        assert_eq!(Ok(true), engine.is_conflict_free(&["a"]));
        assert_eq!(Ok(true), engine.is_conflict_free(&["b"]));
        assert_eq!(Ok(false), engine.is_conflict_free(&["a", "c"]));
        assert_eq!(Ok(false), engine.is_conflict_free(&["c"]));
        assert_eq!(Ok(false), engine.is_conflict_free(&["a", "b"]));
        assert_eq!(Ok(true), engine.is_admissible(&["a"]));
        assert_eq!(Ok(false), engine.is_admissible(&["b"]));
        assert!(engine.is_admissible(&["z"]).is_err());
    }

    #[test]
    fn test_consistency() {
        let engine = SemanticsEngine::from_framework_with_config(
            build(&["a", "b", "c"], &[("a", "b"), ("b", "a"), ("b", "c")]).af,
            EngineConfig::default().with_consistency_check(true),
        );
        let report = engine.check_semantics_consistency();
        assert!(report.is_consistent());
        assert!(report.grounded_in_complete());
        assert!(report.preferred_are_complete());
        assert!(report.stable_are_preferred());
        assert!(report.complete_are_admissible());
    }

    #[test]
    fn test_truncation() {
        let config = EngineConfig::default()
            .with_limits(EnumerationLimits::default().with_max_sets(2));
        let mut engine = SemanticsEngine::new_with_config(config);
        ["a", "b", "c"]
            .iter()
            .for_each(|a| engine.add_argument(*a).unwrap());
        assert_eq!(2, engine.admissible_sets().len());
        assert!(engine.is_truncated());
    }

    #[test]
    fn test_engine_is_sync() {
        fn assert_sync<S: Sync>() {}
        assert_sync::<SemanticsEngine<String>>();
    }
}
