//! Solvers dedicated to Abstract Argumentation frameworks.
//!
//! The evaluators ([ConflictFreeEvaluator], [DefenseEvaluator]) work on [ArgumentBitSet](crate::utils::ArgumentBitSet)s
//! and an [FrameworkIndex](crate::utils::FrameworkIndex) built from a framework.
//! The semantics solvers work directly on frameworks and implement the traits of this module
//! ([SingleExtensionComputer], [ExtensionEnumerator], [CredulousAcceptanceComputer], [SkepticalAcceptanceComputer]).

mod admissible_set_enumerator;
pub use admissible_set_enumerator::AdmissibleSemanticsSolver;
pub use admissible_set_enumerator::AdmissibleSetEnumerator;
pub use admissible_set_enumerator::AdmissibleSets;
pub use admissible_set_enumerator::EnumerationLimits;

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod conflict_freeness;
pub use conflict_freeness::is_conflict_free;
pub use conflict_freeness::ConflictFreeEvaluator;

mod consistency_checker;
pub use consistency_checker::ConsistencyLaw;
pub use consistency_checker::ConsistencyReport;
pub use consistency_checker::LawCheck;
pub use consistency_checker::SemanticsConsistencyChecker;
pub use consistency_checker::SemanticsSets;

mod defense;
pub use defense::is_acceptable;
pub use defense::is_admissible;
pub use defense::DefenseEvaluator;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod ideal_semantics_solver;
pub use ideal_semantics_solver::IdealSemanticsSolver;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionEnumerator;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;

pub(crate) mod utils;
