use crate::{
    solvers::SemanticsSets,
    utils::{FrameworkIndex, GroundedLabelling},
};
use log::{debug, info};

/// Memoizes the results computed for a framework.
///
/// Each entry is valid for the framework generation it was computed at.
/// Accessing the cache with another generation drops all the entries first.
///
/// The grounded labelling, the framework index and the extensions of the multi-extension semantics are stored separately,
/// so that grounded queries never trigger an admissible set enumeration.
#[derive(Default)]
pub struct FrameworkCache {
    generation: Option<u64>,
    index: Option<FrameworkIndex>,
    grounded: Option<GroundedLabelling>,
    sets: Option<SemanticsSets>,
    n_computations: usize,
}

impl FrameworkCache {
    /// Returns the generation the entries of this cache are valid for, if any.
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    /// Returns the number of entries computed since the creation of this cache.
    pub fn n_computations(&self) -> usize {
        self.n_computations
    }

    /// Drops all the entries.
    pub fn invalidate(&mut self) {
        if self.generation.is_some() {
            debug!("invalidating the cache of generation {:?}", self.generation);
        }
        self.generation = None;
        self.index = None;
        self.grounded = None;
        self.sets = None;
    }

    fn sync(&mut self, generation: u64) {
        if self.generation != Some(generation) {
            self.invalidate();
            self.generation = Some(generation);
        }
    }

    fn is_valid_for(&self, generation: u64) -> bool {
        self.generation == Some(generation)
    }

    /// Returns the cached framework index, if it is valid for the generation.
    pub fn index(&self, generation: u64) -> Option<&FrameworkIndex> {
        self.index.as_ref().filter(|_| self.is_valid_for(generation))
    }

    /// Returns the cached framework index, computing it first if needed.
    pub fn index_or_insert_with<F>(&mut self, generation: u64, f: F) -> &FrameworkIndex
    where
        F: FnOnce() -> FrameworkIndex,
    {
        self.sync(generation);
        if self.index.is_none() {
            info!("building the framework index for generation {}", generation);
            self.n_computations += 1;
        }
        self.index.get_or_insert_with(f)
    }

    /// Returns the cached grounded labelling, if it is valid for the generation.
    pub fn grounded(&self, generation: u64) -> Option<&GroundedLabelling> {
        self.grounded.as_ref().filter(|_| self.is_valid_for(generation))
    }

    /// Returns the cached grounded labelling, computing it first if needed.
    pub fn grounded_or_insert_with<F>(&mut self, generation: u64, f: F) -> &GroundedLabelling
    where
        F: FnOnce() -> GroundedLabelling,
    {
        self.sync(generation);
        if self.grounded.is_none() {
            info!("computing the grounded labelling for generation {}", generation);
            self.n_computations += 1;
        }
        self.grounded.get_or_insert_with(f)
    }

    /// Returns the cached extensions, if they are valid for the generation.
    pub fn sets(&self, generation: u64) -> Option<&SemanticsSets> {
        self.sets.as_ref().filter(|_| self.is_valid_for(generation))
    }

    /// Returns the cached extensions, computing them first if needed.
    pub fn sets_or_insert_with<F>(&mut self, generation: u64, f: F) -> &SemanticsSets
    where
        F: FnOnce() -> SemanticsSets,
    {
        self.sync(generation);
        if self.sets.is_none() {
            info!("computing the extensions for generation {}", generation);
            self.n_computations += 1;
        }
        self.sets.get_or_insert_with(f)
    }
}
