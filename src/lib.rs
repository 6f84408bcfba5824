//! Dungsem is an engine computing the classical semantics of Dung's abstract argumentation frameworks.
//!
//! Frameworks are built incrementally ([aa::AAFramework]) or read from Aspartix files ([io::AspartixReader]).
//! The [solvers] module provides one solver per semantics,
//! while [engine::SemanticsEngine] wraps a framework and caches the results shared by all the semantics.

#![warn(missing_docs)]

pub mod aa;

pub mod engine;

pub mod io;

pub mod solvers;

pub mod utils;
