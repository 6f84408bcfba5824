//! A cached engine answering semantics queries on a framework built incrementally.

mod cache;
pub use cache::FrameworkCache;

mod config;
pub use config::EngineConfig;

mod semantics_engine;
pub use semantics_engine::SemanticsEngine;
