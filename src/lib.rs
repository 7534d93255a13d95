//! listpair - Move, reorder and sort entries across a pair of option lists
//!
//! This library provides the engine that manipulates a left/right pair of
//! ordered, selectable option lists, plus the storage, configuration and
//! command layers used by the `listpair` command-line host.

pub mod commands;
pub mod config;
pub mod engine;
pub mod store;
