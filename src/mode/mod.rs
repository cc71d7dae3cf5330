
//! Configurable modes that change how the engine behaves.

pub mod derivative;
