
//! Various utility functions.

pub mod prism;
