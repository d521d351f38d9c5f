//! Various procedures for mutating a context.
//!
//!For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod delta;
pub mod flip;
pub mod initialize;
pub mod mcsat;
pub mod moves;
pub mod search;
