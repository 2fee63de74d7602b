//!
//! The benchmark summary data model.
//!

pub mod benchmark;
pub mod error;
