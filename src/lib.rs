#![allow(clippy::doc_markdown)]

//! Find the cheapest moment to run a constant load against a list of day-ahead prices.
//!
//! Everything goes through [`crate::core::Optimiser`]: its `optimise*` methods resolve
//! the allowed window in one of the supported ways and then search the candidate start times.

pub mod core;
pub mod ops;
pub mod prelude;
pub mod quantity;
