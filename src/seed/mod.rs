//! Seed Data Module
//!
//! Populates the store with randomly generated books for demos and load
//! checks. Invoked from the binary via the `--seed <count>` flag; inserts
//! run in chunks of 50 with a progress line per chunk.

pub mod generator;
