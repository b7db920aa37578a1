// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable per-solve bookkeeping that lives outside the collision tracker.

pub mod statistics;

pub use statistics::{Counters, Statistics};
