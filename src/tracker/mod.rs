// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental attack bookkeeping shared by both solvers.
//!
//! The [`CollisionTracker`] owns two diagonal attack-count tables and keeps
//! them in lock-step with the owning solver's placement. Both solvers talk to
//! it through the [`AttackQuery`] trait.
//!
//! # Invariant
//!
//! The count in each diagonal bucket equals the number of queens of the current
//! placement (full or partial) lying on that diagonal. The counts are changed
//! only by [`AttackQuery::record`] (one call per placed or removed queen) or
//! rebuilt wholesale by [`AttackQuery::recalculate`]; both paths must produce
//! the same tables for the same placement.

pub mod attack;
pub mod collisions;

pub use attack::AttackQuery;
pub use collisions::CollisionTracker;
