//! `knapsack-rs`: exact and greedy solvers for the 0-1 knapsack decision problem

/// Entities to model 0-1 knapsack problem instances
pub mod entities;

/// Errors raised when an instance violates the preconditions of a solver
pub mod error;

/// Importing problem instances into and exporting them out of this library
pub mod io;

/// Exact dynamic programming and greedy value-density solvers
pub mod solvers;

/// Helper functions which do not belong to any specific module
pub mod util;
