//! Route Planner - enumerates every simple route through a small weighted graph
//!
//! Partial routes grow one edge per round. Whenever a node has several
//! outgoing edges the route is forked, one copy per extra edge, until every
//! copy reaches the destination, loops back on itself or hits a dead end.
//! The complete routes are then ranked by total travel time.

pub mod config;
pub mod core;
pub mod graph;
pub mod report;
pub mod route;
pub mod utils;

pub use crate::core::{RouteError, RouteResult};
