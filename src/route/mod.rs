//! 路线构建模块
//!
//! 通过不断复制和延伸部分路径，枚举起点到终点的所有简单路线

pub mod expander;
pub mod path;
pub mod ranking;
pub mod registry;
pub mod scheduler;

pub use expander::{DeadEndPolicy, Expansion, PathExpander};
pub use path::{ExtendOutcome, PathId, RoutePath};
pub use ranking::{compare_weight, complete_paths, fastest, SortOrder};
pub use registry::PathRegistry;
pub use scheduler::{ConstructionStats, Scheduler};
