//! 图数据模块
//!
//! 有向带权边及按起点组织的边索引

pub mod edge;
pub mod edge_index;

pub use edge::Edge;
pub use edge_index::EdgeIndex;
