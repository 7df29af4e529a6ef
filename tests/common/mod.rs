//! 集成测试共享工具模块
//!
//! 提供边列表样例数据和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;

use route_planner::graph::{Edge, EdgeIndex};
use std::io::Write;
use tempfile::NamedTempFile;

/// 带两行表头的样例边列表，最快路线依次经过 B、D、F、G、E
pub const CONNECTIONS: &str = "\
Connections
===========
Route S to A takes 1 hrs
Route S to C takes 4 hrs
Route A to B takes 1 hrs
Route A to C takes 3 hrs
Route B to D takes 1 hrs
Route B to H takes 5 hrs
Route C to D takes 1 hrs
Route D to F takes 1 hrs
Route D to I takes 2 hrs
Route F to G takes 1 hrs
Route F to E takes 5 hrs
Route G to E takes 1 hrs
Route H to E takes 10 hrs
Route I to E takes 6 hrs
";

/// 由 (起点, 终点, 耗时) 列表构建边索引，保持给定顺序
pub fn index_of(edges: &[(&str, &str, f64)]) -> EdgeIndex {
    edges
        .iter()
        .map(|(from, to, weight)| Edge::new(*from, *to, *weight))
        .collect()
}

/// 把文本写入临时文件
pub fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temporary file");
    file
}
