//! 边索引模块
//!
//! 按起点索引有向边，保留插入顺序。
//! 同一起点下边的顺序决定分叉时哪条路径拿到哪条边，因此不能排序。

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use super::edge::Edge;
use crate::core::RouteResult;

/// 起点 -> 出边列表
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    edges: HashMap<String, Vec<Edge>>,
    len: usize,
}

impl EdgeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从边定义文本构建索引
    ///
    /// 跳过前 `header_lines` 行表头以及空行；任何无法解析的行都会中止构建。
    pub fn from_source(source: &str, header_lines: usize) -> RouteResult<Self> {
        let mut index = Self::new();
        for (offset, line) in source.lines().enumerate().skip(header_lines) {
            if line.trim().is_empty() {
                continue;
            }
            index.register(Edge::parse_line(offset + 1, line)?);
        }
        debug!(
            "边索引构建完成: {} 条边, {} 个起点",
            index.len(),
            index.edges.len()
        );
        Ok(index)
    }

    /// 从文件加载边定义
    pub fn load<P: AsRef<Path>>(path: P, header_lines: usize) -> RouteResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_source(&content, header_lines)
    }

    /// 追加一条边到其起点的出边列表末尾，不做去重或自环检查
    pub fn register(&mut self, edge: Edge) {
        self.edges
            .entry(edge.origin().to_string())
            .or_default()
            .push(edge);
        self.len += 1;
    }

    /// 按插入顺序返回节点的出边；没有出边时返回空切片
    pub fn outgoing(&self, node: &str) -> &[Edge] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 边总数
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromIterator<Edge> for EdgeIndex {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut index = Self::new();
        for edge in iter {
            index.register(edge);
        }
        index
    }
}
