//! 路径排序模块
//!
//! 从注册表中筛选完整路径并按累计耗时排序

use std::cmp::Ordering;

use super::path::RoutePath;
use super::registry::PathRegistry;
use crate::core::{RouteError, RouteResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// 比较两个累计耗时
pub fn compare_weight(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// 已结束且最后一步为终点的路径，按耗时排序
///
/// 排序是稳定的，耗时相同的路径保持注册顺序。
pub fn complete_paths(registry: &PathRegistry, order: SortOrder) -> Vec<&RoutePath> {
    let mut paths: Vec<&RoutePath> = registry.iter().filter(|p| p.is_complete()).collect();
    match order {
        SortOrder::Ascending => {
            paths.sort_by(|a, b| compare_weight(a.total_weight(), b.total_weight()))
        }
        SortOrder::Descending => {
            paths.sort_by(|a, b| compare_weight(b.total_weight(), a.total_weight()))
        }
    }
    paths
}

/// 耗时最少的完整路径
pub fn fastest(registry: &PathRegistry) -> RouteResult<&RoutePath> {
    complete_paths(registry, SortOrder::Ascending)
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::NoCompletePath {
            origin: registry.origin().to_string(),
            destination: registry.destination().to_string(),
        })
}
