//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use route_planner::route::RoutePath;

/// 断言集合包含指定数量的元素
pub fn assert_count<T>(collection: &[T], expected: usize, item_name: &str) {
    assert_eq!(
        collection.len(),
        expected,
        "{}数量不匹配: 期望 {}, 实际 {}",
        item_name,
        expected,
        collection.len()
    );
}

/// 断言路线经过的节点（含起点）和累计耗时
pub fn assert_route(path: &RoutePath, expected: &str, weight: f64) {
    assert_eq!(path.to_string(), expected, "路线 {} 节点不匹配", path.id());
    assert!(
        (path.total_weight() - weight).abs() < 1e-9,
        "路线 {} 耗时不匹配: 期望 {}, 实际 {}",
        path.id(),
        weight,
        path.total_weight()
    );
}
