//! 路线构建集成测试
//!
//! 测试范围：
//! - 从边列表文本到最快路线的完整流程
//! - 分叉数量守恒与轮次推进
//! - 成环、死路与完整路径的区分
//! - 构建结果的确定性

mod common;

use common::assertions::{assert_count, assert_route};
use common::{index_of, write_temp, CONNECTIONS};
use route_planner::config::Config;
use route_planner::graph::EdgeIndex;
use route_planner::report::{LetterMapping, RouteReport};
use route_planner::route::{
    complete_paths, fastest, DeadEndPolicy, PathId, RoutePath, Scheduler, SortOrder,
};
use route_planner::RouteError;

fn snapshot(scheduler: &Scheduler<'_>) -> Vec<(PathId, String, f64, bool)> {
    scheduler
        .registry()
        .iter()
        .map(|p| (p.id(), p.to_string(), p.total_weight(), p.is_active()))
        .collect()
}

// ==================== 示例场景 ====================

#[test]
fn test_two_branch_scenario() {
    let index = index_of(&[
        ("S", "A", 1.0),
        ("S", "B", 2.0),
        ("A", "E", 1.0),
        ("B", "E", 0.5),
    ]);
    let mut scheduler = Scheduler::new(&index, "S", "E");
    scheduler.run().expect("构建应该成功");

    let complete = complete_paths(scheduler.registry(), SortOrder::Ascending);
    assert_count(&complete, 2, "完整路线");
    assert_route(complete[0], "S -> A -> E", 2.0);
    assert_route(complete[1], "S -> B -> E", 2.5);

    let best = fastest(scheduler.registry()).expect("应该存在最快路线");
    assert_route(best, "S -> A -> E", 2.0);
}

#[test]
fn test_dead_end_scenario() {
    let index = index_of(&[("S", "X", 1.0)]);
    let mut scheduler = Scheduler::new(&index, "S", "E");
    let stats = scheduler.run().expect("构建应该成功");

    assert_eq!(stats.complete, 0);
    assert_eq!(stats.dead_ends, 1);
    let err = fastest(scheduler.registry()).expect_err("不应该存在完整路线");
    assert!(matches!(
        err,
        RouteError::NoCompletePath { ref origin, ref destination } if origin == "S" && destination == "E"
    ));
}

#[test]
fn test_cycle_scenario() {
    let index = index_of(&[("S", "A", 1.0), ("A", "S", 1.0)]);
    let mut scheduler = Scheduler::new(&index, "S", "E");
    let terminated = scheduler.build_all().expect("构建应该成功");

    assert_count(&terminated, 1, "已结束路线");
    let path = terminated[0];
    assert!(!path.is_active());
    assert!(!path.is_complete());
    assert_eq!(path.steps(), &["A".to_string()]);
    assert_eq!(path.total_weight(), 1.0);
    assert!(complete_paths(scheduler.registry(), SortOrder::Ascending).is_empty());
}

#[test]
fn test_unreachable_destination_with_retained_dead_end_is_bounded() {
    let index = index_of(&[("S", "X", 1.0)]);
    let mut scheduler = Scheduler::new(&index, "S", "E")
        .with_dead_end_policy(DeadEndPolicy::Retain)
        .with_max_rounds(Some(3));

    let err = scheduler.run().expect_err("应该超过轮数上限");
    assert!(matches!(err, RouteError::RoundLimitExceeded { limit: 3, .. }));
}

// ==================== 完整流程 ====================

#[test]
fn test_connections_file_end_to_end() {
    let edges = write_temp(CONNECTIONS);
    let config = Config::default();
    let index = EdgeIndex::load(edges.path(), config.input.header_lines).expect("加载应该成功");
    assert_eq!(index.len(), 14);

    let mut scheduler = Scheduler::from_config(&index, &config.route);
    let stats = scheduler.run().expect("构建应该成功");
    assert_eq!(stats.complete, 10);
    assert_eq!(stats.paths_created, 10);
    assert_eq!(stats.forks, 9);
    assert_eq!(stats.cycles, 0);

    let letters = LetterMapping::from(&config.letters);
    let report = RouteReport::build(scheduler.registry(), &letters).expect("报告应该生成");
    assert_route(report.fastest(), "S -> A -> B -> D -> F -> G -> E", 6.0);
    assert_eq!(report.name(), "HANDS");

    let rendered = report.to_string();
    assert!(rendered.starts_with("Routes built:\n"));
    assert!(rendered.contains("Fastest route: S -> A -> B -> D -> F -> G -> E | total: 6 hrs"));
    assert!(rendered.ends_with("Derived name: HANDS\n"));
}

#[test]
fn test_config_file_changes_endpoints() {
    let config_file = write_temp("[route]\norigin = \"A\"\ndestination = \"D\"\n");
    let config = Config::load(config_file.path()).expect("配置加载应该成功");
    let index = EdgeIndex::from_source(CONNECTIONS, config.input.header_lines)
        .expect("构建索引应该成功");

    let mut scheduler = Scheduler::from_config(&index, &config.route);
    scheduler.run().expect("构建应该成功");

    let routes: Vec<String> = complete_paths(scheduler.registry(), SortOrder::Ascending)
        .iter()
        .map(|p| p.to_string())
        .collect();
    assert_eq!(routes, vec!["A -> B -> D", "A -> C -> D"]);
}

#[test]
fn test_malformed_edge_line_aborts_load() {
    let edges = write_temp("header\n------\nRoute S to A takes 1 hrs\nRoute A to E takes many hrs\n");
    let err = EdgeIndex::load(edges.path(), 2).expect_err("加载应该失败");
    assert!(matches!(err, RouteError::MalformedEdgeLine { line: 4, .. }));
}

// ==================== 性质测试 ====================

#[test]
fn test_construction_is_deterministic() {
    let index = EdgeIndex::from_source(CONNECTIONS, 2).expect("构建索引应该成功");

    let mut first = Scheduler::new(&index, "S", "E");
    first.run().expect("构建应该成功");
    let mut second = Scheduler::new(&index, "S", "E");
    second.run().expect("构建应该成功");

    assert_eq!(snapshot(&first), snapshot(&second));
}

#[test]
fn test_fork_conservation_each_round() {
    let index = EdgeIndex::from_source(CONNECTIONS, 2).expect("构建索引应该成功");
    let mut scheduler = Scheduler::new(&index, "S", "E");

    loop {
        let registry = scheduler.registry();
        let before = registry.len();
        let expected_forks: usize = registry
            .active_ids()
            .into_iter()
            .filter_map(|id| registry.get(id))
            .map(|path| index.outgoing(path.current_node()).len().saturating_sub(1))
            .sum();

        if scheduler.run_round().expect("扩展应该成功").is_none() {
            break;
        }
        assert_eq!(scheduler.registry().len(), before + expected_forks);
    }
}

#[test]
fn test_weights_match_traversed_edges() {
    let index = EdgeIndex::from_source(CONNECTIONS, 2).expect("构建索引应该成功");
    let mut scheduler = Scheduler::new(&index, "S", "E");
    scheduler.run().expect("构建应该成功");

    let weight_of = |path: &RoutePath| -> f64 {
        let mut node = path.origin().to_string();
        let mut total = 0.0;
        for step in path.steps() {
            let edge = index
                .outgoing(&node)
                .iter()
                .find(|e| e.destination() == step)
                .expect("路线上的每一步都应该对应一条边");
            total += edge.weight();
            node = step.clone();
        }
        total
    };

    for path in scheduler.registry().iter() {
        assert!(path.total_weight() >= 0.0);
        assert!((weight_of(path) - path.total_weight()).abs() < 1e-9);
    }
}

#[test]
fn test_complete_set_excludes_cycles() {
    let index = index_of(&[
        ("S", "A", 1.0),
        ("A", "B", 1.0),
        ("B", "A", 1.0),
        ("B", "E", 1.0),
        ("A", "E", 9.0),
    ]);
    let mut scheduler = Scheduler::new(&index, "S", "E");
    let stats = scheduler.run().expect("构建应该成功");
    assert_eq!(stats.cycles, 1);

    for path in complete_paths(scheduler.registry(), SortOrder::Ascending) {
        assert!(!path.is_active());
        assert_eq!(path.last_step(), Some("E"));
    }
    let routes: Vec<String> = complete_paths(scheduler.registry(), SortOrder::Ascending)
        .iter()
        .map(|p| p.to_string())
        .collect();
    assert_eq!(routes, vec!["S -> A -> B -> E", "S -> A -> E"]);
}
