//! 路径构建调度器
//!
//! 不动点循环：每一轮对当时活跃路径的快照逐一扩展，
//! 本轮新建的副本留到下一轮处理；没有活跃路径时停止。

use log::{debug, info};

use super::expander::{DeadEndPolicy, PathExpander};
use super::path::{ExtendOutcome, RoutePath};
use super::ranking;
use super::registry::PathRegistry;
use crate::config::RouteConfig;
use crate::core::{RouteError, RouteResult};
use crate::graph::EdgeIndex;

/// 构建过程统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructionStats {
    pub rounds: usize,
    pub paths_created: usize,
    pub forks: usize,
    pub cycles: usize,
    pub dead_ends: usize,
    pub complete: usize,
}

pub struct Scheduler<'a> {
    expander: PathExpander<'a>,
    registry: PathRegistry,
    max_rounds: Option<usize>,
    stats: ConstructionStats,
}

impl<'a> Scheduler<'a> {
    /// 创建调度器并注册种子路径
    pub fn new(index: &'a EdgeIndex, origin: &str, destination: &str) -> Self {
        let mut registry = PathRegistry::new(origin, destination);
        registry.seed();
        Self {
            expander: PathExpander::new(index),
            registry,
            max_rounds: None,
            stats: ConstructionStats::default(),
        }
    }

    pub fn from_config(index: &'a EdgeIndex, config: &RouteConfig) -> Self {
        Self::new(index, &config.origin, &config.destination)
            .with_dead_end_policy(config.dead_end)
            .with_max_rounds(config.max_rounds)
    }

    pub fn with_dead_end_policy(mut self, policy: DeadEndPolicy) -> Self {
        self.expander = self.expander.with_dead_end_policy(policy);
        self
    }

    /// 轮数上限，超过后仍有活跃路径则返回错误
    pub fn with_max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// 执行一轮扩展，返回本轮处理的路径数；没有活跃路径时返回 `None`
    pub fn run_round(&mut self) -> RouteResult<Option<usize>> {
        let snapshot = self.registry.active_ids();
        if snapshot.is_empty() {
            return Ok(None);
        }
        if let Some(limit) = self.max_rounds {
            if self.stats.rounds >= limit {
                return Err(RouteError::RoundLimitExceeded {
                    limit,
                    active: snapshot.len(),
                });
            }
        }

        self.stats.rounds += 1;
        debug!(
            "第 {} 轮: {} 条活跃路径",
            self.stats.rounds,
            snapshot.len()
        );

        for id in &snapshot {
            let expansion = self.expander.expand(&mut self.registry, *id)?;
            self.stats.forks += expansion.forks.len();
            self.stats.cycles += expansion.count(ExtendOutcome::Cycle);
            if expansion.dead_end && self.expander.dead_end_policy() == DeadEndPolicy::Abandon {
                self.stats.dead_ends += 1;
            }
        }
        Ok(Some(snapshot.len()))
    }

    /// 反复扩展直到没有活跃路径
    pub fn run(&mut self) -> RouteResult<ConstructionStats> {
        while self.run_round()?.is_some() {}

        self.stats.paths_created = self.registry.len();
        self.stats.complete =
            ranking::complete_paths(&self.registry, ranking::SortOrder::Ascending).len();
        info!(
            "路径构建完成: {} 轮, {} 条路径, {} 条完整, {} 条成环, {} 条死路",
            self.stats.rounds,
            self.stats.paths_created,
            self.stats.complete,
            self.stats.cycles,
            self.stats.dead_ends
        );
        Ok(self.stats.clone())
    }

    /// 构建全部路径并返回所有已结束的路径
    pub fn build_all(&mut self) -> RouteResult<Vec<&RoutePath>> {
        self.run()?;
        Ok(self.registry.terminated())
    }

    pub fn stats(&self) -> &ConstructionStats {
        &self.stats
    }

    pub fn registry(&self) -> &PathRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> PathRegistry {
        self.registry
    }
}
