//! 路径扩展模块
//!
//! 分叉策略：对当前节点的 k 条出边按插入顺序处理，
//! 最后一条边原地延伸给定路径，其余每条边各复制出一条新路径再延伸。
//! 因此一次扩展恰好新建 k-1 条路径。

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::path::{ExtendOutcome, PathId};
use super::registry::PathRegistry;
use crate::core::{RouteError, RouteResult};
use crate::graph::EdgeIndex;

/// 非终点且没有出边的节点如何处理
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DeadEndPolicy {
    /// 停用路径，不计为完成
    #[default]
    Abandon,
    /// 保持活跃但不推进，需要配合轮数上限使用
    Retain,
}

/// 一次扩展的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// 本次新建的路径，按候选边顺序
    pub forks: Vec<PathId>,
    /// 每条候选边的延伸结果，按候选边顺序
    pub outcomes: Vec<ExtendOutcome>,
    /// 当前节点没有出边
    pub dead_end: bool,
}

impl Expansion {
    pub fn count(&self, outcome: ExtendOutcome) -> usize {
        self.outcomes.iter().filter(|o| **o == outcome).count()
    }
}

pub struct PathExpander<'a> {
    index: &'a EdgeIndex,
    dead_end: DeadEndPolicy,
}

impl<'a> PathExpander<'a> {
    pub fn new(index: &'a EdgeIndex) -> Self {
        Self {
            index,
            dead_end: DeadEndPolicy::default(),
        }
    }

    pub fn with_dead_end_policy(mut self, policy: DeadEndPolicy) -> Self {
        self.dead_end = policy;
        self
    }

    pub fn dead_end_policy(&self) -> DeadEndPolicy {
        self.dead_end
    }

    /// 按分叉策略扩展一条活跃路径
    ///
    /// 副本在原路径原地延伸之前创建，所以每个副本都从扩展前的状态出发。
    /// 已结束的路径不做任何处理。
    pub fn expand(&self, registry: &mut PathRegistry, id: PathId) -> RouteResult<Expansion> {
        let path = registry
            .get(id)
            .ok_or(RouteError::UnknownPathReference(id))?;
        if !path.is_active() {
            return Ok(Expansion::default());
        }

        let node = path.current_node().to_string();
        let candidates = self.index.outgoing(&node);
        let mut expansion = Expansion::default();

        if candidates.is_empty() {
            expansion.dead_end = true;
            match self.dead_end {
                DeadEndPolicy::Abandon => {
                    debug!("路径 {} 在节点 {} 无出边，放弃", id, node);
                    registry.path_mut(id)?.abandon();
                }
                DeadEndPolicy::Retain => {
                    warn!("路径 {} 停留在无出边的节点 {}", id, node);
                }
            }
            return Ok(expansion);
        }

        let last = candidates.len() - 1;
        for (i, edge) in candidates.iter().enumerate() {
            let outcome = if i == last {
                registry.path_mut(id)?.extend(edge)
            } else {
                let fork = registry.duplicate(id)?;
                expansion.forks.push(fork);
                registry.path_mut(fork)?.extend(edge)
            };
            expansion.outcomes.push(outcome);
        }

        if !expansion.forks.is_empty() {
            debug!(
                "路径 {} 在节点 {} 分叉出 {} 条: {:?}",
                id,
                node,
                expansion.forks.len(),
                expansion.forks
            );
        }
        Ok(expansion)
    }
}
