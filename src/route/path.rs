//! 路线路径模块
//!
//! 一条从起点出发、只追加的部分路线：已访问节点序列、累计耗时和活跃标志

use std::fmt;

use crate::graph::Edge;

/// 路径ID，按创建顺序单调递增，永不复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathId(pub u64);

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 单次延伸的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendOutcome {
    /// 追加了一个新节点，路径仍然活跃
    Advanced,
    /// 到达终点，路径成功结束
    Arrived,
    /// 目标节点已访问过，路径被放弃，状态保持不变
    Cycle,
    /// 路径已结束，忽略本次延伸
    Inactive,
}

/// 部分或完整的路线
///
/// 只能由 `PathRegistry` 创建；路径从不删除，只会被停用。
#[derive(Debug, PartialEq)]
pub struct RoutePath {
    id: PathId,
    origin: String,
    destination: String,
    /// 已访问节点，不含起点
    steps: Vec<String>,
    total_weight: f64,
    active: bool,
}

impl RoutePath {
    /// 种子路径：只有起点，没有任何步骤
    pub(crate) fn seed(id: PathId, origin: &str, destination: &str) -> Self {
        Self {
            id,
            origin: origin.to_string(),
            destination: destination.to_string(),
            steps: Vec::new(),
            total_weight: 0.0,
            active: true,
        }
    }

    /// 以新ID复制路径，用于探索另一条出边
    ///
    /// 步骤序列是独立拷贝；复制出的路径总是活跃的。
    pub(crate) fn fork(&self, id: PathId) -> Self {
        Self {
            id,
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            steps: self.steps.clone(),
            total_weight: self.total_weight,
            active: true,
        }
    }

    /// 沿一条边延伸路径
    ///
    /// 起点也算作已访问节点：回到起点同样视为成环。
    pub fn extend(&mut self, edge: &Edge) -> ExtendOutcome {
        if !self.active {
            return ExtendOutcome::Inactive;
        }

        let next = edge.destination();
        if self.has_visited(next) {
            self.active = false;
            return ExtendOutcome::Cycle;
        }

        self.steps.push(next.to_string());
        self.total_weight += edge.weight();

        if next == self.destination {
            self.active = false;
            ExtendOutcome::Arrived
        } else {
            ExtendOutcome::Advanced
        }
    }

    /// 死路：停用但不算完成
    pub(crate) fn abandon(&mut self) {
        self.active = false;
    }

    fn has_visited(&self, node: &str) -> bool {
        node == self.origin || self.steps.iter().any(|step| step == node)
    }

    pub fn id(&self) -> PathId {
        self.id
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 最后访问的节点；还没走过任何一步时为 `None`
    pub fn last_step(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }

    /// 下一次查找出边所用的节点
    pub fn current_node(&self) -> &str {
        self.last_step().unwrap_or(&self.origin)
    }

    /// 已结束且最后一步是终点
    pub fn is_complete(&self) -> bool {
        !self.active && self.last_step() == Some(self.destination.as_str())
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin)?;
        for step in &self.steps {
            write!(f, " -> {}", step)?;
        }
        Ok(())
    }
}
