//! 路径注册表
//!
//! 所有路径的唯一持有者，按创建顺序保存，并分配路径ID

use std::collections::BTreeMap;

use log::trace;

use super::path::{PathId, RoutePath};
use crate::core::{RouteError, RouteResult};
use crate::utils::IdGenerator;

/// 路径ID -> 路径
#[derive(Debug)]
pub struct PathRegistry {
    origin: String,
    destination: String,
    paths: BTreeMap<PathId, RoutePath>,
    ids: IdGenerator,
}

impl PathRegistry {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            paths: BTreeMap::new(),
            ids: IdGenerator::default(),
        }
    }

    /// 注册一条只有起点的种子路径
    pub fn seed(&mut self) -> PathId {
        let id = PathId(self.ids.next_id());
        let path = RoutePath::seed(id, &self.origin, &self.destination);
        self.paths.insert(id, path);
        id
    }

    /// 复制已有路径并注册副本，返回新路径ID
    pub fn duplicate(&mut self, id: PathId) -> RouteResult<PathId> {
        let source = self
            .paths
            .get(&id)
            .ok_or(RouteError::UnknownPathReference(id))?;
        let new_id = PathId(self.ids.next_id());
        let forked = source.fork(new_id);
        trace!("复制路径 {} -> {}", id, new_id);
        self.paths.insert(new_id, forked);
        Ok(new_id)
    }

    pub fn get(&self, id: PathId) -> Option<&RoutePath> {
        self.paths.get(&id)
    }

    pub(crate) fn path_mut(&mut self, id: PathId) -> RouteResult<&mut RoutePath> {
        self.paths
            .get_mut(&id)
            .ok_or(RouteError::UnknownPathReference(id))
    }

    /// 当前活跃路径的ID快照，按注册顺序
    pub fn active_ids(&self) -> Vec<PathId> {
        self.paths
            .values()
            .filter(|path| path.is_active())
            .map(RoutePath::id)
            .collect()
    }

    /// 所有已结束的路径（完成、成环或死路）
    pub fn terminated(&self) -> Vec<&RoutePath> {
        self.paths.values().filter(|path| !path.is_active()).collect()
    }

    /// 按注册顺序遍历全部路径
    pub fn iter(&self) -> impl Iterator<Item = &RoutePath> {
        self.paths.values()
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
