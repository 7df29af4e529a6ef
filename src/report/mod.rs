//! 文本报告
//!
//! 列出全部完整路线以及耗时最少的路线和它派生出的字符串

pub mod letters;

pub use letters::LetterMapping;

use std::fmt;

use crate::core::RouteResult;
use crate::route::{self, PathRegistry, RoutePath, SortOrder};

pub struct RouteReport<'a> {
    routes: Vec<&'a RoutePath>,
    fastest: &'a RoutePath,
    name: String,
}

impl<'a> RouteReport<'a> {
    /// 注册表中没有完整路径时返回 `NoCompletePath`
    pub fn build(registry: &'a PathRegistry, letters: &LetterMapping) -> RouteResult<Self> {
        let fastest = route::fastest(registry)?;
        Ok(Self {
            routes: route::complete_paths(registry, SortOrder::Ascending),
            fastest,
            name: letters.derive(fastest.steps()),
        })
    }

    pub fn routes(&self) -> &[&'a RoutePath] {
        &self.routes
    }

    pub fn fastest(&self) -> &'a RoutePath {
        self.fastest
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn write_route(f: &mut fmt::Formatter<'_>, label: &str, path: &RoutePath) -> fmt::Result {
    writeln!(f, "{}: {} | total: {} hrs", label, path, path.total_weight())
}

impl fmt::Display for RouteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Routes built:")?;
        for path in &self.routes {
            write_route(f, &format!("Route {}", path.id()), path)?;
        }
        write_route(f, "Fastest route", self.fastest)?;
        writeln!(f, "Derived name: {}", self.name)
    }
}
