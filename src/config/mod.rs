use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::RouteResult;
use crate::route::DeadEndPolicy;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub route: RouteConfig,
    pub log: LogConfig,
    /// 节点ID -> 字母，未列出的节点没有字母
    pub letters: BTreeMap<String, char>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            route: RouteConfig::default(),
            log: LogConfig::default(),
            letters: default_letters(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// 边列表开头需要跳过的表头行数
    pub header_lines: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { header_lines: 2 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RouteConfig {
    pub origin: String,
    pub destination: String,
    pub dead_end: DeadEndPolicy,
    pub max_rounds: Option<usize>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            origin: "S".to_string(),
            destination: "E".to_string(),
            dead_end: DeadEndPolicy::default(),
            max_rounds: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// 日志目录；为空时输出到 stderr
    pub dir: Option<String>,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
            file: "route-planner".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> RouteResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> RouteResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

fn default_letters() -> BTreeMap<String, char> {
    [('B', 'H'), ('D', 'A'), ('E', 'S'), ('F', 'N'), ('G', 'D')]
        .into_iter()
        .map(|(node, letter)| (node.to_string(), letter))
        .collect()
}
