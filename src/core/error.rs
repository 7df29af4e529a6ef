//! 统一错误处理 for route_planner
//!
//! 所有可恢复错误都汇总到 `RouteError`，通过 `RouteResult<T>` 向调用方传播：
//! - 输入错误（边列表格式、配置）在解析处就地检测
//! - 不变量错误（引用不存在的路径）立即中止构建
//! - 查询错误（没有完整路径）作为独立结果返回，而不是越界崩溃

use thiserror::Error;

use crate::route::PathId;

/// 统一的路线规划错误类型
#[derive(Error, Debug)]
pub enum RouteError {
    /// 边列表中的某一行无法解析
    #[error("边定义格式错误 (第 {line} 行: {content:?}): {reason}")]
    MalformedEdgeLine {
        line: usize,
        content: String,
        reason: String,
    },

    /// 请求复制一个注册表中不存在的路径
    #[error("路径未找到: {0}")]
    UnknownPathReference(PathId),

    /// 没有任何路径从起点到达终点
    #[error("不存在从 {origin} 到 {destination} 的完整路径")]
    NoCompletePath { origin: String, destination: String },

    /// 构建轮数超过配置的上限，仍有活跃路径
    #[error("构建超过 {limit} 轮仍有 {active} 条活跃路径")]
    RoundLimitExceeded { limit: usize, active: usize },

    #[error("配置错误: {0}")]
    Config(String),

    #[error("日志错误: {0}")]
    Logging(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 统一的结果类型
pub type RouteResult<T> = Result<T, RouteError>;

impl RouteError {
    pub(crate) fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Self {
        RouteError::MalformedEdgeLine {
            line,
            content: content.trim_end().to_string(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for RouteError {
    fn from(err: toml::de::Error) -> Self {
        RouteError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for RouteError {
    fn from(err: toml::ser::Error) -> Self {
        RouteError::Config(err.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for RouteError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        RouteError::Logging(err.to_string())
    }
}
