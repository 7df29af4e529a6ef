//! 边定义模块
//!
//! 有向带权边及其文本行解析

use std::fmt;

use crate::core::{RouteError, RouteResult};

const ORIGIN_TOKEN: usize = 1;
const DESTINATION_TOKEN: usize = 3;
const WEIGHT_TOKEN: usize = 5;

/// 有向带权边，解析后不可变
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    origin: String,
    destination: String,
    weight: f64,
}

impl Edge {
    /// 创建新边
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, weight: f64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weight,
        }
    }

    /// 解析一行边定义
    ///
    /// 按空白切分后取第 1、3、5 个字段作为起点、终点和耗时，
    /// 例如 `Route S to A takes 1.5 hrs`。`line_no` 仅用于错误报告。
    pub fn parse_line(line_no: usize, line: &str) -> RouteResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() <= WEIGHT_TOKEN {
            return Err(RouteError::malformed(
                line_no,
                line,
                format!("需要至少 {} 个字段，实际 {}", WEIGHT_TOKEN + 1, tokens.len()),
            ));
        }

        let raw_weight = tokens[WEIGHT_TOKEN];
        let weight: f64 = raw_weight
            .parse()
            .map_err(|_| RouteError::malformed(line_no, line, format!("耗时不是数字: {raw_weight}")))?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(RouteError::malformed(
                line_no,
                line,
                format!("耗时必须是非负有限数: {raw_weight}"),
            ));
        }

        Ok(Self::new(tokens[ORIGIN_TOKEN], tokens[DESTINATION_TOKEN], weight))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} [travel-time={} hrs]",
            self.origin, self.destination, self.weight
        )
    }
}
