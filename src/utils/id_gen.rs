//! ID生成器模块 - 提供单调递增的ID
//!
//! 每个注册表持有自己的生成器，不同的构建过程之间不会共享计数

use std::sync::atomic::{AtomicU64, Ordering};

/// 基于原子计数器的顺序ID生成器
///
/// 分配出去的ID永不复用
#[derive(Debug)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// 创建新的ID生成器，使用指定的初始值
    pub fn new(init: u64) -> Self {
        Self {
            counter: AtomicU64::new(init),
        }
    }

    /// 生成下一个ID
    pub fn next_id(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }

    /// 获取下一个将要分配的值
    pub fn current_value(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl Clone for IdGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.current_value()),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}
