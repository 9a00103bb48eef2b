//! 错误类型
//!
//! 定义仿真核心的错误分类。所有错误都直接抛给调用方，
//! 不做默认值替换或范围截断。

use thiserror::Error;

/// 仿真核心错误。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// 参数超出定义域（T、θ、β、η 或复制次数 r）。
    #[error("invalid parameter `{name}`: {value} ({constraint})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// 指令序列为空或包含非正的指令时长。
    #[error("invalid command sequence: {0}")]
    InvalidCommandSequence(String),

    /// 随机源失效（分布构造被拒绝、脚本序列耗尽等）。
    #[error("random source failure: {0}")]
    RandomSource(String),
}
