//! 指令序列
//!
//! 定义经过校验的指令时长序列。指令严格按顺序执行，
//! 顺序在校验后不再改变。

use super::error::SimError;
use serde::{Deserialize, Serialize};

/// 指令时长序列 τ_j。非空，且每个时长为正的有限值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CommandSequence(Vec<f64>);

impl CommandSequence {
    /// 校验并构造序列。
    pub fn new(durations: Vec<f64>) -> Result<CommandSequence, SimError> {
        if durations.is_empty() {
            return Err(SimError::InvalidCommandSequence(
                "sequence is empty".to_string(),
            ));
        }
        for (i, &tau) in durations.iter().enumerate() {
            if !tau.is_finite() || tau <= 0.0 {
                return Err(SimError::InvalidCommandSequence(format!(
                    "command {i} has non-positive duration {tau}"
                )));
            }
        }
        Ok(CommandSequence(durations))
    }

    /// 从逗号分隔文本解析，例如 `"240,120,80"`。
    pub fn parse(text: &str) -> Result<CommandSequence, SimError> {
        let durations = text
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>().map_err(|_| {
                    SimError::InvalidCommandSequence(format!("cannot parse duration `{part}`"))
                })
            })
            .collect::<Result<Vec<f64>, SimError>>()?;
        CommandSequence::new(durations)
    }

    /// 指令数量。
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 按执行顺序迭代指令时长。
    pub fn durations(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// 所有指令时长之和（无故障、无维护时的运行时间下界）。
    pub fn total_duration(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl TryFrom<Vec<f64>> for CommandSequence {
    type Error = SimError;

    fn try_from(durations: Vec<f64>) -> Result<CommandSequence, SimError> {
        CommandSequence::new(durations)
    }
}

impl From<CommandSequence> for Vec<f64> {
    fn from(commands: CommandSequence) -> Vec<f64> {
        commands.0
    }
}
