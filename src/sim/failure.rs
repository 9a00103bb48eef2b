//! 故障模型
//!
//! 定义故障间隔的随机源接口。实际仿真使用可播种的 Weibull 源；
//! 测试与回放使用脚本化的确定性序列。

use super::error::SimError;
use super::params::SimParams;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Weibull};
use std::collections::VecDeque;

/// 故障模型：惰性产生下一次无故障运行间隔（time-to-failure）。
pub trait FailureModel {
    fn next_time_to_failure(&mut self) -> Result<f64, SimError>;
}

/// Weibull 故障源：形状 β、尺度 η，由独立播种的 RNG 驱动。
pub struct WeibullFailures {
    dist: Weibull<f64>,
    rng: StdRng,
}

impl WeibullFailures {
    /// 从参数构造，使用系统熵播种。
    pub fn from_params(params: &SimParams) -> Result<WeibullFailures, SimError> {
        Self::with_rng(params, StdRng::from_entropy())
    }

    /// 从参数与固定种子构造，支持确定性重放。
    pub fn from_params_seeded(params: &SimParams, seed: u64) -> Result<WeibullFailures, SimError> {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: &SimParams, rng: StdRng) -> Result<WeibullFailures, SimError> {
        // rand_distr 的 Weibull 构造参数为 (scale, shape)。
        let dist = Weibull::new(params.scale(), params.shape())
            .map_err(|e| SimError::RandomSource(format!("weibull distribution rejected: {e}")))?;
        Ok(WeibullFailures { dist, rng })
    }
}

impl FailureModel for WeibullFailures {
    fn next_time_to_failure(&mut self) -> Result<f64, SimError> {
        Ok(self.dist.sample(&mut self.rng))
    }
}

/// 脚本化故障源：按给定顺序重放固定的抽样序列，耗尽即报错。
pub struct ScriptedFailures {
    draws: VecDeque<f64>,
}

impl ScriptedFailures {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> ScriptedFailures {
        ScriptedFailures {
            draws: draws.into_iter().collect(),
        }
    }

    /// 剩余未消费的抽样数。
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl FailureModel for ScriptedFailures {
    fn next_time_to_failure(&mut self) -> Result<f64, SimError> {
        self.draws
            .pop_front()
            .ok_or_else(|| SimError::RandomSource("scripted draw sequence exhausted".to_string()))
    }
}
