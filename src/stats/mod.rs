//! 汇总统计
//!
//! 对复制驱动返回的 Ω 样本序列计算均值、总体标准差与固定
//! 分箱直方图，供展示层使用。

use serde::Serialize;

/// 算术均值；空序列返回 `None`。
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// 总体标准差（除以 n 而非 n-1）；空序列返回 `None`。
pub fn population_std_dev(samples: &[f64]) -> Option<f64> {
    let m = mean(samples)?;
    let var = samples.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / samples.len() as f64;
    Some(var.sqrt())
}

/// 固定分箱直方图，覆盖观测到的 min..max。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<u64>,
}

impl Histogram {
    /// 构造 `bins` 个等宽箱。样本为空或 `bins == 0` 返回 `None`；
    /// 所有样本相等时全部落入首箱。最后一个箱为右闭区间。
    pub fn new(samples: &[f64], bins: usize) -> Option<Histogram> {
        if samples.is_empty() || bins == 0 {
            return None;
        }
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut counts = vec![0u64; bins];
        let width = (max - min) / bins as f64;
        for &x in samples {
            let idx = if width > 0.0 {
                (((x - min) / width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }
        Some(Histogram { min, max, counts })
    }

    /// 第 `idx` 个箱的左边界。
    pub fn bin_start(&self, idx: usize) -> f64 {
        let width = (self.max - self.min) / self.counts.len() as f64;
        self.min + width * idx as f64
    }
}

/// 一批复制样本的汇总，可序列化为 JSON 输出。
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub replications: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub histogram: Histogram,
}

impl Summary {
    pub fn new(samples: &[f64], bins: usize) -> Option<Summary> {
        Some(Summary {
            replications: samples.len(),
            mean: mean(samples)?,
            std_dev: population_std_dev(samples)?,
            histogram: Histogram::new(samples, bins)?,
        })
    }
}
