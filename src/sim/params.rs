//! 仿真参数
//!
//! 定义经过校验的不可变参数对象。定义域之外的输入在任何
//! 仿真工作开始之前就被拒绝。

use super::error::SimError;

/// 仿真参数：预防性维护周期 T、维护时长 θ、Weibull 形状 β 与尺度 η。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    maintenance_period: f64,
    maintenance_duration: f64,
    shape: f64,
    scale: f64,
}

impl SimParams {
    /// 校验并构造参数。定义域：T > 0、θ ≥ 0、β > 0、η > 0，且均为有限值。
    pub fn new(
        maintenance_period: f64,
        maintenance_duration: f64,
        shape: f64,
        scale: f64,
    ) -> Result<SimParams, SimError> {
        check("maintenance_period", maintenance_period, "must be > 0", |v| v > 0.0)?;
        check("maintenance_duration", maintenance_duration, "must be >= 0", |v| {
            v >= 0.0
        })?;
        check("shape", shape, "must be > 0", |v| v > 0.0)?;
        check("scale", scale, "must be > 0", |v| v > 0.0)?;
        Ok(SimParams {
            maintenance_period,
            maintenance_duration,
            shape,
            scale,
        })
    }

    /// 预防性维护周期 T。
    pub fn maintenance_period(&self) -> f64 {
        self.maintenance_period
    }

    /// 预防性维护时长 θ。
    pub fn maintenance_duration(&self) -> f64 {
        self.maintenance_duration
    }

    /// 故障后修复时长 θ/2。
    pub fn repair_duration(&self) -> f64 {
        self.maintenance_duration / 2.0
    }

    /// Weibull 形状参数 β。
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Weibull 尺度参数 η。
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

fn check(
    name: &'static str,
    value: f64,
    constraint: &'static str,
    ok: impl Fn(f64) -> bool,
) -> Result<(), SimError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name,
            value,
            constraint,
        })
    }
}
