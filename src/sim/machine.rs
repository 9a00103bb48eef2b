//! 单次运行状态机
//!
//! 推进一台机器依次执行指令序列，期间穿插随机故障修复与
//! 周期性预防维护，返回总完成时间 Ω 的一个样本。

use super::commands::CommandSequence;
use super::error::SimError;
use super::failure::FailureModel;
use super::params::SimParams;
use tracing::{debug, trace};

/// 单次运行的机器状态，运行结束即销毁。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineState {
    total_time: f64,
    next_maintenance: f64,
}

impl MachineState {
    /// 初始状态：累计时间 0，首次维护边界在 T。
    pub fn new(params: &SimParams) -> MachineState {
        MachineState {
            total_time: 0.0,
            next_maintenance: params.maintenance_period(),
        }
    }

    /// 累计经过时间。
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// 下一次预防维护的绝对时刻。
    pub fn next_maintenance(&self) -> f64 {
        self.next_maintenance
    }

    /// 执行一次循环迭代：给定当前指令的剩余工作量与一次
    /// 无故障间隔抽样，返回更新后的剩余工作量。
    ///
    /// 维护优先：`total_time + ttf >= next_maintenance` 时执行维护
    /// （`>=` 使落在边界上的抽样判为维护而非故障），此分支不扣减
    /// 剩余工作量——维护抢占指令且不保留边界前的进度。该语义由
    /// 回归测试锁定，改动必须显式过审。
    pub fn step(&mut self, remaining: f64, ttf: f64, params: &SimParams) -> f64 {
        if self.total_time + ttf >= self.next_maintenance {
            self.total_time = self.next_maintenance + params.maintenance_duration();
            self.next_maintenance += params.maintenance_period();
            trace!(
                total_time = self.total_time,
                next_maintenance = self.next_maintenance,
                remaining,
                "预防维护"
            );
            remaining
        } else if ttf >= remaining {
            // 指令在本次无故障间隔内完成。
            self.total_time += remaining;
            trace!(total_time = self.total_time, "指令完成");
            0.0
        } else {
            // 故障打断指令，修复耗时 θ/2。
            self.total_time += ttf + params.repair_duration();
            trace!(
                total_time = self.total_time,
                remaining = remaining - ttf,
                "故障修复"
            );
            remaining - ttf
        }
    }
}

/// 单次运行仿真：依次处理所有指令，返回总完成时间 Ω。
///
/// 除消耗故障模型的随机抽样外无副作用；故障模型出错立即中止。
pub fn simulate<F: FailureModel>(
    commands: &CommandSequence,
    params: &SimParams,
    failures: &mut F,
) -> Result<f64, SimError> {
    let mut state = MachineState::new(params);
    for (idx, tau) in commands.durations().enumerate() {
        let mut remaining = tau;
        while remaining > 0.0 {
            let ttf = failures.next_time_to_failure()?;
            remaining = state.step(remaining, ttf, params);
        }
        debug!(
            command = idx,
            duration = tau,
            total_time = state.total_time(),
            "指令处理完毕"
        );
    }
    Ok(state.total_time())
}
