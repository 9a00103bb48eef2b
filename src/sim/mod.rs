//! 仿真核心模块
//!
//! 此模块包含蒙特卡洛仿真的核心组件：仿真参数、指令序列、
//! 故障模型、单次运行状态机与批量复制驱动。

// 子模块声明
mod commands;
mod error;
mod failure;
mod machine;
mod params;
mod replicate;
mod scenario;

// 重新导出公共接口
pub use commands::CommandSequence;
pub use error::SimError;
pub use failure::{FailureModel, ScriptedFailures, WeibullFailures};
pub use machine::{MachineState, simulate};
pub use params::SimParams;
pub use replicate::{replicate, replicate_seeded};
pub use scenario::{ScenarioMeta, ScenarioSpec};
