//! # 形状因子计算模块
//!
//! 提供原子 X 射线形状因子曲线的计算与输出。
//!
//! ## 子模块
//! - `evaluator`: f(Q) 采样与 Q → 2θ 换算
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 使用
//! - 使用 `models/` 的 Database, Record

pub mod evaluator;
pub mod export;
pub mod plot;

pub use evaluator::{evaluate, AxisMode, Evaluation, DEFAULT_WAVELENGTH};
