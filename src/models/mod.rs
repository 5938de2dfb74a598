//! # 数据模型模块
//!
//! 定义形状因子记录与数据库。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `formfactor/` 和 `commands/` 使用
//! - 子模块: record, database

pub mod database;
pub mod record;

pub use database::Database;
pub use record::{Annotation, Record};
