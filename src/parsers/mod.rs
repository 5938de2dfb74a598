//! # 解析器模块
//!
//! 形状因子数据库的读取、校验、规范化，以及记录筛选与示例文件生成。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: schema, element, database, selection, template

pub mod database;
pub mod element;
pub mod schema;
pub mod selection;
pub mod template;

pub use database::load;
pub use selection::RecordFilter;
