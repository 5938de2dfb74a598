//! # 形状因子数据库
//!
//! 一次 "打开文件" 得到的只读记录集合。
//!
//! ## 依赖关系
//! - 被 `parsers/database.rs` 构造
//! - 被 `parsers/selection.rs`, `formfactor/evaluator.rs` 使用

use crate::error::{FormFactorError, Result};
use crate::models::Record;

/// 校验通过后的数据库（构造后不可变）
#[derive(Debug, Clone)]
pub struct Database {
    /// 数据库名称（文件名）
    pub name: String,
    /// 是否存在 `z` 列
    pub has_z: bool,
    records: Vec<Record>,
}

impl Database {
    pub fn new(name: impl Into<String>, has_z: bool, records: Vec<Record>) -> Self {
        Database {
            name: name.into(),
            has_z,
            records,
        }
    }

    /// 记录数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 全部记录
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// 按索引取记录，越界时返回错误
    pub fn get(&self, index: usize) -> Result<&Record> {
        self.records
            .get(index)
            .ok_or(FormFactorError::IndexOutOfRange {
                index,
                count: self.records.len(),
            })
    }

    /// 带注释的记录数
    pub fn annotated_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| !r.annotations.is_empty())
            .count()
    }
}
