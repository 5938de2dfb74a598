//! # 记录筛选
//!
//! 三种筛选方式，依次缩小结果：
//! - 元素或 Z：与元素符号或 Z 列完全匹配
//! - 来源：`source` 子串匹配
//! - 索引：逗号分隔的记录编号，如 `1,2,43`，保留给出的顺序
//!
//! 空字符串或 `All` 表示不筛选。
//!
//! ## 依赖关系
//! - 被 `commands/list.rs`, `commands/plot.rs` 使用
//! - 使用 `models/database.rs`

use crate::error::{FormFactorError, Result};
use crate::models::Database;

/// 组合筛选条件
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub element: Option<String>,
    pub source: Option<String>,
    pub indices: Option<String>,
}

impl RecordFilter {
    /// 是否没有任何有效条件
    pub fn is_empty(&self) -> bool {
        [&self.element, &self.source, &self.indices]
            .iter()
            .all(|f| f.as_deref().map_or(true, is_wildcard))
    }

    /// 应用筛选，返回记录索引
    pub fn apply(&self, db: &Database) -> Result<Vec<usize>> {
        let mut keys: Vec<usize> = (0..db.len()).collect();

        if let Some(query) = active(&self.element) {
            keys = filter_by_element(db, &keys, query);
        }
        if let Some(query) = active(&self.source) {
            keys = filter_by_source(db, &keys, query);
        }
        if let Some(query) = active(&self.indices) {
            let listed = parse_index_list(query, db.len())?;
            keys = listed.into_iter().filter(|i| keys.contains(i)).collect();
        }

        Ok(keys)
    }
}

fn is_wildcard(query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || query == "All"
}

fn active(query: &Option<String>) -> Option<&str> {
    query.as_deref().filter(|q| !is_wildcard(q)).map(str::trim)
}

/// 元素符号或 Z 完全匹配
pub fn filter_by_element(db: &Database, keys: &[usize], query: &str) -> Vec<usize> {
    let records = db.records();
    keys.iter()
        .copied()
        .filter(|&i| records[i].element == query || records[i].z == query)
        .collect()
}

/// 来源子串匹配
pub fn filter_by_source(db: &Database, keys: &[usize], query: &str) -> Vec<usize> {
    let records = db.records();
    keys.iter()
        .copied()
        .filter(|&i| records[i].source.contains(query))
        .collect()
}

/// 解析索引列表，要求 0 <= i < count
pub fn parse_index_list(query: &str, count: usize) -> Result<Vec<usize>> {
    query
        .split(',')
        .map(|part| {
            let index: usize = part.trim().parse().map_err(|_| {
                FormFactorError::InvalidSelection(format!(
                    "'{}': only numbers, spaces, and commas are valid inputs",
                    part.trim()
                ))
            })?;
            if index >= count {
                return Err(FormFactorError::IndexOutOfRange { index, count });
            }
            Ok(index)
        })
        .collect()
}
