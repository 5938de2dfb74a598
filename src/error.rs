//! # 统一错误处理模块
//!
//! 定义 ffplot 的所有错误类型，使用 `thiserror` 派生。
//!
//! 字段级解析失败不是错误：它们在记录上以注释形式保留（见 `models/record.rs`）。
//! 这里只列出会中止一次操作的情况。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 文件格式提示，附加在表头校验错误之后
pub const FORMAT_HINT: &str = "Make sure that the file is a properly formatted csv with commas (,) as separators and no additional line breaks.";

/// ffplot 统一错误类型
#[derive(Error, Debug)]
pub enum FormFactorError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 数据库错误
    // ─────────────────────────────────────────────────────────────
    #[error("Error in input file {path}:\n{}{}", format_missing(.missing), FORMAT_HINT)]
    MissingColumns { path: String, missing: Vec<String> },

    #[error("Failed to parse database {path}, line {line}\nReason: {reason}")]
    ParseError {
        path: String,
        line: usize,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 选择错误
    // ─────────────────────────────────────────────────────────────
    #[error("Index {index} out of range: numbers must be between 0 and {}", .count.saturating_sub(1))]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Plot rendering failed: {0}")]
    PlotError(String),
}

/// 每个缺失列一行
fn format_missing(missing: &[String]) -> String {
    missing
        .iter()
        .map(|col| format!("No column {} specified with '{}'.\n", col, col))
        .collect()
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FormFactorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_each_column() {
        let err = FormFactorError::MissingColumns {
            path: "db.csv".to_string(),
            missing: vec!["c".to_string(), "b5".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("No column c specified with 'c'."));
        assert!(msg.contains("No column b5 specified with 'b5'."));
        assert!(msg.ends_with(FORMAT_HINT));
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = FormFactorError::IndexOutOfRange { index: 7, count: 3 };
        assert_eq!(
            err.to_string(),
            "Index 7 out of range: numbers must be between 0 and 2"
        );
    }
}
