//! # list 子命令 CLI 定义
//!
//! 同时定义 `list` 与 `plot` 共用的筛选参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/plot.rs` 使用
//! - 参数传递给 `commands/list.rs`

use crate::parsers::RecordFilter;

use clap::Args;
use std::path::PathBuf;

/// 记录筛选参数
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter for element symbol or Z (exact match)
    #[arg(short, long)]
    pub element: Option<String>,

    /// Filter for data source (substring match)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Filter by record index, e.g. '1,2,43'
    #[arg(short, long)]
    pub index: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> RecordFilter {
        RecordFilter {
            element: self.element.clone(),
            source: self.source.clone(),
            indices: self.index.clone(),
        }
    }
}

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the form-factor database (CSV)
    pub database: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,
}
