//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `formfactor/`, `utils/`
//! - 子模块: template, list, plot, formulae

pub mod formulae;
pub mod list;
pub mod plot;
pub mod template;

use crate::cli::Commands;
use crate::error::Result;
use crate::models::Database;
use crate::parsers;
use crate::utils::output;

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Template(args) => template::execute(args),
        Commands::List(args) => list::execute(args),
        Commands::Plot(args) => plot::execute(args),
        Commands::Formulae => formulae::execute(),
    }
}

/// 加载数据库并报告字段回退情况
fn load_database(path: &Path) -> Result<Database> {
    let db = parsers::load(path)?;
    output::print_success(&format!(
        "Loaded database '{}' ({} records)",
        db.name,
        db.len()
    ));

    let annotated = db.annotated_count();
    if annotated > 0 {
        output::print_warning(&format!(
            "{} record(s) carry parse annotations (fields defaulted to 0)",
            annotated
        ));
        for (i, record) in db.records().iter().enumerate() {
            if !record.annotations.is_empty() {
                let label = format!("{} {}", record.source, record.element);
                output::print_note(i, &label, &record.annotation_text());
            }
        }
    }
    Ok(db)
}
