//! # list 命令实现
//!
//! 加载数据库，按条件筛选并以表格列出记录。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `parsers/` 加载与筛选
//! - 使用 `utils/output.rs`, `tabled`

use crate::cli::list::ListArgs;
use crate::error::Result;
use crate::models::{Database, Record};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 记录表格行
#[derive(Debug, Clone, Tabled)]
struct RecordRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Set")]
    set: i64,
    #[tabled(rename = "Z")]
    z: String,
    #[tabled(rename = "El.")]
    element: String,
    #[tabled(rename = "Ox.")]
    oxidation: String,
    #[tabled(rename = "c")]
    c: String,
    #[tabled(rename = "Terms")]
    terms: usize,
    #[tabled(rename = "a / b")]
    coefficients: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl RecordRow {
    /// 数据库没有 `z` 列时 Z 显示为 "-"
    fn new(index: usize, record: &Record, has_z: bool) -> Self {
        let coefficients = record
            .a
            .iter()
            .zip(record.b.iter())
            .map(|(a, b)| format!("{:.4}/{:.4}", a, b))
            .collect::<Vec<_>>()
            .join("  ");

        RecordRow {
            index,
            source: record.source.clone(),
            set: record.set_size,
            z: if has_z {
                record.z.clone()
            } else {
                "-".to_string()
            },
            element: record.element.clone(),
            oxidation: format_oxidation(record.oxidation_state),
            c: format!("{:.4}", record.c),
            terms: record.pair_count(),
            coefficients,
            notes: record.annotation_text(),
        }
    }
}

/// 正值带 "+" 号
fn format_oxidation(ox: i32) -> String {
    if ox > 0 {
        format!("+{}", ox)
    } else {
        ox.to_string()
    }
}

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    output::print_header("Atomic Form Factor Database");

    let db = super::load_database(&args.database)?;
    if !db.has_z {
        output::print_info("No 'z' column in database; Z is not shown");
    }
    let keys = args.filter.to_filter().apply(&db)?;

    if keys.is_empty() {
        output::print_warning("No records match the given filter.");
        return Ok(());
    }

    print_record_table(&db, &keys);
    output::print_info(&format!("{} of {} records shown", keys.len(), db.len()));
    Ok(())
}

/// 打印记录表格
fn print_record_table(db: &Database, keys: &[usize]) {
    let records = db.records();
    let rows: Vec<RecordRow> = keys
        .iter()
        .map(|&i| RecordRow::new(i, &records[i], db.has_z))
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Annotation;

    #[test]
    fn test_format_oxidation() {
        assert_eq!(format_oxidation(3), "+3");
        assert_eq!(format_oxidation(0), "0");
        assert_eq!(format_oxidation(-2), "-2");
    }

    #[test]
    fn test_record_row() {
        let record = Record {
            source: "ITC".to_string(),
            element: "Fe".to_string(),
            oxidation_state: 3,
            z: "26".to_string(),
            set_size: 5,
            a: vec![1.0, 2.5],
            b: vec![0.5, 10.0],
            c: 0.25,
            annotations: vec![Annotation::MissingOxidation],
        };
        let row = RecordRow::new(4, &record, true);
        assert_eq!(row.index, 4);
        assert_eq!(row.z, "26");
        assert_eq!(row.terms, 2);
        assert_eq!(row.oxidation, "+3");
        assert_eq!(row.c, "0.2500");
        assert_eq!(row.coefficients, "1.0000/0.5000  2.5000/10.0000");
        assert_eq!(row.notes, "ox. miss.");

        let row = RecordRow::new(4, &record, false);
        assert_eq!(row.z, "-");
    }
}
