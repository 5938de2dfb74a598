//! # plot 命令实现
//!
//! 计算选中记录的形状因子曲线。
//!
//! ## 功能
//! - 复用 `list` 的筛选参数确定选择
//! - Q 或 2θ 横轴
//! - 导出数据文件 (CSV) 与图像 (PNG/SVG)，两者使用同一份计算结果
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的 PlotArgs
//! - 使用 `parsers/` 加载与筛选
//! - 使用 `formfactor/` 进行计算与输出

use crate::cli::plot::PlotArgs;
use crate::error::{FormFactorError, Result};
use crate::formfactor::{self, AxisMode, Evaluation};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Atomic Form Factor Plot");

    let filter = args.filter.to_filter();
    if filter.is_empty() {
        return Err(FormFactorError::InvalidSelection(
            "nothing selected; use --element, --source or --index".to_string(),
        ));
    }

    // 提前检查输出，避免计算后才失败
    for path in [&args.data, &args.image].into_iter().flatten() {
        check_output(path, args.overwrite)?;
    }
    if let Some(image) = &args.image {
        formfactor::plot::ImageFormat::from_path(image)?;
    }

    let db = super::load_database(&args.database)?;
    let selection = filter.apply(&db)?;
    if selection.is_empty() {
        output::print_warning("No records match the given filter.");
        return Ok(());
    }

    let mode = AxisMode::from(args.mode);
    output::print_info(&format!(
        "Evaluating {} record(s) in {} mode",
        selection.len(),
        mode
    ));
    if mode == AxisMode::TwoTheta {
        output::print_info(&format!("Using wavelength: {:.6} Å", args.wavelength));
    }

    let evaluation = formfactor::evaluate(&db, &selection, mode, args.wavelength)?;
    print_curve_table(&evaluation);

    if args.data.is_none() && args.image.is_none() {
        output::print_warning("No output requested (use --data and/or --image).");
        return Ok(());
    }

    if let Some(path) = &args.data {
        let rows = formfactor::export::to_csv(&evaluation, path)?;
        output::print_saved("data", path, &format!("{} rows", rows));
    }

    if let Some(path) = &args.image {
        formfactor::plot::generate_plot(&evaluation, path, args.dpi)?;
        let (width, height) = formfactor::plot::figure_size(args.dpi);
        output::print_saved("image", path, &format!("{}x{} px", width, height));
    }

    Ok(())
}

/// 输出文件已存在且未允许覆盖时报错
fn check_output(path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(FormFactorError::InvalidArgument(format!(
            "'{}' already exists (use --overwrite to replace it)",
            path.display()
        )));
    }
    Ok(())
}

/// 打印曲线概要表格
fn print_curve_table(evaluation: &Evaluation) {
    #[derive(Tabled)]
    struct CurveRow {
        #[tabled(rename = "Index")]
        index: usize,
        #[tabled(rename = "Label")]
        label: String,
        #[tabled(rename = "Samples")]
        samples: usize,
        #[tabled(rename = "x range")]
        x_range: String,
        #[tabled(rename = "f(0)")]
        f0: String,
        #[tabled(rename = "max |Δf|")]
        max_delta: String,
    }

    let rows: Vec<CurveRow> = evaluation
        .curves
        .iter()
        .map(|c| CurveRow {
            index: c.index,
            label: c.long_label.clone(),
            samples: c.x.len(),
            x_range: match (c.x.first(), c.x.last()) {
                (Some(first), Some(last)) => format!("{:.3} - {:.3}", first, last),
                _ => "-".to_string(),
            },
            f0: c
                .y
                .first()
                .map(|y| format!("{:.4}", y))
                .unwrap_or_else(|| "-".to_string()),
            max_delta: c
                .delta
                .as_ref()
                .map(|d| format!("{:.4}", d.iter().fold(0.0_f64, |m, v| m.max(v.abs()))))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_check_output_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curves.csv");
        assert!(check_output(&path, false).is_ok());
    }

    #[test]
    fn test_check_output_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curves.csv");
        std::fs::write(&path, "x").unwrap();

        let err = check_output(&path, false).unwrap_err();
        assert!(err.to_string().contains("--overwrite"));
        assert!(check_output(&path, true).is_ok());
    }
}
