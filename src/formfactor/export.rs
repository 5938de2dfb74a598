//! # 曲线数据导出
//!
//! 导出计算得到的曲线为 CSV。
//!
//! ## 格式
//! - 第一列：`2theta/[°]` 或 `Q/[1/Å]`，保留 3 位小数
//! - 之后每条曲线一列，列名为短标签，保留 4 位小数
//! - 只写出横坐标小于 180 的行
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `formfactor/evaluator.rs` 的 Evaluation 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{FormFactorError, Result};
use crate::formfactor::Evaluation;

use std::io::Write;
use std::path::Path;

/// 导出行的横坐标上限
pub const X_CLIP: f64 = 180.0;

/// 导出曲线为 CSV 文件
pub fn to_csv(evaluation: &Evaluation, output_path: &Path) -> Result<usize> {
    let file = std::fs::File::create(output_path).map_err(|e| FormFactorError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    write_csv(evaluation, file).map_err(|e| match e {
        FormFactorError::FileWriteError { source, .. } => FormFactorError::FileWriteError {
            path: output_path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// 写出曲线到任意 writer，返回数据行数
pub fn write_csv<W: Write>(evaluation: &Evaluation, writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![evaluation.mode.export_header().to_string()];
    header.extend(evaluation.curves.iter().map(|c| c.short_label.clone()));
    wtr.write_record(&header)?;

    let x = match evaluation.curves.first() {
        Some(curve) => &curve.x,
        None => return Ok(0),
    };

    let mut rows = 0;
    for (i, &xi) in x.iter().enumerate() {
        if xi >= X_CLIP {
            continue;
        }
        let mut row = vec![format!("{:.3}", xi)];
        row.extend(evaluation.curves.iter().map(|c| format!("{:.4}", c.y[i])));
        wtr.write_record(&row)?;
        rows += 1;
    }

    wtr.flush().map_err(|e| FormFactorError::FileWriteError {
        path: "<csv>".to_string(),
        source: e,
    })?;

    Ok(rows)
}
