//! # 形状因子图表生成
//!
//! 使用 `plotters` 库绘制 f(Q) 曲线，选中两条及以上时在下方附加 Δf(Q) 子图。
//!
//! ## 功能
//! - 图幅固定为 8 × 6 英寸，像素尺寸由 DPI 决定
//! - 根据扩展名选择输出：`.svg` 为矢量图，`.png/.jpg/.jpeg/.bmp` 为位图
//! - 与 CSV 导出使用同一份 `Evaluation`
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `formfactor/evaluator.rs` 的 Evaluation 结构
//! - 使用 `plotters` 渲染图表

use crate::error::{FormFactorError, Result};
use crate::formfactor::{AxisMode, Evaluation};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 图幅（英寸）
pub const FIGURE_INCHES: (f64, f64) = (8.0, 6.0);

/// 2θ 模式横轴范围（度）
const TWO_THETA_RANGE: (f64, f64) = (0.0, 165.0);

/// tab10 调色板
const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// 图像输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Bitmap,
    Svg,
}

impl ImageFormat {
    /// 从扩展名推断格式
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("svg") => Ok(ImageFormat::Svg),
            Some("png") | Some("jpg") | Some("jpeg") | Some("bmp") => Ok(ImageFormat::Bitmap),
            Some(other) => Err(FormFactorError::InvalidArgument(format!(
                "unsupported image format '.{}' (use png, jpg, bmp or svg)",
                other
            ))),
            None => Err(FormFactorError::InvalidArgument(format!(
                "cannot determine image format for '{}' (no extension)",
                path.display()
            ))),
        }
    }
}

/// 指定 DPI 下的像素尺寸
pub fn figure_size(dpi: f64) -> (u32, u32) {
    (
        (FIGURE_INCHES.0 * dpi).round().max(1.0) as u32,
        (FIGURE_INCHES.1 * dpi).round().max(1.0) as u32,
    )
}

/// 曲线颜色，按选择顺序循环
pub fn curve_color(position: usize) -> RGBColor {
    PALETTE[position % PALETTE.len()]
}

/// 生成形状因子图表
pub fn generate_plot(evaluation: &Evaluation, output_path: &Path, dpi: f64) -> Result<()> {
    let format = ImageFormat::from_path(output_path)?;
    let size = figure_size(dpi);

    match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(output_path, size).into_drawing_area();
            draw_figure(&root, evaluation)?;
            root.present().map_err(plot_error)?;
        }
        ImageFormat::Bitmap => {
            let root = BitMapBackend::new(output_path, size).into_drawing_area();
            draw_figure(&root, evaluation)?;
            root.present().map_err(plot_error)?;
        }
    }
    Ok(())
}

fn plot_error<E: std::fmt::Debug>(e: E) -> FormFactorError {
    FormFactorError::PlotError(format!("{:?}", e))
}

/// 绘制整幅图：f(Q) 在上，Δf(Q) 在下（高度比 3:1）
fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    evaluation: &Evaluation,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_error)?;

    let x_range = x_range(evaluation);

    if evaluation.has_delta() {
        let (_, height) = root.dim_in_pixel();
        let (upper, lower) = root.split_vertically((height * 3 / 4) as i32);
        draw_form_factors(&upper, evaluation, x_range, false)?;
        draw_deltas(&lower, evaluation, x_range)?;
    } else {
        draw_form_factors(root, evaluation, x_range, true)?;
    }

    Ok(())
}

/// 横轴范围
fn x_range(evaluation: &Evaluation) -> (f64, f64) {
    match evaluation.mode {
        AxisMode::TwoTheta => TWO_THETA_RANGE,
        AxisMode::Q => {
            let max = evaluation
                .curves
                .iter()
                .flat_map(|c| c.x.iter().copied())
                .fold(0.0_f64, f64::max);
            (0.0, if max > 0.0 { max } else { 1.0 })
        }
    }
}

/// 数据纵轴范围，上下各留 5%
fn y_range<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (-1.0, 1.0);
    }
    let span = max - min;
    if span < 1e-12 {
        (min - 1.0, max + 1.0)
    } else {
        (min - 0.05 * span, max + 0.05 * span)
    }
}

/// f(Q) 子图
fn draw_form_factors<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    evaluation: &Evaluation,
    x_range: (f64, f64),
    show_x_desc: bool,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (y_min, y_max) = y_range(evaluation.curves.iter().flat_map(|c| c.y.iter()));

    let mut chart = ChartBuilder::on(area)
        .caption("Atomic Form Factors", ("sans-serif", 24).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_min..y_max)
        .map_err(plot_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.y_desc("f(Q)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16));
    if show_x_desc {
        mesh.x_desc(evaluation.mode.axis_label());
    }
    mesh.draw().map_err(plot_error)?;

    for (position, curve) in evaluation.curves.iter().enumerate() {
        let color = curve_color(position);
        chart
            .draw_series(LineSeries::new(
                curve.x.iter().copied().zip(curve.y.iter().copied()),
                color.stroke_width(2),
            ))
            .map_err(plot_error)?
            .label(curve.long_label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 13))
        .draw()
        .map_err(plot_error)?;

    if evaluation.mode == AxisMode::TwoTheta {
        let wavelength_text = format!("λ = {:.6} Å", evaluation.wavelength);
        chart
            .draw_series(std::iter::once(Text::new(
                wavelength_text,
                (x_range.0 + 0.02 * (x_range.1 - x_range.0), y_min + 0.05 * (y_max - y_min)),
                ("sans-serif", 14).into_font().color(&BLACK),
            )))
            .map_err(plot_error)?;
    }

    Ok(())
}

/// Δf(Q) 子图
fn draw_deltas<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    evaluation: &Evaluation,
    x_range: (f64, f64),
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (y_min, y_max) = y_range(
        evaluation
            .curves
            .iter()
            .filter_map(|c| c.delta.as_ref())
            .flat_map(|d| d.iter()),
    );

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_min..y_max)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc(evaluation.mode.axis_label())
        .y_desc("Δf(Q)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_error)?;

    for (position, curve) in evaluation.curves.iter().enumerate() {
        if let Some(delta) = &curve.delta {
            chart
                .draw_series(LineSeries::new(
                    curve.x.iter().copied().zip(delta.iter().copied()),
                    curve_color(position).stroke_width(2),
                ))
                .map_err(plot_error)?;
        }
    }

    Ok(())
}
