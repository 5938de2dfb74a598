//! # plot 子命令 CLI 定义
//!
//! 波长与 DPI 在这里完成校验，核心计算只接收合法数值。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use crate::cli::list::FilterArgs;
use crate::formfactor::{AxisMode, DEFAULT_WAVELENGTH};

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 横轴模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum PlotMode {
    /// Scattering vector Q in 1/Å
    Q,
    /// Scattering angle 2θ in degrees
    #[default]
    TwoTheta,
}

impl From<PlotMode> for AxisMode {
    fn from(mode: PlotMode) -> Self {
        match mode {
            PlotMode::Q => AxisMode::Q,
            PlotMode::TwoTheta => AxisMode::TwoTheta,
        }
    }
}

/// 预定义辐射源波长 (Å)
pub fn get_predefined_wavelength(name: &str) -> Option<f64> {
    match name.to_lowercase().as_str() {
        "mo-ka1" | "moka1" => Some(DEFAULT_WAVELENGTH),
        "mo-ka" | "moka" => Some(0.71073),
        "cu-ka1" | "cuka1" => Some(1.540598),
        "cu-ka" | "cuka" => Some(1.54184),
        "ag-ka1" | "agka1" => Some(0.559421),
        "co-ka1" | "coka1" => Some(1.788996),
        "fe-ka1" | "feka1" => Some(1.936042),
        "cr-ka1" | "crka1" => Some(2.289760),
        _ => None,
    }
}

/// 解析波长输入（辐射源名称或数值）
pub fn parse_wavelength(input: &str) -> Result<f64, String> {
    if let Some(wl) = get_predefined_wavelength(input) {
        return Ok(wl);
    }
    match input.trim().parse::<f64>() {
        Ok(wl) if wl.is_finite() && wl > 0.0 => Ok(wl),
        _ => Err(format!(
            "Invalid wavelength '{}'. Use a positive number in Å (e.g., 0.709319) or a name: mo-ka1, mo-ka, cu-ka1, cu-ka, ag-ka1, co-ka1, fe-ka1, cr-ka1",
            input
        )),
    }
}

/// 解析 DPI
pub fn parse_dpi(input: &str) -> Result<f64, String> {
    match input.trim().parse::<f64>() {
        Ok(dpi) if dpi.is_finite() && dpi > 0.0 => Ok(dpi),
        _ => Err(format!(
            "Invalid dpi '{}'. Only positive numbers are valid inputs",
            input
        )),
    }
}

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Path to the form-factor database (CSV)
    pub database: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// x axis of the plot
    #[arg(short, long, value_enum, default_value = "two-theta")]
    pub mode: PlotMode,

    /// Characteristic wavelength for 2θ: value in Å or a radiation line name (mo-ka1, cu-ka1, ...)
    #[arg(
        short,
        long,
        env = "FFPLOT_WAVELENGTH",
        default_value_t = DEFAULT_WAVELENGTH,
        value_parser = parse_wavelength
    )]
    pub wavelength: f64,

    /// Save plot data as CSV
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Save plot image (format from extension: png, jpg, bmp, svg)
    #[arg(short = 'o', long)]
    pub image: Option<PathBuf>,

    /// Image resolution in dots per inch
    #[arg(long, env = "FFPLOT_DPI", default_value = "100", value_parser = parse_dpi)]
    pub dpi: f64,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
