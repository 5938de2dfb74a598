//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `template`: 生成示例数据库
//! - `list`: 加载、筛选并列出记录
//! - `plot`: 计算选中记录的形状因子曲线并导出
//! - `formulae`: 打印所用公式
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: template, list, plot

pub mod list;
pub mod plot;
pub mod template;

use clap::{Parser, Subcommand};

/// ffplot - 原子 X 射线形状因子绘图工具
#[derive(Parser)]
#[command(name = "ffplot")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Load, filter and plot tabulated atomic X-ray form factors", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Write an example form-factor database
    Template(template::TemplateArgs),

    /// Load a database and list (filtered) records
    List(list::ListArgs),

    /// Evaluate selected records and export plot data and/or image
    Plot(plot::PlotArgs),

    /// Print the formulae used for f(Q) and the Q → 2θ transform
    Formulae,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plot_command() {
        let cli = Cli::try_parse_from([
            "ffplot",
            "plot",
            "db.csv",
            "--index",
            "0,2",
            "--mode",
            "q",
            "--data",
            "out.csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Plot(args) => {
                assert_eq!(args.filter.index.as_deref(), Some("0,2"));
                assert_eq!(args.mode, plot::PlotMode::Q);
                assert!(args.image.is_none());
            }
            _ => panic!("expected plot command"),
        }
    }

    #[test]
    fn test_non_numeric_wavelength_rejected() {
        let result = Cli::try_parse_from([
            "ffplot",
            "plot",
            "db.csv",
            "--index",
            "0",
            "--wavelength",
            "abc",
        ]);
        assert!(result.is_err());
    }
}
