//! # ffplot - 原子 X 射线形状因子绘图工具
//!
//! 读取形状因子参数数据库 (CSV)，计算 f(Q) 曲线并导出数据与图像。
//!
//! ## 子命令
//! - `template` - 写出示例数据库
//! - `list`     - 列出（筛选后的）数据库记录
//! - `plot`     - 计算曲线，导出 CSV 和 PNG/SVG
//! - `formulae` - 打印计算公式
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/    (数据库加载、规范化与筛选)
//!   │     ├── formfactor/ (曲线计算、导出与绘图)
//!   │     └── models/     (数据模型)
//!   ├── utils/      (终端输出)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod formfactor;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
