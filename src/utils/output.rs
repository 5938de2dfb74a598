//! # 终端输出工具
//!
//! 统一各子命令的状态行与标题样式。
//!
//! ## 依赖关系
//! - 被 `main.rs` 与 `commands/` 使用
//! - 使用 `colored` crate

use colored::Colorize;

const RULE_WIDTH: usize = 64;

/// 成功
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 错误，写到 stderr
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 单条记录的解析注记，如 `    #3 ITC Fe ox. miss.`
pub fn print_note(index: usize, label: &str, note: &str) {
    println!(
        "    {} {} {}",
        format!("#{}", index).dimmed(),
        label,
        note.yellow()
    );
}

/// 输出文件写出后的提示
pub fn print_saved(kind: &str, path: &std::path::Path, detail: &str) {
    println!(
        "{} {} {} {}",
        "[OK]".green().bold(),
        kind,
        "->".cyan(),
        format!("{} ({})", path.display(), detail)
    );
}

/// 标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(RULE_WIDTH);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}
