//! # template 命令实现
//!
//! 写出示例数据库。
//!
//! ## 依赖关系
//! - 使用 `cli/template.rs` 定义的参数
//! - 使用 `parsers/template.rs`

use crate::cli::template::TemplateArgs;
use crate::error::{FormFactorError, Result};
use crate::parsers::template;
use crate::utils::output;

/// 执行 template 命令
pub fn execute(args: TemplateArgs) -> Result<()> {
    if args.output.exists() && !args.overwrite {
        return Err(FormFactorError::InvalidArgument(format!(
            "'{}' already exists (use --overwrite to replace it)",
            args.output.display()
        )));
    }

    template::to_file(&args.output)?;
    output::print_success(&format!(
        "Example database written to '{}'",
        args.output.display()
    ));
    Ok(())
}
