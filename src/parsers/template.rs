//! # 示例数据库生成
//!
//! 写出一个只含一行氢原子参数的数据库，作为输入格式的参考。
//!
//! ## 依赖关系
//! - 被 `commands/template.rs` 调用
//! - 使用 `csv` + `serde` 写入

use crate::error::{FormFactorError, Result};

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 模板数据行，字段顺序即列顺序
#[derive(Debug, Serialize)]
struct TemplateRow<'a> {
    source: &'a str,
    #[serde(rename = "set-type")]
    set_type: i64,
    element: &'a str,
    z: u32,
    #[serde(rename = "ox.")]
    ox: i32,
    a1: Option<f64>,
    b1: Option<f64>,
    a2: Option<f64>,
    b2: Option<f64>,
    a3: Option<f64>,
    b3: Option<f64>,
    a4: Option<f64>,
    b4: Option<f64>,
    a5: Option<f64>,
    b5: Option<f64>,
    c: f64,
    comment: &'a str,
}

/// International Tables 中 H 的 4 项参数
const EXAMPLE: TemplateRow<'static> = TemplateRow {
    source: "ITC",
    set_type: 9,
    element: "H",
    z: 1,
    ox: 0,
    a1: Some(0.489918),
    b1: Some(20.6593),
    a2: Some(0.262003),
    b2: Some(7.74039),
    a3: Some(0.196767),
    b3: Some(49.5519),
    a4: Some(0.049879),
    b4: Some(2.20159),
    a5: None,
    b5: None,
    c: 0.001305,
    comment: "This is an example",
};

/// 写出示例数据库到任意 writer
pub fn write_template<W: Write>(writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.serialize(&EXAMPLE)?;
    wtr.flush().map_err(|e| FormFactorError::FileWriteError {
        path: "<template>".to_string(),
        source: e,
    })?;
    Ok(())
}

/// 写出示例数据库文件
pub fn to_file(output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| FormFactorError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_template(file)
}
