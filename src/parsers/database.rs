//! # 形状因子数据库解析器
//!
//! 读取逗号分隔的参数表并规范化为 `Record`。
//!
//! ## 格式说明
//! ```text
//! source,set-type,element,z,ox.,a1,b1,a2,b2,a3,b3,a4,b4,a5,b5,c,comment
//! ITC,9,H,1,0,0.489918,20.6593,0.262003,7.74039,0.196767,49.5519,0.049879,2.20159,,,0.001305,This is an example
//! ```
//! - 第一行包含 "source"（不区分大小写）的行为表头，其余非空行均为数据行
//! - 纯逗号分隔，不支持引号转义与跨行字段
//! - 表头缺列时整体失败；单个字段解析失败时取 0 并记录注释
//! - `set-type` 不是整数时整体失败（无法确定高斯项数）
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `parsers/schema.rs`, `parsers/element.rs`
//! - 使用 `models/` 的 Record, Database
//! - 使用 `csv` 库按行切分字段

use crate::error::{FormFactorError, Result};
use crate::models::{Annotation, Database, Record};
use crate::parsers::element::parse_element;
use crate::parsers::schema::{self, ColumnIndex};

use std::fs;
use std::path::Path;

/// 从文件加载数据库
pub fn load(path: &Path) -> Result<Database> {
    if !path.is_file() {
        return Err(FormFactorError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| FormFactorError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_database_content(
        &content,
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown"),
    )
}

/// 从字符串内容解析数据库
pub fn parse_database_content(content: &str, name: &str) -> Result<Database> {
    let content = content.trim_start_matches('\u{feff}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut header: Option<Vec<String>> = None;
    // (行号, 字段)
    let mut rows: Vec<(usize, Vec<String>)> = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        let fields: Vec<String> = record.iter().map(|f| f.to_string()).collect();

        // 仅跳过空白行；",,,," 这类行仍是数据行
        if fields.len() == 1 && fields[0].is_empty() {
            continue;
        }

        if header.is_none() && fields.join(",").to_lowercase().contains("source") {
            header = Some(fields.iter().map(|f| f.to_lowercase()).collect());
        } else {
            rows.push((line, fields));
        }
    }

    let header = header.unwrap_or_default();
    let columns = ColumnIndex::from_header(&header).map_err(|missing| {
        FormFactorError::MissingColumns {
            path: name.to_string(),
            missing,
        }
    })?;

    let mut normalizer = RowNormalizer::new(&columns);
    let records = rows
        .iter()
        .map(|(line, fields)| normalizer.normalize(fields, *line, name))
        .collect::<Result<Vec<_>>>()?;

    Ok(Database::new(name, columns.z.is_some(), records))
}

/// 行规范化器
///
/// 持有 "已提示过氧化态缺失" 状态：同一文件中只有第一条缺失会被注释。
struct RowNormalizer<'a> {
    columns: &'a ColumnIndex,
    ox_warned: bool,
}

impl<'a> RowNormalizer<'a> {
    fn new(columns: &'a ColumnIndex) -> Self {
        Self {
            columns,
            ox_warned: false,
        }
    }

    fn normalize(&mut self, fields: &[String], line: usize, name: &str) -> Result<Record> {
        let field = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");
        let cols = self.columns;
        let mut annotations = Vec::new();

        // 氧化态
        let mut oxidation_state = match field(cols.ox).parse::<i32>() {
            Ok(ox) => ox,
            Err(_) => {
                if !self.ox_warned {
                    self.ox_warned = true;
                    annotations.push(Annotation::MissingOxidation);
                }
                0
            }
        };

        // 元素（可能覆盖氧化态）
        let element = parse_element(field(cols.element));
        if element.valence {
            annotations.push(Annotation::Valence);
        }
        if let Some(charge) = element.charge {
            oxidation_state = charge;
        }

        let z = match cols.z {
            Some(i) => field(i).to_string(),
            None => "0".to_string(),
        };

        let raw_set = field(cols.set_type);
        let set_size = raw_set
            .parse::<i64>()
            .map_err(|_| FormFactorError::ParseError {
                path: name.to_string(),
                line,
                reason: format!("set-type '{}' is not an integer", raw_set),
            })?;

        let (pairs, clamped) = schema::pair_count(set_size);
        if clamped {
            annotations.push(Annotation::SetTypeClamped(set_size));
        }

        let mut a = Vec::with_capacity(pairs);
        let mut b = Vec::with_capacity(pairs);
        for j in 0..pairs {
            a.push(parse_coefficient(
                field(cols.a[j]),
                || Annotation::MissingCoefficient(format!("a{}", j + 1)),
                &mut annotations,
            ));
            b.push(parse_coefficient(
                field(cols.b[j]),
                || Annotation::MissingCoefficient(format!("b{}", j + 1)),
                &mut annotations,
            ));
        }

        let c = parse_coefficient(field(cols.c), || Annotation::MissingShift, &mut annotations);

        Ok(Record {
            source: field(cols.source).to_string(),
            element: element.symbol,
            oxidation_state,
            z,
            set_size,
            a,
            b,
            c,
            annotations,
        })
    }
}

/// 解析浮点系数，失败时取 0 并记录注释
fn parse_coefficient(
    raw: &str,
    annotation: impl FnOnce() -> Annotation,
    annotations: &mut Vec<Annotation>,
) -> f64 {
    raw.parse::<f64>().unwrap_or_else(|_| {
        annotations.push(annotation());
        0.0
    })
}
