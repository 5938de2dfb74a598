//! # 数据库列定义
//!
//! 必需列（大小写不敏感）：`source`, `set-type`, `element`, `ox.`, `c`,
//! 以及 `a1..a5`, `b1..b5`。可选列：`z`。
//!
//! 表头在加载时只解析一次，得到列名到列号的映射 `ColumnIndex`，
//! 之后每行按列号取值。
//!
//! ## 依赖关系
//! - 被 `parsers/database.rs` 使用
//! - 无外部模块依赖

/// 支持的最大高斯项数（set-type 11）
pub const MAX_PAIRS: usize = 5;

const FIXED_COLUMNS: [&str; 5] = ["source", "set-type", "element", "ox.", "c"];

/// 必需列名列表，按校验顺序
pub fn required_columns() -> Vec<String> {
    let mut columns: Vec<String> = FIXED_COLUMNS.iter().map(|s| s.to_string()).collect();
    for i in 1..=MAX_PAIRS {
        columns.push(format!("a{}", i));
        columns.push(format!("b{}", i));
    }
    columns
}

/// 列名 → 列号映射
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    pub source: usize,
    pub set_type: usize,
    pub element: usize,
    pub ox: usize,
    pub c: usize,
    pub a: [usize; MAX_PAIRS],
    pub b: [usize; MAX_PAIRS],
    pub z: Option<usize>,
}

impl ColumnIndex {
    /// 从已转为小写的表头构建映射
    ///
    /// 缺列时返回全部缺失列名
    pub fn from_header(header: &[String]) -> std::result::Result<Self, Vec<String>> {
        let position = |name: &str| header.iter().position(|h| h == name);

        let missing: Vec<String> = required_columns()
            .into_iter()
            .filter(|col| position(col).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let find = |name: &str| position(name).unwrap_or_default();
        let mut a = [0; MAX_PAIRS];
        let mut b = [0; MAX_PAIRS];
        for i in 0..MAX_PAIRS {
            a[i] = find(&format!("a{}", i + 1));
            b[i] = find(&format!("b{}", i + 1));
        }

        Ok(ColumnIndex {
            source: find("source"),
            set_type: find("set-type"),
            element: find("element"),
            ox: find("ox."),
            c: find("c"),
            a,
            b,
            z: position("z"),
        })
    }
}

/// 由参数集大小计算高斯项数：round((set - 1) / 2)，限制在 0..=MAX_PAIRS
///
/// 返回 (项数, 是否被截断)。取整方式为四舍六入五成双。
pub fn pair_count(set_size: i64) -> (usize, bool) {
    let raw = ((set_size as f64 - 1.0) / 2.0).round_ties_even();
    if raw < 0.0 {
        (0, true)
    } else if raw > MAX_PAIRS as f64 {
        (MAX_PAIRS, true)
    } else {
        (raw as usize, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(line: &str) -> Vec<String> {
        line.split(',').map(|s| s.trim().to_lowercase()).collect()
    }

    #[test]
    fn test_required_columns() {
        let cols = required_columns();
        assert_eq!(cols.len(), 15);
        assert_eq!(&cols[..5], &["source", "set-type", "element", "ox.", "c"]);
        assert!(cols.contains(&"a5".to_string()));
        assert!(cols.contains(&"b5".to_string()));
    }

    #[test]
    fn test_column_index_from_template_header() {
        let h = header("Source,Set-Type,Element,Z,Ox.,a1,b1,a2,b2,a3,b3,a4,b4,a5,b5,c,comment");
        let idx = ColumnIndex::from_header(&h).unwrap();
        assert_eq!(idx.source, 0);
        assert_eq!(idx.set_type, 1);
        assert_eq!(idx.element, 2);
        assert_eq!(idx.z, Some(3));
        assert_eq!(idx.ox, 4);
        assert_eq!(idx.a, [5, 7, 9, 11, 13]);
        assert_eq!(idx.b, [6, 8, 10, 12, 14]);
        assert_eq!(idx.c, 15);
    }

    #[test]
    fn test_column_index_reports_all_missing() {
        let h = header("source,set-type,element,ox.,a1,b1,a2,b2,a3,b3,a4,b4,a5");
        let missing = ColumnIndex::from_header(&h).unwrap_err();
        assert_eq!(missing, vec!["c".to_string(), "b5".to_string()]);
    }

    #[test]
    fn test_z_column_is_optional() {
        let h = header("source,set-type,element,ox.,a1,b1,a2,b2,a3,b3,a4,b4,a5,b5,c");
        let idx = ColumnIndex::from_header(&h).unwrap();
        assert_eq!(idx.z, None);
    }

    #[test]
    fn test_pair_count_standard_sets() {
        assert_eq!(pair_count(9), (4, false));
        assert_eq!(pair_count(11), (5, false));
        assert_eq!(pair_count(1), (0, false));
    }

    #[test]
    fn test_pair_count_is_not_the_historical_minus_one_variant() {
        // 旧版本使用 round((set-1)/2) - 1，set 9 只读到 3 项；这里必须是 4
        assert_ne!(pair_count(9).0, 3);
        assert_ne!(pair_count(11).0, 4);
    }

    #[test]
    fn test_pair_count_ties_to_even() {
        assert_eq!(pair_count(10), (4, false));
        assert_eq!(pair_count(8), (4, false));
        assert_eq!(pair_count(0), (0, false));
    }

    #[test]
    fn test_pair_count_clamped() {
        assert_eq!(pair_count(13), (MAX_PAIRS, true));
        assert_eq!(pair_count(-3), (0, true));
    }

    #[test]
    fn test_pair_count_extreme_set_sizes() {
        assert_eq!(pair_count(i64::MIN), (0, true));
        assert_eq!(pair_count(i64::MAX), (MAX_PAIRS, true));
    }
}
