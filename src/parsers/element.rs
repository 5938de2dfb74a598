//! # 元素字段解析
//!
//! `element` 列可能携带电荷与价电子标记：
//! - `Fe+3`, `Fe3+` → Fe, +3
//! - `O-2`, `O2-` → O, -2
//! - `Sival` → Si（价电子标记）
//!
//! 只要字段中出现 `+` 或 `-`，所有数字和符号都被剥离；数字拼接成电荷数，
//! 以最后出现的符号为准。没有数字时（如 `Cl-`）不给出电荷。
//!
//! ## 依赖关系
//! - 被 `parsers/database.rs` 使用
//! - 使用 `regex` 提取符号与数字

use regex::Regex;
use std::sync::LazyLock;

static CHARGE_PARTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[+-]|[0-9]+").unwrap());

const VALENCE_MARKER: &str = "val";

/// 解析后的元素字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementField {
    /// 元素符号
    pub symbol: String,
    /// 字段中携带的电荷（氧化态）
    pub charge: Option<i32>,
    /// 是否带有 "val" 标记
    pub valence: bool,
}

/// 解析 `element` 列
pub fn parse_element(raw: &str) -> ElementField {
    let (mut symbol, charge) = if raw.contains('+') || raw.contains('-') {
        split_charge(raw)
    } else {
        (raw.to_string(), None)
    };

    let valence = symbol.contains(VALENCE_MARKER);
    if valence {
        if let Some(pos) = symbol.find(VALENCE_MARKER) {
            symbol.truncate(pos);
        }
    }

    ElementField {
        symbol,
        charge,
        valence,
    }
}

/// 剥离符号与数字，返回 (元素部分, 电荷)
fn split_charge(raw: &str) -> (String, Option<i32>) {
    let mut sign = "+";
    let mut digits = String::new();
    for m in CHARGE_PARTS.find_iter(raw) {
        match m.as_str() {
            "+" | "-" => sign = m.as_str(),
            d => digits.push_str(d),
        }
    }

    let symbol = CHARGE_PARTS.replace_all(raw, "").into_owned();
    let charge = if digits.is_empty() {
        None
    } else {
        format!("{}{}", sign, digits).parse::<i32>().ok()
    };
    (symbol, charge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_symbol() {
        let e = parse_element("Fe");
        assert_eq!(e.symbol, "Fe");
        assert_eq!(e.charge, None);
        assert!(!e.valence);
    }

    #[test]
    fn test_charge_suffix() {
        let e = parse_element("Fe+3");
        assert_eq!(e.symbol, "Fe");
        assert_eq!(e.charge, Some(3));

        let e = parse_element("O-2");
        assert_eq!(e.symbol, "O");
        assert_eq!(e.charge, Some(-2));
    }

    #[test]
    fn test_charge_written_after_digits() {
        let e = parse_element("Fe2+");
        assert_eq!(e.symbol, "Fe");
        assert_eq!(e.charge, Some(2));

        let e = parse_element("Cl1-");
        assert_eq!(e.symbol, "Cl");
        assert_eq!(e.charge, Some(-1));
    }

    #[test]
    fn test_sign_without_digits_gives_no_charge() {
        let e = parse_element("Cl-");
        assert_eq!(e.symbol, "Cl");
        assert_eq!(e.charge, None);
    }

    #[test]
    fn test_digits_without_sign_are_kept() {
        // 没有符号时不剥离数字
        let e = parse_element("Fe3");
        assert_eq!(e.symbol, "Fe3");
        assert_eq!(e.charge, None);
    }

    #[test]
    fn test_valence_marker() {
        let e = parse_element("Sival");
        assert_eq!(e.symbol, "Si");
        assert!(e.valence);
        assert_eq!(e.charge, None);
    }

    #[test]
    fn test_valence_marker_with_charge() {
        let e = parse_element("Sival+4");
        assert_eq!(e.symbol, "Si");
        assert!(e.valence);
        assert_eq!(e.charge, Some(4));
    }
}
