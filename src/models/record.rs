//! # 形状因子记录数据模型
//!
//! 数据库中每一行数据对应一条 `Record`。
//!
//! ## 公式
//! f(Q) = Σⱼ aⱼ exp(-bⱼ (Q/4π)²) + c
//!
//! ## 依赖关系
//! - 被 `parsers/database.rs` 构造
//! - 被 `formfactor/` 与 `commands/` 使用
//! - 无外部模块依赖

use std::f64::consts::PI;
use std::fmt;

/// 单个字段回退到默认值时留下的说明
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// `ox.` 列无法解析（每个文件只记录第一次）
    MissingOxidation,
    /// 元素带有 "val" 价电子标记
    Valence,
    /// 某个 a/b 系数无法解析，保存列名
    MissingCoefficient(String),
    /// c 无法解析
    MissingShift,
    /// set-type 超出支持的高斯项数，保存原始值
    SetTypeClamped(i64),
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::MissingOxidation => write!(f, "ox. miss."),
            Annotation::Valence => write!(f, "valence"),
            Annotation::MissingCoefficient(column) => write!(f, "{}", column),
            Annotation::MissingShift => write!(f, "c"),
            Annotation::SetTypeClamped(set) => write!(f, "set {} clamped", set),
        }
    }
}

/// 一条原子形状因子参数记录
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 数据来源（`source` 列原文）
    pub source: String,
    /// 元素符号（去掉电荷与 "val" 标记）
    pub element: String,
    /// 氧化态
    pub oxidation_state: i32,
    /// `z` 列原文，没有该列时为 "0"
    pub z: String,
    /// 拟合参数集大小（`set-type` 列）
    pub set_size: i64,
    /// 高斯项系数 a
    pub a: Vec<f64>,
    /// 高斯项系数 b
    pub b: Vec<f64>,
    /// 常数项 c
    pub c: f64,
    /// 解析回退说明
    pub annotations: Vec<Annotation>,
}

impl Record {
    /// 高斯项数
    pub fn pair_count(&self) -> usize {
        self.a.len()
    }

    /// 是否带有价电子标记
    pub fn is_valence(&self) -> bool {
        self.annotations.contains(&Annotation::Valence)
    }

    /// 计算 f(Q)，Q 单位 1/Å
    pub fn form_factor(&self, q: f64) -> f64 {
        let s2 = (q / (4.0 * PI)).powi(2);
        let mut f = self.c;
        for (a, b) in self.a.iter().zip(self.b.iter()) {
            f += a * (-b * s2).exp();
        }
        f
    }

    /// 注释拼接为一行文本
    pub fn annotation_text(&self) -> String {
        self.annotations
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 带符号的氧化态文本，0 时为空
    fn signed_oxidation(&self) -> String {
        if self.oxidation_state == 0 {
            String::new()
        } else {
            format!("{:+}", self.oxidation_state)
        }
    }

    /// 图例用的长标签
    ///
    /// 例如 `item 3 from ITC: Fe+3, parameters: 9`
    pub fn long_label(&self, index: usize) -> String {
        let mut label = format!(
            "item {} from {}: {}{}",
            index,
            self.source,
            self.element,
            self.signed_oxidation()
        );
        if self.is_valence() {
            label.push_str(" valence");
        }
        label.push_str(&format!(", parameters: {}", self.set_size));
        label
    }

    /// 导出列名用的短标签
    ///
    /// 例如 `3_ITC_Fe+3_9`、`5_ITC_Si_val_9`
    ///
    /// 元素段之后总有一个下划线，中性原子也一样：得到 `0_ITC_H_9`，
    /// 而不是旧导出文件中的 `0_ITC_H9`。
    pub fn short_label(&self, index: usize) -> String {
        let mut label = format!(
            "{}_{}_{}{}_",
            index,
            self.source.replace(' ', "_"),
            self.element,
            self.signed_oxidation()
        );
        if self.is_valence() {
            label.push_str("val_");
        }
        label.push_str(&self.set_size.to_string());
        label
    }
}
