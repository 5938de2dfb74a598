//! # 形状因子曲线计算
//!
//! 对选中的记录在固定 Q 网格上计算 f(Q)，可选换算到 2θ。
//!
//! ## 算法概述
//! 1. Q 网格：[0, 25] 1/Å 等距取点，Q 模式 251 点，2θ 模式 1001 点
//!    （2θ 换算是非线性的，点太少曲线会出现折线感）
//! 2. f(Q) = Σⱼ aⱼ exp(-bⱼ (Q/4π)²) + c
//! 3. 2θ 模式：s = Qλ/4π，只保留 |s| < 0.99 的点，2θ = 2 asin(s)（度）
//! 4. 选中两条及以上时，计算相对第一条的差值 Δf
//!
//! 保留与否只取决于共享网格和波长，因此所有曲线的采样点位置一致。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `models/` 的 Database, Record
//! - 使用 `rayon` 并行计算各条曲线

use crate::error::{FormFactorError, Result};
use crate::models::{Database, Record};

use rayon::prelude::*;
use std::f64::consts::PI;

/// 默认波长 Mo Kα1（Å）
pub const DEFAULT_WAVELENGTH: f64 = 0.709319;

/// Q 网格上限（1/Å）
pub const Q_MAX: f64 = 25.0;

/// asin 参数上限
pub const ASIN_LIMIT: f64 = 0.99;

/// 横轴模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// 散射矢量 Q（1/Å）
    Q,
    /// 散射角 2θ（度）
    TwoTheta,
}

impl AxisMode {
    /// Q 网格点数
    pub fn grid_points(&self) -> usize {
        match self {
            AxisMode::Q => 251,
            AxisMode::TwoTheta => 1001,
        }
    }

    /// 图表横轴说明
    pub fn axis_label(&self) -> &'static str {
        match self {
            AxisMode::Q => "Q [1/Å]",
            AxisMode::TwoTheta => "2θ [°]",
        }
    }

    /// 导出 CSV 第一列列名
    pub fn export_header(&self) -> &'static str {
        match self {
            AxisMode::Q => "Q/[1/Å]",
            AxisMode::TwoTheta => "2theta/[°]",
        }
    }
}

impl std::fmt::Display for AxisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisMode::Q => write!(f, "Q"),
            AxisMode::TwoTheta => write!(f, "2θ"),
        }
    }
}

/// 单条记录的采样曲线
#[derive(Debug, Clone)]
pub struct Curve {
    /// 记录索引
    pub index: usize,
    /// 图例标签
    pub long_label: String,
    /// 导出列名
    pub short_label: String,
    /// 横坐标（Q 或 2θ）
    pub x: Vec<f64>,
    /// f(Q)
    pub y: Vec<f64>,
    /// 相对第一条曲线的差值，仅在选中两条及以上时存在
    pub delta: Option<Vec<f64>>,
}

/// 一次计算的结果
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub mode: AxisMode,
    /// 使用的波长（Å），仅 2θ 模式有意义
    pub wavelength: f64,
    /// 按选择顺序排列的曲线
    pub curves: Vec<Curve>,
}

impl Evaluation {
    /// 是否带有差值曲线
    pub fn has_delta(&self) -> bool {
        self.curves.len() > 1
    }
}

/// 形状因子计算器
pub struct FormFactorEvaluator {
    mode: AxisMode,
    /// X 射线波长（Å）
    wavelength: f64,
}

impl FormFactorEvaluator {
    /// 创建新的计算器
    pub fn new(mode: AxisMode, wavelength: f64) -> Self {
        Self { mode, wavelength }
    }

    /// 计算选中记录的曲线
    pub fn evaluate(&self, db: &Database, selection: &[usize]) -> Result<Evaluation> {
        if self.mode == AxisMode::TwoTheta && !(self.wavelength.is_finite() && self.wavelength > 0.0)
        {
            return Err(FormFactorError::InvalidArgument(format!(
                "wavelength must be a positive number, got {}",
                self.wavelength
            )));
        }

        let selected = resolve_selection(db, selection)?;
        let grid = q_grid(self.mode);

        let mut curves: Vec<Curve> = selected
            .par_iter()
            .map(|&(index, record)| self.sample(index, record, &grid))
            .collect();

        if curves.len() > 1 {
            let reference = curves[0].y.clone();
            for curve in &mut curves {
                curve.delta = Some(
                    curve
                        .y
                        .iter()
                        .zip(reference.iter())
                        .map(|(y, y0)| y - y0)
                        .collect(),
                );
            }
        }

        Ok(Evaluation {
            mode: self.mode,
            wavelength: self.wavelength,
            curves,
        })
    }

    /// 对单条记录采样
    fn sample(&self, index: usize, record: &Record, grid: &[f64]) -> Curve {
        let mut x = Vec::with_capacity(grid.len());
        let mut y = Vec::with_capacity(grid.len());

        for &q in grid {
            let position = match self.mode {
                AxisMode::Q => Some(q),
                AxisMode::TwoTheta => q_to_two_theta(q, self.wavelength),
            };
            if let Some(position) = position {
                x.push(position);
                y.push(record.form_factor(q));
            }
        }

        Curve {
            index,
            long_label: record.long_label(index),
            short_label: record.short_label(index),
            x,
            y,
            delta: None,
        }
    }
}

/// 计算入口
pub fn evaluate(
    db: &Database,
    selection: &[usize],
    mode: AxisMode,
    wavelength: f64,
) -> Result<Evaluation> {
    FormFactorEvaluator::new(mode, wavelength).evaluate(db, selection)
}

/// 校验选择：非空、无重复、0 <= i < len
fn resolve_selection<'a>(db: &'a Database, selection: &[usize]) -> Result<Vec<(usize, &'a Record)>> {
    if selection.is_empty() {
        return Err(FormFactorError::InvalidSelection(
            "nothing selected".to_string(),
        ));
    }

    let mut selected: Vec<(usize, &Record)> = Vec::with_capacity(selection.len());
    for &index in selection {
        if selected.iter().any(|&(i, _)| i == index) {
            return Err(FormFactorError::InvalidSelection(format!(
                "index {} selected more than once",
                index
            )));
        }
        selected.push((index, db.get(index)?));
    }
    Ok(selected)
}

/// 模式对应的 Q 网格
pub fn q_grid(mode: AxisMode) -> Vec<f64> {
    let n = mode.grid_points();
    (0..n)
        .map(|i| Q_MAX * i as f64 / (n - 1) as f64)
        .collect()
}

/// Q → 2θ（度），超出 asin 有效范围时返回 None
pub fn q_to_two_theta(q: f64, wavelength: f64) -> Option<f64> {
    let s = q * wavelength / (4.0 * PI);
    if s.abs() < ASIN_LIMIT {
        Some(s.asin() * 360.0 / PI)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(element: &str, a: Vec<f64>, b: Vec<f64>, c: f64) -> Record {
        Record {
            source: "ITC".to_string(),
            element: element.to_string(),
            oxidation_state: 0,
            z: "0".to_string(),
            set_size: 2 * a.len() as i64 + 1,
            a,
            b,
            c,
            annotations: Vec::new(),
        }
    }

    fn sample_db() -> Database {
        Database::new(
            "sample.csv",
            false,
            vec![
                rec("X", vec![1.0], vec![0.0], 0.0),
                rec(
                    "H",
                    vec![0.489918, 0.262003, 0.196767, 0.049879],
                    vec![20.6593, 7.74039, 49.5519, 2.20159],
                    0.001305,
                ),
                rec(
                    "O",
                    vec![3.0485, 2.2868, 1.5463, 0.8670],
                    vec![13.2771, 5.7011, 0.3239, 32.9089],
                    0.2508,
                ),
            ],
        )
    }

    #[test]
    fn test_grid_sizes() {
        let q = q_grid(AxisMode::Q);
        assert_eq!(q.len(), 251);
        assert_eq!(q[0], 0.0);
        assert!((q[250] - 25.0).abs() < 1e-12);
        assert!((q[1] - 0.1).abs() < 1e-12);

        let t = q_grid(AxisMode::TwoTheta);
        assert_eq!(t.len(), 1001);
        assert!((t[1] - 0.025).abs() < 1e-12);
    }

    #[test]
    fn test_constant_gaussian_is_one_everywhere() {
        let db = sample_db();
        let eval = evaluate(&db, &[0], AxisMode::Q, DEFAULT_WAVELENGTH).unwrap();
        let curve = &eval.curves[0];
        assert_eq!(curve.x.len(), 251);
        assert!(curve.y.iter().all(|y| (y - 1.0).abs() < 1e-12));
        assert!(curve.delta.is_none());
    }

    #[test]
    fn test_q_mode_keeps_every_point() {
        let db = sample_db();
        let eval = evaluate(&db, &[1], AxisMode::Q, DEFAULT_WAVELENGTH).unwrap();
        let curve = &eval.curves[0];
        assert_eq!(curve.x, q_grid(AxisMode::Q));
        // f(0) = Σa + c
        assert!((curve.y[0] - 0.999872).abs() < 1e-9);
    }

    #[test]
    fn test_two_theta_domain_guard() {
        let db = sample_db();
        let eval = evaluate(&db, &[1], AxisMode::TwoTheta, DEFAULT_WAVELENGTH).unwrap();
        let curve = &eval.curves[0];

        let grid = q_grid(AxisMode::TwoTheta);
        let limit_q = ASIN_LIMIT * 4.0 * PI / DEFAULT_WAVELENGTH;
        let kept: Vec<f64> = grid.iter().copied().filter(|&q| q < limit_q).collect();

        assert!(kept.len() < grid.len());
        assert_eq!(curve.x.len(), kept.len());
        assert_eq!(curve.y.len(), kept.len());

        // 保留的最大 Q 严格小于触发限制的 Q
        let max_kept = *kept.last().unwrap();
        assert!(max_kept * DEFAULT_WAVELENGTH / (4.0 * PI) < ASIN_LIMIT);
        let first_dropped = grid[kept.len()];
        assert!(first_dropped * DEFAULT_WAVELENGTH / (4.0 * PI) >= ASIN_LIMIT);

        // 2θ 单调递增且小于 2·asin(0.99)
        assert!(curve.x.windows(2).all(|w| w[0] < w[1]));
        let max_angle = ASIN_LIMIT.asin().to_degrees() * 2.0;
        assert!(curve.x.iter().all(|&x| x < max_angle));
    }

    #[test]
    fn test_two_theta_transform_value() {
        // s = 0.5 → 2θ = 60°
        let q = 0.5 * 4.0 * PI / DEFAULT_WAVELENGTH;
        let two_theta = q_to_two_theta(q, DEFAULT_WAVELENGTH).unwrap();
        assert!((two_theta - 60.0).abs() < 1e-9);
        assert_eq!(q_to_two_theta(0.0, DEFAULT_WAVELENGTH), Some(0.0));
        assert!(q_to_two_theta(25.0, DEFAULT_WAVELENGTH).is_none());
    }

    #[test]
    fn test_delta_against_first_selection() {
        let db = sample_db();
        let eval = evaluate(&db, &[2, 1], AxisMode::TwoTheta, DEFAULT_WAVELENGTH).unwrap();
        assert!(eval.has_delta());

        let first = &eval.curves[0];
        let second = &eval.curves[1];
        assert_eq!(first.index, 2);
        assert_eq!(second.index, 1);
        assert_eq!(first.x, second.x);

        let d0 = first.delta.as_ref().unwrap();
        assert!(d0.iter().all(|d| *d == 0.0));

        let d1 = second.delta.as_ref().unwrap();
        assert_eq!(d1.len(), second.y.len());
        for i in 0..d1.len() {
            assert!((d1[i] - (second.y[i] - first.y[i])).abs() < 1e-12);
        }
    }

    #[test]
    fn test_selection_order_preserved() {
        let db = sample_db();
        let eval = evaluate(&db, &[2, 0, 1], AxisMode::Q, DEFAULT_WAVELENGTH).unwrap();
        let order: Vec<usize> = eval.curves.iter().map(|c| c.index).collect();
        assert_eq!(order, vec![2, 0, 1]);
        assert_eq!(eval.curves[1].long_label, "item 0 from ITC: X, parameters: 3");
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let db = sample_db();
        let err = evaluate(&db, &[0, 3], AxisMode::Q, DEFAULT_WAVELENGTH).unwrap_err();
        assert!(matches!(
            err,
            FormFactorError::IndexOutOfRange { index: 3, count: 3 }
        ));
    }

    #[test]
    fn test_empty_and_duplicate_selection_rejected() {
        let db = sample_db();
        assert!(matches!(
            evaluate(&db, &[], AxisMode::Q, DEFAULT_WAVELENGTH).unwrap_err(),
            FormFactorError::InvalidSelection(_)
        ));
        assert!(matches!(
            evaluate(&db, &[1, 1], AxisMode::Q, DEFAULT_WAVELENGTH).unwrap_err(),
            FormFactorError::InvalidSelection(_)
        ));
    }

    #[test]
    fn test_invalid_wavelength_only_matters_for_two_theta() {
        let db = sample_db();
        assert!(evaluate(&db, &[0], AxisMode::TwoTheta, 0.0).is_err());
        assert!(evaluate(&db, &[0], AxisMode::TwoTheta, f64::NAN).is_err());
        assert!(evaluate(&db, &[0], AxisMode::Q, 0.0).is_ok());
    }
}
