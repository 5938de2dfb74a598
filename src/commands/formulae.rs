//! # formulae 命令实现
//!
//! 打印曲线计算所用的两个公式。

use crate::error::Result;
use crate::formfactor::evaluator::{ASIN_LIMIT, Q_MAX};
use crate::utils::output;

/// 执行 formulae 命令
pub fn execute() -> Result<()> {
    output::print_header("Form Factor Formulae");

    println!("(1) f(Q) = Σᵢ aᵢ · exp(-bᵢ · (Q/4π)²) + c");
    println!("    Sum of Gaussians built from the tabulated a and b values, shifted by c.");
    println!("    The number of terms follows the set size: (set - 1) / 2, usually 4 or 5.");
    println!();
    println!("(2) 2θ = 2 · arcsin(Qλ / 4π)");
    println!("    Relation between scattering vector Q, wavelength λ and scattering angle 2θ.");
    println!();
    output::print_separator();
    output::print_info(&format!(
        "Q is sampled on [0, {}] 1/Å; in 2θ mode only points with |Qλ/4π| < {} are kept.",
        Q_MAX, ASIN_LIMIT
    ));
    Ok(())
}
