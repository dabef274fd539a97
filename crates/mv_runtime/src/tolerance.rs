// crates/mv_runtime/src/tolerance.rs

//! 泛型容差配置
//!
//! 逐面界面捕捉计算中用于避免除零的阈值。

use crate::scalar::RuntimeScalar;

/// 数值容差配置（泛型化）
#[derive(Debug, Clone, Copy)]
pub struct Tolerance<S: RuntimeScalar> {
    /// 归一化变量分母阈值
    ///
    /// |φ_A - φ_U| 低于此值时按完全迎风处理。
    pub nvd_denominator: S,
    /// 最小 Courant 数
    ///
    /// 低于此值时 Hyper-C 候选值直接取 1。
    pub courant_min: S,
    /// 中心差分权重退化阈值
    pub weight_min: S,
}

impl<S: RuntimeScalar> Tolerance<S> {
    /// 分母是否退化
    #[inline]
    pub fn is_degenerate(&self, denominator: S) -> bool {
        denominator.abs() < self.nvd_denominator
    }
}

impl Default for Tolerance<f32> {
    fn default() -> Self {
        Self {
            nvd_denominator: 1e-6,
            courant_min: 1e-6,
            weight_min: 1e-6,
        }
    }
}

impl Default for Tolerance<f64> {
    fn default() -> Self {
        Self {
            nvd_denominator: 1e-12,
            courant_min: 1e-12,
            weight_min: 1e-12,
        }
    }
}
