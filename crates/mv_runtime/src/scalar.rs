// crates/mv_runtime/src/scalar.rs

//! RuntimeScalar - 密封的标量类型抽象
//!
//! 界面捕捉格式的所有逐面计算都以 `S: RuntimeScalar` 为泛型边界，
//! 在 f32 和 f64 之间零成本切换。
//!
//! ```rust
//! use mv_runtime::RuntimeScalar;
//!
//! fn upwind_weight<S: RuntimeScalar>(flux: S) -> S {
//!     if flux >= S::ZERO { S::ONE } else { S::ZERO }
//! }
//! assert_eq!(upwind_weight(-1.0f64), 0.0);
//! ```

use std::fmt::{Debug, Display};
use std::iter::Sum;

use bytemuck::Pod;
use num_traits::{Float, FromPrimitive, NumAssign};

/// 密封模块，禁止外部实现
mod private {
    /// 密封 trait
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// 运行时标量类型（密封，仅 f32/f64 可实现）
///
/// - `f32`: 内存占用减半，适合大规模网格
/// - `f64`: 默认精度，适合验证算例
pub trait RuntimeScalar:
    private::Sealed
    + Pod
    + Float
    + FromPrimitive
    + NumAssign
    + Debug
    + Display
    + Send
    + Sync
    + Sum
    + Default
    + 'static
{
    /// 零值
    const ZERO: Self;
    /// 一
    const ONE: Self;
    /// 二
    const TWO: Self;
    /// 最小正值
    const MIN_POSITIVE: Self;

    /// 从配置层的 f64 转换
    ///
    /// f64 → f32 超出范围时饱和到 ±MAX。
    #[inline]
    fn from_config(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(|| {
            if value.is_sign_negative() {
                Self::min_value()
            } else {
                Self::max_value()
            }
        })
    }

    /// 带阈值的安全除法
    ///
    /// 除数绝对值小于 `eps` 时返回 `fallback`
    #[inline]
    fn safe_div_eps(self, rhs: Self, eps: Self, fallback: Self) -> Self {
        if rhs.abs() < eps {
            fallback
        } else {
            self / rhs
        }
    }

    /// 限制在范围内
    ///
    /// NaN 被映射到下界，保证结果始终有限。
    #[inline]
    fn clamp_value(self, min: Self, max: Self) -> Self {
        if self.is_nan() || self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    /// 是否严格位于开区间 (0, 1) 内
    #[inline]
    fn in_open_unit(self) -> bool {
        self > Self::ZERO && self < Self::ONE
    }
}

impl RuntimeScalar for f32 {
    const ZERO: f32 = 0.0;
    const ONE: f32 = 1.0;
    const TWO: f32 = 2.0;
    const MIN_POSITIVE: f32 = f32::MIN_POSITIVE;
}

impl RuntimeScalar for f64 {
    const ZERO: f64 = 0.0;
    const ONE: f64 = 1.0;
    const TWO: f64 = 2.0;
    const MIN_POSITIVE: f64 = f64::MIN_POSITIVE;
}
