//! 参考格式
//!
//! - [`UpwindGeneric`]: L = 0，一阶迎风，无条件有界，可绑定通量场
//! - [`LinearGeneric`]: L = 1，中心差分，不保证有界

use std::marker::PhantomData;

use mv_runtime::RuntimeScalar;

use super::driver::FaceSweep;
use super::traits::LimitedScheme;
use crate::mesh::FaceStencil;

/// 迎风格式
#[derive(Debug, Clone)]
pub struct UpwindGeneric<S: RuntimeScalar> {
    flux_name: Option<String>,
    sweep: FaceSweep,
    _marker: PhantomData<S>,
}

/// f64 特化版本
pub type Upwind = UpwindGeneric<f64>;

impl<S: RuntimeScalar> UpwindGeneric<S> {
    /// 创建迎风格式
    pub fn new() -> Self {
        Self {
            flux_name: None,
            sweep: FaceSweep::default(),
            _marker: PhantomData,
        }
    }

    /// 绑定通量场名
    pub fn with_flux(mut self, flux_name: impl Into<String>) -> Self {
        self.flux_name = Some(flux_name.into());
        self
    }

    /// 替换遍历配置
    pub fn with_sweep(mut self, sweep: FaceSweep) -> Self {
        self.sweep = sweep;
        self
    }
}

impl<S: RuntimeScalar> Default for UpwindGeneric<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RuntimeScalar> LimitedScheme<S> for UpwindGeneric<S> {
    fn name(&self) -> &'static str {
        "upwind"
    }

    #[inline]
    fn limiter(&self, _stencil: &FaceStencil<S>) -> S {
        S::ZERO
    }

    fn sweep(&self) -> FaceSweep {
        self.sweep
    }

    fn bound_flux(&self) -> Option<&str> {
        self.flux_name.as_deref()
    }
}

/// 线性（中心差分）格式
#[derive(Debug, Clone, Copy)]
pub struct LinearGeneric<S: RuntimeScalar> {
    sweep: FaceSweep,
    _marker: PhantomData<S>,
}

/// f64 特化版本
pub type Linear = LinearGeneric<f64>;

impl<S: RuntimeScalar> LinearGeneric<S> {
    /// 创建线性格式
    pub fn new() -> Self {
        Self {
            sweep: FaceSweep::default(),
            _marker: PhantomData,
        }
    }

    /// 替换遍历配置
    pub fn with_sweep(mut self, sweep: FaceSweep) -> Self {
        self.sweep = sweep;
        self
    }
}

impl<S: RuntimeScalar> Default for LinearGeneric<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RuntimeScalar> LimitedScheme<S> for LinearGeneric<S> {
    fn name(&self) -> &'static str {
        "linear"
    }

    #[inline]
    fn limiter(&self, _stencil: &FaceStencil<S>) -> S {
        S::ONE
    }

    fn sweep(&self) -> FaceSweep {
        self.sweep
    }
}
