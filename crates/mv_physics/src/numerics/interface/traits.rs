//! 面插值格式 trait 定义
//!
//! **层级**: Layer 3 - Engine Layer
//!
//! - [`LimitedScheme`]: 逐面限制器，权重按限制格式约定由限制器导出
//! - [`SurfaceInterpolationScheme`]: 整场接口，运行时多态使用
//!
//! 所有 [`LimitedScheme`] 自动实现 [`SurfaceInterpolationScheme`]。
//! 格式绑定了通量场时，整场计算前检查提供方的通量是同一个面场。
//!
//! # 限制格式约定
//!
//! ```text
//! w_f = L · w_cd + (1 - L) · w_upwind
//! φ_f = w_f · φ_owner + (1 - w_f) · φ_neighbour
//! ```

use std::fmt::Debug;

use mv_runtime::{RuntimeError, RuntimeResult, RuntimeScalar};

use super::driver::FaceSweep;
use super::nvd::FlowDirection;
use crate::fields::{CellFieldView, SurfaceScalarField};
use crate::mesh::{FaceDataProvider, FaceStencil};

/// 由限制器、中心差分权重和通量方向计算插值权重，截断到 [0, 1]
#[inline]
pub fn limited_weight<S: RuntimeScalar>(limiter: S, cd_weight: S, flux: S) -> S {
    let upwind = FlowDirection::from_flux(flux).upwind_weight::<S>();
    (limiter * cd_weight + (S::ONE - limiter) * upwind).clamp_value(S::ZERO, S::ONE)
}

/// 逐面限制格式
pub trait LimitedScheme<S: RuntimeScalar>: Debug + Send + Sync {
    /// 格式名称
    fn name(&self) -> &'static str;

    /// 单个面的限制器
    fn limiter(&self, stencil: &FaceStencil<S>) -> S;

    /// 单个面的插值权重
    fn weight(&self, stencil: &FaceStencil<S>) -> S {
        limited_weight(self.limiter(stencil), stencil.cd_weight, stencil.flux)
    }

    /// 整场遍历配置
    fn sweep(&self) -> FaceSweep {
        FaceSweep::default()
    }

    /// 绑定的通量场名（不依赖通量的格式为 None）
    fn bound_flux(&self) -> Option<&str> {
        None
    }
}

/// 面插值格式（整场接口）
///
/// 每次调用都是对当前场快照的一次无状态遍历，返回新的面场。
pub trait SurfaceInterpolationScheme<S: RuntimeScalar>: Debug + Send + Sync {
    /// 格式类型名
    fn type_name(&self) -> &'static str;

    /// 整场遍历配置
    fn sweep_config(&self) -> FaceSweep;

    /// 绑定的通量场名
    fn flux_binding(&self) -> Option<&str>;

    /// 所有面的限制器
    ///
    /// 物理边界面取 1。提供方通量与绑定的通量场不一致时返回错误。
    fn limiter_field(
        &self,
        mesh: &dyn FaceDataProvider<S>,
        field: &CellFieldView<'_, S>,
    ) -> RuntimeResult<SurfaceScalarField<S>>;

    /// 所有面的插值权重
    ///
    /// 物理边界面取该面的中心差分权重。通量检查同 `limiter_field`。
    fn weight_field(
        &self,
        mesh: &dyn FaceDataProvider<S>,
        field: &CellFieldView<'_, S>,
    ) -> RuntimeResult<SurfaceScalarField<S>>;
}

impl<S: RuntimeScalar, T: LimitedScheme<S>> SurfaceInterpolationScheme<S> for T {
    fn type_name(&self) -> &'static str {
        LimitedScheme::name(self)
    }

    fn sweep_config(&self) -> FaceSweep {
        LimitedScheme::sweep(self)
    }

    fn flux_binding(&self) -> Option<&str> {
        self.bound_flux()
    }

    fn limiter_field(
        &self,
        mesh: &dyn FaceDataProvider<S>,
        field: &CellFieldView<'_, S>,
    ) -> RuntimeResult<SurfaceScalarField<S>> {
        RuntimeError::check_flux(self.bound_flux(), mesh.flux_name())?;
        let name = format!("{}Limiter", LimitedScheme::name(self));
        LimitedScheme::sweep(self)
            .evaluate(&name, mesh, field, |stencil| self.limiter(stencil), |_| S::ONE)
    }

    fn weight_field(
        &self,
        mesh: &dyn FaceDataProvider<S>,
        field: &CellFieldView<'_, S>,
    ) -> RuntimeResult<SurfaceScalarField<S>> {
        RuntimeError::check_flux(self.bound_flux(), mesh.flux_name())?;
        let name = format!("{}Weights", LimitedScheme::name(self));
        LimitedScheme::sweep(self).evaluate(
            &name,
            mesh,
            field,
            |stencil| self.weight(stencil),
            |face| mesh.cd_weight(face).clamp_value(S::ZERO, S::ONE),
        )
    }
}
