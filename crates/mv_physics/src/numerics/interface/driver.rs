//! 面场遍历
//!
//! 逐面计算彼此独立，整场遍历可以任意顺序、任意划分执行。
//! 面数超过阈值时使用 rayon 并行；并行与串行结果逐位一致。

use rayon::prelude::*;

use mv_runtime::{RuntimeError, RuntimeResult, RuntimeScalar};

use crate::fields::{CellFieldView, SurfaceScalarField};
use crate::mesh::{FaceDataProvider, FaceStencil};

/// 遍历策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepStrategy {
    /// 串行
    Sequential,
    /// 并行
    Parallel,
    /// 根据面数自动选择
    #[default]
    Auto,
}

/// 面场遍历配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceSweep {
    /// 遍历策略
    pub strategy: SweepStrategy,
    /// `Auto` 策略下的最小并行面数
    pub min_parallel_faces: usize,
}

impl Default for FaceSweep {
    fn default() -> Self {
        Self {
            strategy: SweepStrategy::Auto,
            min_parallel_faces: 4096,
        }
    }
}

impl FaceSweep {
    /// 串行遍历
    pub fn sequential() -> Self {
        Self {
            strategy: SweepStrategy::Sequential,
            ..Default::default()
        }
    }

    /// 并行遍历
    pub fn parallel() -> Self {
        Self {
            strategy: SweepStrategy::Parallel,
            ..Default::default()
        }
    }

    /// 自动选择，指定并行阈值
    pub fn auto(min_parallel_faces: usize) -> Self {
        Self {
            strategy: SweepStrategy::Auto,
            min_parallel_faces,
        }
    }

    /// 给定面数时是否并行
    pub fn is_parallel(&self, n_faces: usize) -> bool {
        match self.strategy {
            SweepStrategy::Sequential => false,
            SweepStrategy::Parallel => true,
            SweepStrategy::Auto => n_faces >= self.min_parallel_faces,
        }
    }

    /// 遍历所有面生成新的面场
    ///
    /// 能收集到模板的面（内部面、耦合边界面）调用 `on_stencil`，
    /// 物理边界面调用 `on_uncoupled`。
    pub fn evaluate<S, F, B>(
        &self,
        name: &str,
        mesh: &dyn FaceDataProvider<S>,
        field: &CellFieldView<'_, S>,
        on_stencil: F,
        on_uncoupled: B,
    ) -> RuntimeResult<SurfaceScalarField<S>>
    where
        S: RuntimeScalar,
        F: Fn(&FaceStencil<S>) -> S + Sync,
        B: Fn(usize) -> S + Sync,
    {
        RuntimeError::check_len("cell field", mesh.n_cells(), field.len())?;

        let n_faces = mesh.n_faces();
        let parallel = self.is_parallel(n_faces);
        log::debug!(
            "{}: 遍历 {} 个面 (内部 {}, {})",
            name,
            n_faces,
            mesh.n_internal_faces(),
            if parallel { "并行" } else { "串行" }
        );

        let eval = |face: usize| match mesh.stencil(face, field) {
            Some(stencil) => on_stencil(&stencil),
            None => on_uncoupled(face),
        };

        let values: Vec<S> = if parallel {
            (0..n_faces).into_par_iter().map(&eval).collect()
        } else {
            (0..n_faces).map(&eval).collect()
        };

        SurfaceScalarField::new(name, values, mesh.n_internal_faces())
    }
}
