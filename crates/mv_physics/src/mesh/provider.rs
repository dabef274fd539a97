//! 逐面数据提供方接口
//!
//! 提供方负责网格拓扑、通量、几何权重、Courant 数以及
//! 并行分区间的晕圈（halo）数据交换；格式只读取这些数据。

use mv_runtime::RuntimeScalar;

use crate::fields::{negate, CellFieldView, Vec3};

/// 边界面的耦合描述
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCoupling<S: RuntimeScalar> {
    /// 物理边界：面值取边界条件给出的值
    Uncoupled,
    /// 耦合边界（处理器/周期）：另一侧单元数据已由提供方交换
    Coupled {
        /// 另一侧单元值
        neighbour_value: S,
        /// 另一侧单元梯度
        neighbour_gradient: Vec3<S>,
    },
}

/// 单个面的计算模板
///
/// 逐面限制器和权重只依赖这些数据。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceStencil<S: RuntimeScalar> {
    /// 中心差分权重（指向 owner）
    pub cd_weight: S,
    /// 面通量，正值表示 owner → neighbour
    pub flux: S,
    /// owner 单元值
    pub phi_owner: S,
    /// neighbour 单元值
    pub phi_neighbour: S,
    /// owner 单元梯度
    pub grad_owner: Vec3<S>,
    /// neighbour 单元梯度
    pub grad_neighbour: Vec3<S>,
    /// 面 Courant 数
    pub courant: S,
    /// owner 中心指向 neighbour 中心的向量
    pub delta: Vec3<S>,
}

impl<S: RuntimeScalar> FaceStencil<S> {
    /// 交换 owner/neighbour 角色
    ///
    /// 通量与连接向量取反，中心差分权重取补。
    /// 物理上描述的是同一个面。
    pub fn mirrored(&self) -> Self {
        Self {
            cd_weight: S::ONE - self.cd_weight,
            flux: -self.flux,
            phi_owner: self.phi_neighbour,
            phi_neighbour: self.phi_owner,
            grad_owner: self.grad_neighbour,
            grad_neighbour: self.grad_owner,
            courant: self.courant,
            delta: negate(self.delta),
        }
    }

    /// 由权重得到面值 w·φ_owner + (1-w)·φ_neighbour
    #[inline]
    pub fn face_value(&self, weight: S) -> S {
        weight * self.phi_owner + (S::ONE - weight) * self.phi_neighbour
    }
}

/// 逐面数据提供方
///
/// 索引约定：内部面在前，边界面在后。
pub trait FaceDataProvider<S: RuntimeScalar>: Send + Sync {
    // ========== 基本信息 ==========

    /// 单元数量
    fn n_cells(&self) -> usize;

    /// 面数量
    fn n_faces(&self) -> usize;

    /// 内部面数量
    fn n_internal_faces(&self) -> usize;

    /// 边界面数量
    fn n_boundary_faces(&self) -> usize {
        self.n_faces() - self.n_internal_faces()
    }

    // ========== 拓扑 ==========

    /// 面的 owner 单元
    fn owner(&self, face: usize) -> usize;

    /// 面的 neighbour 单元（边界面返回 None）
    fn neighbour(&self, face: usize) -> Option<usize>;

    /// 边界面耦合描述（内部面不会调用）
    fn boundary_coupling(&self, _face: usize) -> BoundaryCoupling<S> {
        BoundaryCoupling::Uncoupled
    }

    // ========== 逐面数据 ==========

    /// 面通量来源的面场名
    ///
    /// 未命名的通量返回 None，此时不做通量绑定检查。
    fn flux_name(&self) -> Option<&str> {
        None
    }

    /// 面通量
    fn face_flux(&self, face: usize) -> S;

    /// 中心差分权重
    fn cd_weight(&self, face: usize) -> S;

    /// owner 中心指向 neighbour（或耦合晕圈单元）中心的向量
    fn delta(&self, face: usize) -> Vec3<S>;

    /// 面 Courant 数
    fn courant_number(&self, face: usize) -> S;

    // ========== 模板收集 ==========

    /// 收集面计算模板
    ///
    /// 内部面与耦合边界面返回 Some，物理边界面返回 None。
    fn stencil(&self, face: usize, field: &CellFieldView<'_, S>) -> Option<FaceStencil<S>> {
        let owner = self.owner(face);
        let (phi_neighbour, grad_neighbour) = match self.neighbour(face) {
            Some(n) => (field.value(n), field.gradient(n)),
            None => match self.boundary_coupling(face) {
                BoundaryCoupling::Coupled {
                    neighbour_value,
                    neighbour_gradient,
                } => (neighbour_value, neighbour_gradient),
                BoundaryCoupling::Uncoupled => return None,
            },
        };
        Some(FaceStencil {
            cd_weight: self.cd_weight(face),
            flux: self.face_flux(face),
            phi_owner: field.value(owner),
            phi_neighbour,
            grad_owner: field.gradient(owner),
            grad_neighbour,
            courant: self.courant_number(face),
            delta: self.delta(face),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FaceStencil<f64> {
        FaceStencil {
            cd_weight: 0.25,
            flux: 2.0,
            phi_owner: 0.3,
            phi_neighbour: 0.9,
            grad_owner: [0.1, 0.0, 0.0],
            grad_neighbour: [0.2, 0.0, 0.0],
            courant: 0.25,
            delta: [1.0, 0.5, 0.0],
        }
    }

    #[test]
    fn test_mirrored_is_involution() {
        let s = sample();
        assert_eq!(s.mirrored().mirrored(), s);
    }

    #[test]
    fn test_mirrored_swaps_roles() {
        let m = sample().mirrored();
        assert_eq!(m.flux, -2.0);
        assert_eq!(m.phi_owner, 0.9);
        assert_eq!(m.delta, [-1.0, -0.5, 0.0]);
        assert_eq!(m.cd_weight, 0.75);
    }

    #[test]
    fn test_face_value() {
        let s = sample();
        assert_eq!(s.face_value(1.0), 0.3);
        assert_eq!(s.face_value(0.0), 0.9);
    }
}
