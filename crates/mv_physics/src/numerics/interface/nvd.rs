//! 归一化变量图 (NVD) 基础函数
//!
//! # 记号
//!
//! 沿流动方向，D 为供体（上游）单元，A 为受体（下游）单元，
//! U 为供体再上游一个单元。归一化变量:
//!
//! ```text
//! φ̃_D = (φ_D - φ_U) / (φ_A - φ_U)
//! ```
//!
//! 非结构网格上 U 单元不一定存在，用受体值与供体梯度外推:
//!
//! ```text
//! φ_U = φ_A - 2 ∇φ_D · d_DA
//! ```
//!
//! # 候选格式 (Ubbink & Issa 1999)
//!
//! 对 0 < φ̃_D < 1，Co 为面 Courant 数:
//!
//! ```text
//! Hyper-C:            φ̃_f = min(1, φ̃_D / Co)
//! Ultimate-Quickest:  φ̃_f = min((8 Co φ̃_D + (1 - Co)(6 φ̃_D + 3)) / 8, φ̃_f,HC)
//! ```
//!
//! 区间外两者都退化为 φ̃_f = φ̃_D（迎风）。

use mv_runtime::{RuntimeScalar, Tolerance};

use crate::fields::{dot, negate, Vec3};
use crate::mesh::FaceStencil;

/// 面上的流动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    /// 通量 ≥ 0：owner 为供体
    OwnerToNeighbour,
    /// 通量 < 0：neighbour 为供体
    NeighbourToOwner,
}

impl FlowDirection {
    /// 由通量符号确定方向（零通量按 owner 为供体处理）
    #[inline]
    pub fn from_flux<S: RuntimeScalar>(flux: S) -> Self {
        if flux >= S::ZERO {
            Self::OwnerToNeighbour
        } else {
            Self::NeighbourToOwner
        }
    }

    /// 迎风权重：owner 为供体时为 1，否则为 0
    #[inline]
    pub fn upwind_weight<S: RuntimeScalar>(&self) -> S {
        match self {
            Self::OwnerToNeighbour => S::ONE,
            Self::NeighbourToOwner => S::ZERO,
        }
    }
}

/// 按流动方向重排后的面数据
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonorAcceptor<S: RuntimeScalar> {
    /// 流动方向
    pub direction: FlowDirection,
    /// 供体单元值
    pub donor: S,
    /// 受体单元值
    pub acceptor: S,
    /// 供体单元梯度
    pub donor_gradient: Vec3<S>,
    /// 供体中心指向受体中心的向量
    pub delta: Vec3<S>,
}

impl<S: RuntimeScalar> DonorAcceptor<S> {
    /// 从面模板按通量符号选取供体/受体
    pub fn from_stencil(stencil: &FaceStencil<S>) -> Self {
        let direction = FlowDirection::from_flux(stencil.flux);
        match direction {
            FlowDirection::OwnerToNeighbour => Self {
                direction,
                donor: stencil.phi_owner,
                acceptor: stencil.phi_neighbour,
                donor_gradient: stencil.grad_owner,
                delta: stencil.delta,
            },
            FlowDirection::NeighbourToOwner => Self {
                direction,
                donor: stencil.phi_neighbour,
                acceptor: stencil.phi_owner,
                donor_gradient: stencil.grad_neighbour,
                delta: negate(stencil.delta),
            },
        }
    }

    /// 外推的再上游值 φ_U = φ_A - 2 ∇φ_D · d_DA
    #[inline]
    pub fn far_upstream(&self) -> S {
        self.acceptor - S::TWO * dot(self.donor_gradient, self.delta)
    }
}

/// 归一化变量 φ̃_D，截断到 [0, 1]
///
/// 分母退化时返回 0（完全迎风，不压缩）。
#[inline]
pub fn normalized_variable<S: RuntimeScalar>(
    donor: S,
    upstream: S,
    acceptor: S,
    tol: &Tolerance<S>,
) -> S {
    let denominator = acceptor - upstream;
    if tol.is_degenerate(denominator) {
        return S::ZERO;
    }
    ((donor - upstream) / denominator).clamp_value(S::ZERO, S::ONE)
}

/// Hyper-C 归一化面值
///
/// 满足 CBC 有界判据的最大压缩。Co 趋于零时取 1。
#[inline]
pub fn hyper_c<S: RuntimeScalar>(phi_tilde: S, courant: S, tol: &Tolerance<S>) -> S {
    if !phi_tilde.in_open_unit() {
        return phi_tilde;
    }
    let co = courant.abs();
    if co < tol.courant_min {
        return S::ONE;
    }
    (phi_tilde / co).min(S::ONE)
}

/// Ultimate-Quickest 归一化面值
#[inline]
pub fn ultimate_quickest<S: RuntimeScalar>(phi_tilde: S, courant: S, tol: &Tolerance<S>) -> S {
    if !phi_tilde.in_open_unit() {
        return phi_tilde;
    }
    let co = courant.abs();
    let three = S::from_config(3.0);
    let six = S::from_config(6.0);
    let eight = S::from_config(8.0);
    let quickest = (eight * co * phi_tilde + (S::ONE - co) * (six * phi_tilde + three)) / eight;
    quickest.min(hyper_c(phi_tilde, courant, tol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tol() -> Tolerance<f64> {
        Tolerance::default()
    }

    #[test]
    fn test_flow_direction() {
        assert_eq!(FlowDirection::from_flux(0.0), FlowDirection::OwnerToNeighbour);
        assert_eq!(FlowDirection::from_flux(-1e-300), FlowDirection::NeighbourToOwner);
        assert_eq!(FlowDirection::OwnerToNeighbour.upwind_weight::<f64>(), 1.0);
        assert_eq!(FlowDirection::NeighbourToOwner.upwind_weight::<f64>(), 0.0);
    }

    #[test]
    fn test_donor_acceptor_reverse_flow() {
        let stencil = FaceStencil {
            cd_weight: 0.5,
            flux: -1.0,
            phi_owner: 0.2,
            phi_neighbour: 0.8,
            grad_owner: [0.0; 3],
            grad_neighbour: [0.1, 0.0, 0.0],
            courant: 0.3,
            delta: [2.0, 0.0, 0.0],
        };
        let da = DonorAcceptor::<f64>::from_stencil(&stencil);
        assert_eq!(da.direction, FlowDirection::NeighbourToOwner);
        assert_eq!(da.donor, 0.8);
        assert_eq!(da.acceptor, 0.2);
        assert_eq!(da.delta, [-2.0, 0.0, 0.0]);
        // φ_U = 0.2 - 2 * (0.1 * -2) = 0.6
        assert!((da.far_upstream() - 0.6).abs() < 1e-15);
    }

    #[test]
    fn test_normalized_variable() {
        assert!((normalized_variable(0.4, 0.0, 0.8, &tol()) - 0.5).abs() < 1e-15);
        // 非单调：截断
        assert_eq!(normalized_variable(1.2, 0.0, 1.0, &tol()), 1.0);
        assert_eq!(normalized_variable(-0.2, 0.0, 1.0, &tol()), 0.0);
        // 分母退化
        assert_eq!(normalized_variable(0.3, 0.7, 0.7, &tol()), 0.0);
    }

    #[test]
    fn test_hyper_c_canonical() {
        assert!((hyper_c(0.1, 0.2, &tol()) - 0.5).abs() < 1e-12);
        assert_eq!(hyper_c(0.5, 0.2, &tol()), 1.0);
        assert!((hyper_c(0.1, 0.5, &tol()) - 0.2).abs() < 1e-12);
        assert_eq!(hyper_c(0.4, 0.0, &tol()), 1.0);
    }

    #[test]
    fn test_ultimate_quickest_canonical() {
        assert!((ultimate_quickest(0.1, 0.2, &tol()) - 0.38).abs() < 1e-12);
        assert!((ultimate_quickest(0.5, 0.2, &tol()) - 0.7).abs() < 1e-12);
        // 受 Hyper-C 上限约束
        assert!((ultimate_quickest(0.1, 0.5, &tol()) - 0.2).abs() < 1e-12);
        assert!((ultimate_quickest(0.3, 0.8, &tol()) - 0.36).abs() < 1e-12);
    }

    #[test]
    fn test_outside_unit_interval_is_upwind() {
        for t in [0.0, 1.0] {
            assert_eq!(hyper_c(t, 0.3, &tol()), t);
            assert_eq!(ultimate_quickest(t, 0.3, &tol()), t);
        }
    }

    #[test]
    fn test_candidates_never_below_donor_for_unit_courant() {
        for i in 1..100 {
            let t = i as f64 / 100.0;
            for co in [0.01, 0.2, 0.5, 1.0] {
                let hc = hyper_c(t, co, &tol());
                let uq = ultimate_quickest(t, co, &tol());
                assert!(hc >= t - 1e-15 && hc <= 1.0);
                assert!(uq >= t - 1e-15 && uq <= hc);
            }
        }
    }
}
