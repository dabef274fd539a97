//! 逐面数据快照 (SoA)
//!
//! [`StaticFaceData`] 是 [`FaceDataProvider`] 的直接实现：
//! 拓扑和几何在构建时固定，通量与 Courant 数可在每个时间步更新。
//!
//! ```ignore
//! let data = StaticFaceData::builder(3)
//!     .internal_face(0, 1, [1.0, 0.0, 0.0], 0.5)
//!     .internal_face(1, 2, [1.0, 0.0, 0.0], 0.5)
//!     .boundary_face(0, [-0.5, 0.0, 0.0], 1.0, BoundaryCoupling::Uncoupled)
//!     .flux(vec![1.0, 1.0, -1.0])
//!     .courant(vec![0.2, 0.2, 0.2])
//!     .build()?;
//! ```

use mv_runtime::{RuntimeError, RuntimeResult, RuntimeScalar};

use super::courant::face_courant_numbers;
use super::provider::{BoundaryCoupling, FaceDataProvider};
use crate::error::SchemeResult;
use crate::fields::{dot, SurfaceFieldRegistry, Vec3};

/// 逐面数据快照
#[derive(Debug, Clone)]
pub struct StaticFaceData<S: RuntimeScalar> {
    n_cells: usize,
    n_internal: usize,
    /// 所有面的 owner
    owner: Vec<usize>,
    /// 内部面的 neighbour
    neighbour: Vec<usize>,
    /// 所有面的连接向量
    delta: Vec<Vec3<S>>,
    /// 所有面的中心差分权重
    cd_weights: Vec<S>,
    /// 边界面耦合描述
    coupling: Vec<BoundaryCoupling<S>>,
    flux: Vec<S>,
    /// 通量来源的面场名（直接设置时为 None）
    flux_name: Option<String>,
    courant: Vec<S>,
}

impl<S: RuntimeScalar> StaticFaceData<S> {
    /// 创建构建器
    pub fn builder(n_cells: usize) -> StaticFaceDataBuilder<S> {
        StaticFaceDataBuilder::new(n_cells)
    }

    /// 更新面通量（未命名）
    pub fn set_flux(&mut self, flux: Vec<S>) -> RuntimeResult<()> {
        RuntimeError::check_len("flux", self.owner.len(), flux.len())?;
        self.flux = flux;
        self.flux_name = None;
        Ok(())
    }

    /// 从注册表按名称读取面通量
    pub fn set_flux_from_registry(
        &mut self,
        registry: &SurfaceFieldRegistry<S>,
        name: &str,
    ) -> SchemeResult<()> {
        let field = registry.lookup(name, "StaticFaceData::set_flux_from_registry")?;
        RuntimeError::check_len("flux internal faces", self.n_internal, field.n_internal())?;
        self.set_flux(field.values().to_vec())?;
        self.flux_name = Some(name.to_string());
        Ok(())
    }

    /// 由当前通量、时间步长和面面积计算 Courant 数
    ///
    /// δ_f 取连接向量长度的倒数。
    pub fn update_courant(&mut self, delta_t: S, mag_sf: &[S]) -> RuntimeResult<()> {
        let delta_coeffs: Vec<S> = self
            .delta
            .iter()
            .map(|d| S::ONE.safe_div_eps(dot(*d, *d).sqrt(), S::MIN_POSITIVE, S::ZERO))
            .collect();
        self.courant = face_courant_numbers(&self.flux, &delta_coeffs, mag_sf, delta_t)?;
        Ok(())
    }

    /// 当前面通量
    pub fn flux(&self) -> &[S] {
        &self.flux
    }

    /// 当前 Courant 数
    pub fn courant(&self) -> &[S] {
        &self.courant
    }
}

impl<S: RuntimeScalar> FaceDataProvider<S> for StaticFaceData<S> {
    fn n_cells(&self) -> usize {
        self.n_cells
    }

    fn n_faces(&self) -> usize {
        self.owner.len()
    }

    fn n_internal_faces(&self) -> usize {
        self.n_internal
    }

    fn owner(&self, face: usize) -> usize {
        self.owner[face]
    }

    fn neighbour(&self, face: usize) -> Option<usize> {
        self.neighbour.get(face).copied()
    }

    fn boundary_coupling(&self, face: usize) -> BoundaryCoupling<S> {
        self.coupling
            .get(face.wrapping_sub(self.n_internal))
            .copied()
            .unwrap_or(BoundaryCoupling::Uncoupled)
    }

    fn flux_name(&self) -> Option<&str> {
        self.flux_name.as_deref()
    }

    fn face_flux(&self, face: usize) -> S {
        self.flux[face]
    }

    fn cd_weight(&self, face: usize) -> S {
        self.cd_weights[face]
    }

    fn delta(&self, face: usize) -> Vec3<S> {
        self.delta[face]
    }

    fn courant_number(&self, face: usize) -> S {
        self.courant[face]
    }
}

// ============================================================
// 构建器
// ============================================================

#[derive(Debug, Clone, Copy)]
struct PendingFace<S: RuntimeScalar> {
    owner: usize,
    neighbour: Option<usize>,
    delta: Vec3<S>,
    cd_weight: S,
    coupling: BoundaryCoupling<S>,
}

/// [`StaticFaceData`] 构建器
///
/// 内部面与边界面可按任意顺序添加，构建时内部面排在前面，
/// 各自保持添加顺序。
#[derive(Debug, Clone)]
pub struct StaticFaceDataBuilder<S: RuntimeScalar> {
    n_cells: usize,
    internal: Vec<PendingFace<S>>,
    boundary: Vec<PendingFace<S>>,
    flux: Option<Vec<S>>,
    courant: Option<Vec<S>>,
}

impl<S: RuntimeScalar> StaticFaceDataBuilder<S> {
    fn new(n_cells: usize) -> Self {
        Self {
            n_cells,
            internal: Vec::new(),
            boundary: Vec::new(),
            flux: None,
            courant: None,
        }
    }

    /// 添加内部面
    pub fn internal_face(mut self, owner: usize, neighbour: usize, delta: Vec3<S>, cd_weight: S) -> Self {
        self.internal.push(PendingFace {
            owner,
            neighbour: Some(neighbour),
            delta,
            cd_weight,
            coupling: BoundaryCoupling::Uncoupled,
        });
        self
    }

    /// 添加边界面
    pub fn boundary_face(
        mut self,
        owner: usize,
        delta: Vec3<S>,
        cd_weight: S,
        coupling: BoundaryCoupling<S>,
    ) -> Self {
        self.boundary.push(PendingFace {
            owner,
            neighbour: None,
            delta,
            cd_weight,
            coupling,
        });
        self
    }

    /// 面通量（按构建后的面顺序）
    pub fn flux(mut self, flux: Vec<S>) -> Self {
        self.flux = Some(flux);
        self
    }

    /// 面 Courant 数（按构建后的面顺序）
    pub fn courant(mut self, courant: Vec<S>) -> Self {
        self.courant = Some(courant);
        self
    }

    /// 构建快照
    ///
    /// 未给出通量/Courant 数时取零。
    pub fn build(self) -> RuntimeResult<StaticFaceData<S>> {
        let n_internal = self.internal.len();
        let faces: Vec<PendingFace<S>> = self.internal.into_iter().chain(self.boundary).collect();
        let n_faces = faces.len();

        for face in &faces {
            RuntimeError::check_index("CellIndex", face.owner, self.n_cells)?;
            if let Some(n) = face.neighbour {
                RuntimeError::check_index("CellIndex", n, self.n_cells)?;
            }
        }

        let flux = self.flux.unwrap_or_else(|| vec![S::ZERO; n_faces]);
        let courant = self.courant.unwrap_or_else(|| vec![S::ZERO; n_faces]);
        RuntimeError::check_len("flux", n_faces, flux.len())?;
        RuntimeError::check_len("courant", n_faces, courant.len())?;

        Ok(StaticFaceData {
            n_cells: self.n_cells,
            n_internal,
            owner: faces.iter().map(|f| f.owner).collect(),
            neighbour: faces.iter().filter_map(|f| f.neighbour).collect(),
            delta: faces.iter().map(|f| f.delta).collect(),
            cd_weights: faces.iter().map(|f| f.cd_weight).collect(),
            coupling: faces[n_internal..].iter().map(|f| f.coupling).collect(),
            flux,
            flux_name: None,
            courant,
        })
    }
}
