//! CICSAM 界面捕捉格式
//!
//! Compressive Interface Capturing Scheme for Arbitrary Meshes
//! (Ubbink & Issa 1999)，用于相分数等有界标量的对流面插值。
//!
//! # 算法
//!
//! 1. 按通量符号确定供体 D / 受体 A，外推再上游值
//!    φ_U = φ_A - 2 ∇φ_D · d_DA，并截断到相分数范围 [0, 1]
//! 2. 归一化变量 φ̃_D = (φ_D - φ_U) / (φ_A - φ_U)，截断到 [0, 1]
//! 3. 候选值 Hyper-C 与 Ultimate-Quickest 按混合系数 k 组合:
//!
//! ```text
//! φ̃_f = k · φ̃_HC + (1 - k) · φ̃_UQ
//! β   = (φ̃_f - φ̃_D) / (1 - φ̃_D)
//! ```
//!
//! 4. β 换算为限制格式的限制器 L:
//!
//! ```text
//! L = β / (1 - w_cd)   owner 为供体
//! L = β / w_cd         neighbour 为供体
//! ```
//!
//!    截断到 [LOWER_BOUND, UPPER_BOUND]。
//!
//! # 混合系数
//!
//! | k   | 格式 |
//! |-----|------|
//! | 0   | Ultimate-Quickest |
//! | 0.5 | 推荐值 |
//! | 1   | Hyper-C |
//!
//! 界面出现波纹时减小 k（代价是界面抹平），需要无条件压缩时取 1。

use mv_config::{ConfigError, SchemeConfig, SchemeTokens};
use mv_runtime::{RuntimeScalar, Tolerance};

use super::driver::FaceSweep;
use super::nvd::{hyper_c, normalized_variable, ultimate_quickest, DonorAcceptor, FlowDirection};
use super::traits::LimitedScheme;
use crate::error::SchemeResult;
use crate::fields::SurfaceFieldRegistry;
use crate::mesh::FaceStencil;

/// 限制器下界
pub const LOWER_BOUND: f64 = 0.0;

/// 限制器上界
///
/// 均匀网格 (w_cd = 0.5) 上 β ∈ [0, 1] 对应 L ∈ [0, 2]。
pub const UPPER_BOUND: f64 = 2.0;

/// 推荐混合系数
pub const RECOMMENDED_COEFFICIENT: f64 = 0.5;

/// 默认通量场名
pub const DEFAULT_FLUX: &str = "phi";

/// 泛型 CICSAM 格式
///
/// 混合系数只在构造时校验一次，之后不可变。
#[derive(Debug, Clone)]
pub struct CicsamGeneric<S: RuntimeScalar> {
    k: S,
    flux_name: String,
    tolerance: Tolerance<S>,
    sweep: FaceSweep,
}

/// f64 特化版本 (默认)
pub type Cicsam = CicsamGeneric<f64>;

/// 校验混合系数 0 <= k <= 1
fn validate_coefficient(k: f64, site: &'static str) -> Result<f64, ConfigError> {
    if k.is_finite() && (0.0..=1.0).contains(&k) {
        Ok(k)
    } else {
        Err(ConfigError::InvalidValue {
            site,
            key: "coefficient".to_string(),
            value: k.to_string(),
            reason: "应满足 0 <= k <= 1".to_string(),
        })
    }
}

impl<S: RuntimeScalar> CicsamGeneric<S>
where
    Tolerance<S>: Default,
{
    fn build(flux_name: String, k: f64, site: &'static str) -> SchemeResult<Self> {
        let k = validate_coefficient(k, site)?;
        log::debug!("{}: CICSAM k = {}, 通量场 '{}'", site, k, flux_name);
        Ok(Self {
            k: S::from_config(k),
            flux_name,
            tolerance: Tolerance::default(),
            sweep: FaceSweep::default(),
        })
    }

    /// 由混合系数创建，通量场名取 `phi`
    pub fn new(k: f64) -> SchemeResult<Self> {
        Self::build(DEFAULT_FLUX.to_string(), k, "Cicsam::new")
    }

    /// 推荐配置 (k = 0.5)
    pub fn recommended() -> Self {
        Self {
            k: S::from_config(RECOMMENDED_COEFFICIENT),
            flux_name: DEFAULT_FLUX.to_string(),
            tolerance: Tolerance::default(),
            sweep: FaceSweep::default(),
        }
    }

    /// 由通量场名和混合系数创建
    pub fn with_flux(flux_name: impl Into<String>, k: f64) -> SchemeResult<Self> {
        Self::build(flux_name.into(), k, "Cicsam::with_flux")
    }

    /// 从词法流读取 `<通量场名> <k>`
    ///
    /// 通量场名必须已在注册表中注册。
    pub fn from_tokens(
        registry: &SurfaceFieldRegistry<S>,
        tokens: &mut SchemeTokens,
    ) -> SchemeResult<Self> {
        const SITE: &str = "Cicsam::from_tokens";
        let flux_name = tokens.read_word(SITE, "通量场名")?;
        registry.lookup(&flux_name, SITE)?;
        let k = tokens.read_scalar(SITE, "混合系数")?;
        tokens.expect_end(SITE)?;
        Self::build(flux_name, k, SITE)
    }

    /// 通量场已给定时，从词法流读取 `<k>`
    pub fn with_flux_tokens(
        flux_name: impl Into<String>,
        tokens: &mut SchemeTokens,
    ) -> SchemeResult<Self> {
        const SITE: &str = "Cicsam::with_flux_tokens";
        let k = tokens.read_scalar(SITE, "混合系数")?;
        tokens.expect_end(SITE)?;
        Self::build(flux_name.into(), k, SITE)
    }

    /// 从配置创建
    pub fn from_config(config: &SchemeConfig) -> SchemeResult<Self> {
        let scheme = Self::build(config.flux.clone(), config.coefficient, "Cicsam::from_config")?;
        Ok(scheme.with_sweep(FaceSweep::auto(config.min_parallel_faces)))
    }
}

impl<S: RuntimeScalar> CicsamGeneric<S> {
    /// 替换遍历配置
    pub fn with_sweep(mut self, sweep: FaceSweep) -> Self {
        self.sweep = sweep;
        self
    }

    /// 混合系数
    pub fn k(&self) -> S {
        self.k
    }

    /// 通量场名
    pub fn flux_name(&self) -> &str {
        &self.flux_name
    }

    /// 供体单元的归一化变量 φ̃_D ∈ [0, 1]
    pub fn normalized_donor(&self, stencil: &FaceStencil<S>) -> S {
        let da = DonorAcceptor::from_stencil(stencil);
        let upstream = da.far_upstream().clamp_value(S::ZERO, S::ONE);
        normalized_variable(da.donor, upstream, da.acceptor, &self.tolerance)
    }

    /// 混合后的归一化面值 φ̃_f
    pub fn blended_face_value(&self, phi_tilde: S, courant: S) -> S {
        let hc = hyper_c(phi_tilde, courant, &self.tolerance);
        let uq = ultimate_quickest(phi_tilde, courant, &self.tolerance);
        self.k * hc + (S::ONE - self.k) * uq
    }

    /// CICSAM 混合因子 β
    ///
    /// 面值 φ_f = (1 - β) φ_D + β φ_A。φ̃_D 不在 (0, 1) 内时为 0。
    pub fn blending_factor(&self, stencil: &FaceStencil<S>) -> S {
        let phi_tilde = self.normalized_donor(stencil);
        if !phi_tilde.in_open_unit() {
            return S::ZERO;
        }
        let face = self.blended_face_value(phi_tilde, stencil.courant);
        (face - phi_tilde) / (S::ONE - phi_tilde)
    }
}

impl<S: RuntimeScalar> LimitedScheme<S> for CicsamGeneric<S> {
    fn name(&self) -> &'static str {
        "CICSAM"
    }

    fn limiter(&self, stencil: &FaceStencil<S>) -> S {
        let lower = S::from_config(LOWER_BOUND);
        let upper = S::from_config(UPPER_BOUND);

        let beta = self.blending_factor(stencil);
        if beta.is_nan() || beta <= S::ZERO {
            return lower;
        }

        let distance_to_upwind = match FlowDirection::from_flux(stencil.flux) {
            FlowDirection::OwnerToNeighbour => S::ONE - stencil.cd_weight,
            FlowDirection::NeighbourToOwner => stencil.cd_weight,
        };
        beta.safe_div_eps(distance_to_upwind, self.tolerance.weight_min, upper)
            .clamp_value(lower, upper)
    }

    fn sweep(&self) -> FaceSweep {
        self.sweep
    }

    fn bound_flux(&self) -> Option<&str> {
        Some(&self.flux_name)
    }
}
