// crates/mv_physics/src/lib.rs

//! MariVOF Physics Layer (Layer 3)
//!
//! 有界界面捕捉面插值，包括：
//! - 逐面数据提供方接口 (mesh)
//! - 单元场/面场数据结构 (fields)
//! - 界面捕捉格式 (numerics::interface) - CICSAM 及参考格式
//! - 格式构造错误 (error)
//!
//! # 层级架构
//!
//! ```text
//! Layer 4: mv_config   ─> SchemeConfig, SchemeTokens
//! Layer 3: mv_physics  ─> Cicsam<S>, FaceDataProvider<S> (本层)
//! Layer 2: mv_runtime  ─> RuntimeScalar, Tolerance
//! ```
//!
//! # 数据流
//!
//! 提供方给出逐面模板（通量、几何权重、两侧单元值与梯度、Courant 数），
//! 格式逐面计算限制器，再按限制格式约定换算为插值权重，
//! 每次调用生成新的面场。

#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "layer-guard")]
compile_error!("mv_physics 禁止在 Layer 2 或更低层使用");

pub mod error;
pub mod fields;
pub mod mesh;
pub mod numerics;

/// 层级标识
pub const LAYER: u8 = 3;

// 重导出常用类型
pub use error::{SchemeError, SchemeResult};
pub use fields::{CellFieldView, CellGradients, SurfaceFieldRegistry, SurfaceScalarField, Vec3};
pub use mesh::{
    face_courant_numbers, max_courant, BoundaryCoupling, FaceDataProvider, FaceStencil,
    StaticFaceData, StaticFaceDataBuilder,
};
pub use numerics::interface::{
    create_scheme, create_scheme_from_entry, Cicsam, CicsamGeneric, FaceSweep, LimitedScheme,
    Linear, SurfaceInterpolationScheme, Upwind, LOWER_BOUND, UPPER_BOUND,
};
