// crates/mv_runtime/src/lib.rs

//! MariVOF Runtime Layer (Layer 2)
//!
//! 运行时抽象层，提供标量类型、数值容差和运行时错误。
//!
//! # 模块概览
//!
//! - [`scalar`]: RuntimeScalar trait（密封，仅 f32/f64 可实现）
//! - [`tolerance`]: 界面捕捉格式使用的泛型容差
//! - [`error`]: 运行时错误类型
//!
//! # 层级架构
//!
//! ```text
//! Layer 4: mv_config   ─> SchemeConfig, SchemeTokens
//! Layer 3: mv_physics  ─> Cicsam<S>, FaceDataProvider<S>
//! Layer 2: mv_runtime  ─> RuntimeScalar, Tolerance (本层)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "layer-guard")]
compile_error!("mv_runtime 禁止在 Layer 1 或更低层使用");

pub mod scalar;
pub mod tolerance;
pub mod error;

/// 层级标识
pub const LAYER: u8 = 2;

// 重导出核心类型
pub use scalar::RuntimeScalar;
pub use tolerance::Tolerance;
pub use error::{RuntimeError, RuntimeResult};

/// Prelude 模块
pub mod prelude {
    //! 常用类型预导入
    pub use crate::{RuntimeError, RuntimeResult, RuntimeScalar, Tolerance};
}
