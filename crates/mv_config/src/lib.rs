// crates/mv_config/src/lib.rs

//! MariVOF Config Layer (Layer 4)
//!
//! 配置层，描述面插值格式条目（格式名、通量场名、混合系数），
//! 并提供 JSON 与词法流两种读取方式。本层完全无泛型。
//!
//! # 模块概览
//!
//! - [`scheme_config`]: SchemeKind / SchemeConfig（全 f64）
//! - [`tokens`]: 格式条目词法流（如 `"CICSAM phi 0.5"`）
//! - [`error`]: 配置错误类型
//!
//! # 层级架构
//!
//! ```text
//! Layer 4: mv_config   ─> SchemeConfig, SchemeTokens (本层)
//! Layer 3: mv_physics  ─> create_scheme(&SchemeConfig, ...)
//! Layer 2: mv_runtime  ─> RuntimeScalar
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "layer-guard")]
compile_error!("mv_config 禁止在 Layer 4 以下使用");

pub mod scheme_config;
pub mod tokens;
pub mod error;

/// 层级标识
pub const LAYER: u8 = 4;

// 重导出核心类型
pub use scheme_config::{SchemeConfig, SchemeKind};
pub use tokens::SchemeTokens;
pub use error::ConfigError;
