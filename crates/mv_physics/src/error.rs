// crates/mv_physics/src/error.rs

//! 格式构造错误
//!
//! 构造期的参数校验是唯一的失败路径，逐面计算从不返回错误。

use mv_config::ConfigError;
use mv_runtime::RuntimeError;

/// 插值格式错误
#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    /// 配置读取或参数校验失败
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// 数据提供方契约违约（长度/索引）
    #[error("运行时错误: {0}")]
    Runtime(#[from] RuntimeError),

    /// 通量场未在面场注册表中注册
    #[error("{site}: 面场 '{name}' 未注册 (已注册: {available:?})")]
    UnknownField {
        /// 构造位置
        site: &'static str,
        /// 查找的场名
        name: String,
        /// 已注册的场名
        available: Vec<String>,
    },
}

/// 格式结果类型
pub type SchemeResult<T> = Result<T, SchemeError>;
