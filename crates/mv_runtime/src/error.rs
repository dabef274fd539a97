// crates/mv_runtime/src/error.rs

//! 运行时错误类型
//!
//! 数据提供方与格式之间的契约违约（长度不一致、索引越界）。
//! 数值退化不属于错误，由格式内部截断处理。

use std::fmt;

/// 运行时错误
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// 索引越界
    IndexOutOfBounds {
        /// 索引类型名称
        index_type: &'static str,
        /// 索引值
        index: usize,
        /// 容量
        len: usize,
    },
    /// 缓冲区大小不匹配
    BufferSizeMismatch {
        /// 缓冲区名称
        buffer: &'static str,
        /// 期望大小
        expected: usize,
        /// 实际大小
        actual: usize,
    },
    /// 数据提供方的通量与格式绑定的通量不是同一个面场
    FluxMismatch {
        /// 格式绑定的通量场名
        expected: String,
        /// 提供方当前的通量场名
        actual: String,
    },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index_type, index, len } => {
                write!(f, "{}({}) 越界，长度为 {}", index_type, index, len)
            }
            Self::BufferSizeMismatch { buffer, expected, actual } => {
                write!(f, "缓冲区 '{}' 大小不匹配: 期望 {}, 实际 {}", buffer, expected, actual)
            }
            Self::FluxMismatch { expected, actual } => {
                write!(f, "通量场不一致: 格式绑定 '{}'，提供方为 '{}'", expected, actual)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

/// 运行时结果类型
pub type RuntimeResult<T> = Result<T, RuntimeError>;

impl RuntimeError {
    /// 检查缓冲区长度
    #[inline]
    pub fn check_len(buffer: &'static str, expected: usize, actual: usize) -> RuntimeResult<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::BufferSizeMismatch { buffer, expected, actual })
        }
    }

    /// 检查格式绑定的通量与提供方的通量是否一致
    ///
    /// 任一侧未命名时视为一致。
    pub fn check_flux(expected: Option<&str>, actual: Option<&str>) -> RuntimeResult<()> {
        match (expected, actual) {
            (Some(e), Some(a)) if e != a => Err(Self::FluxMismatch {
                expected: e.to_string(),
                actual: a.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// 检查索引范围
    #[inline]
    pub fn check_index(index_type: &'static str, index: usize, len: usize) -> RuntimeResult<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfBounds { index_type, index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len() {
        assert!(RuntimeError::check_len("values", 3, 3).is_ok());
        let err = RuntimeError::check_len("values", 3, 2).unwrap_err();
        assert!(err.to_string().contains("values"));
    }

    #[test]
    fn test_check_index() {
        assert!(RuntimeError::check_index("CellIndex", 1, 2).is_ok());
        assert_eq!(
            RuntimeError::check_index("CellIndex", 2, 2),
            Err(RuntimeError::IndexOutOfBounds { index_type: "CellIndex", index: 2, len: 2 })
        );
    }

    #[test]
    fn test_check_flux() {
        assert!(RuntimeError::check_flux(Some("phi"), Some("phi")).is_ok());
        assert!(RuntimeError::check_flux(Some("phi"), None).is_ok());
        assert!(RuntimeError::check_flux(None, Some("rhoPhi")).is_ok());
        let err = RuntimeError::check_flux(Some("alphaPhi"), Some("rhoPhi")).unwrap_err();
        assert!(err.to_string().contains("alphaPhi") && err.to_string().contains("rhoPhi"));
    }
}
