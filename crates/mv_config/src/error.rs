// crates/mv_config/src/error.rs

//! 配置层错误类型
//!
//! 所有读取错误都携带读到的原始值和构造位置。

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON 解析错误
    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 词法解析错误
    #[error("{site}: 无法将第 {position} 个词 '{token}' 解析为{expected}")]
    Parse {
        /// 构造位置
        site: &'static str,
        /// 词序号（从 1 开始）
        position: usize,
        /// 读到的词
        token: String,
        /// 期望的类型
        expected: &'static str,
    },

    /// 无效值
    #[error("{site}: 无效值 '{key}' = {value} - {reason}")]
    InvalidValue {
        /// 构造位置
        site: &'static str,
        /// 配置键
        key: String,
        /// 配置值
        value: String,
        /// 原因
        reason: String,
    },

    /// 缺失配置
    #[error("{site}: 缺失配置 {what}")]
    Missing {
        /// 构造位置
        site: &'static str,
        /// 缺失项
        what: String,
    },

    /// 未知格式名
    #[error("未知插值格式 '{0}'")]
    UnknownScheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            site: "Cicsam::new",
            key: "coefficient".to_string(),
            value: "1.1".to_string(),
            reason: "应满足 0 <= k <= 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("coefficient"));
        assert!(msg.contains("1.1"));
        assert!(msg.contains("Cicsam::new"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = ConfigError::Parse {
            site: "SchemeTokens::read_scalar",
            position: 2,
            token: "abc".to_string(),
            expected: "标量",
        };
        assert!(err.to_string().contains("'abc'"));
    }
}
