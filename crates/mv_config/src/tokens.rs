// crates/mv_config/src/tokens.rs

//! 格式条目词法流
//!
//! 插值格式条目是空白分隔的词序列，例如：
//!
//! ```text
//! CICSAM phi 0.5
//! ```
//!
//! 格式名之后的词由具体格式按顺序读取（通量场名、混合系数）。

use crate::error::ConfigError;

/// 空白分隔的词法流
#[derive(Debug, Clone)]
pub struct SchemeTokens {
    tokens: Vec<String>,
    cursor: usize,
}

impl SchemeTokens {
    /// 从条目字符串创建
    pub fn new(entry: &str) -> Self {
        Self {
            tokens: entry.split_whitespace().map(str::to_owned).collect(),
            cursor: 0,
        }
    }

    /// 当前词序号（从 1 开始，供诊断信息使用）
    pub fn position(&self) -> usize {
        self.cursor + 1
    }

    /// 读取一个词
    pub fn read_word(&mut self, site: &'static str, what: &str) -> Result<String, ConfigError> {
        let token = self.tokens.get(self.cursor).cloned().ok_or_else(|| ConfigError::Missing {
            site,
            what: format!("{} (第 {} 个词)", what, self.position()),
        })?;
        self.cursor += 1;
        Ok(token)
    }

    /// 读取一个标量
    ///
    /// 只接受有限值，`nan`/`inf` 视为解析失败。
    pub fn read_scalar(&mut self, site: &'static str, what: &str) -> Result<f64, ConfigError> {
        let position = self.position();
        let token = self.read_word(site, what)?;
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ConfigError::Parse {
                site,
                position,
                token,
                expected: "有限标量",
            }),
        }
    }

    /// 确认条目没有多余的词
    pub fn expect_end(&self, site: &'static str) -> Result<(), ConfigError> {
        match self.tokens.get(self.cursor) {
            None => Ok(()),
            Some(extra) => Err(ConfigError::InvalidValue {
                site,
                key: format!("第 {} 个词", self.position()),
                value: extra.clone(),
                reason: "条目末尾存在多余内容".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_sequence() {
        let mut ts = SchemeTokens::new("  phi   0.5 ");
        assert_eq!(ts.read_word("test", "通量场名").unwrap(), "phi");
        assert_eq!(ts.read_scalar("test", "混合系数").unwrap(), 0.5);
        assert!(ts.expect_end("test").is_ok());
    }

    #[test]
    fn test_missing_scalar() {
        let mut ts = SchemeTokens::new("phi");
        ts.read_word("test", "通量场名").unwrap();
        let err = ts.read_scalar("Cicsam::from_tokens", "混合系数").unwrap_err();
        assert!(matches!(err, ConfigError::Missing { site: "Cicsam::from_tokens", .. }));
    }

    #[test]
    fn test_bad_scalar_reports_token_and_position() {
        let mut ts = SchemeTokens::new("phi half");
        ts.read_word("test", "通量场名").unwrap();
        match ts.read_scalar("test", "混合系数") {
            Err(ConfigError::Parse { position, token, .. }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "half");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut ts = SchemeTokens::new("NaN");
        assert!(ts.read_scalar("test", "混合系数").is_err());
    }

    #[test]
    fn test_trailing_tokens() {
        let ts = SchemeTokens::new("0.5");
        let mut ts2 = ts.clone();
        ts2.read_scalar("test", "k").unwrap();
        assert!(ts2.expect_end("test").is_ok());
        assert!(ts.expect_end("test").is_err());
    }
}
