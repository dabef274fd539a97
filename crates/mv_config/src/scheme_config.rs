// crates/mv_config/src/scheme_config.rs

//! SchemeConfig - 面插值格式配置（全 f64）
//!
//! 混合系数在此层只做读取，不做范围校验：
//! 校验在构造格式实例时进行且只进行一次。

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tokens::SchemeTokens;

/// 面插值格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    /// CICSAM 界面捕捉格式（Hyper-C 与 Ultimate-Quickest 混合）
    #[default]
    Cicsam,
    /// 一阶迎风（限制器恒为 0）
    Upwind,
    /// 中心差分（限制器恒为 1）
    Linear,
}

impl SchemeKind {
    /// 格式名称（与条目中的写法一致）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cicsam => "CICSAM",
            Self::Upwind => "upwind",
            Self::Linear => "linear",
        }
    }

    /// 从条目中的格式名解析（不区分大小写）
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "cicsam" => Ok(Self::Cicsam),
            "upwind" => Ok(Self::Upwind),
            "linear" => Ok(Self::Linear),
            _ => Err(ConfigError::UnknownScheme(name.to_string())),
        }
    }

    /// 条目中是否需要通量场名
    pub fn requires_flux(&self) -> bool {
        matches!(self, Self::Cicsam | Self::Upwind)
    }

    /// 条目中是否需要混合系数
    pub fn requires_coefficient(&self) -> bool {
        matches!(self, Self::Cicsam)
    }
}

/// 面插值格式配置
///
/// JSON 形式：
///
/// ```json
/// { "scheme": "cicsam", "flux": "phi", "coefficient": 0.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeConfig {
    /// 格式类型
    #[serde(default)]
    pub scheme: SchemeKind,

    /// 通量场名（从已注册面场中查找）
    #[serde(default = "default_flux")]
    pub flux: String,

    /// 混合系数 k（0 = Ultimate-Quickest，1 = Hyper-C）
    #[serde(default = "default_coefficient")]
    pub coefficient: f64,

    /// 最小并行面数（低于此值串行遍历）
    #[serde(default = "default_min_parallel_faces")]
    pub min_parallel_faces: usize,
}

fn default_flux() -> String { "phi".to_string() }
fn default_coefficient() -> f64 { 0.5 }
fn default_min_parallel_faces() -> usize { 4096 }

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            scheme: SchemeKind::default(),
            flux: default_flux(),
            coefficient: default_coefficient(),
            min_parallel_faces: default_min_parallel_faces(),
        }
    }
}

impl SchemeConfig {
    /// CICSAM 配置
    pub fn cicsam(flux: impl Into<String>, coefficient: f64) -> Self {
        Self {
            scheme: SchemeKind::Cicsam,
            flux: flux.into(),
            coefficient,
            ..Default::default()
        }
    }

    /// 从 JSON 字符串读取
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从格式条目读取，例如 `"CICSAM phi 0.5"`、`"upwind phi"`、`"linear"`
    pub fn parse_entry(entry: &str) -> Result<Self, ConfigError> {
        const SITE: &str = "SchemeConfig::parse_entry";
        let mut tokens = SchemeTokens::new(entry);
        let scheme = SchemeKind::from_name(&tokens.read_word(SITE, "格式名")?)?;

        let mut config = Self {
            scheme,
            ..Default::default()
        };
        if scheme.requires_flux() {
            config.flux = tokens.read_word(SITE, "通量场名")?;
        }
        if scheme.requires_coefficient() {
            config.coefficient = tokens.read_scalar(SITE, "混合系数")?;
        }
        tokens.expect_end(SITE)?;
        Ok(config)
    }
}
