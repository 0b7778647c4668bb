//! 错误类型
//!
//! 数值退化 (分母为 0 等) 不是错误, 这里只覆盖配置与数据形状问题。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndicatorError {
    /// 周期必须大于 0
    #[error("invalid length: {length} (must be > 0)")]
    InvalidLength { length: usize },

    /// 数据形状与指标输入不符
    #[error("payload mismatch: expected {expected}, found {found}")]
    PayloadMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
