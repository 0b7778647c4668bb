//! hquant-stream: 增量流式指标计算库
//!
//! 每次输入一个观测值, 输出一个指标值。观测值分为 [`Phase::Final`] (周期已结束)
//! 与 [`Phase::Provisional`] (周期进行中); 只有最终值提交状态,
//! 因此 K 线形成过程中可以任意多次查询。

mod common;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod indicators;
pub mod value;

pub use config::{AnyIndicator, IndicatorConfig};
pub use descriptor::{descriptor, Descriptor};
pub use error::IndicatorError;
pub use indicators::{
    Correlation, Covariance, Indicator, IndicatorKind, Measure, RelativeStrengthIndex,
    SmoothedMovingAverage, StandardDeviation, WindowBase,
};
pub use value::{IndicatorId, IndicatorValue, Payload, Phase};
