//! 技术指标模块
//!
//! 每个指标持有一个 [`WindowBase`] (标识 + 配置/生效周期) 并实现 [`Indicator`]。
//! 组合指标以字段形式持有子指标, 每次 reset 时把周期同步给它们。

mod correlation;
mod covariance;
mod rsi;
mod smma;
mod std_dev;

pub use correlation::Correlation;
pub use covariance::Covariance;
pub use rsi::RelativeStrengthIndex;
pub use smma::SmoothedMovingAverage;
pub use std_dev::StandardDeviation;

use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::value::{IndicatorId, IndicatorValue, Payload};

pub use crate::value::Phase;

/// 编译期周期常量
pub(crate) const fn length_of(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("length must be > 0"),
    }
}

/// 校验用户传入的周期
pub fn non_zero_length(length: usize) -> Result<NonZeroUsize, IndicatorError> {
    NonZeroUsize::new(length).ok_or(IndicatorError::InvalidLength { length })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    SmoothedMovingAverage,
    StandardDeviation,
    Covariance,
    Correlation,
    RelativeStrengthIndex,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 5] = [
        IndicatorKind::SmoothedMovingAverage,
        IndicatorKind::StandardDeviation,
        IndicatorKind::Covariance,
        IndicatorKind::Correlation,
        IndicatorKind::RelativeStrengthIndex,
    ];

    pub fn default_length(self) -> NonZeroUsize {
        match self {
            IndicatorKind::SmoothedMovingAverage => smma::DEFAULT_LENGTH,
            IndicatorKind::StandardDeviation => std_dev::DEFAULT_LENGTH,
            IndicatorKind::Covariance => covariance::DEFAULT_LENGTH,
            IndicatorKind::Correlation => correlation::DEFAULT_LENGTH,
            IndicatorKind::RelativeStrengthIndex => rsi::DEFAULT_LENGTH,
        }
    }
}

/// 输出刻度, 仅供展示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// 与输入同单位
    #[default]
    Raw,
    /// 0..=100
    Percent,
}

/// 所有指标共有的标识与周期
///
/// `length` 为配置值, `active` 为当前窗口实际使用的值, 二者只在 `reset` 时同步。
#[derive(Debug, Clone)]
pub struct WindowBase {
    id: IndicatorId,
    length: NonZeroUsize,
    active: NonZeroUsize,
}

impl WindowBase {
    pub fn new(length: NonZeroUsize) -> Self {
        Self {
            id: IndicatorId::next(),
            length,
            active: length,
        }
    }

    #[inline]
    pub fn id(&self) -> IndicatorId {
        self.id
    }

    #[inline]
    pub fn length(&self) -> NonZeroUsize {
        self.length
    }

    /// 当前窗口使用的周期
    #[inline]
    pub fn active_length(&self) -> NonZeroUsize {
        self.active
    }

    pub fn set_length(&mut self, length: NonZeroUsize) {
        self.length = length;
    }

    pub fn reset(&mut self) {
        self.active = self.length;
    }
}

/// 流式指标接口
pub trait Indicator {
    /// 输入类型 (`f64` 或 `(f64, f64)`)
    type Input: Copy + TryFrom<Payload, Error = IndicatorError>;

    fn base(&self) -> &WindowBase;
    fn base_mut(&mut self) -> &mut WindowBase;

    fn kind(&self) -> IndicatorKind;

    /// 已提交的数据是否足够
    fn is_formed(&self) -> bool;

    /// 清空状态并应用配置周期 (包括子指标)
    fn reset(&mut self);

    /// 处理一个观测值。只有 [`Phase::Final`] 提交状态; 无论是否就绪都返回输出。
    fn process(&mut self, input: Self::Input, phase: Phase) -> IndicatorValue;

    fn id(&self) -> IndicatorId {
        self.base().id()
    }

    fn length(&self) -> usize {
        self.base().length().get()
    }

    /// 下一次 [`reset`](Indicator::reset) 后生效
    fn set_length(&mut self, length: usize) -> Result<(), IndicatorError> {
        let length = non_zero_length(length)?;
        self.base_mut().set_length(length);
        Ok(())
    }

    /// 设置周期并重置 (组合指标用它同步子指标)
    fn configure(&mut self, length: NonZeroUsize) {
        self.base_mut().set_length(length);
        self.reset();
    }

    fn measure(&self) -> Measure {
        Measure::Raw
    }

    /// 通用值入口, 校验数据形状
    fn process_value(&mut self, input: &IndicatorValue) -> Result<IndicatorValue, IndicatorError> {
        let value = Self::Input::try_from(input.payload)?;
        Ok(self.process(value, input.phase))
    }
}
