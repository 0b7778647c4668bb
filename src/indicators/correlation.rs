//! 相关系数 = cov(x, y) / (std(x) * std(y))
//!
//! 由一个 [`Covariance`] 和两个 [`StandardDeviation`] (每条腿一个) 组合而成。
//! 任一条腿没有离散度时分母为 0, 直接返回协方差原值。

use core::num::NonZeroUsize;

use tracing::debug;

use super::{
    length_of, non_zero_length, Covariance, Indicator, IndicatorKind, Phase, StandardDeviation,
    WindowBase,
};
use crate::error::IndicatorError;
use crate::value::IndicatorValue;

pub(crate) const DEFAULT_LENGTH: NonZeroUsize = length_of(20);

/// 相关系数
#[derive(Debug, Clone)]
pub struct Correlation {
    base: WindowBase,
    covariance: Covariance,
    source: StandardDeviation,
    other: StandardDeviation,
}

impl Correlation {
    pub fn new(length: usize) -> Result<Self, IndicatorError> {
        Ok(Self::with_length(non_zero_length(length)?))
    }

    pub fn with_length(length: NonZeroUsize) -> Self {
        Self {
            base: WindowBase::new(length),
            covariance: Covariance::with_length(length),
            source: StandardDeviation::with_length(length),
            other: StandardDeviation::with_length(length),
        }
    }

    pub fn covariance(&self) -> &Covariance {
        &self.covariance
    }

    /// 第一条腿的标准差
    pub fn source(&self) -> &StandardDeviation {
        &self.source
    }

    /// 第二条腿的标准差
    pub fn other(&self) -> &StandardDeviation {
        &self.other
    }
}

impl Default for Correlation {
    fn default() -> Self {
        Self::with_length(DEFAULT_LENGTH)
    }
}

impl Indicator for Correlation {
    type Input = (f64, f64);

    fn base(&self) -> &WindowBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WindowBase {
        &mut self.base
    }

    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Correlation
    }

    fn is_formed(&self) -> bool {
        self.covariance.is_formed()
    }

    fn reset(&mut self) {
        self.base.reset();

        let length = self.base.active_length();
        debug!(id = self.base.id().0, length = length.get(), "correlation reset");
        self.covariance.configure(length);
        self.source.configure(length);
        self.other.configure(length);
    }

    fn process(&mut self, (a, b): (f64, f64), phase: Phase) -> IndicatorValue {
        let cov = self.covariance.process((a, b), phase).to_f64();
        let source_dev = self.source.process(a, phase).to_f64();
        let other_dev = self.other.process(b, phase).to_f64();

        let denom = source_dev * other_dev;
        let corr = if denom != 0.0 { cov / denom } else { cov };

        IndicatorValue::scalar(self.base.id(), corr, phase)
    }
}
