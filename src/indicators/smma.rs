//! 平滑移动平均 (Wilder)
//!
//! 前 `length` 个已提交样本取算术均值作为种子,
//! 之后 `smma = (prev * (length - 1) + value) / length`。

use core::num::NonZeroUsize;

use super::{length_of, non_zero_length, Indicator, IndicatorKind, Phase, WindowBase};
use crate::error::IndicatorError;
use crate::value::IndicatorValue;

pub(crate) const DEFAULT_LENGTH: NonZeroUsize = length_of(14);

#[derive(Debug, Clone)]
pub struct SmoothedMovingAverage {
    base: WindowBase,
    seed_sum: f64,
    count: usize,
    prev: f64, // 最近一次提交的输出
}

impl SmoothedMovingAverage {
    pub fn new(length: usize) -> Result<Self, IndicatorError> {
        Ok(Self::with_length(non_zero_length(length)?))
    }

    pub fn with_length(length: NonZeroUsize) -> Self {
        Self {
            base: WindowBase::new(length),
            seed_sum: 0.0,
            count: 0,
            prev: 0.0,
        }
    }

    /// 最近一次提交的值 (尚无最终值时为 `0.0`)
    pub fn committed(&self) -> f64 {
        self.prev
    }
}

impl Default for SmoothedMovingAverage {
    fn default() -> Self {
        Self::with_length(DEFAULT_LENGTH)
    }
}

impl Indicator for SmoothedMovingAverage {
    type Input = f64;

    fn base(&self) -> &WindowBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WindowBase {
        &mut self.base
    }

    fn kind(&self) -> IndicatorKind {
        IndicatorKind::SmoothedMovingAverage
    }

    fn is_formed(&self) -> bool {
        self.count >= self.base.active_length().get()
    }

    fn reset(&mut self) {
        self.base.reset();
        self.seed_sum = 0.0;
        self.count = 0;
        self.prev = 0.0;
    }

    fn process(&mut self, value: f64, phase: Phase) -> IndicatorValue {
        let n = self.base.active_length().get();

        let smma = if self.count < n {
            let seed_sum = self.seed_sum + value;
            let mean = seed_sum / (self.count + 1) as f64;
            match phase {
                Phase::Final => {
                    self.seed_sum = seed_sum;
                    self.count += 1;
                    self.prev = mean;
                }
                Phase::Provisional => {}
            }
            mean
        } else {
            let smma = (self.prev * (n - 1) as f64 + value) / n as f64;
            match phase {
                Phase::Final => self.prev = smma,
                Phase::Provisional => {}
            }
            smma
        };

        IndicatorValue::scalar(self.base.id(), smma, phase)
    }
}
